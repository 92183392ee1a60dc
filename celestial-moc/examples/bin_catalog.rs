use celestial_core::angle::arcsec;
use celestial_moc::{
    bin_table, error_radius_to_level, CatalogTable, ColumnTable, DEFAULT_ERROR_FACTOR,
};
use std::fs::File;
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: bin_catalog <catalog.csv>"))?;

    let table = ColumnTable::from_csv(BufReader::new(File::open(&path)?), &["ra", "dec"])?;

    let pos_error = arcsec(1.0);
    let match_level = error_radius_to_level(pos_error, DEFAULT_ERROR_FACTOR)?;
    println!(
        "Cross-match level for {} error: {} (cells of {})",
        pos_error,
        match_level,
        match_level.cell_size()
    );

    let (bins, level) = bin_table(&table, "ra", "dec", arcsec(30.0), true, false)?;
    println!(
        "\n{} rows fall in {} distinct level-{} cells:\n",
        table.num_rows(),
        bins.len(),
        level,
    );

    for c in bins.iter().take(20) {
        println!("  RA {:.6}°  Dec {:+.6}°", c.lon(), c.lat());
    }

    Ok(())
}

