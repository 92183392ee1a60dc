//! `bin` subcommand: read a CSV catalog and bin its positions

use crate::cli::{BinArgs, Cli};
use crate::output::{print_points, Point};
use celestial_moc::{bin_table, CatalogTable, ColumnTable, NestedProjection, Projection};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing::{debug, info};

pub fn run(args: &BinArgs, _cli: &Cli) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", args.input);
    }
    let start = Instant::now();
    let reader = BufReader::new(File::open(&args.input)?);
    let table = ColumnTable::from_csv(reader, &[args.ra_column.as_str(), args.dec_column.as_str()])?;

    let (coords, level) = bin_table(
        &table,
        &args.ra_column,
        &args.dec_column,
        args.radius,
        args.unique,
        args.truncate,
    )?;

    let points: Vec<Point> = coords
        .iter()
        .map(|c| Point::with_cell(*c, NestedProjection.cell_of(*c, level)))
        .collect();

    info!(
        input = ?args.input,
        rows = table.num_rows(),
        binned = points.len(),
        level = level.get(),
        "binned catalog"
    );
    debug!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "binning finished");

    print_points(args.format, level, None, &points)
}
