//! Result printing shared by the subcommands

use crate::cli::OutputFormat;
use celestial_moc::{CellId, Coordinate, Level};

pub fn print_level(level: Level) {
    println!("Level:     {}", level);
    println!("Cell size: {}", level.cell_size());
    println!("Nside:     {}", level.nside());
    println!("Cells:     {}", level.n_cells());
}

#[derive(serde::Serialize)]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    cell: Option<CellId>,
    ra_deg: f64,
    dec_deg: f64,
}

impl Point {
    pub fn new(coord: Coordinate) -> Self {
        Self {
            cell: None,
            ra_deg: coord.lon(),
            dec_deg: coord.lat(),
        }
    }

    pub fn with_cell(coord: Coordinate, cell: CellId) -> Self {
        Self {
            cell: Some(cell),
            ..Self::new(coord)
        }
    }
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    level: Level,
    cell_size_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_deg: Option<f64>,
    count: usize,
    points: &'a [Point],
}

pub fn print_points(
    format: OutputFormat,
    level: Level,
    step_deg: Option<f64>,
    points: &[Point],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(level, step_deg, points),
        OutputFormat::Json => print_json(level, step_deg, points)?,
        OutputFormat::Csv => print_csv(points),
    }
    Ok(())
}

fn print_table(level: Level, step_deg: Option<f64>, points: &[Point]) {
    println!("Level {} (cell size {})", level, level.cell_size());
    if let Some(step) = step_deg {
        println!("Step: {:.6}°", step);
    }

    for (i, p) in points.iter().enumerate() {
        match p.cell {
            Some(cell) => println!(
                "{:6}: cell={:>20} RA={:.6}° Dec={:+.6}°",
                i + 1,
                cell,
                p.ra_deg,
                p.dec_deg
            ),
            None => println!("{:6}: RA={:.6}° Dec={:+.6}°", i + 1, p.ra_deg, p.dec_deg),
        }
    }

    if points.is_empty() {
        println!("No points.");
    } else {
        println!("\nTotal points: {}", points.len());
    }
}

fn print_json(level: Level, step_deg: Option<f64>, points: &[Point]) -> anyhow::Result<()> {
    let out = JsonOutput {
        level,
        cell_size_deg: level.cell_size().degrees(),
        step_deg,
        count: points.len(),
        points,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn csv_header(points: &[Point]) -> &'static str {
    if points.first().is_some_and(|p| p.cell.is_some()) {
        "cell,ra_deg,dec_deg"
    } else {
        "ra_deg,dec_deg"
    }
}

fn print_csv(points: &[Point]) {
    println!("{}", csv_header(points));
    for p in points {
        match p.cell {
            Some(cell) => println!("{},{},{}", cell, p.ra_deg, p.dec_deg),
            None => println!("{},{}", p.ra_deg, p.dec_deg),
        }
    }
}
