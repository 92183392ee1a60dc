//! CLI argument definitions for moc-level

use celestial_core::{AngularInput, AngularQuantity};
use celestial_moc::DEFAULT_ERROR_FACTOR;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moc-level")]
#[command(about = "HEALPix level selection, coordinate binning and region grids")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the level whose cells match an angular size
    Level(LevelArgs),

    /// Select the level for a positional-error radius
    ErrorLevel(ErrorLevelArgs),

    /// Bin catalog positions read from a CSV file
    Bin(BinArgs),

    /// Sample a bounding box on a gap-free grid
    Grid(GridArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
pub struct LevelArgs {
    /// Angular size, e.g. 1.5arcmin, 30", 0.2 (bare numbers are degrees)
    pub size: AngularInput,

    /// Step back one level to the next coarser cells
    #[arg(long)]
    pub truncate: bool,
}

#[derive(Parser)]
pub struct ErrorLevelArgs {
    /// Positional error with a unit, e.g. 0.5arcsec
    pub pos_error: AngularQuantity,

    /// Multiple of the error the cell must cover
    #[arg(long, default_value_t = DEFAULT_ERROR_FACTOR)]
    pub factor: f64,
}

#[derive(Parser)]
pub struct BinArgs {
    /// CSV file with a header row; lines starting with '#' are skipped
    #[arg(long)]
    pub input: PathBuf,

    /// Column holding right ascension in degrees
    #[arg(long, default_value = "ra")]
    pub ra_column: String,

    /// Column holding declination in degrees
    #[arg(long, default_value = "dec")]
    pub dec_column: String,

    /// Binning radius (bare numbers are degrees)
    #[arg(long)]
    pub radius: AngularInput,

    /// Emit one position per occupied cell
    #[arg(long)]
    pub unique: bool,

    /// Use the next coarser level
    #[arg(long)]
    pub truncate: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct GridArgs {
    /// Lower right ascension bound (bare numbers are degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub ra_min: AngularInput,

    /// Upper right ascension bound (exclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub ra_max: AngularInput,

    /// Lower declination bound
    #[arg(long, allow_hyphen_values = true)]
    pub dec_min: AngularInput,

    /// Upper declination bound (exclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub dec_max: AngularInput,

    /// Sampling radius (bare numbers are arcminutes)
    #[arg(long)]
    pub radius: AngularInput,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
