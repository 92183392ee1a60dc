//! `error-level` subcommand

use crate::cli::{Cli, ErrorLevelArgs};
use crate::output::print_level;
use celestial_moc::error_radius_to_level;

pub fn run(args: &ErrorLevelArgs, _cli: &Cli) -> anyhow::Result<()> {
    let level = error_radius_to_level(args.pos_error, args.factor)?;
    println!(
        "Target cell size: {} ({} x {})",
        args.pos_error * args.factor,
        args.factor,
        args.pos_error
    );
    print_level(level);
    Ok(())
}
