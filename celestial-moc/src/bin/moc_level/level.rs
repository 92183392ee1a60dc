//! `level` subcommand

use crate::cli::{Cli, LevelArgs};
use crate::output::print_level;
use celestial_moc::select_level;

pub fn run(args: &LevelArgs, _cli: &Cli) -> anyhow::Result<()> {
    let level = select_level(args.size, args.truncate)?;
    print_level(level);
    Ok(())
}
