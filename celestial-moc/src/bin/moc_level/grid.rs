//! `grid` subcommand

use crate::cli::{Cli, GridArgs};
use crate::output::{print_points, Point};
use celestial_core::{AngularInput, AngularQuantity, AngularUnit};
use celestial_moc::{region_to_grid, BoundingBox};

fn bound(input: AngularInput) -> AngularQuantity {
    input.resolve(AngularUnit::Degree)
}

pub fn run(args: &GridArgs, _cli: &Cli) -> anyhow::Result<()> {
    let bbox = BoundingBox::new(
        bound(args.ra_min),
        bound(args.ra_max),
        bound(args.dec_min),
        bound(args.dec_max),
    )?;
    let grid = region_to_grid(&bbox, args.radius)?;

    let points = grid
        .coordinates()
        .map(|c| c.map(Point::new))
        .collect::<Result<Vec<_>, _>>()?;

    print_points(args.format, grid.level(), Some(grid.step_deg()), &points)
}
