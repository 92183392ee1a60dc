//! HEALPix level selection, coordinate binning and region sampling grids.
//!
//! Picks the HEALPix resolution ("level", also called depth or order) that
//! matches an angular size or a positional-error radius, then uses it to bin
//! and deduplicate sky coordinates or to sample a bounding box densely enough
//! that no cell inside it is missed. Building or serializing coverage maps is
//! left to the consumer: binned coordinates and [`RegionGrid`] points, together
//! with the [`Level`], are the hand-off.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`levels`] | [`Level`], the [`LevelTable`] of cell sizes for levels 0–29 |
//! | [`select`] | [`select_level`], [`error_radius_to_level`] |
//! | [`projection`] | [`Coordinate`], [`CellId`], the [`Projection`] trait and [`NestedProjection`] |
//! | [`binning`] | [`CoordinateBinner`], [`bin_by_size`], [`bin_coordinates`], cell conversions |
//! | [`grid`] | [`BoundingBox`], [`RegionGrid`], [`region_to_grid`] |
//! | [`table`] | [`CatalogTable`], [`ColumnTable`] CSV reader, [`bin_table`] |
//!
//! # Quick Start
//!
//! ```
//! use celestial_core::angle::{arcmin, arcsec};
//! use celestial_moc::{bin_by_size, region_to_grid, select_level, BoundingBox};
//!
//! let level = select_level(arcsec(1.0), false).unwrap();
//! assert_eq!(level.get(), 18);
//!
//! let (binned, level) =
//!     bin_by_size(&[10.0, 10.0001], &[20.0, 20.0001], 1.0, true, false).unwrap();
//! assert_eq!((binned.len(), level.get()), (1, 6));
//!
//! let bbox = BoundingBox::from_degrees(10.0, 11.0, 20.0, 21.0).unwrap();
//! let grid = region_to_grid(&bbox, arcmin(30.0)).unwrap();
//! assert_eq!(grid.points().shape(), &[2, 4]);
//! ```
//!
//! # Units
//!
//! Sizes are `impl Into<AngularInput>`. A unit-tagged
//! [`AngularQuantity`](celestial_core::AngularQuantity) is used as given; a
//! bare `f64` takes the default of the operation: degrees for
//! [`select_level`] and [`bin_by_size`], arcminutes for [`region_to_grid`].
//!
//! # Features
//!
//! - **`serde`** (default): `Serialize` for [`Level`], [`Coordinate`] and
//!   [`CellId`].
//! - **`cli`**: enables the `moc-level` binary.

pub mod binning;
pub mod grid;
pub mod levels;
pub mod projection;
pub mod select;
pub mod table;

pub use binning::{
    bin_by_size, bin_coordinates, cells_to_coordinates, coordinates_to_cells, CoordinateBinner,
};
pub use grid::{region_to_grid, BoundingBox, RegionGrid, MAX_GRID_POINTS};
pub use levels::{Level, LevelTable, MAX_LEVEL};
pub use projection::{CellId, Coordinate, NestedProjection, Projection};
pub use select::{error_radius_to_level, select_level, DEFAULT_ERROR_FACTOR};
pub use table::{bin_table, CatalogTable, ColumnTable};
