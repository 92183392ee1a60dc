//! HEALPix binning of sky coordinates.
//!
//! A position is binned by replacing it with the centre of the cell that
//! contains it at some level. Points closer together than the cell size
//! usually share a cell, so binning with `unique = true` also deduplicates.
//!
//! # Laziness
//!
//! | Function | Returns |
//! |----------|---------|
//! | [`coordinates_to_cells`] | lazy, single-pass iterator of [`CellId`] |
//! | [`cells_to_coordinates`] | lazy, single-pass iterator of `AstroResult<Coordinate>` |
//! | [`bin_coordinates`], [`bin_by_size`] | materialized `Vec<Coordinate>` |
//!
//! # Unique bins
//!
//! With `unique = true` the intermediate cells are collapsed into a set
//! before mapping back to centres. Input order and multiplicity are lost; the
//! output is ordered by cell id so repeated runs agree.
//!
//! ```
//! use celestial_moc::binning::bin_by_size;
//!
//! let ra = [10.0, 10.0001];
//! let dec = [20.0, 20.0001];
//! let (coords, level) = bin_by_size(&ra, &dec, 1.0, true, false).unwrap();
//! assert_eq!(level.get(), 6);
//! assert_eq!(coords.len(), 1);
//! ```

use crate::levels::Level;
use crate::projection::{CellId, Coordinate, NestedProjection, Projection};
use crate::select::select_level;
use celestial_core::{AngularInput, AstroError, AstroResult};
use std::collections::BTreeSet;
use tracing::debug;

/// Binning operations over a chosen [`Projection`].
#[derive(Copy, Clone, Debug, Default)]
pub struct CoordinateBinner<P: Projection = NestedProjection> {
    projection: P,
}

impl CoordinateBinner<NestedProjection> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Projection> CoordinateBinner<P> {
    pub fn with_projection(projection: P) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Cell of each coordinate, same order and length as the input.
    pub fn coordinates_to_cells<'a, I>(
        &'a self,
        coords: I,
        level: Level,
    ) -> impl Iterator<Item = CellId> + 'a
    where
        I: IntoIterator<Item = Coordinate>,
        I::IntoIter: 'a,
    {
        coords
            .into_iter()
            .map(move |c| self.projection.cell_of(c, level))
    }

    /// Centre of each cell, same order and length as the input.
    pub fn cells_to_coordinates<'a, I>(
        &'a self,
        cells: I,
        level: Level,
    ) -> impl Iterator<Item = AstroResult<Coordinate>> + 'a
    where
        I: IntoIterator<Item = CellId>,
        I::IntoIter: 'a,
    {
        cells
            .into_iter()
            .map(move |cell| self.projection.center_of(cell, level))
    }

    /// Replace each coordinate by its cell centre at `level`.
    ///
    /// `unique = false` keeps one output per input, in input order.
    /// `unique = true` returns one centre per distinct cell, ordered by cell id.
    pub fn bin_coordinates<I>(
        &self,
        coords: I,
        level: Level,
        unique: bool,
    ) -> AstroResult<Vec<Coordinate>>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let cells = self.coordinates_to_cells(coords, level);
        if unique {
            let distinct: BTreeSet<CellId> = cells.collect();
            debug!(cells = distinct.len(), level = level.get(), "collapsed to distinct cells");
            self.cells_to_coordinates(distinct, level).collect()
        } else {
            self.cells_to_coordinates(cells, level).collect()
        }
    }

    /// Choose a level from `radius` (bare numbers are degrees) and bin the
    /// parallel `ra` / `dec` sequences at it.
    ///
    /// # Errors
    ///
    /// - [`AstroError::InvalidArgument`] if the sequences differ in length or
    ///   the radius is not positive.
    /// - [`AstroError::MathError`] for non-finite values or |dec| > 90°.
    pub fn bin_by_size(
        &self,
        ra: &[f64],
        dec: &[f64],
        radius: impl Into<AngularInput>,
        unique: bool,
        truncate: bool,
    ) -> AstroResult<(Vec<Coordinate>, Level)> {
        if ra.len() != dec.len() {
            return Err(AstroError::invalid_argument(
                "bin_by_size",
                &format!("ra has {} values but dec has {}", ra.len(), dec.len()),
            ));
        }
        let level = select_level(radius, truncate)?;
        let coords = ra
            .iter()
            .zip(dec)
            .map(|(&lon, &lat)| Coordinate::new(lon, lat))
            .collect::<AstroResult<Vec<_>>>()?;

        let binned = self.bin_coordinates(coords, level, unique)?;
        debug!(
            inputs = ra.len(),
            outputs = binned.len(),
            level = level.get(),
            unique,
            "binned coordinates"
        );
        Ok((binned, level))
    }
}

/// [`CoordinateBinner::coordinates_to_cells`] with the nested projection.
pub fn coordinates_to_cells<I>(coords: I, level: Level) -> impl Iterator<Item = CellId>
where
    I: IntoIterator<Item = Coordinate>,
{
    coords
        .into_iter()
        .map(move |c| NestedProjection.cell_of(c, level))
}

/// [`CoordinateBinner::cells_to_coordinates`] with the nested projection.
pub fn cells_to_coordinates<I>(
    cells: I,
    level: Level,
) -> impl Iterator<Item = AstroResult<Coordinate>>
where
    I: IntoIterator<Item = CellId>,
{
    cells
        .into_iter()
        .map(move |cell| NestedProjection.center_of(cell, level))
}

/// [`CoordinateBinner::bin_coordinates`] with the nested projection.
pub fn bin_coordinates<I>(coords: I, level: Level, unique: bool) -> AstroResult<Vec<Coordinate>>
where
    I: IntoIterator<Item = Coordinate>,
{
    CoordinateBinner::new().bin_coordinates(coords, level, unique)
}

/// [`CoordinateBinner::bin_by_size`] with the nested projection.
pub fn bin_by_size(
    ra: &[f64],
    dec: &[f64],
    radius: impl Into<AngularInput>,
    unique: bool,
    truncate: bool,
) -> AstroResult<(Vec<Coordinate>, Level)> {
    CoordinateBinner::new().bin_by_size(ra, dec, radius, unique, truncate)
}
