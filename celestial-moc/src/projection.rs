//! Sky position ↔ HEALPix cell conversion.
//!
//! Binning only needs two operations from the pixelization: which cell holds
//! a position, and where a cell's centre is. [`Projection`] names that seam;
//! [`NestedProjection`] implements it with the `cdshealpix` nested scheme
//! (`nside = 2^level`).

use crate::levels::Level;
use celestial_core::angle::{validate_latitude_deg, validate_longitude_deg};
use celestial_core::constants::{DEG_TO_RAD, HALF_PI, RAD_TO_DEG};
use celestial_core::{AstroError, AstroResult};
use std::fmt;

/// A sky position in degrees: longitude (RA) and latitude (Dec).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Creates a coordinate after checking both values are finite and the
    /// latitude lies in [-90°, +90°].
    pub fn new(lon_deg: f64, lat_deg: f64) -> AstroResult<Self> {
        Ok(Self {
            lon: validate_longitude_deg(lon_deg)?,
            lat: validate_latitude_deg(lat_deg)?,
        })
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}°, {:+.6}°)", self.lon, self.lat)
    }
}

/// Identifier of one HEALPix cell at a fixed level (nested numbering).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellId(u64);

impl CellId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The cell containing this one at a coarser `to` level, given the level
    /// it was computed at.
    pub fn parent(self, from: Level, to: Level) -> AstroResult<CellId> {
        if to > from {
            return Err(AstroError::invalid_argument(
                "CellId::parent",
                &format!("target level {} is finer than {}", to, from),
            ));
        }
        let shift = 2 * u32::from(from.get() - to.get());
        Ok(CellId(self.0 >> shift))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion between positions and cells at a given level.
pub trait Projection {
    /// Cell containing `coord`.
    fn cell_of(&self, coord: Coordinate, level: Level) -> CellId;

    /// Centre of `cell`. Fails if the id does not exist at `level`.
    fn center_of(&self, cell: CellId, level: Level) -> AstroResult<Coordinate>;
}

/// HEALPix nested-scheme projection backed by `cdshealpix`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NestedProjection;

impl Projection for NestedProjection {
    fn cell_of(&self, coord: Coordinate, level: Level) -> CellId {
        let lon = coord.lon * DEG_TO_RAD;
        let lat = (coord.lat * DEG_TO_RAD).clamp(-HALF_PI, HALF_PI);
        CellId(cdshealpix::nested::hash(level.get(), lon, lat))
    }

    fn center_of(&self, cell: CellId, level: Level) -> AstroResult<Coordinate> {
        if cell.0 >= level.n_cells() {
            return Err(AstroError::invalid_argument(
                "center_of",
                &format!(
                    "cell {} does not exist at level {} ({} cells)",
                    cell,
                    level,
                    level.n_cells()
                ),
            ));
        }
        let (lon, lat) = cdshealpix::nested::center(level.get(), cell.0);
        Coordinate::new(lon * RAD_TO_DEG, lat * RAD_TO_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    fn lvl(l: u8) -> Level {
        Level::new(l).unwrap()
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(10.0, 20.0).is_ok());
        assert!(Coordinate::new(-10.0, -90.0).is_ok());
        assert!(Coordinate::new(370.0, 90.0).is_ok());

        match Coordinate::new(0.0, 91.0) {
            Err(AstroError::MathError { kind, .. }) => assert_eq!(kind, MathErrorKind::OutOfRange),
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
        match Coordinate::new(f64::NAN, 0.0) {
            Err(AstroError::MathError { kind, .. }) => assert_eq!(kind, MathErrorKind::NotFinite),
            other => panic!("Expected NotFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_level_zero_has_twelve_cells() {
        let proj = NestedProjection;
        for ra in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            for dec in [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0] {
                let c = Coordinate::new(ra, dec).unwrap();
                assert!(proj.cell_of(c, Level::MIN).raw() < 12);
            }
        }
    }

    #[test]
    fn test_cells_in_range_at_level_8() {
        let proj = NestedProjection;
        let level = lvl(8);
        for ra in [0.0, 90.0, 180.0, 270.0] {
            for dec in [-89.0, -45.0, 0.0, 45.0, 89.0] {
                let cell = proj.cell_of(Coordinate::new(ra, dec).unwrap(), level);
                assert!(
                    cell.raw() < level.n_cells(),
                    "cell {} >= npix {} for ({}, {})",
                    cell,
                    level.n_cells(),
                    ra,
                    dec
                );
            }
        }
    }

    #[test]
    fn test_center_round_trip() {
        let proj = NestedProjection;
        for l in [0u8, 3, 6, 12, 20, 29] {
            let level = lvl(l);
            for (ra, dec) in [(10.0, 20.0), (83.633, -5.375), (359.9, 89.5), (0.0, -45.0)] {
                let cell = proj.cell_of(Coordinate::new(ra, dec).unwrap(), level);
                let center = proj.center_of(cell, level).unwrap();
                assert_eq!(proj.cell_of(center, level), cell, "level {}", l);
            }
        }
    }

    #[test]
    fn test_center_shares_parent_cells_with_input() {
        let proj = NestedProjection;
        let level = lvl(10);
        let input = Coordinate::new(150.0, 2.2).unwrap();
        let center = proj.center_of(proj.cell_of(input, level), level).unwrap();
        for coarse in [lvl(0), lvl(4), lvl(9)] {
            assert_eq!(proj.cell_of(center, coarse), proj.cell_of(input, coarse));
        }
    }

    #[test]
    fn test_longitude_wraps() {
        let proj = NestedProjection;
        let level = lvl(9);
        let a = proj.cell_of(Coordinate::new(-10.0, 5.0).unwrap(), level);
        let b = proj.cell_of(Coordinate::new(350.0, 5.0).unwrap(), level);
        assert_eq!(a, b);
    }

    #[test]
    fn test_center_rejects_unknown_cell() {
        let proj = NestedProjection;
        let err = proj.center_of(CellId::from_raw(12), Level::MIN).unwrap_err();
        assert!(matches!(err, AstroError::InvalidArgument { .. }));
    }

    #[test]
    fn test_parent_cell() {
        let proj = NestedProjection;
        let c = Coordinate::new(83.633, -5.375).unwrap();
        let fine = proj.cell_of(c, lvl(12));
        let coarse = proj.cell_of(c, lvl(7));
        assert_eq!(fine.parent(lvl(12), lvl(7)).unwrap(), coarse);
        assert!(coarse.parent(lvl(7), lvl(12)).is_err());
    }
}
