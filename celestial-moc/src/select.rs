//! Mapping an angular size to a HEALPix level.
//!
//! [`select_level`] scans the level table from coarse to fine and stops at
//! the first level whose cell is strictly smaller than the requested size.
//! That level is the answer; `truncate` steps one level back (bigger cells),
//! which is what grid sampling uses to avoid gaps.
//!
//! ```
//! use celestial_core::angle::{arcmin, deg};
//! use celestial_moc::select::select_level;
//!
//! // Level 6 (54.97') is the first cell below one degree.
//! assert_eq!(select_level(deg(1.0), false).unwrap().get(), 6);
//! assert_eq!(select_level(1.0, true).unwrap().get(), 5);
//!
//! // Bare numbers are degrees here.
//! assert_eq!(
//!     select_level(0.5, false).unwrap(),
//!     select_level(arcmin(30.0), false).unwrap()
//! );
//! ```
//!
//! [`error_radius_to_level`] is the catalog-matching variant: it sizes cells
//! at a multiple of the positional error and keeps the finest level whose
//! cell is still at least that large.

use crate::levels::{Level, LevelTable};
use celestial_core::{AngularInput, AngularQuantity, AngularUnit, AstroError, AstroResult};
use tracing::debug;

/// Cells are sized at twice the positional error radius by default.
pub const DEFAULT_ERROR_FACTOR: f64 = 2.0;

/// Select the level for an angular `size`; bare numbers are degrees.
///
/// Returns the first level (coarse → fine) whose cell size is strictly less
/// than `size`, or level 29 when no cell is that small. With `truncate` the
/// result moves one level coarser, never below 0.
///
/// # Errors
///
/// [`AstroError::InvalidArgument`] if `size` is zero, negative or not finite.
pub fn select_level(size: impl Into<AngularInput>, truncate: bool) -> AstroResult<Level> {
    let size = size
        .into()
        .resolve(AngularUnit::Degree)
        .ensure_positive("select_level")?;

    let table = LevelTable::get();
    let mut ko = Level::MIN;
    for (level, cell_size) in table.iter() {
        ko = level;
        if cell_size < size {
            break;
        }
    }

    let level = if truncate { ko.coarser() } else { ko };
    debug!(%size, truncate, level = level.get(), "selected HEALPix level");
    Ok(level)
}

/// Select the level for a positional-error radius.
///
/// The target is `factor × pos_error`; the result is the last level whose
/// cell is still at least that large, i.e. the level just before the first
/// smaller one (0 if even level 0 is smaller). The error must carry a unit.
///
/// # Errors
///
/// [`AstroError::InvalidArgument`] if `pos_error` or `factor` is not a finite
/// positive number.
pub fn error_radius_to_level(pos_error: AngularQuantity, factor: f64) -> AstroResult<Level> {
    let pos_error = pos_error.ensure_positive("error_radius_to_level")?;
    if !(factor.is_finite() && factor > 0.0) {
        return Err(AstroError::invalid_argument(
            "error_radius_to_level",
            &format!("factor {} must be a finite positive number", factor),
        ));
    }
    let target = pos_error * factor;

    let mut ko = Level::MIN;
    for (level, cell_size) in LevelTable::get().iter() {
        if cell_size < target {
            break;
        }
        ko = level;
    }

    debug!(%pos_error, factor, level = ko.get(), "selected level for error radius");
    Ok(ko)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::angle::{arcmin, arcsec, deg, mas, uas};

    fn level(size: impl Into<AngularInput>, truncate: bool) -> u8 {
        select_level(size, truncate).unwrap().get()
    }

    #[test]
    fn test_one_degree() {
        assert_eq!(level(deg(1.0), false), 6);
        assert_eq!(level(deg(1.0), true), 5);
    }

    #[test]
    fn test_bare_number_is_degrees() {
        assert_eq!(level(1.0, false), level(deg(1.0), false));
        assert_eq!(level(0.01, false), level(arcmin(0.6), false));
    }

    #[test]
    fn test_units_are_interchangeable() {
        assert_eq!(level(arcmin(60.0), false), level(deg(1.0), false));
        assert_eq!(level(arcsec(1.0), false), level(mas(1000.0), false));
        assert_eq!(level(mas(0.5), false), level(uas(500.0), false));
    }

    #[test]
    fn test_huge_size_is_level_zero() {
        assert_eq!(level(deg(180.0), false), 0);
        assert_eq!(level(deg(180.0), true), 0);
    }

    #[test]
    fn test_tiny_size_is_finest_level() {
        assert_eq!(level(uas(1.0), false), 29);
        assert_eq!(level(uas(1.0), true), 28);
    }

    #[test]
    fn test_table_boundary_moves_to_next_level() {
        // 1.832 deg is not strictly less than itself; level 6 is.
        assert_eq!(level(deg(1.832), false), 6);
        assert_eq!(level(arcmin(54.97), false), 7);
        assert_eq!(level(uas(393.2), false), 29);
    }

    #[test]
    fn test_arcsecond_errors() {
        // 1" lies between level 17 (1.61") and 18 (805.2 mas).
        assert_eq!(level(arcsec(1.0), false), 18);
        assert_eq!(level(arcsec(1.0), true), 17);
    }

    #[test]
    fn test_invalid_sizes() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = select_level(bad, false).unwrap_err();
            assert!(matches!(err, AstroError::InvalidArgument { .. }), "{}", bad);
        }
        assert!(select_level(arcsec(-3.0), true).is_err());
    }

    #[test]
    fn test_error_radius_default_factor() {
        // 2 × 0.5 deg = 1 deg; level 5 (1.832 deg) is the last cell >= 1 deg.
        let l = error_radius_to_level(deg(0.5), DEFAULT_ERROR_FACTOR).unwrap();
        assert_eq!(l.get(), 5);
    }

    #[test]
    fn test_error_radius_on_boundary_keeps_level() {
        for (l, size) in LevelTable::get().iter() {
            let got = error_radius_to_level(size * 0.5, 2.0).unwrap();
            assert_eq!(got, l);
        }
    }

    #[test]
    fn test_error_radius_extremes() {
        assert_eq!(error_radius_to_level(deg(90.0), 2.0).unwrap().get(), 0);
        assert_eq!(error_radius_to_level(uas(1.0), 2.0).unwrap().get(), 29);
    }

    #[test]
    fn test_error_radius_rejects_bad_factor() {
        assert!(error_radius_to_level(arcsec(1.0), 0.0).is_err());
        assert!(error_radius_to_level(arcsec(1.0), f64::NAN).is_err());
        assert!(error_radius_to_level(arcsec(0.0), 2.0).is_err());
    }
}
