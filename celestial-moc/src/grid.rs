//! Dense sampling grids over a sky bounding box.
//!
//! A coverage map of a rectangular region can be built by rasterizing sample
//! points into cells. [`region_to_grid`] picks the level for a radius with
//! `truncate = true`, then steps by `cell size / √2` so that the step's
//! diagonal equals the cell size and no cell inside the box is skipped.

use crate::levels::Level;
use crate::projection::Coordinate;
use crate::select::select_level;
use celestial_core::angle::validate_latitude_deg;
use celestial_core::constants::SQRT2;
use celestial_core::{AngularInput, AngularQuantity, AngularUnit, AstroError, AstroResult};
use ndarray::{Array2, ArrayView1, Axis};
use tracing::{debug, warn};

/// Largest grid [`region_to_grid`] will allocate.
pub const MAX_GRID_POINTS: usize = 50_000_000;

/// Longitude/latitude limits of a region. Bounds may use any angular unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub ra_min: AngularQuantity,
    pub ra_max: AngularQuantity,
    pub dec_min: AngularQuantity,
    pub dec_max: AngularQuantity,
}

impl BoundingBox {
    /// Creates a box after checking every bound is finite and both
    /// declination bounds lie in [-90°, +90°].
    pub fn new(
        ra_min: AngularQuantity,
        ra_max: AngularQuantity,
        dec_min: AngularQuantity,
        dec_max: AngularQuantity,
    ) -> AstroResult<Self> {
        for (name, q) in [
            ("ra_min", ra_min),
            ("ra_max", ra_max),
            ("dec_min", dec_min),
            ("dec_max", dec_max),
        ] {
            if !q.magnitude().is_finite() {
                return Err(AstroError::invalid_argument(
                    "BoundingBox::new",
                    &format!("{} is not finite", name),
                ));
            }
        }
        validate_latitude_deg(dec_min.degrees())?;
        validate_latitude_deg(dec_max.degrees())?;
        Ok(Self {
            ra_min,
            ra_max,
            dec_min,
            dec_max,
        })
    }

    /// Box from bounds in degrees.
    pub fn from_degrees(ra_min: f64, ra_max: f64, dec_min: f64, dec_max: f64) -> AstroResult<Self> {
        let d = |v| AngularQuantity::new(v, AngularUnit::Degree);
        Self::new(d(ra_min), d(ra_max), d(dec_min), d(dec_max))
    }

    /// True when either axis has `max <= min`.
    pub fn is_empty(&self) -> bool {
        self.ra_max.degrees() <= self.ra_min.degrees()
            || self.dec_max.degrees() <= self.dec_min.degrees()
    }
}

/// Sample points produced by [`region_to_grid`].
///
/// `points` has shape `(2, N)`: row 0 holds longitudes and row 1 latitudes,
/// both in degrees. Columns run longitude-major.
#[derive(Clone, Debug)]
pub struct RegionGrid {
    level: Level,
    step_deg: f64,
    points: Array2<f64>,
}

impl RegionGrid {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn step_deg(&self) -> f64 {
        self.step_deg
    }

    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    pub fn into_points(self) -> Array2<f64> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.points.ncols() == 0
    }

    pub fn lon(&self) -> ArrayView1<'_, f64> {
        self.points.index_axis(Axis(0), 0)
    }

    pub fn lat(&self) -> ArrayView1<'_, f64> {
        self.points.index_axis(Axis(0), 1)
    }

    /// Columns as coordinates. Latitudes above the pole are rejected.
    pub fn coordinates(&self) -> impl Iterator<Item = AstroResult<Coordinate>> + '_ {
        self.points
            .axis_iter(Axis(1))
            .map(|col| Coordinate::new(col[0], col[1]))
    }
}

/// Number of terms in `start, start + step, … < stop`.
fn arange_len(start: f64, stop: f64, step: f64) -> usize {
    let span = stop - start;
    if !(span > 0.0) {
        return 0;
    }
    (span / step).ceil() as usize
}

/// Sample `bbox` densely enough for the level matching `radius`.
///
/// Bare radii are arcminutes. Inverted or degenerate boxes give an empty grid.
///
/// # Errors
///
/// - [`AstroError::InvalidArgument`] if the radius is not positive or the grid
///   would exceed [`MAX_GRID_POINTS`].
pub fn region_to_grid(
    bbox: &BoundingBox,
    radius: impl Into<AngularInput>,
) -> AstroResult<RegionGrid> {
    let radius = radius.into().resolve(AngularUnit::Arcminute);
    let level = select_level(radius, true)?;
    let step_deg = level.cell_size().degrees() / SQRT2;

    let (ra_min, ra_max) = (bbox.ra_min.degrees(), bbox.ra_max.degrees());
    let (dec_min, dec_max) = (bbox.dec_min.degrees(), bbox.dec_max.degrees());
    let n_ra = arange_len(ra_min, ra_max, step_deg);
    let n_dec = arange_len(dec_min, dec_max, step_deg);
    if n_ra == 0 || n_dec == 0 {
        warn!(?bbox, "bounding box is empty; no grid points generated");
        return Ok(RegionGrid {
            level,
            step_deg,
            points: Array2::zeros((2, 0)),
        });
    }

    let n = n_ra
        .checked_mul(n_dec)
        .filter(|&n| n <= MAX_GRID_POINTS)
        .ok_or_else(|| {
            AstroError::invalid_argument(
                "region_to_grid",
                &format!(
                    "{} x {} samples at level {} exceeds {} points",
                    n_ra, n_dec, level, MAX_GRID_POINTS
                ),
            )
        })?;

    // Column `col` is the (col / n_dec)-th longitude and (col % n_dec)-th latitude.
    let points = Array2::from_shape_fn((2, n), |(row, col)| {
        if row == 0 {
            ra_min + (col / n_dec) as f64 * step_deg
        } else {
            dec_min + (col % n_dec) as f64 * step_deg
        }
    });

    debug!(
        level = level.get(),
        step_deg,
        n_ra,
        n_dec,
        "generated region grid"
    );
    Ok(RegionGrid {
        level,
        step_deg,
        points,
    })
}
