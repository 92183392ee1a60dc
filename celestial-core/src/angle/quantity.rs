//! Unit-tagged angular magnitudes.
//!
//! [`AngularQuantity`] keeps the magnitude in the unit it was written in, so
//! the HEALPix level table can carry its constants exactly as published
//! (`54.97 arcmin`, `805.2 mas`), and converts to degrees on demand for
//! comparison.
//!
//! [`AngularInput`] is what public entry points accept: either a full
//! quantity or a bare number. A bare number is not an error; each entry point
//! resolves it with its own documented default unit via
//! [`AngularInput::resolve`].
//!
//! ```
//! use celestial_core::angle::{arcmin, deg, AngularInput, AngularUnit};
//!
//! assert!(arcmin(90.0) > deg(1.0));
//! assert_eq!(arcmin(30.0), deg(0.5));
//!
//! let bare: AngularInput = 30.0.into();
//! assert_eq!(bare.resolve(AngularUnit::Arcminute), deg(0.5));
//! assert_eq!(bare.resolve(AngularUnit::Degree), deg(30.0));
//! ```

use super::AngularUnit;
use crate::constants::DEG_TO_RAD;
use crate::{AstroError, AstroResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

/// A magnitude paired with an angular unit.
///
/// Equality and ordering compare the values converted to degrees, so
/// `arcmin(60.0) == deg(1.0)`. Note: `Eq` and `Ord` are not implemented
/// because the magnitude can be NaN.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngularQuantity {
    magnitude: f64,
    unit: AngularUnit,
}

impl AngularQuantity {
    #[inline]
    pub const fn new(magnitude: f64, unit: AngularUnit) -> Self {
        Self { magnitude, unit }
    }

    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub const fn unit(&self) -> AngularUnit {
        self.unit
    }

    /// Value in degrees, the common base unit for comparisons.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.magnitude / self.unit.per_degree()
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.degrees() * DEG_TO_RAD
    }

    #[inline]
    pub fn arcminutes(&self) -> f64 {
        self.in_unit(AngularUnit::Arcminute)
    }

    #[inline]
    pub fn arcseconds(&self) -> f64 {
        self.in_unit(AngularUnit::Arcsecond)
    }

    /// Magnitude expressed in `unit`.
    pub fn in_unit(&self, unit: AngularUnit) -> f64 {
        if unit == self.unit {
            return self.magnitude;
        }
        self.degrees() * unit.per_degree()
    }

    /// Same angle re-expressed in `unit`.
    pub fn to(&self, unit: AngularUnit) -> Self {
        Self::new(self.in_unit(unit), unit)
    }

    /// Checks that the quantity can serve as a size or radius: finite and > 0.
    pub fn ensure_positive(self, operation: &str) -> AstroResult<Self> {
        if !self.magnitude.is_finite() {
            return Err(AstroError::invalid_argument(
                operation,
                &format!("angular size {} is not finite", self),
            ));
        }
        if self.magnitude <= 0.0 {
            return Err(AstroError::invalid_argument(
                operation,
                &format!("angular size {} must be positive", self),
            ));
        }
        Ok(self)
    }
}

impl PartialEq for AngularQuantity {
    fn eq(&self, other: &Self) -> bool {
        if self.unit == other.unit {
            return self.magnitude == other.magnitude;
        }
        self.degrees() == other.degrees()
    }
}

impl PartialOrd for AngularQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            return self.magnitude.partial_cmp(&other.magnitude);
        }
        self.degrees().partial_cmp(&other.degrees())
    }
}

impl Mul<f64> for AngularQuantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.magnitude * rhs, self.unit)
    }
}

impl fmt::Display for AngularQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} {}", precision, self.magnitude, self.unit)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

/// An angular argument that may or may not carry a unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AngularInput {
    Quantity(AngularQuantity),
    Bare(f64),
}

impl AngularInput {
    /// Resolves to a quantity, tagging a bare number with `default_unit`.
    pub fn resolve(self, default_unit: AngularUnit) -> AngularQuantity {
        match self {
            Self::Quantity(q) => q,
            Self::Bare(v) => AngularQuantity::new(v, default_unit),
        }
    }

    pub fn is_bare(&self) -> bool {
        matches!(self, Self::Bare(_))
    }
}

impl From<AngularQuantity> for AngularInput {
    fn from(q: AngularQuantity) -> Self {
        Self::Quantity(q)
    }
}

impl From<f64> for AngularInput {
    fn from(v: f64) -> Self {
        Self::Bare(v)
    }
}

#[inline]
pub const fn deg(v: f64) -> AngularQuantity {
    AngularQuantity::new(v, AngularUnit::Degree)
}

#[inline]
pub const fn arcmin(v: f64) -> AngularQuantity {
    AngularQuantity::new(v, AngularUnit::Arcminute)
}

#[inline]
pub const fn arcsec(v: f64) -> AngularQuantity {
    AngularQuantity::new(v, AngularUnit::Arcsecond)
}

#[inline]
pub const fn mas(v: f64) -> AngularQuantity {
    AngularQuantity::new(v, AngularUnit::Milliarcsecond)
}

#[inline]
pub const fn uas(v: f64) -> AngularQuantity {
    AngularQuantity::new(v, AngularUnit::Microarcsecond)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        assert_relative_eq!(arcmin(54.97).degrees(), 54.97 / 60.0);
        assert_relative_eq!(arcsec(3600.0).degrees(), 1.0);
        assert_relative_eq!(mas(805.2).arcseconds(), 0.8052, epsilon = 1e-12);
        assert_relative_eq!(
            uas(393.2).in_unit(AngularUnit::Milliarcsecond),
            0.3932,
            epsilon = 1e-12
        );
        assert_relative_eq!(deg(180.0).radians(), std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_same_unit_keeps_magnitude() {
        let q = arcmin(27.48);
        assert_eq!(q.in_unit(AngularUnit::Arcminute), 27.48);
        assert_eq!(q.to(AngularUnit::Arcminute).magnitude(), 27.48);
    }

    #[test]
    fn test_cross_unit_ordering() {
        assert!(deg(1.832) > arcmin(54.97));
        assert!(arcsec(1.61) > mas(805.2));
        assert!(mas(1.573) > uas(786.3));
        assert!(arcmin(30.0) < deg(1.0));
        assert_eq!(arcmin(60.0), deg(1.0));
    }

    #[test]
    fn test_nan_is_unordered() {
        assert_eq!(deg(f64::NAN).partial_cmp(&deg(1.0)), None);
        assert_ne!(deg(f64::NAN), deg(f64::NAN));
    }

    #[test]
    fn test_scaling() {
        let q = arcsec(1.5) * 2.0;
        assert_eq!(q.unit(), AngularUnit::Arcsecond);
        assert_eq!(q.magnitude(), 3.0);
    }

    #[test]
    fn test_ensure_positive() {
        assert!(deg(0.1).ensure_positive("t").is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = deg(bad).ensure_positive("t").unwrap_err();
            assert!(matches!(err, AstroError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_input_resolution() {
        let bare = AngularInput::from(2.0);
        assert!(bare.is_bare());
        assert_eq!(bare.resolve(AngularUnit::Degree).unit(), AngularUnit::Degree);
        assert_eq!(
            bare.resolve(AngularUnit::Arcminute).unit(),
            AngularUnit::Arcminute
        );

        let tagged = AngularInput::from(arcsec(2.0));
        assert!(!tagged.is_bare());
        assert_eq!(tagged.resolve(AngularUnit::Degree), arcsec(2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(arcmin(54.97).to_string(), "54.97 arcmin");
        assert_eq!(format!("{:.2}", deg(1.0)), "1.00 deg");
    }
}
