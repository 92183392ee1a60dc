//! Angular size parsing from string representations.
//!
//! Sizes and radii arrive from command lines and configuration as text such as
//! `1.5arcmin`, `30 arcsec`, `2'`, `0.8"` or `805.2 mas`. The number comes first,
//! optionally followed by a unit from the supported family:
//!
//! ```text
//! Degrees:          1.5  1.5d  1.5deg  1.5 degrees  1.5°
//! Arcminutes:       30'  30arcmin  30 arcminutes  30′
//! Arcseconds:       12"  12''  12arcsec  12″
//! Milliarcseconds:  805.2mas
//! Microarcseconds:  393.2uas  393.2µas
//! ```
//!
//! Two entry points differ only in how they treat a missing unit:
//!
//! - [`parse_quantity`] requires the unit.
//! - [`parse_angular_input`] returns [`AngularInput::Bare`], leaving the
//!   default unit to the caller.
//!
//! ```
//! use celestial_core::angle::{arcmin, parse_angular_input, parse_quantity, AngularInput};
//!
//! assert_eq!(parse_quantity("30'").unwrap(), arcmin(30.0));
//! assert_eq!(parse_angular_input("0.5").unwrap(), AngularInput::Bare(0.5));
//! assert!(parse_quantity("0.5").is_err());
//! ```

use super::{AngularInput, AngularQuantity, AngularUnit};
use crate::AstroError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static QUANTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)   # magnitude
        \s*
        (\S.*?)?                                      # optional unit
        \s*$
        "#,
    )
    .expect("quantity regex is valid")
});

fn split_magnitude_unit(s: &str) -> Result<(f64, Option<&str>), AstroError> {
    let caps = QUANTITY_REGEX.captures(s).ok_or_else(|| {
        AstroError::invalid_argument(
            "parse_quantity",
            &format!("Cannot parse '{}' as an angular size", s),
        )
    })?;
    let magnitude = caps[1].parse::<f64>().map_err(|_| {
        AstroError::invalid_argument(
            "parse_quantity",
            &format!("Cannot parse '{}' as number", &caps[1]),
        )
    })?;
    Ok((magnitude, caps.get(2).map(|m| m.as_str())))
}

/// Parse a size that must carry an explicit unit.
pub fn parse_quantity(s: &str) -> Result<AngularQuantity, AstroError> {
    match split_magnitude_unit(s)? {
        (magnitude, Some(unit)) => Ok(AngularQuantity::new(magnitude, unit.parse()?)),
        (_, None) => Err(AstroError::invalid_argument(
            "parse_quantity",
            &format!("'{}' has no angular unit", s.trim()),
        )),
    }
}

/// Parse a size whose unit is optional.
pub fn parse_angular_input(s: &str) -> Result<AngularInput, AstroError> {
    match split_magnitude_unit(s)? {
        (magnitude, Some(unit)) => Ok(AngularInput::Quantity(AngularQuantity::new(
            magnitude,
            unit.parse::<AngularUnit>()?,
        ))),
        (magnitude, None) => Ok(AngularInput::Bare(magnitude)),
    }
}

impl FromStr for AngularQuantity {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

impl FromStr for AngularInput {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_angular_input(s)
    }
}
