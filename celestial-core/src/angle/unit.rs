use crate::constants::{ARCMIN_PER_DEG, ARCSEC_PER_DEG, MICROARCSEC_PER_DEG, MILLIARCSEC_PER_DEG};
use crate::AstroError;
use std::fmt;
use std::str::FromStr;

/// The closed family of angular units understood by level selection.
///
/// Every unit converts exactly to degrees, so any two quantities can be
/// compared. Anything else (radians, hour angle, lengths) is rejected at
/// parse time with [`AstroError::UnsupportedUnit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngularUnit {
    Degree,
    Arcminute,
    Arcsecond,
    Milliarcsecond,
    Microarcsecond,
}

impl AngularUnit {
    /// How many of this unit make up one degree.
    #[inline]
    pub const fn per_degree(self) -> f64 {
        match self {
            Self::Degree => 1.0,
            Self::Arcminute => ARCMIN_PER_DEG,
            Self::Arcsecond => ARCSEC_PER_DEG,
            Self::Milliarcsecond => MILLIARCSEC_PER_DEG,
            Self::Microarcsecond => MICROARCSEC_PER_DEG,
        }
    }

    /// Short symbol used when formatting quantities.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Degree => "deg",
            Self::Arcminute => "arcmin",
            Self::Arcsecond => "arcsec",
            Self::Milliarcsecond => "mas",
            Self::Microarcsecond => "uas",
        }
    }
}

impl fmt::Display for AngularUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AngularUnit {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "d" | "deg" | "degs" | "degree" | "degrees" | "°" => Self::Degree,
            "'" | "′" | "am" | "amin" | "arcmin" | "arcmins" | "arcminute" | "arcminutes" => {
                Self::Arcminute
            }
            "\"" | "''" | "″" | "as" | "asec" | "arcsec" | "arcsecs" | "arcsecond"
            | "arcseconds" => Self::Arcsecond,
            "mas" | "milliarcsec" | "milliarcsecond" | "milliarcseconds" => Self::Milliarcsecond,
            "uas" | "µas" | "μas" | "microarcsec" | "microarcsecond" | "microarcseconds" => {
                Self::Microarcsecond
            }
            _ => return Err(AstroError::unsupported_unit(s.trim())),
        };
        Ok(unit)
    }
}
