use crate::{AstroError, MathErrorKind};

/// Validates a longitude / right ascension in degrees.
///
/// Any finite value is accepted as given; wrapping into [0°, 360°) is left to
/// the pixelization, which treats longitude periodically.
pub fn validate_longitude_deg(lon_deg: f64) -> Result<f64, AstroError> {
    if lon_deg.is_finite() {
        return Ok(lon_deg);
    }

    Err(AstroError::math_error(
        "validate_longitude",
        MathErrorKind::NotFinite,
        "Lon not finite",
    ))
}

/// Validates a latitude / declination in degrees against [-90°, +90°].
pub fn validate_latitude_deg(lat_deg: f64) -> Result<f64, AstroError> {
    if !lat_deg.is_finite() {
        return Err(AstroError::math_error(
            "validate_latitude",
            MathErrorKind::NotFinite,
            "Lat not finite",
        ));
    }

    if (-90.0..=90.0).contains(&lat_deg) {
        return Ok(lat_deg);
    }

    Err(AstroError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("Lat {:.2}° out of range [-90°, +90°]", lat_deg),
    ))
}
