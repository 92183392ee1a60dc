//! Numeric constants and angular-unit conversion factors.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const ARCMIN_PER_DEG: f64 = 60.0;

pub const ARCSEC_PER_DEG: f64 = 3_600.0;

pub const MILLIARCSEC_PER_DEG: f64 = 3_600_000.0;

pub const MICROARCSEC_PER_DEG: f64 = 3_600_000_000.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const SQRT2: f64 = 1.4142135623730950488;
