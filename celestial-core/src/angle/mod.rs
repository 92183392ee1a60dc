mod parse;
mod quantity;
#[cfg(feature = "serde")]
mod serde_;
mod unit;
mod validate;

pub use parse::{parse_angular_input, parse_quantity};
pub use quantity::{arcmin, arcsec, deg, mas, uas, AngularInput, AngularQuantity};
pub use unit::AngularUnit;
pub use validate::{validate_latitude_deg, validate_longitude_deg};
