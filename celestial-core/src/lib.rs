//! Angular units, quantities and coordinate checks for HEALPix level work.
//!
//! `celestial-core` provides the small set of building blocks shared by the
//! level-selection and binning code in `celestial-moc`: a unit-tagged angular
//! quantity, parsing of sizes written with unit suffixes, coordinate validation,
//! and the workspace error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`AngularUnit`], [`AngularQuantity`], [`AngularInput`], parsing, validation |
//! | [`constants`] | Unit conversion constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root for convenience:
//!
//! ```
//! use celestial_core::{AngularInput, AngularQuantity, AngularUnit};
//! use celestial_core::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Design Notes
//!
//! - **Units travel with values**: an [`AngularQuantity`] keeps the unit it
//!   was written in and converts to degrees only when compared.
//!
//! - **Bare numbers are explicit**: APIs take `impl Into<AngularInput>`; a
//!   plain `f64` becomes [`AngularInput::Bare`] and the callee decides which
//!   unit it means.

pub mod angle;
pub mod constants;
pub mod errors;

pub use angle::{AngularInput, AngularQuantity, AngularUnit};
pub use errors::{AstroError, AstroResult, MathErrorKind};
