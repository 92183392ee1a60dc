//! Error types for angular-size and coordinate handling.
//!
//! This module provides a unified error type [`AstroError`] that covers the failure
//! modes encountered when selecting HEALPix levels and binning sky positions:
//! bad caller arguments, units outside the supported family, numerical problems
//! with coordinates, and input data that cannot be read.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidArgument`](AstroError::InvalidArgument) | Non-positive sizes, mismatched lengths, bad levels | No |
//! | [`UnsupportedUnit`](AstroError::UnsupportedUnit) | Unit outside deg/arcmin/arcsec/mas/µas | No |
//! | [`MathError`](AstroError::MathError) | Non-finite or out-of-range coordinates | No |
//! | [`DataError`](AstroError::DataError) | File I/O, parsing of tabular input | Yes |
//!
//! # Usage
//!
//! Most functions return [`AstroResult<T>`], which is `Result<T, AstroError>`.
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use celestial_core::AstroError;
//!
//! fn checked_radius(radius_deg: f64) -> Result<f64, AstroError> {
//!     if !(radius_deg > 0.0) {
//!         return Err(AstroError::invalid_argument(
//!             "checked_radius",
//!             "radius must be positive",
//!         ));
//!     }
//!     Ok(radius_deg)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`AstroError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for level selection, binning and grid generation.
///
/// Use the constructor methods ([`invalid_argument`](Self::invalid_argument),
/// [`unsupported_unit`](Self::unsupported_unit), etc.) for consistent error creation.
#[derive(Error, Debug)]
pub enum AstroError {
    /// Caller contract violation: non-positive size, mismatched sequence
    /// lengths, level outside [0, 29], missing table column.
    #[error("Invalid argument to {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// Unit outside the degree/arcminute/arcsecond/milliarcsecond/microarcsecond family.
    #[error("Unsupported angular unit '{unit}'")]
    UnsupportedUnit { unit: String },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Data access failure (file I/O, parsing).
    ///
    /// This is the only recoverable error variant: a corrected input may succeed.
    #[error("Data error ({file_type} - {operation}): {message}")]
    DataError {
        file_type: String,
        operation: String,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(operation: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnsupportedUnit`](Self::UnsupportedUnit) error.
    pub fn unsupported_unit(unit: &str) -> Self {
        Self::UnsupportedUnit {
            unit: unit.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`DataError`](Self::DataError) (the only recoverable variant).
    pub fn data_error(file_type: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            file_type: file_type.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying with corrected input might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}

impl From<std::io::Error> for AstroError {
    fn from(err: std::io::Error) -> Self {
        Self::data_error("input", "read", &err.to_string())
    }
}
