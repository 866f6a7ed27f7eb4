//! Conversion errors for the decimal and unit domain.
//!
//! Only [`ConversionError::InvalidUnitForCategory`] signals a programming
//! error. The remaining variants are recovered locally and surface as an
//! empty value to the caller.
//!
//! # Examples
//!
//! ```
//! use unitconv::domain::error::ConversionError;
//! use unitconv::domain::DecimalValue;
//!
//! let result = DecimalValue::parse("-");
//! assert!(matches!(result, Err(ConversionError::Parse { .. })));
//! ```

use thiserror::Error;

/// Errors raised while parsing or converting a decimal quantity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The text is not a signed decimal numeral.
    #[error("invalid decimal numeral: {input:?}")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// A rate or factor division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The result left the representable decimal range.
    #[error("decimal overflow")]
    Overflow,

    /// A unit (or currency) does not belong to the category it was used with.
    #[error("unit '{unit}' does not belong to category {category}")]
    InvalidUnitForCategory {
        /// The offending unit identifier.
        unit: String,
        /// The category it was used with.
        category: String,
    },
}

impl ConversionError {
    /// True for errors that mean "no value yet" rather than a bug.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidUnitForCategory { .. })
    }
}
