//! The error type returned by every fallible operation in the library.
//!
//! Each variant corresponds to one failure kind; none of them are
//! recoverable at the point of call. Precision loss surfaces as
//! [`Error::RoundingNecessary`] instead of silently rounding, which makes
//! the "rounding may be required" contract visible in every signature.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The currency code (or numeric code) is not known to the active
    /// provider(s).
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    /// A binary operation was attempted between monetary values in two
    /// different currencies without an explicit conversion.
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },
    /// The result cannot be represented at the requested scale without
    /// rounding, and the rounding mode forbids it.
    #[error("rounding necessary: the value cannot be represented exactly at this scale")]
    RoundingNecessary,
    /// Division of a monetary amount by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Malformed configuration: a bad scale or step, a rounding mode that
    /// the context rejects, an empty aggregate, a non-positive rate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No exchange rate is available for the requested currency pair.
    #[error("no exchange rate available to convert {source} to {target}")]
    ConversionNotAvailable {
        source: String,
        target: String,
    },
    /// A builder was finalized with missing or inconsistent fields.
    #[error("builder failed: {0}")]
    BuilderFailed(String),
    /// A string could not be parsed as a monetary value.
    #[error("parse failure: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
