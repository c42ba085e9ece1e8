//! Common Encoding Types
//!
//! Error types shared by the fixed-width bignum codec.

use thiserror::Error;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value's two's-complement form is wider than the target field
    #[error("BigInteger: {value} requires more than {width} bytes storage")]
    ValueTooLarge {
        /// Decimal rendering of the rejected value
        value: String,
        /// Requested field width in bytes
        width: usize,
    },
}

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;
