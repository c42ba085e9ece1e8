//! Entities Layer: Utilities
//!
//! Provides utility types:
//! - Big number operations and two's-complement byte conversion
//!
//! The big-integer codec in `infrastructure_bignum_encoding` only ever sees
//! [`BigNumber`] and its byte conversions, so the arbitrary-precision backend
//! stays an implementation detail of this crate.

pub mod big;

pub use big::BigNumber;
