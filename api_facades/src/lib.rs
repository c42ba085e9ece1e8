//! API Facades Layer
//!
//! Provides one import path for every order-preserving numeric helper.
//!
//! Callers that build or query packed keys usually need pieces from every
//! inner layer: the float and integer codecs, the big-integer codec, and the
//! packed-key arithmetic. [`numeric_utils`] gathers them under their
//! conventional names so a caller writes `numeric_utils::long_to_bytes` instead
//! of tracking which crate owns which function.

pub mod numeric_utils;

pub use entities_utilities::BigNumber;
