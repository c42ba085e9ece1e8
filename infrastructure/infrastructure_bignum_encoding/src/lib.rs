//! Infrastructure Layer: Bignum Encoding
//!
//! Encodes arbitrary precision integers into fixed-width, order-preserving
//! byte fields and decodes them back.
//!
//! ## Overview
//!
//! A field of `width` bytes holds any integer in the two's-complement range
//! `[-2^(8*width-1), 2^(8*width-1) - 1]`. The value is sign-extended to the
//! full width and the sign bit of the first byte is flipped, so comparing two
//! fields as unsigned bytes orders them numerically. Values outside the range
//! are rejected with [`EncodeError::ValueTooLarge`]; they are never truncated.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: the free functions
//!   [`big_int_to_bytes`] / [`bytes_to_big_int`] working at a caller-supplied
//!   offset, and [`BignumCodec`], a codec bound to one width.
//!
//! ## Architecture
//!
//! Depends on the entities layer: [`BigNumber`](entities_utilities::BigNumber)
//! supplies the two's-complement bytes and
//! [`flip_sign_bit`](entities_data_handling::flip_sign_bit) the order-preserving
//! step shared with the 32/64-bit codecs.

mod common;

pub mod bignum_codec;

pub use bignum_codec::{big_int_to_bytes, bytes_to_big_int, sortable_big_int_bytes, BignumCodec};

// Re-export error types for convenience
pub use common::{EncodeError, EncodeResult};
