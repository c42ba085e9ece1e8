//! Entities Layer: Data Handling
//!
//! Fixed-width, order-preserving encodings for primitive numeric values.
//!
//! ## Overview
//!
//! Every encoding in this crate has one contract: comparing two encoded values
//! as unsigned bytes (or, for the sortable integer forms, as signed integers)
//! gives the same answer as comparing the original numbers. Byte-oriented
//! indexes can then sort and range-filter numeric fields without decoding.
//!
//! As the innermost layer this crate has no dependencies on other crates in
//! the workspace.
//!
//! ## Modules
//!
//! - **[`sortable`](sortable/index.html)**: IEEE-754 bit transforms that turn
//!   `f64`/`f32` values into sortable `i64`/`i32` values and back.
//!
//! - **[`int_codec`](int_codec/index.html)**: 32/64-bit big-endian codecs with
//!   the sign bit flipped, their "direct" (unflipped) variants, and the shared
//!   [`flip_sign_bit`] primitive used for every width.
//!
//! - **[`bits`](bits/index.html)**: unsigned comparison of equal-length byte
//!   ranges, the primitive every packed-key comparison is built on.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{int_to_bytes, double_to_sortable_long, compare_unsigned};
//! use std::cmp::Ordering;
//!
//! let mut a = [0u8; 4];
//! let mut b = [0u8; 4];
//! int_to_bytes(-1, &mut a, 0);
//! int_to_bytes(1, &mut b, 0);
//! assert_eq!(compare_unsigned(4, &a, 0, &b, 0), Ordering::Less);
//!
//! assert!(double_to_sortable_long(-1.0) < double_to_sortable_long(0.0));
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): arbitrary precision
//!   integers with two's-complement byte conversion

pub mod bits;
pub mod int_codec;
pub mod sortable;

pub use bits::compare_unsigned;
pub use int_codec::{
    bytes_to_int, bytes_to_int_direct, bytes_to_long, bytes_to_long_direct,
    double_to_sortable_bytes, flip_sign_bit, float_to_sortable_bytes, int_to_bytes,
    int_to_bytes_direct, long_to_bytes, long_to_bytes_direct, sortable_bytes_to_double,
    sortable_bytes_to_float, INT_BYTES, LONG_BYTES,
};
pub use sortable::{
    double_to_sortable_long, float_to_sortable_int, sortable_bits, sortable_double_bits,
    sortable_float_bits, sortable_int_to_float, sortable_long_to_double,
};
