//! Sortable Floating-Point Bits
//!
//! Reinterprets IEEE-754 bit layouts so that comparing the result as a signed
//! integer matches the total order of the original floating-point value:
//!
//! ```text
//! -inf < ... < -0.0 < +0.0 < ... < +inf < NaN
//! ```
//!
//! ## Bit Layout
//!
//! A non-negative float already sorts correctly when its bits are read as a
//! signed integer. A negative float sorts backwards, because a larger magnitude
//! produces a larger bit pattern. Flipping every bit except the sign bit of the
//! negative patterns reverses that order while keeping them below zero.
//!
//! The transform only looks at the sign bit of its input and never changes
//! that bit, so applying it twice restores the original pattern. The same
//! function therefore encodes and decodes.
//!
//! ## NaN Handling
//!
//! The raw bit pattern is used, so every NaN payload round-trips exactly.
//! Positive NaN patterns (including the canonical `f64::NAN`) sort above
//! positive infinity; NaN patterns with the sign bit set sort below negative
//! infinity, following the same flip rule.

use num_traits::{PrimInt, Signed};

/// Converts a two's-complement bit pattern to sortable order, or back.
///
/// Computes `bits ^ ((bits >> (WIDTH - 1)) & T::MAX)`: the arithmetic shift
/// smears the sign bit across the word, and masking with `T::MAX` keeps the
/// sign bit itself out of the flip.
///
/// # Examples
///
/// ```rust
/// use entities_data_handling::sortable::sortable_bits;
///
/// assert_eq!(sortable_bits(5i32), 5);
/// assert_eq!(sortable_bits(-1i32), i32::MIN);
/// assert_eq!(sortable_bits(sortable_bits(-12345i64)), -12345);
/// ```
pub fn sortable_bits<T: PrimInt + Signed>(bits: T) -> T {
    let sign_shift = (T::zero().count_zeros() - 1) as usize;
    bits ^ ((bits >> sign_shift) & T::max_value())
}

/// Converts the IEEE-754 bits of an `f64` to sortable order (or back).
pub fn sortable_double_bits(bits: i64) -> i64 {
    sortable_bits(bits)
}

/// Converts the IEEE-754 bits of an `f32` to sortable order (or back).
pub fn sortable_float_bits(bits: i32) -> i32 {
    sortable_bits(bits)
}

/// Converts an `f64` to a sortable signed `i64`.
///
/// No precision is lost. The result can be compared, stored or encoded as a
/// plain `i64`; see [`sortable_long_to_double`] for the inverse.
///
/// # Examples
///
/// ```rust
/// use entities_data_handling::sortable::double_to_sortable_long;
///
/// assert!(double_to_sortable_long(-1.0) < double_to_sortable_long(0.0));
/// assert!(double_to_sortable_long(1.0) < double_to_sortable_long(f64::NAN));
/// ```
pub fn double_to_sortable_long(value: f64) -> i64 {
    sortable_double_bits(value.to_bits() as i64)
}

/// Converts a sortable `i64` back to the `f64` it was produced from.
pub fn sortable_long_to_double(value: i64) -> f64 {
    f64::from_bits(sortable_double_bits(value) as u64)
}

/// Converts an `f32` to a sortable signed `i32`.
pub fn float_to_sortable_int(value: f32) -> i32 {
    sortable_float_bits(value.to_bits() as i32)
}

/// Converts a sortable `i32` back to the `f32` it was produced from.
pub fn sortable_int_to_float(value: i32) -> f32 {
    f32::from_bits(sortable_float_bits(value) as u32)
}
