//! Fixed-Width Integer Codec
//!
//! Writes signed integers as big-endian bytes with the most significant bit
//! flipped. In two's complement that bit is the sign bit, so flipping it moves
//! negative values below non-negative ones and unsigned byte order becomes
//! signed numeric order.
//!
//! The `*_direct` variants write plain big-endian bytes without the flip, for
//! values that already carry unsigned semantics (for example sortable bits
//! whose sign has been handled elsewhere).
//!
//! ## Buffer Contract
//!
//! Encoders write exactly [`INT_BYTES`] or [`LONG_BYTES`] bytes starting at
//! `offset`; decoders read the same count. Capacity is the caller's
//! responsibility: every function panics if the range runs past the end of the
//! slice.

use crate::sortable::{
    double_to_sortable_long, float_to_sortable_int, sortable_int_to_float,
    sortable_long_to_double,
};

/// Encoded width of a 32-bit value
pub const INT_BYTES: usize = 4;

/// Encoded width of a 64-bit value
pub const LONG_BYTES: usize = 8;

/// Flips the sign bit of a big-endian two's-complement field in place.
///
/// This is the order-preserving step for every width: after the flip,
/// negative values start with a `0` bit and non-negative values with a `1`,
/// so unsigned comparison orders them numerically. Applying it twice restores
/// the original bytes. An empty slice is left unchanged.
///
/// # Examples
///
/// ```rust
/// use entities_data_handling::int_codec::flip_sign_bit;
///
/// let mut field = [0xffu8, 0xff]; // -1 as i16
/// flip_sign_bit(&mut field);
/// assert_eq!(field, [0x7f, 0xff]);
/// ```
pub fn flip_sign_bit(field: &mut [u8]) {
    if let Some(first) = field.first_mut() {
        *first ^= 0x80;
    }
}

/// Encodes `value` as 4 sortable bytes at `dest[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + 4` bytes.
pub fn int_to_bytes(value: i32, dest: &mut [u8], offset: usize) {
    let field = &mut dest[offset..offset + INT_BYTES];
    field.copy_from_slice(&value.to_be_bytes());
    flip_sign_bit(field);
}

/// Decodes 4 sortable bytes written by [`int_to_bytes`].
///
/// # Panics
///
/// Panics if `src` has fewer than `offset + 4` bytes.
pub fn bytes_to_int(src: &[u8], offset: usize) -> i32 {
    let mut field = [0u8; INT_BYTES];
    field.copy_from_slice(&src[offset..offset + INT_BYTES]);
    flip_sign_bit(&mut field);
    i32::from_be_bytes(field)
}

/// Encodes `value` as 4 big-endian bytes without flipping the sign bit.
pub fn int_to_bytes_direct(value: i32, dest: &mut [u8], offset: usize) {
    dest[offset..offset + INT_BYTES].copy_from_slice(&value.to_be_bytes());
}

/// Decodes 4 big-endian bytes written by [`int_to_bytes_direct`].
pub fn bytes_to_int_direct(src: &[u8], offset: usize) -> i32 {
    let mut field = [0u8; INT_BYTES];
    field.copy_from_slice(&src[offset..offset + INT_BYTES]);
    i32::from_be_bytes(field)
}

/// Encodes `value` as 8 sortable bytes at `dest[offset..offset + 8]`.
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + 8` bytes.
pub fn long_to_bytes(value: i64, dest: &mut [u8], offset: usize) {
    long_to_bytes_direct(value, dest, offset);
    flip_sign_bit(&mut dest[offset..offset + LONG_BYTES]);
}

/// Decodes 8 sortable bytes written by [`long_to_bytes`].
///
/// # Panics
///
/// Panics if `src` has fewer than `offset + 8` bytes.
pub fn bytes_to_long(src: &[u8], offset: usize) -> i64 {
    let mut field = [0u8; LONG_BYTES];
    field.copy_from_slice(&src[offset..offset + LONG_BYTES]);
    flip_sign_bit(&mut field);
    i64::from_be_bytes(field)
}

/// Encodes `value` as 8 big-endian bytes without flipping the sign bit.
pub fn long_to_bytes_direct(value: i64, dest: &mut [u8], offset: usize) {
    dest[offset..offset + LONG_BYTES].copy_from_slice(&value.to_be_bytes());
}

/// Decodes 8 big-endian bytes written by [`long_to_bytes_direct`].
pub fn bytes_to_long_direct(src: &[u8], offset: usize) -> i64 {
    let mut field = [0u8; LONG_BYTES];
    field.copy_from_slice(&src[offset..offset + LONG_BYTES]);
    i64::from_be_bytes(field)
}

/// Encodes an `f64` as 8 bytes whose unsigned order is the value's total order.
///
/// This is [`double_to_sortable_long`] followed by [`long_to_bytes`], the usual
/// way a floating-point dimension lands in a packed key.
pub fn double_to_sortable_bytes(value: f64, dest: &mut [u8], offset: usize) {
    long_to_bytes(double_to_sortable_long(value), dest, offset);
}

/// Decodes 8 bytes written by [`double_to_sortable_bytes`].
pub fn sortable_bytes_to_double(src: &[u8], offset: usize) -> f64 {
    sortable_long_to_double(bytes_to_long(src, offset))
}

/// Encodes an `f32` as 4 bytes whose unsigned order is the value's total order.
pub fn float_to_sortable_bytes(value: f32, dest: &mut [u8], offset: usize) {
    int_to_bytes(float_to_sortable_int(value), dest, offset);
}

/// Decodes 4 bytes written by [`float_to_sortable_bytes`].
pub fn sortable_bytes_to_float(src: &[u8], offset: usize) -> f32 {
    sortable_int_to_float(bytes_to_int(src, offset))
}
