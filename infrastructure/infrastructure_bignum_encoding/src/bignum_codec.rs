//! Bignum Codec Module
//!
//! Fixed-width, order-preserving encoding of arbitrary precision integers.
//!
//! ## Format
//!
//! ```text
//! value        = -2                        300
//! minimal      = fe                        01 2c
//! sign-extend  = ff ff ff fe               00 00 01 2c     (width = 4)
//! flip sign    = 7f ff ff fe               80 00 01 2c
//! ```
//!
//! The encoded field is always exactly `width` bytes. Decoding un-flips the
//! sign bit and reads the field as a two's-complement big-endian integer.

use crate::common::{EncodeError, EncodeResult};
use entities_data_handling::flip_sign_bit;
use entities_utilities::BigNumber;

/// Flips the sign bit of an encoded big integer field in place.
///
/// Negative values then sort before positive ones; applying it again
/// restores the two's-complement bytes.
pub fn sortable_big_int_bytes(field: &mut [u8]) {
    flip_sign_bit(field);
}

/// Encodes `value` into exactly `width` bytes at `dest[offset..offset + width]`.
///
/// # Errors
///
/// Returns [`EncodeError::ValueTooLarge`] when the value needs more than
/// `width` bytes of two's complement. `dest` is not modified in that case.
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + width` bytes.
///
/// # Examples
///
/// ```rust
/// use entities_utilities::BigNumber;
/// use infrastructure_bignum_encoding::big_int_to_bytes;
///
/// let mut field = [0u8; 4];
/// big_int_to_bytes(&BigNumber::from_i64(-2), 4, &mut field, 0).unwrap();
/// assert_eq!(field, [0x7f, 0xff, 0xff, 0xfe]);
///
/// let too_big = BigNumber::from_i64(4294967296);
/// assert!(big_int_to_bytes(&too_big, 4, &mut field, 0).is_err());
/// ```
pub fn big_int_to_bytes(
    value: &BigNumber,
    width: usize,
    dest: &mut [u8],
    offset: usize,
) -> EncodeResult<()> {
    let minimal = value.to_signed_bytes_be();
    if minimal.len() > width {
        tracing::debug!(
            width,
            required = minimal.len(),
            "big integer does not fit fixed-width field"
        );
        return Err(EncodeError::ValueTooLarge {
            value: value.to_string(),
            width,
        });
    }

    let pad = if minimal[0] & 0x80 != 0 { 0xff } else { 0x00 };
    let split = width - minimal.len();

    let field = &mut dest[offset..offset + width];
    field[..split].fill(pad);
    field[split..].copy_from_slice(&minimal);
    sortable_big_int_bytes(field);

    debug_assert_eq!(&bytes_to_big_int(dest, offset, width), value);
    Ok(())
}

/// Decodes `length` bytes at `src[offset..]` written by [`big_int_to_bytes`].
///
/// A zero `length` decodes to zero.
///
/// # Panics
///
/// Panics if `src` has fewer than `offset + length` bytes.
pub fn bytes_to_big_int(src: &[u8], offset: usize, length: usize) -> BigNumber {
    let mut field = src[offset..offset + length].to_vec();
    sortable_big_int_bytes(&mut field);
    BigNumber::from_signed_bytes_be(&field)
}

/// Bignum codec bound to one field width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BignumCodec {
    width: usize,
}

impl BignumCodec {
    /// Create a codec producing `width`-byte fields
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Field width in bytes
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Encode bignum to a new `width`-byte vector
    pub fn encode(&self, value: &BigNumber) -> EncodeResult<Vec<u8>> {
        let mut field = vec![0u8; self.width];
        self.encode_into(value, &mut field, 0)?;
        Ok(field)
    }

    /// Encode bignum into `dest` at `offset`
    pub fn encode_into(
        &self,
        value: &BigNumber,
        dest: &mut [u8],
        offset: usize,
    ) -> EncodeResult<()> {
        big_int_to_bytes(value, self.width, dest, offset)
    }

    /// Decode the `width`-byte field at `offset`
    pub fn decode(&self, src: &[u8], offset: usize) -> BigNumber {
        bytes_to_big_int(src, offset, self.width)
    }
}
