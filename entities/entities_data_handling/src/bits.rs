//! Byte Range Comparison
//!
//! Unsigned, most-significant-byte-first comparison of fixed-width fields.
//! Every order-preserving encoding in this workspace is designed to be
//! compared with this function, so packed keys can be sorted and
//! range-checked without decoding.
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::bits;
//! use std::cmp::Ordering;
//!
//! let a = [0x00u8, 0x80];
//! let b = [0x00u8, 0x7f];
//! assert_eq!(bits::compare_unsigned(2, &a, 0, &b, 0), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// Compares `len` bytes of `a` starting at `a_offset` with `len` bytes of `b`
/// starting at `b_offset`, treating each byte as unsigned.
///
/// The first differing byte decides; equal ranges compare `Equal`. A zero
/// `len` always compares `Equal`.
///
/// # Panics
///
/// Panics if either range runs past the end of its slice.
///
/// # Examples
///
/// ```rust
/// use entities_data_handling::bits::compare_unsigned;
/// use std::cmp::Ordering;
///
/// let packed = [0x01u8, 0xff, 0x02, 0x00];
/// // Second field (0x0200) is greater than the first (0x01ff)
/// assert_eq!(compare_unsigned(2, &packed, 2, &packed, 0), Ordering::Greater);
/// ```
pub fn compare_unsigned(
    len: usize,
    a: &[u8],
    a_offset: usize,
    b: &[u8],
    b_offset: usize,
) -> Ordering {
    a[a_offset..a_offset + len].cmp(&b[b_offset..b_offset + len])
}
