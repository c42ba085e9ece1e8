//! Hyperrectangle Containment
//!
//! An axis-aligned box over `N` dimensions is a pair of packed keys: the
//! per-dimension minimums and the per-dimension maximums. Because every field
//! is order-preserving, containment reduces to unsigned byte comparisons of
//! the matching fields; nothing is decoded.

use entities_data_handling::compare_unsigned;
use std::cmp::Ordering;

/// Returns true if rectangle A (`min_a`..`max_a`) contains rectangle B
/// (`min_b`..`max_b`).
///
/// The number of dimensions is `min_a.len() / bytes_per_dim`. For every
/// dimension, A's minimum must not exceed B's and A's maximum must not be
/// below B's; bounds are inclusive, so every rectangle contains itself. The
/// check stops at the first dimension that fails.
///
/// A box whose minimum exceeds its maximum in some dimension is not rejected;
/// the answer for such a box is meaningless.
///
/// # Panics
///
/// Panics if `bytes_per_dim` is zero, or if any of the other buffers is
/// shorter than `min_a`.
///
/// # Examples
///
/// ```rust
/// use usecases_packed_keys::contains;
///
/// // One dimension, one byte per dimension
/// assert!(contains(1, &[0x00], &[0x10], &[0x02], &[0x08]));
/// assert!(!contains(1, &[0x03], &[0x10], &[0x02], &[0x08]));
/// ```
pub fn contains(
    bytes_per_dim: usize,
    min_a: &[u8],
    max_a: &[u8],
    min_b: &[u8],
    max_b: &[u8],
) -> bool {
    let num_dims = min_a.len() / bytes_per_dim;
    (0..num_dims).all(|dim| {
        let offset = dim * bytes_per_dim;
        compare_unsigned(bytes_per_dim, min_a, offset, min_b, offset) != Ordering::Greater
            && compare_unsigned(bytes_per_dim, max_a, offset, max_b, offset) != Ordering::Less
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        let min = [0x01, 0x02, 0x03, 0x04];
        let max = [0x05, 0x06, 0x07, 0x08];
        assert!(contains(2, &min, &max, &min, &max));
    }

    #[test]
    fn test_shared_bounds_are_inclusive() {
        assert!(contains(1, &[0x00, 0x00], &[0x0a, 0x0a], &[0x00, 0x05], &[0x05, 0x0a]));
    }

    #[test]
    fn test_single_dimension_violations() {
        let min_a = [0x02, 0x02];
        let max_a = [0x08, 0x08];
        // min below A in dimension 1
        assert!(!contains(1, &min_a, &max_a, &[0x02, 0x01], &[0x08, 0x08]));
        // max above A in dimension 0
        assert!(!contains(1, &min_a, &max_a, &[0x02, 0x02], &[0x09, 0x08]));
    }

    #[test]
    fn test_bytes_compare_unsigned() {
        // 0x80 is above 0x7f even though it is negative as a signed byte
        assert!(contains(1, &[0x7f], &[0xff], &[0x80], &[0x90]));
        assert!(!contains(1, &[0x80], &[0xff], &[0x7f], &[0x90]));
    }

    #[test]
    fn test_multi_byte_fields() {
        let min_a = [0x00, 0xff];
        let max_a = [0x01, 0x00];
        assert!(contains(2, &min_a, &max_a, &[0x00, 0xff], &[0x00, 0xff]));
        assert!(!contains(2, &min_a, &max_a, &[0x00, 0xfe], &[0x00, 0xff]));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(contains(4, &[], &[], &[], &[]));
    }
}
