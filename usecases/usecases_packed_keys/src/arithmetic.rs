//! Fixed-Width Unsigned Arithmetic
//!
//! Adds or subtracts the `dim`-th field of two packed keys, treating each
//! field as an unsigned big-endian integer of `bytes_per_dim` bytes. The work
//! is byte-serial, from the least significant byte up, carrying or borrowing
//! one at a time.
//!
//! A result that does not fit in `bytes_per_dim` bytes is an error. Neither
//! operation wraps around or saturates; on error the contents of `result` are
//! unspecified.

use thiserror::Error;

/// Arithmetic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Subtraction with `a < b`
    #[error("a < b")]
    Underflow,
    /// Addition whose sum needs more than `bytes_per_dim` bytes
    #[error("a + b overflows bytes_per_dim={bytes_per_dim}")]
    Overflow {
        /// Width of the field that overflowed
        bytes_per_dim: usize,
    },
}

/// Computes `result = a[dim] - b[dim]`.
///
/// Writes `bytes_per_dim` bytes to the start of `result`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Underflow`] if `a[dim] < b[dim]`.
///
/// # Panics
///
/// Panics if `a` or `b` is shorter than `(dim + 1) * bytes_per_dim` bytes, or
/// `result` is shorter than `bytes_per_dim`.
///
/// # Examples
///
/// ```rust
/// use usecases_packed_keys::subtract;
///
/// let mut result = [0u8; 2];
/// subtract(2, 1, &[0, 0, 0x01, 0x00], &[0, 0, 0x00, 0x01], &mut result).unwrap();
/// assert_eq!(result, [0x00, 0xff]);
/// ```
pub fn subtract(
    bytes_per_dim: usize,
    dim: usize,
    a: &[u8],
    b: &[u8],
    result: &mut [u8],
) -> Result<(), ArithmeticError> {
    let start = dim * bytes_per_dim;
    let end = start + bytes_per_dim;

    let mut borrow = false;
    for ((out, &x), &y) in result[..bytes_per_dim]
        .iter_mut()
        .zip(&a[start..end])
        .zip(&b[start..end])
        .rev()
    {
        let (diff, under_y) = x.overflowing_sub(y);
        let (diff, under_borrow) = diff.overflowing_sub(u8::from(borrow));
        *out = diff;
        borrow = under_y || under_borrow;
    }

    if borrow {
        tracing::debug!(bytes_per_dim, dim, "packed subtraction underflow");
        return Err(ArithmeticError::Underflow);
    }
    Ok(())
}

/// Computes `result = a[dim] + b[dim]`.
///
/// Writes `bytes_per_dim` bytes to the start of `result`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] if the sum needs more than
/// `bytes_per_dim` bytes.
///
/// # Panics
///
/// Panics under the same buffer conditions as [`subtract`].
pub fn add(
    bytes_per_dim: usize,
    dim: usize,
    a: &[u8],
    b: &[u8],
    result: &mut [u8],
) -> Result<(), ArithmeticError> {
    let start = dim * bytes_per_dim;
    let end = start + bytes_per_dim;

    let mut carry = false;
    for ((out, &x), &y) in result[..bytes_per_dim]
        .iter_mut()
        .zip(&a[start..end])
        .zip(&b[start..end])
        .rev()
    {
        let (sum, over_y) = x.overflowing_add(y);
        let (sum, over_carry) = sum.overflowing_add(u8::from(carry));
        *out = sum;
        carry = over_y || over_carry;
    }

    if carry {
        tracing::debug!(bytes_per_dim, dim, "packed addition overflow");
        return Err(ArithmeticError::Overflow { bytes_per_dim });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_add() {
        let mut result = [0u8; 1];
        add(1, 0, &[0x01], &[0x01], &mut result).unwrap();
        assert_eq!(result, [0x02]);
    }

    #[test]
    fn test_single_byte_add_overflow() {
        let mut result = [0u8; 1];
        assert_eq!(
            add(1, 0, &[0xff], &[0x01], &mut result),
            Err(ArithmeticError::Overflow { bytes_per_dim: 1 })
        );
    }

    #[test]
    fn test_single_byte_subtract() {
        let mut result = [0u8; 1];
        subtract(1, 0, &[0x05], &[0x03], &mut result).unwrap();
        assert_eq!(result, [0x02]);
    }

    #[test]
    fn test_single_byte_subtract_underflow() {
        let mut result = [0u8; 1];
        assert_eq!(
            subtract(1, 0, &[0x01], &[0xff], &mut result),
            Err(ArithmeticError::Underflow)
        );
    }

    #[test]
    fn test_carry_ripples_through_all_bytes() {
        let mut result = [0u8; 3];
        add(3, 0, &[0x00, 0xff, 0xff], &[0x00, 0x00, 0x01], &mut result).unwrap();
        assert_eq!(result, [0x01, 0x00, 0x00]);

        assert!(add(3, 0, &[0xff, 0xff, 0xff], &[0x00, 0x00, 0x01], &mut result).is_err());
    }

    #[test]
    fn test_borrow_ripples_through_all_bytes() {
        let mut result = [0u8; 3];
        subtract(3, 0, &[0x01, 0x00, 0x00], &[0x00, 0x00, 0x01], &mut result).unwrap();
        assert_eq!(result, [0x00, 0xff, 0xff]);

        assert!(subtract(3, 0, &[0x00, 0x00, 0x00], &[0x00, 0x00, 0x01], &mut result).is_err());
    }

    #[test]
    fn test_equal_operands_subtract_to_zero() {
        let mut result = [0xaau8; 2];
        subtract(2, 0, &[0x12, 0x34], &[0x12, 0x34], &mut result).unwrap();
        assert_eq!(result, [0x00, 0x00]);
    }

    #[test]
    fn test_selects_dimension_field() {
        let a = [0x00, 0x10, 0x00, 0x20, 0xff, 0xff];
        let b = [0xff, 0xff, 0x00, 0x05, 0x00, 0x00];
        let mut result = [0u8; 2];
        add(2, 1, &a, &b, &mut result).unwrap();
        assert_eq!(result, [0x00, 0x25]);
        subtract(2, 1, &a, &b, &mut result).unwrap();
        assert_eq!(result, [0x00, 0x1b]);
    }

    #[test]
    fn test_result_longer_than_field() {
        let mut result = [0xaau8; 4];
        add(2, 0, &[0x00, 0x01], &[0x00, 0x02], &mut result).unwrap();
        assert_eq!(result, [0x00, 0x03, 0xaa, 0xaa]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ArithmeticError::Underflow.to_string(), "a < b");
        assert_eq!(
            ArithmeticError::Overflow { bytes_per_dim: 8 }.to_string(),
            "a + b overflows bytes_per_dim=8"
        );
    }
}
