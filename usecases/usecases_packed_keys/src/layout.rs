//! Packed Key Layout
//!
//! [`PackedLayout`] names the shape of a packed key once, so callers do not
//! have to thread `bytes_per_dim` and dimension counts through every call.

use crate::arithmetic::{self, ArithmeticError};
use crate::containment;
use thiserror::Error;

/// Layout errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A layout needs at least one dimension
    #[error("packed layout needs at least one dimension")]
    ZeroDimensions,
    /// A dimension needs at least one byte
    #[error("packed layout needs at least one byte per dimension")]
    ZeroBytesPerDim,
    /// A buffer's length does not match the layout
    #[error("packed buffer is {actual} bytes, layout expects {expected}")]
    LengthMismatch {
        /// `num_dims * bytes_per_dim`
        expected: usize,
        /// Length of the offending buffer
        actual: usize,
    },
}

/// Shape of a packed key: `num_dims` fields of `bytes_per_dim` bytes each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedLayout {
    num_dims: usize,
    bytes_per_dim: usize,
}

impl PackedLayout {
    /// Create a layout
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroDimensions`] or
    /// [`LayoutError::ZeroBytesPerDim`] if either value is zero.
    pub fn new(num_dims: usize, bytes_per_dim: usize) -> Result<Self, LayoutError> {
        if num_dims == 0 {
            tracing::debug!(bytes_per_dim, "rejected packed layout without dimensions");
            return Err(LayoutError::ZeroDimensions);
        }
        if bytes_per_dim == 0 {
            tracing::debug!(num_dims, "rejected packed layout with zero-width dimensions");
            return Err(LayoutError::ZeroBytesPerDim);
        }
        Ok(Self {
            num_dims,
            bytes_per_dim,
        })
    }

    /// Number of dimensions
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    /// Bytes per dimension
    pub fn bytes_per_dim(&self) -> usize {
        self.bytes_per_dim
    }

    /// Total length of one packed key
    pub fn packed_len(&self) -> usize {
        self.num_dims * self.bytes_per_dim
    }

    /// Offset of dimension `dim`'s field
    pub fn offset(&self, dim: usize) -> usize {
        dim * self.bytes_per_dim
    }

    /// Dimension `dim`'s field of `packed`
    ///
    /// # Panics
    ///
    /// Panics if the field lies beyond the end of `packed`.
    pub fn field<'a>(&self, packed: &'a [u8], dim: usize) -> &'a [u8] {
        let start = self.offset(dim);
        &packed[start..start + self.bytes_per_dim]
    }

    /// Mutable access to dimension `dim`'s field of `packed`
    ///
    /// # Panics
    ///
    /// Panics if the field lies beyond the end of `packed`.
    pub fn field_mut<'a>(&self, packed: &'a mut [u8], dim: usize) -> &'a mut [u8] {
        let start = self.offset(dim);
        &mut packed[start..start + self.bytes_per_dim]
    }

    /// `result = a[dim] + b[dim]`, see [`arithmetic::add`]
    ///
    /// Buffer lengths are not checked against the layout.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` ends before field `dim`, or `result` is shorter
    /// than [`bytes_per_dim`](Self::bytes_per_dim).
    pub fn add(
        &self,
        dim: usize,
        a: &[u8],
        b: &[u8],
        result: &mut [u8],
    ) -> Result<(), ArithmeticError> {
        arithmetic::add(self.bytes_per_dim, dim, a, b, result)
    }

    /// `result = a[dim] - b[dim]`, see [`arithmetic::subtract`]
    ///
    /// # Panics
    ///
    /// Panics under the same buffer conditions as [`add`](Self::add).
    pub fn subtract(
        &self,
        dim: usize,
        a: &[u8],
        b: &[u8],
        result: &mut [u8],
    ) -> Result<(), ArithmeticError> {
        arithmetic::subtract(self.bytes_per_dim, dim, a, b, result)
    }

    /// Whether box A contains box B, see [`containment::contains`]
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LengthMismatch`] if any buffer is not exactly
    /// [`packed_len`](Self::packed_len) bytes.
    pub fn contains(
        &self,
        min_a: &[u8],
        max_a: &[u8],
        min_b: &[u8],
        max_b: &[u8],
    ) -> Result<bool, LayoutError> {
        for packed in [min_a, max_a, min_b, max_b] {
            self.check_len(packed)?;
        }
        Ok(containment::contains(self.bytes_per_dim, min_a, max_a, min_b, max_b))
    }

    fn check_len(&self, packed: &[u8]) -> Result<(), LayoutError> {
        let expected = self.packed_len();
        if packed.len() != expected {
            tracing::debug!(expected, actual = packed.len(), "packed buffer does not match layout");
            return Err(LayoutError::LengthMismatch {
                expected,
                actual: packed.len(),
            });
        }
        Ok(())
    }
}
