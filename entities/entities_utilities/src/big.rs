//! Big Number Operations
//!
//! Provides arbitrary precision integers for the fixed-width big-integer
//! codec.
//!
//! This module uses the `malachite` crate for arithmetic. The codec itself
//! never touches malachite types: it works on the minimal two's-complement
//! big-endian byte form produced by [`BigNumber::to_signed_bytes_be`] and read
//! back by [`BigNumber::from_signed_bytes_be`].

use malachite::Integer;
use std::fmt;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Check if the number is negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Minimal two's-complement representation, most significant byte first.
    ///
    /// A leading `0x00` or `0xff` is present only when the sign would
    /// otherwise be ambiguous, so `128` becomes `[0x00, 0x80]` while `-128`
    /// is `[0x80]`. Zero is `[0x00]`; the result is never empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_utilities::BigNumber;
    ///
    /// assert_eq!(BigNumber::from_i64(255).to_signed_bytes_be(), vec![0x00, 0xff]);
    /// assert_eq!(BigNumber::from_i64(-1).to_signed_bytes_be(), vec![0xff]);
    /// assert_eq!(BigNumber::from_i64(-129).to_signed_bytes_be(), vec![0xff, 0x7f]);
    /// ```
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        // Little-endian while trimming
        let mut bytes: Vec<u8> = self
            .value
            .to_twos_complement_limbs_asc()
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();

        // Limbs are sign-extended to a whole limb; drop the top bytes that
        // only repeat the sign of the byte below them.
        while let [.., next, top] = bytes[..] {
            let redundant =
                (top == 0x00 && next & 0x80 == 0) || (top == 0xff && next & 0x80 != 0);
            if !redundant {
                break;
            }
            bytes.pop();
        }
        if bytes.is_empty() {
            bytes.push(0x00);
        }

        bytes.reverse();
        bytes
    }

    /// Reads a two's-complement big-endian byte sequence of any length.
    ///
    /// The top bit of the first byte is the sign. Redundant sign-extension
    /// bytes are accepted, so this is the inverse of both
    /// [`to_signed_bytes_be`](Self::to_signed_bytes_be) and of any
    /// sign-extended padding of it. An empty slice reads as zero.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Self {
        let mut value = Integer::from(0);
        for &byte in bytes {
            value <<= 8u64;
            value += Integer::from(byte);
        }
        if bytes.first().map_or(false, |b| b & 0x80 != 0) {
            value -= Integer::from(1) << (8 * bytes.len() as u64);
        }
        Self { value }
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<i128> for BigNumber {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}
