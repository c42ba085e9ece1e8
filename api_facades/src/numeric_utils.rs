//! Numeric Utilities Facade
//!
//! Flat surface over the order-preserving codecs of the inner layers.
//!
//! | Group | Functions |
//! |---|---|
//! | Sortable float bits | [`double_to_sortable_long`], [`sortable_long_to_double`], [`float_to_sortable_int`], [`sortable_int_to_float`], [`sortable_double_bits`], [`sortable_float_bits`] |
//! | Integer codecs | [`int_to_bytes`], [`bytes_to_int`], [`long_to_bytes`], [`bytes_to_long`] and their `_direct` forms |
//! | Float codecs | [`double_to_sortable_bytes`], [`sortable_bytes_to_double`], [`float_to_sortable_bytes`], [`sortable_bytes_to_float`] |
//! | Big integers | [`big_int_to_bytes`], [`bytes_to_big_int`], [`sortable_big_int_bytes`], [`BignumCodec`] |
//! | Packed keys | [`add`], [`subtract`], [`contains`], [`compare_unsigned`], [`PackedLayout`] |
//!
//! Nothing here adds behaviour; see the owning crates for details.

pub use entities_data_handling::{
    bytes_to_int, bytes_to_int_direct, bytes_to_long, bytes_to_long_direct, compare_unsigned,
    double_to_sortable_bytes, double_to_sortable_long, flip_sign_bit, float_to_sortable_bytes,
    float_to_sortable_int, int_to_bytes, int_to_bytes_direct, long_to_bytes,
    long_to_bytes_direct, sortable_bits, sortable_bytes_to_double, sortable_bytes_to_float,
    sortable_double_bits, sortable_float_bits, sortable_int_to_float, sortable_long_to_double,
    INT_BYTES, LONG_BYTES,
};
pub use infrastructure_bignum_encoding::{
    big_int_to_bytes, bytes_to_big_int, sortable_big_int_bytes, BignumCodec, EncodeError,
    EncodeResult,
};
pub use usecases_packed_keys::{add, contains, subtract, ArithmeticError, LayoutError, PackedLayout};

#[cfg(test)]
mod tests {
    use super::*;
    use entities_utilities::BigNumber;

    #[test]
    fn test_every_layer_reachable() {
        let mut key = [0u8; INT_BYTES + LONG_BYTES];
        int_to_bytes(-7, &mut key, 0);
        big_int_to_bytes(&BigNumber::from_i64(-7), LONG_BYTES, &mut key, INT_BYTES).unwrap();

        assert_eq!(bytes_to_int(&key, 0), -7);
        assert_eq!(bytes_to_long(&key, INT_BYTES), -7);
        assert!(contains(INT_BYTES + LONG_BYTES, &key, &key, &key, &key));
    }
}
