//! Integration tests for infrastructure_bignum_encoding crate
//!
//! These tests verify exact round trips at the edges of each width, the
//! rejection of values that do not fit, and that encoded fields sort in
//! numeric order.

use entities_data_handling::{int_to_bytes, long_to_bytes};
use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::*;
use proptest::prelude::*;

#[test]
fn test_four_byte_extremes_round_trip() {
    let codec = BignumCodec::new(4);
    for value in [i32::MIN as i64, i32::MAX as i64] {
        let big = BigNumber::from_i64(value);
        let encoded = codec.encode(&big).unwrap();
        assert_eq!(encoded.len(), 4);
        assert_eq!(codec.decode(&encoded, 0), big);
    }
}

#[test]
fn test_four_byte_overflow_rejected() {
    let codec = BignumCodec::new(4);
    let result = codec.encode(&BigNumber::from_i64(4294967296));
    assert!(matches!(result, Err(EncodeError::ValueTooLarge { width: 4, .. })));

    assert!(codec.encode(&BigNumber::from_i64(i32::MAX as i64 + 1)).is_err());
    assert!(codec.encode(&BigNumber::from_i64(i32::MIN as i64 - 1)).is_err());
}

#[test]
fn test_matches_int_codec_layout() {
    // A 4-byte bignum field is byte-identical to the 32-bit codec
    let codec = BignumCodec::new(4);
    for value in [i32::MIN, -65536, -1, 0, 1, 65535, i32::MAX] {
        let mut expected = [0u8; 4];
        int_to_bytes(value, &mut expected, 0);
        assert_eq!(codec.encode(&BigNumber::from_i32(value)).unwrap(), expected.to_vec());
    }
}

#[test]
fn test_matches_long_codec_layout() {
    let codec = BignumCodec::new(8);
    for value in [i64::MIN, -1, 0, i64::MAX] {
        let mut expected = [0u8; 8];
        long_to_bytes(value, &mut expected, 0);
        assert_eq!(codec.encode(&BigNumber::from_i64(value)).unwrap(), expected.to_vec());
    }
}

#[test]
fn test_sixteen_byte_field() {
    let codec = BignumCodec::new(16);
    let values = [
        BigNumber::from_i128(i128::MIN),
        BigNumber::from_i128(-1),
        BigNumber::from_u64(u64::MAX),
        BigNumber::from_i128(i128::MAX),
    ];
    let encoded: Vec<Vec<u8>> = values.iter().map(|v| codec.encode(v).unwrap()).collect();
    for (value, field) in values.iter().zip(&encoded) {
        assert_eq!(&codec.decode(field, 0), value);
    }
    assert!(encoded.windows(2).all(|pair| pair[0] < pair[1]));

    // 2^127, one past i128::MAX
    let mut too_wide = vec![0x00, 0x80];
    too_wide.extend_from_slice(&[0x00; 15]);
    let too_wide = BigNumber::from_signed_bytes_be(&too_wide);
    assert!(codec.encode(&too_wide).is_err());
}

#[test]
fn test_packed_bignum_fields() {
    let codec = BignumCodec::new(5);
    let mut packed = vec![0u8; 10];
    codec.encode_into(&BigNumber::from_i64(-70000), &mut packed, 0).unwrap();
    codec.encode_into(&BigNumber::from_i64(1 << 38), &mut packed, 5).unwrap();
    assert_eq!(codec.decode(&packed, 0).to_i64(), Some(-70000));
    assert_eq!(codec.decode(&packed, 5).to_i64(), Some(1 << 38));
}

proptest! {
    #[test]
    fn test_round_trip_any_width(value in any::<i64>(), extra in 0usize..8) {
        let big = BigNumber::from_i64(value);
        let width = big.to_signed_bytes_be().len() + extra;
        let mut field = vec![0u8; width];
        big_int_to_bytes(&big, width, &mut field, 0).unwrap();
        prop_assert_eq!(bytes_to_big_int(&field, 0, width), big);
    }

    #[test]
    fn test_order_preserved(a in any::<i64>(), b in any::<i64>(), width in 8usize..12) {
        let codec = BignumCodec::new(width);
        let ea = codec.encode(&BigNumber::from_i64(a)).unwrap();
        let eb = codec.encode(&BigNumber::from_i64(b)).unwrap();
        prop_assert_eq!(ea.cmp(&eb), a.cmp(&b));
    }

    #[test]
    fn test_rejects_values_outside_width(value in any::<i64>()) {
        let big = BigNumber::from_i64(value);
        let needed = big.to_signed_bytes_be().len();
        let mut field = vec![0u8; needed];
        prop_assert!(big_int_to_bytes(&big, needed - 1, &mut field, 0).is_err());
    }
}
