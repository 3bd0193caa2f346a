use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Encodes an arbitrary-precision signed integer as Tezos's variable-length
/// signed scheme: the first byte carries a sign bit (bit 6) and 6 payload
/// bits, continuation (bit 7) as in [`crate::nat::forge_nat`]; subsequent
/// bytes carry 7 payload bits plus continuation. Zero is a single `0x00`.
pub fn forge_int(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return vec![0x00];
    }

    let negative = n.is_negative();
    let mut magnitude = n.abs();

    let mut out = Vec::new();

    let mut first =
        (&magnitude & BigInt::from(0x3f)).to_u8().unwrap_or(0) | if negative { 0x40 } else { 0 };
    magnitude >>= 6;
    if !magnitude.is_zero() {
        first |= 0x80;
    }
    out.push(first);

    while !magnitude.is_zero() {
        let mut byte = (&magnitude & BigInt::from(0x7f)).to_u8().unwrap_or(0);
        magnitude >>= 7;
        if !magnitude.is_zero() {
            byte |= 0x80;
        }
        out.push(byte);
    }

    out
}

/// Decodes a [`forge_int`] byte stream, returning the value and the number
/// of bytes consumed. Used by round-trip property tests.
pub fn parse_int(bytes: &[u8]) -> Result<(BigInt, usize)> {
    let first = *bytes
        .first()
        .ok_or_else(|| Error::invalid_argument("int", "empty int stream"))?;

    let negative = first & 0x40 != 0;
    let mut magnitude = BigInt::from(first & 0x3f);
    let mut shift = 6u32;
    let mut consumed = 1;

    if first & 0x80 != 0 {
        for &byte in &bytes[1..] {
            consumed += 1;
            magnitude |= BigInt::from(byte & 0x7f) << shift;
            shift += 7;
            if byte & 0x80 == 0 {
                break;
            }
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    Ok((value, consumed))
}

/// Big-endian two's complement `i16`. Overflow fails with `InvalidArgument`.
pub fn forge_int16(field: &'static str, n: &BigInt) -> Result<[u8; 2]> {
    let v = n
        .to_i64()
        .and_then(|v| i16::try_from(v).ok())
        .ok_or_else(|| Error::invalid_argument(field, n))?;
    Ok(v.to_be_bytes())
}

/// Big-endian two's complement `i32`. Overflow fails with `InvalidArgument`.
pub fn forge_int32(field: &'static str, n: &BigInt) -> Result<[u8; 4]> {
    let v = n
        .to_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| Error::invalid_argument(field, n))?;
    Ok(v.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn concrete_scenarios() {
        assert_eq!(forge_int(&int(0)), hex::decode("00").unwrap());
        assert_eq!(forge_int(&int(-1)), hex::decode("41").unwrap());
    }

    #[test]
    fn int32_scenarios() {
        assert_eq!(
            forge_int32("level", &int(1)).unwrap().to_vec(),
            hex::decode("00000001").unwrap()
        );
    }

    #[test]
    fn int16_overflow_is_invalid_argument() {
        let err = forge_int16("slot", &int(70_000)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "slot", .. }));
    }

    proptest::proptest! {
        #[test]
        fn int_round_trips(n in proptest::num::i64::ANY) {
            let value = BigInt::from(n);
            let encoded = forge_int(&value);
            let (decoded, consumed) = parse_int(&encoded).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(consumed, encoded.len());
        }
    }
}
