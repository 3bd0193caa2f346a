use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Encodes a non-negative arbitrary-precision integer as a variable-length
/// little-endian base-128 stream: 7 payload bits per byte, continuation bit
/// (the MSB) set on every byte except the last.
///
/// `n` MUST be `>= 0`. The encoding is canonical — no redundant leading
/// zero byte is ever emitted, so `forge_nat` is injective.
pub fn forge_nat(field: &'static str, n: &BigInt) -> Result<Vec<u8>> {
    if n.is_negative() {
        return Err(Error::invalid_argument(field, n));
    }

    let mut out = Vec::new();
    let mut value = n.clone();
    let mut first = true;

    while first || !value.is_zero() {
        first = false;
        let mut byte = (&value & BigInt::from(0x7f)).to_u8().unwrap_or(0);
        value >>= 7;
        if !value.is_zero() {
            byte |= 0x80;
        }
        out.push(byte);
    }

    Ok(out)
}

/// Decodes a canonical `forge_nat` byte stream back into its value, also
/// returning the number of bytes consumed. Used for round-trip property
/// tests, not by the forger itself.
pub fn parse_nat(bytes: &[u8]) -> Result<(BigInt, usize)> {
    let mut value = BigInt::zero();
    let mut shift = 0u32;
    let mut consumed = 0;

    for &byte in bytes {
        consumed += 1;
        value |= BigInt::from(byte & 0x7f) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            return Ok((value, consumed));
        }
    }

    Err(Error::invalid_argument("nat", "truncated nat stream"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn concrete_scenarios() {
        assert_eq!(forge_nat("n", &nat(0)).unwrap(), hex::decode("00").unwrap());
        assert_eq!(forge_nat("n", &nat(127)).unwrap(), hex::decode("7f").unwrap());
        assert_eq!(forge_nat("n", &nat(128)).unwrap(), hex::decode("8001").unwrap());
        assert_eq!(
            forge_nat("n", &nat(16384)).unwrap(),
            hex::decode("808001").unwrap()
        );
    }

    #[test]
    fn negative_is_invalid_argument() {
        let err = forge_nat("fee", &nat(-1)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "fee", .. }));
    }

    #[test]
    fn round_trips_large_values() {
        let n = BigInt::from(u128::MAX) * BigInt::from(1_000_000u64);
        let encoded = forge_nat("n", &n).unwrap();
        let (decoded, consumed) = parse_nat(&encoded).unwrap();
        assert_eq!(decoded, n);
        assert_eq!(consumed, encoded.len());
    }

    proptest::proptest! {
        #[test]
        fn nat_round_trip_is_canonical(bytes in proptest::collection::vec(0u8..=255, 0..16)) {
            let n = BigInt::from_bytes_be(num_bigint::Sign::Plus, &bytes);
            let encoded = forge_nat("n", &n).unwrap();
            let (decoded, consumed) = parse_nat(&encoded).unwrap();
            prop_assert_eq!(decoded, n);
            prop_assert_eq!(consumed, encoded.len());
            if let Some((last, rest)) = encoded.split_last() {
                prop_assert_eq!(last & 0x80, 0);
                for b in rest {
                    prop_assert_eq!(b & 0x80, 0x80);
                }
            }
        }
    }
}
