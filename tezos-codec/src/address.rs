use crate::array::{forge_array, LenWidth};
use crate::base58::decode_base58check;
use crate::error::{Error, Result};

fn curve_tag(field: &'static str, s: &str) -> Result<u8> {
    match &s[..3.min(s.len())] {
        "tz1" => Ok(0x00),
        "tz2" => Ok(0x01),
        "tz3" => Ok(0x02),
        _ => Err(Error::unknown_prefix(field, s)),
    }
}

/// Encodes an L1 account or contract address into its wire form.
///
/// If `tz_only`, `s` MUST be a `tz1|tz2|tz3` manager key hash: one byte of
/// curve tag followed by the 20-byte hash. Otherwise the implicit/originated
/// discriminant is chosen from the textual prefix: `tz1|tz2|tz3` get tag
/// `0x00` plus a curve tag byte, `KT1` gets tag `0x01` plus a trailing
/// padding byte, and `sr1`/`txr1` smart-rollup/rollup-transfer addresses
/// follow the same one-tag-byte-then-payload scheme.
pub fn forge_address(field: &'static str, s: &str, tz_only: bool) -> Result<Vec<u8>> {
    if tz_only {
        let curve = curve_tag(field, s)?;
        let hash = decode_base58check(field, s)?;
        let mut out = Vec::with_capacity(21);
        out.push(curve);
        out.extend_from_slice(&hash);
        return Ok(out);
    }

    if s.starts_with("tz1") || s.starts_with("tz2") || s.starts_with("tz3") {
        let curve = curve_tag(field, s)?;
        let hash = decode_base58check(field, s)?;
        let mut out = Vec::with_capacity(22);
        out.push(0x00);
        out.push(curve);
        out.extend_from_slice(&hash);
        Ok(out)
    } else if s.starts_with("KT1") {
        let hash = decode_base58check(field, s)?;
        let mut out = Vec::with_capacity(22);
        out.push(0x01);
        out.extend_from_slice(&hash);
        out.push(0x00);
        Ok(out)
    } else if s.starts_with("txr1") {
        let hash = decode_base58check(field, s)?;
        let mut out = Vec::with_capacity(21);
        out.push(0x02);
        out.extend_from_slice(&hash);
        Ok(out)
    } else if s.starts_with("sr1") {
        let hash = decode_base58check(field, s)?;
        let mut out = Vec::with_capacity(21);
        out.push(0x03);
        out.extend_from_slice(&hash);
        Ok(out)
    } else {
        Err(Error::unknown_prefix(field, s))
    }
}

/// Encodes a `edpk|sppk|p2pk` public key: one byte of curve tag followed by
/// the 32 or 33 bytes of key material stripped from the base58check string.
pub fn forge_public_key(field: &'static str, s: &str) -> Result<Vec<u8>> {
    let curve = if s.starts_with("edpk") {
        0x00
    } else if s.starts_with("sppk") {
        0x01
    } else if s.starts_with("p2pk") {
        0x02
    } else {
        return Err(Error::unknown_prefix(field, s));
    };

    let key = decode_base58check(field, s)?;
    let mut out = Vec::with_capacity(1 + key.len());
    out.push(curve);
    out.extend_from_slice(&key);
    Ok(out)
}

const RESERVED_ENTRYPOINTS: &[(&str, u8)] = &[
    ("default", 0x00),
    ("root", 0x01),
    ("do", 0x02),
    ("set_delegate", 0x03),
    ("remove_delegate", 0x04),
    ("deposit", 0x05),
];

/// Encodes a contract entrypoint name. The six reserved names compress to a
/// single byte; any other name is `0xff` followed by a one-byte-length-
/// prefixed UTF-8 string.
pub fn forge_entrypoint(field: &'static str, name: &str) -> Result<Vec<u8>> {
    if let Some((_, tag)) = RESERVED_ENTRYPOINTS.iter().find(|(n, _)| *n == name) {
        return Ok(vec![*tag]);
    }

    if name.is_empty() || name.len() > 31 || !name.is_ascii() {
        return Err(Error::invalid_argument(field, name));
    }

    let mut out = vec![0xff];
    out.extend(forge_array(field, name.as_bytes(), LenWidth::One)?);
    Ok(out)
}
