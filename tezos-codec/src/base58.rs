use base58::{FromBase58, ToBase58};
use cryptoxide::{digest::Digest, sha2::Sha256};

use crate::error::{Error, Result};

/// An entry in the base58check prefix table: the binary prefix bytes
/// prepended before the payload, and the expected payload length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixEntry {
    pub textual: &'static str,
    pub binary: &'static [u8],
    pub payload_len: usize,
}

/// The base58check prefix table, covering the identifier families the Tezos
/// protocol registers via `Base58.register_encoding`: `tz1 tz2 tz3 KT1 edpk
/// sppk p2pk edsig spsig p2sig sig B o sr1 src1 txr1 scr1`.
///
/// The exact binary prefix bytes are protocol constants taken from the
/// node's base58 prefix registry; the smart-rollup related prefixes in
/// particular are protocol-versioned and should be validated against a
/// current protocol reference before relying on them beyond this crate's
/// own fixtures.
pub const PREFIX_TABLE: &[PrefixEntry] = &[
    PrefixEntry { textual: "tz1", binary: &[6, 161, 159], payload_len: 20 },
    PrefixEntry { textual: "tz2", binary: &[6, 161, 161], payload_len: 20 },
    PrefixEntry { textual: "tz3", binary: &[6, 161, 164], payload_len: 20 },
    PrefixEntry { textual: "tz4", binary: &[6, 161, 166], payload_len: 20 },
    PrefixEntry { textual: "KT1", binary: &[2, 90, 121], payload_len: 20 },
    PrefixEntry { textual: "edpk", binary: &[13, 15, 37, 217], payload_len: 32 },
    PrefixEntry { textual: "sppk", binary: &[3, 254, 226, 86], payload_len: 33 },
    PrefixEntry { textual: "p2pk", binary: &[3, 178, 139, 127], payload_len: 33 },
    PrefixEntry { textual: "edsig", binary: &[9, 245, 205, 134, 18], payload_len: 64 },
    PrefixEntry { textual: "spsig", binary: &[13, 115, 101, 19, 63], payload_len: 64 },
    PrefixEntry { textual: "p2sig", binary: &[54, 240, 44, 52], payload_len: 64 },
    PrefixEntry { textual: "sig", binary: &[4, 130, 43], payload_len: 64 },
    PrefixEntry { textual: "B", binary: &[1, 52], payload_len: 32 },
    PrefixEntry { textual: "o", binary: &[5, 116], payload_len: 32 },
    PrefixEntry { textual: "sr1", binary: &[6, 124, 53], payload_len: 20 },
    PrefixEntry { textual: "src1", binary: &[17, 165, 235, 102], payload_len: 32 },
    PrefixEntry { textual: "txr1", binary: &[1, 128, 120, 31], payload_len: 20 },
    PrefixEntry { textual: "scr1", binary: &[6, 124, 53], payload_len: 20 },
];

fn find_prefix(bytes: &[u8]) -> Option<&'static PrefixEntry> {
    PREFIX_TABLE
        .iter()
        .filter(|entry| bytes.starts_with(entry.binary))
        .max_by_key(|entry| entry.binary.len())
}

fn double_sha256(bytes: &[u8]) -> [u8; 32] {
    let mut first = [0u8; 32];
    let mut hasher = Sha256::new();
    hasher.input(bytes);
    hasher.result(&mut first);

    let mut second = [0u8; 32];
    let mut hasher = Sha256::new();
    hasher.input(&first);
    hasher.result(&mut second);

    second
}

/// Decodes a base58check string: verifies the 4-byte trailing checksum
/// (double-SHA-256, first 4 bytes), strips the known binary prefix, and
/// returns the remaining payload bytes.
pub fn decode_base58check(field: &'static str, s: &str) -> Result<Vec<u8>> {
    let raw = s
        .from_base58()
        .map_err(|_| Error::unknown_prefix(field, s))?;

    if raw.len() < 4 {
        return Err(Error::invalid_argument(field, s));
    }

    let (body, checksum) = raw.split_at(raw.len() - 4);
    let expected = &double_sha256(body)[..4];
    if checksum != expected {
        return Err(Error::invalid_checksum(field, s));
    }

    let entry = find_prefix(body).ok_or_else(|| Error::unknown_prefix(field, s))?;
    let payload = &body[entry.binary.len()..];

    if payload.len() != entry.payload_len {
        return Err(Error::invalid_argument(field, s));
    }

    Ok(payload.to_vec())
}

/// Encodes `payload` under the given textual prefix into a base58check
/// string. The inverse of [`decode_base58check`]; used by fixtures and by
/// callers that need to render forged hashes back to a human-readable form.
pub fn encode_base58check(textual_prefix: &str, payload: &[u8]) -> Result<String> {
    let entry = PREFIX_TABLE
        .iter()
        .find(|entry| entry.textual == textual_prefix)
        .ok_or_else(|| Error::unknown_prefix("prefix", textual_prefix))?;

    if payload.len() != entry.payload_len {
        return Err(Error::invalid_argument("prefix", textual_prefix));
    }

    let mut body = Vec::with_capacity(entry.binary.len() + payload.len() + 4);
    body.extend_from_slice(entry.binary);
    body.extend_from_slice(payload);
    let checksum = double_sha256(&body);
    body.extend_from_slice(&checksum[..4]);

    Ok(body.to_base58())
}
