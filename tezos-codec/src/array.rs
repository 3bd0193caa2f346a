use crate::error::{Error, Result};

/// The width of an `array`'s big-endian length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenWidth {
    One,
    Four,
}

impl LenWidth {
    fn bytes(self) -> usize {
        match self {
            LenWidth::One => 1,
            LenWidth::Four => 4,
        }
    }

    fn max_len(self) -> usize {
        match self {
            LenWidth::One => u8::MAX as usize,
            LenWidth::Four => u32::MAX as usize,
        }
    }
}

/// Emits a big-endian unsigned length prefix of the given width followed by
/// `payload` verbatim. A payload longer than the prefix can address fails
/// with `OverflowLength`.
pub fn forge_array(field: &'static str, payload: &[u8], width: LenWidth) -> Result<Vec<u8>> {
    if payload.len() > width.max_len() {
        return Err(Error::OverflowLength {
            field,
            len_bytes: width.bytes() as u8,
            len: payload.len(),
        });
    }

    let mut out = Vec::with_capacity(width.bytes() + payload.len());
    let encoded = (payload.len() as u64).to_be_bytes();
    out.extend_from_slice(&encoded[encoded.len() - width.bytes()..]);
    out.extend_from_slice(payload);
    Ok(out)
}
