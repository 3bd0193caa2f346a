/// Encodes a boolean as `0xff` (true) or `0x00` (false).
pub fn forge_bool(b: bool) -> u8 {
    if b {
        0xff
    } else {
        0x00
    }
}
