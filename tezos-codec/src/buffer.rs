use crate::error::Error;

/// A growable, append-only byte buffer threaded through the encoders.
///
/// Sub-encodings whose length must be prefixed reserve the prefix bytes,
/// append the payload, then back-patch the prefix with the measured length
/// rather than building an intermediate `Vec` per field.
#[derive(Debug, Default, Clone)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.0.push(byte);
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reserves `width` bytes of zeroed length prefix, runs `f` to append the
    /// payload, then back-patches the prefix with the big-endian payload
    /// length. `width` MUST be 1 or 4; `field` names the logical field this
    /// length prefix belongs to, for `OverflowLength` diagnostics.
    pub fn with_len_prefix<F>(
        &mut self,
        field: &'static str,
        width: u8,
        f: F,
    ) -> Result<(), Error>
    where
        F: FnOnce(&mut Buffer) -> Result<(), Error>,
    {
        let prefix_at = self.0.len();
        self.0.extend(std::iter::repeat(0u8).take(width as usize));
        let before = self.0.len();
        f(self)?;
        let payload_len = self.0.len() - before;

        let max = if width == 1 {
            u8::MAX as usize
        } else {
            u32::MAX as usize
        };
        if payload_len > max {
            return Err(Error::OverflowLength {
                field,
                len_bytes: width,
                len: payload_len,
            });
        }

        let encoded = (payload_len as u64).to_be_bytes();
        let start = encoded.len() - width as usize;
        self.0[prefix_at..prefix_at + width as usize].copy_from_slice(&encoded[start..]);
        Ok(())
    }

    /// Reserves `width` zeroed length-prefix bytes and returns their
    /// position, to be filled in later by [`Buffer::patch_len_prefix`].
    ///
    /// Paired with an explicit work-stack (rather than native recursion)
    /// this lets a recursive structure of unbounded, caller-controlled
    /// depth be encoded without growing the Rust call stack per level.
    pub fn reserve_len_prefix(&mut self, width: u8) -> usize {
        let pos = self.0.len();
        self.0.extend(std::iter::repeat(0u8).take(width as usize));
        pos
    }

    /// Back-patches the length prefix reserved at `pos` with the number of
    /// bytes written since, once the caller knows the sub-encoding is
    /// complete.
    pub fn patch_len_prefix(&mut self, field: &'static str, pos: usize, width: u8) -> Result<(), Error> {
        let payload_len = self.0.len() - pos - width as usize;

        let max = if width == 1 {
            u8::MAX as usize
        } else {
            u32::MAX as usize
        };
        if payload_len > max {
            return Err(Error::OverflowLength {
                field,
                len_bytes: width,
                len: payload_len,
            });
        }

        let encoded = (payload_len as u64).to_be_bytes();
        self.0[pos..pos + width as usize].copy_from_slice(&encoded[encoded.len() - width as usize..]);
        Ok(())
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buf: Buffer) -> Self {
        buf.0
    }
}
