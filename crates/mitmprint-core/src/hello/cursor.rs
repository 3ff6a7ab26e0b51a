/// Bounds-checked reader over a borrowed byte slice.
///
/// Every read either succeeds in full or returns `None` without consuming
/// anything, except the `*_clamped` / `read_vec_*` readers which never read
/// past the end of the slice and hand back whatever is left when a declared
/// length overruns it.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let (&first, rest) = self.buf.split_first()?;
        self.buf = rest;
        Some(first)
    }

    pub fn read_u16(&mut self) -> Option<u16> {
        let bytes = self.take(2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u24(&mut self) -> Option<u32> {
        let bytes = self.take(3)?;
        Some(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Take exactly `n` bytes, or nothing.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.buf.len() {
            return None;
        }
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Some(head)
    }

    /// Take up to `n` bytes. A short read exhausts the cursor.
    pub fn take_clamped(&mut self, n: usize) -> &'a [u8] {
        let (head, rest) = self.buf.split_at(n.min(self.buf.len()));
        self.buf = rest;
        head
    }

    /// `opaque<0..2^8-1>`: 1-byte length prefix, body clamped to what remains.
    pub fn read_vec_u8(&mut self) -> Option<&'a [u8]> {
        let len = self.read_u8()? as usize;
        Some(self.take_clamped(len))
    }

    /// `opaque<0..2^16-1>`: 2-byte length prefix, body clamped to what remains.
    pub fn read_vec_u16(&mut self) -> Option<&'a [u8]> {
        let len = self.read_u16()? as usize;
        Some(self.take_clamped(len))
    }
}

/// Decode big-endian 16-bit values. A trailing odd byte is dropped.
pub fn be_u16_values(bytes: &[u8]) -> impl Iterator<Item = u16> + '_ {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
}
