use bytes::Buf;

use crate::bits;
use crate::Error;

/// A read cursor over a byte slice that remembers where it started.
///
/// Every read is bounds-checked and reports the absolute offset of the field
/// on failure, so decoders can build byte-range provenance while walking a
/// frame.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The current absolute offset.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Read one byte and advance.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let v = bits::read_u8(self.buf, self.pos)?;
        self.pos += 1;
        Ok(v)
    }

    /// Read a big-endian `u16` and advance.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let v = bits::read_u16(self.buf, self.pos)?;
        self.pos += 2;
        Ok(v)
    }

    /// Read a big-endian `u32` and advance.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let v = bits::read_u32(self.buf, self.pos)?;
        self.pos += 4;
        Ok(v)
    }

    /// Borrow the next `len` bytes and advance.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let v = bits::slice(self.buf, self.pos, len)?;
        self.pos += len;
        Ok(v)
    }

    /// Skip `len` reserved bytes.
    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        bits::check_len(self.buf, self.pos, len)?;
        self.pos += len;
        Ok(())
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}
