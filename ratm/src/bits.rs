//! Bounds-checked big-endian field reads.
//!
//! The read functions follow the style of the `byteorder` crate, except that
//! they take an absolute offset and report a `TruncatedBuffer` error instead
//! of panicking when the field does not fit.

use byteorder::{BigEndian, ByteOrder};

use crate::Error;

/// Make sure that `len` bytes starting at `offset` are present in `buf`.
#[inline]
pub fn check_len(buf: &[u8], offset: usize, len: usize) -> Result<(), Error> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(()),
        _ => Err(Error::truncated(
            offset,
            len,
            buf.len().saturating_sub(offset),
        )),
    }
}

/// Borrow `len` bytes starting at `offset`.
#[inline]
pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], Error> {
    check_len(buf, offset, len)?;
    Ok(&buf[offset..offset + len])
}

/// Read 1 byte at `offset`.
#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, Error> {
    check_len(buf, offset, 1)?;
    Ok(buf[offset])
}

/// Read 2 big-endian bytes at `offset`.
#[inline]
pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, Error> {
    check_len(buf, offset, 2)?;
    Ok(BigEndian::read_u16(&buf[offset..]))
}

/// Read 4 big-endian bytes at `offset`.
#[inline]
pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, Error> {
    check_len(buf, offset, 4)?;
    Ok(BigEndian::read_u32(&buf[offset..]))
}

/// Extract the bits selected by `mask`, shifted down to bit 0.
#[inline]
pub fn bit_field(value: u64, mask: u64) -> u64 {
    if mask == 0 {
        return 0;
    }
    (value & mask) >> mask.trailing_zeros()
}
