//! AAL5 trailer recovery for reassembled PDUs.
//!
//! A reassembled AAL5 CPCS-PDU ends with an 8-byte trailer:
//!
//! ```text
//! | payload (length bytes) | padding | UU | CPI | length (2) | CRC-32 (4) |
//! ```
//!
//! Some capture sources hand over the PDU with the trailer already removed
//! and report its contents in the pseudo-header instead. `Aal5Pdu::parse`
//! handles both cases and yields the payload to pass up the stack.

use core::ops::Range;

use crate::bits;
use crate::pseudo::AtmPseudoHeader;
use crate::tree::Node;
use crate::Error;

/// A constant that defines the fixed byte length of the AAL5 trailer.
pub const AAL5_TRAILER_LEN: usize = 8;
/// Payload bytes carried by each cell of an AAL5 PDU.
pub const AAL5_CELL_PAYLOAD_LEN: usize = 48;

/// The AAL5 CPCS-PDU trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aal5Trailer {
    /// CPCS user-to-user indication.
    pub uu: u8,
    /// Common part indicator.
    pub cpi: u8,
    /// Length of the payload in bytes.
    pub length: u16,
    /// CRC-32 over the whole PDU.
    pub checksum: u32,
}

impl Aal5Trailer {
    /// Read the trailer from the last 8 bytes of `buf`.
    pub fn parse(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < AAL5_TRAILER_LEN {
            return Err(Error::truncated(0, AAL5_TRAILER_LEN, buf.len()));
        }
        let start = buf.len() - AAL5_TRAILER_LEN;
        Ok(Aal5Trailer {
            uu: bits::read_u8(buf, start)?,
            cpi: bits::read_u8(buf, start + 1)?,
            length: bits::read_u16(buf, start + 2)?,
            checksum: bits::read_u32(buf, start + 4)?,
        })
    }

    /// Take the trailer fields reported by the capture source.
    pub fn from_pseudo_header(ph: &AtmPseudoHeader) -> Self {
        Aal5Trailer {
            uu: (ph.aal5t_u2u >> 8) as u8,
            cpi: (ph.aal5t_u2u & 0xff) as u8,
            length: ph.aal5t_len,
            checksum: ph.aal5t_chksum,
        }
    }
}

/// Where the trailer of an `Aal5Pdu` was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailerSource {
    /// Read from the captured bytes, the trailer starts at the given offset.
    Captured(usize),
    /// Copied from the pseudo-header, the bytes are not in the capture.
    PseudoHeader,
}

/// Number of cells implied by the on-the-wire length, if it is a whole number of cells.
pub fn inferred_cell_count(reported_len: usize) -> Option<u32> {
    if reported_len % AAL5_CELL_PAYLOAD_LEN == 0 {
        Some((reported_len / AAL5_CELL_PAYLOAD_LEN) as u32)
    } else {
        None
    }
}

/// A reassembled PDU with its trailer separated from the payload.
#[derive(Debug, Clone)]
pub struct Aal5Pdu<'a> {
    cells: Option<u32>,
    trailer: Option<(Aal5Trailer, TrailerSource)>,
    padding: Option<Range<usize>>,
    payload: &'a [u8],
    error: Option<Error>,
}

impl<'a> Aal5Pdu<'a> {
    /// Separate trailer and payload.
    ///
    /// Only a PDU too short for its trailer fails. A trailer length beyond
    /// the PDU keeps the trailer and cell count and is reported by `error`.
    ///
    /// `data` is the captured PDU and `reported_len` its length on the wire.
    /// With `truncated` set the capture source removed the trailer and the
    /// pseudo-header is consulted instead; a zero cell count there means the
    /// trailer is unknown. Otherwise the trailer is read from the end of
    /// `data`, unless the snapshot length cut the PDU short, in which case
    /// the whole capture is the payload and no trailer is reported.
    pub fn parse(
        data: &'a [u8],
        reported_len: usize,
        pseudo: &AtmPseudoHeader,
        truncated: bool,
    ) -> Result<Self, Error> {
        if truncated {
            if pseudo.cells == 0 {
                return Ok(Aal5Pdu {
                    cells: None,
                    trailer: None,
                    padding: None,
                    payload: data,
                    error: None,
                });
            }
            return Ok(Aal5Pdu {
                cells: Some(pseudo.cells),
                trailer: Some((
                    Aal5Trailer::from_pseudo_header(pseudo),
                    TrailerSource::PseudoHeader,
                )),
                padding: None,
                payload: data,
                error: None,
            });
        }

        let cells = inferred_cell_count(reported_len);
        let length = data.len();
        if length < reported_len {
            log::debug!(
                "AAL5 trailer cut off by the snapshot length: {} of {} bytes captured",
                length,
                reported_len
            );
            return Ok(Aal5Pdu {
                cells,
                trailer: None,
                padding: None,
                payload: data,
                error: None,
            });
        }

        let trailer = Aal5Trailer::parse(data)?;
        let trailer_start = length - AAL5_TRAILER_LEN;
        let aal5_length = trailer.length as usize;
        if aal5_length > trailer_start {
            let err = Error::malformed(
                "AAL5 payload",
                trailer_start + 2,
                aal5_length,
                trailer_start,
            );
            log::debug!("AAL5 payload not passed on: {}", err);
            return Ok(Aal5Pdu {
                cells,
                trailer: Some((trailer, TrailerSource::Captured(trailer_start))),
                padding: None,
                payload: &data[..0],
                error: Some(err),
            });
        }

        let padding = if aal5_length < trailer_start {
            Some(aal5_length..trailer_start)
        } else {
            None
        };
        Ok(Aal5Pdu {
            cells,
            trailer: Some((trailer, TrailerSource::Captured(trailer_start))),
            padding,
            payload: &data[..aal5_length],
            error: None,
        })
    }

    /// Cell count, taken from the pseudo-header or inferred from the length.
    #[inline]
    pub fn cells(&self) -> Option<u32> {
        self.cells
    }

    #[inline]
    pub fn trailer(&self) -> Option<Aal5Trailer> {
        self.trailer.map(|(t, _)| t)
    }

    #[inline]
    pub fn trailer_source(&self) -> Option<TrailerSource> {
        self.trailer.map(|(_, s)| s)
    }

    /// The padding between payload and trailer, if there is any.
    #[inline]
    pub fn padding(&self) -> Option<Range<usize>> {
        self.padding.clone()
    }

    /// A trailer length that does not fit the PDU. The payload is empty then.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The bytes to hand to the next layer.
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// The trailer related fields.
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        if let Some(cells) = self.cells {
            nodes.push(Node::new("atm.cells", 0, 0, cells));
        }
        if let Some(padding) = self.padding.as_ref() {
            nodes.push(Node::new(
                "atm.aal5.padding",
                padding.start,
                padding.end - padding.start,
                crate::tree::FieldValue::None,
            ));
        }
        match self.trailer {
            Some((t, TrailerSource::Captured(start))) => {
                nodes.push(Node::new("atm.aal5.uu", start, 1, t.uu));
                nodes.push(Node::new("atm.aal5.cpi", start + 1, 1, t.cpi));
                nodes.push(Node::new("atm.aal5.len", start + 2, 2, t.length));
                nodes.push(Node::new("atm.aal5.crc", start + 4, 4, t.checksum));
            }
            Some((t, TrailerSource::PseudoHeader)) => {
                nodes.push(Node::new("atm.aal5.uu", 0, 0, t.uu));
                nodes.push(Node::new("atm.aal5.cpi", 0, 0, t.cpi));
                nodes.push(Node::new("atm.aal5.len", 0, 0, t.length));
                nodes.push(Node::new("atm.aal5.crc", 0, 0, t.checksum));
            }
            None => {}
        }
        nodes
    }
}
