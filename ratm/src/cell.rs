//! ATM cell header.
//!
//! Every 53-byte ATM cell starts with a 5-byte header:
//! - **GFC**: 4-bit generic flow control
//! - **VPI**: virtual path identifier, split across the first two bytes
//! - **VCI**: 16-bit virtual channel identifier, split across bytes 1 to 3
//! - **PT**: 3-bit payload type
//! - **CLP**: 1-bit cell loss priority
//! - **HEC**: 8-bit header error check
//!
//! The remaining 48 bytes are the cell payload, interpreted according to
//! the adaptation layer (see `crate::aal`).

use bytes::Buf;

use crate::tree::Node;
use crate::Error;

/// A constant that defines the fixed byte length of the ATM cell header.
pub const CELL_HEADER_LEN: usize = 5;
/// Length of the payload that follows the cell header.
pub const CELL_PAYLOAD_LEN: usize = 48;

enum_sim! {
    /// An enum-like type for representing the payload type of a cell.
    pub struct PayloadType (u8) {
        /// User data, no congestion, SDU-type 0.
        USER_DATA_0 = 0 => "User data cell, congestion not experienced, SDU-type = 0",
        /// User data, no congestion, SDU-type 1.
        USER_DATA_1 = 1 => "User data cell, congestion not experienced, SDU-type = 1",
        /// User data, congestion, SDU-type 0.
        USER_DATA_CONGESTED_0 = 2 => "User data cell, congestion experienced, SDU-type = 0",
        /// User data, congestion, SDU-type 1.
        USER_DATA_CONGESTED_1 = 3 => "User data cell, congestion experienced, SDU-type = 1",
        /// Segment OAM F5 flow.
        SEGMENT_OAM_F5 = 4 => "Segment OAM F5 flow related cell",
        /// End-to-end OAM F5 flow.
        END_TO_END_OAM_F5 = 5 => "End-to-end OAM F5 flow related cell",
    }
}

/// A view over the 5-byte ATM cell header.
#[derive(Debug, Clone, Copy)]
pub struct CellHeader<T> {
    buf: T,
}

impl<T: Buf> CellHeader<T> {
    /// Wrap `buf`, failing with `TruncatedBuffer` if fewer than 5 bytes are present.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, Error> {
        let chunk_len = buf.chunk().len();
        if chunk_len < CELL_HEADER_LEN {
            return Err(Error::truncated(0, CELL_HEADER_LEN, chunk_len));
        }
        Ok(Self { buf })
    }

    #[inline]
    pub fn gfc(&self) -> u8 {
        self.buf.chunk()[0] >> 4
    }

    /// The VPI, built from the high nibble of byte 0 shifted up by 4 and the
    /// high nibble of byte 1.
    #[inline]
    pub fn vpi(&self) -> u16 {
        let c = self.buf.chunk();
        ((c[0] & 0xf0) as u16) << 4 | (c[1] >> 4) as u16
    }

    #[inline]
    pub fn vci(&self) -> u16 {
        let c = self.buf.chunk();
        ((c[1] & 0x0f) as u16) << 12 | (c[2] as u16) << 4 | (c[3] >> 4) as u16
    }

    #[inline]
    pub fn payload_type(&self) -> PayloadType {
        PayloadType::from((self.buf.chunk()[3] >> 1) & 0x07)
    }

    /// The cell loss priority bit, set for low-priority cells.
    #[inline]
    pub fn clp(&self) -> bool {
        self.buf.chunk()[3] & 0x01 != 0
    }

    #[inline]
    pub fn hec(&self) -> u8 {
        self.buf.chunk()[4]
    }

    /// The header fields as record nodes, the header starting at offset 0.
    pub fn nodes(&self) -> Vec<Node> {
        let clp = if self.clp() {
            "Low priority"
        } else {
            "High priority"
        };
        vec![
            Node::new("atm.gfc", 0, 1, self.gfc()),
            Node::new("atm.vpi", 0, 2, self.vpi()),
            Node::new("atm.vci", 1, 3, self.vci()),
            Node::new("atm.pt", 3, 1, self.payload_type()),
            Node::new("atm.clp", 3, 1, self.clp()).with_child(Node::new(
                "atm.clp.priority",
                3,
                1,
                clp.to_string(),
            )),
            Node::new("atm.hec", 4, 1, self.hec()),
        ]
    }

    /// Skip the header and return the cell payload.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(CELL_HEADER_LEN);
        buf
    }
}
