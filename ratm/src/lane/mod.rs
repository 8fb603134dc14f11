//! LAN Emulation over ATM.
//!
//! LANE traffic is either LE Control (see `LeControlFrame`) or LAN data
//! frames prefixed with the 2-byte id of the sending LE client.

mod control;
pub use control::{
    Arp, AtmAddress, ConfigureJoin, FrameSize, Flush, LanType, LeControlBody, LeControlFrame,
    LeFlags, LeOpcode, LeStatus, Registration, TlvBlock, Verify, ATM_ADDRESS_LEN,
    ELAN_NAME_SLOT_LEN, LE_CONTROL_FRAME_LEN, LE_CONTROL_HEADER_LEN,
};

mod landest;
pub use landest::{LanDestTag, LanDestValue, LanDestination, LAN_DESTINATION_LEN};

mod tlv;
pub use tlv::{walk_tlvs, LeTlv, LeTlvIter, LeTlvType, LE_TLV_HEADER_LEN, OUI_ATM_FORUM};

use byteorder::{BigEndian, ByteOrder};
use bytes::Buf;

use crate::tree::Node;
use crate::Error;

/// A constant that defines the byte length of the LE client header.
pub const LE_CLIENT_HEADER_LEN: usize = 2;

/// The LE client id that precedes 802.3 and 802.5 frames on a LANE data VCC.
#[derive(Debug, Clone, Copy)]
pub struct LeClientHeader<T> {
    buf: T,
}

impl<T: Buf> LeClientHeader<T> {
    #[inline]
    pub fn parse(buf: T) -> Result<Self, Error> {
        let chunk_len = buf.chunk().len();
        if chunk_len < LE_CLIENT_HEADER_LEN {
            return Err(Error::truncated(0, LE_CLIENT_HEADER_LEN, chunk_len));
        }
        Ok(Self { buf })
    }

    #[inline]
    pub fn lecid(&self) -> u16 {
        BigEndian::read_u16(&self.buf.chunk()[0..2])
    }

    pub fn node(&self) -> Node {
        Node::group("lane", 0, LE_CLIENT_HEADER_LEN).with_child(Node::new(
            "lane.le_client",
            0,
            LE_CLIENT_HEADER_LEN,
            self.lecid(),
        ))
    }

    /// Skip the LE client id and return the LAN frame.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(LE_CLIENT_HEADER_LEN);
        buf
    }
}
