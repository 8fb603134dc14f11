use crate::bits;
use crate::tree::Node;
use crate::Error;

/// A constant that defines the fixed byte length of the TLV header.
pub const LE_TLV_HEADER_LEN: usize = 5;

/// The ATM Forum OUI that prefixes the standard LE Control TLV types.
pub const OUI_ATM_FORUM: u32 = 0x00a03e;

const fn atm_forum(id: u32) -> u32 {
    (OUI_ATM_FORUM << 8) | id
}

enum_sim! {
    /// An enum-like type for representing the type field of an LE Control TLV.
    pub struct LeTlvType (u32) {
        CONTROL_TIMEOUT = atm_forum(0x01) => "Control Time-out",
        MAX_UNKNOWN_FRAME_COUNT = atm_forum(0x02) => "Maximum Unknown Frame Count",
        MAX_UNKNOWN_FRAME_TIME = atm_forum(0x03) => "Maximum Unknown Frame Time",
        VCC_TIMEOUT = atm_forum(0x04) => "VCC Time-out",
        MAX_RETRY_COUNT = atm_forum(0x05) => "Maximum Retry Count",
        AGING_TIME = atm_forum(0x06) => "Aging Time",
        FORWARDING_DELAY_TIME = atm_forum(0x07) => "Forwarding Delay Time",
        EXPECTED_LE_ARP_RESPONSE_TIME = atm_forum(0x08) => "Expected LE_ARP Response Time",
        FLUSH_TIMEOUT = atm_forum(0x09) => "Flush Time-out",
        PATH_SWITCHING_DELAY = atm_forum(0x0a) => "Path Switching Delay",
        LOCAL_SEGMENT_ID = atm_forum(0x0b) => "Local Segment ID",
        MCAST_SEND_VCC_TYPE = atm_forum(0x0c) => "Mcast Send VCC Type",
        MCAST_SEND_VCC_AVGRATE = atm_forum(0x0d) => "Mcast Send VCC AvgRate",
        MCAST_SEND_VCC_PEAKRATE = atm_forum(0x0e) => "Mcast Send VCC PeakRate",
        CONNECTION_COMPLETION_TIMER = atm_forum(0x0f) => "Connection Completion Timer",
        CONFIG_FRAG_INFO = atm_forum(0x10) => "Config Frag Info",
        LAYER3_ADDRESS = atm_forum(0x11) => "Layer 3 Address",
        ELAN_ID = atm_forum(0x12) => "ELAN ID",
        SERVICE_CATEGORY = atm_forum(0x13) => "Service Category",
        LLC_MUXED_ATM_ADDRESS = atm_forum(0x2b) => "LLC-muxed ATM Address",
        X5_ADJUSTMENT = atm_forum(0x2c) => "X5 Adjustment",
        PREFERRED_LES = atm_forum(0x2d) => "Preferred LES",
    }
}

/// A single LE Control TLV borrowed from the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeTlv<'a> {
    offset: usize,
    tlv_type: LeTlvType,
    value: &'a [u8],
}

impl<'a> LeTlv<'a> {
    /// Offset of the type field.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn tlv_type(&self) -> LeTlvType {
        self.tlv_type
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.value.len() as u8
    }

    #[inline]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Number of bytes this TLV occupies, header included.
    #[inline]
    pub fn wire_len(&self) -> usize {
        LE_TLV_HEADER_LEN + self.value.len()
    }

    pub fn node(&self) -> Node {
        let mut node = Node::new("lane.tlv", self.offset, self.wire_len(), self.tlv_type)
            .with_child(Node::new("lane.tlv.type", self.offset, 4, self.tlv_type))
            .with_child(Node::new("lane.tlv.length", self.offset + 4, 1, self.length()));
        if !self.value.is_empty() {
            node.push(Node::new(
                "lane.tlv.value",
                self.offset + LE_TLV_HEADER_LEN,
                self.value.len(),
                self.value,
            ));
        }
        node
    }
}

/// Walks `count` TLVs starting at an absolute offset of a frame.
///
/// The count is the only thing that ends the walk. A TLV that does not fit
/// into the buffer yields a `MalformedLength` error, after which the
/// iterator is exhausted.
#[derive(Debug, Clone)]
pub struct LeTlvIter<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: usize,
}

impl<'a> LeTlvIter<'a> {
    pub fn new(buf: &'a [u8], offset: usize, count: usize) -> Self {
        Self {
            buf,
            offset,
            remaining: count,
        }
    }

    /// Offset of the next TLV, or the end of the last one decoded.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn read_tlv(&self) -> Result<LeTlv<'a>, Error> {
        let available = self.buf.len().saturating_sub(self.offset);
        if available < LE_TLV_HEADER_LEN {
            return Err(Error::malformed(
                "TLV header",
                self.offset,
                LE_TLV_HEADER_LEN,
                available,
            ));
        }
        let tlv_type = LeTlvType::from(bits::read_u32(self.buf, self.offset)?);
        let len = bits::read_u8(self.buf, self.offset + 4)? as usize;
        let value_start = self.offset + LE_TLV_HEADER_LEN;
        let value = bits::slice(self.buf, value_start, len).map_err(|_| {
            Error::malformed("TLV", self.offset + 4, len, self.buf.len() - value_start)
        })?;
        Ok(LeTlv {
            offset: self.offset,
            tlv_type,
            value,
        })
    }
}

impl<'a> Iterator for LeTlvIter<'a> {
    type Item = Result<LeTlv<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.read_tlv() {
            Ok(tlv) => {
                self.remaining -= 1;
                self.offset += tlv.wire_len();
                Some(Ok(tlv))
            }
            Err(err) => {
                self.remaining = 0;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Decode exactly `count` TLVs starting at `offset`.
///
/// Returns the TLVs and the offset just past the last one.
pub fn walk_tlvs(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<LeTlv<'_>>, usize), Error> {
    let mut iter = LeTlvIter::new(buf, offset, count);
    let tlvs = iter.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok((tlvs, iter.offset()))
}
