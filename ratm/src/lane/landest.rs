use byteorder::{BigEndian, ByteOrder};
use smoltcp::wire::EthernetAddress;

use crate::bits;
use crate::tree::Node;
use crate::Error;

/// A constant that defines the fixed byte length of a LAN destination.
pub const LAN_DESTINATION_LEN: usize = 8;

enum_sim! {
    /// An enum-like type for representing the tag of a LAN destination.
    pub struct LanDestTag (u16) {
        /// No destination.
        NOT_PRESENT = 0x0000 => "Not present",
        /// A MAC address follows.
        MAC_ADDRESS = 0x0001 => "MAC address",
        /// A route descriptor follows.
        ROUTE_DESCRIPTOR = 0x0002 => "Route descriptor",
    }
}

/// The decoded content of a LAN destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanDestValue {
    /// Tag 0 or an unrecognized tag.
    NotPresent,
    /// MAC-48 address.
    MacAddress(EthernetAddress),
    /// Source-routing route descriptor.
    RouteDescriptor {
        /// 12-bit LAN id.
        lan_id: u16,
        /// 4-bit bridge number.
        bridge_number: u8,
    },
}

/// `LanDestination` is the 8-byte tagged destination of LE Control frames.
///
/// It contains the following fields:
/// * Tag: 16 bits, accessed with `tag`.
/// * MAC address: 48 bits following the tag, when the tag says so.
/// * Route descriptor: 4 reserved bytes, then 12 bits LAN id and 4 bits
///   bridge number, when the tag says so.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct LanDestination(pub [u8; LAN_DESTINATION_LEN]);

impl LanDestination {
    /// Read a `LanDestination` at `offset`.
    pub fn parse(buf: &[u8], offset: usize) -> Result<Self, Error> {
        let bytes = bits::slice(buf, offset, LAN_DESTINATION_LEN)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Convert byte slice to `LanDestination`.
    ///
    /// # Panics
    /// The function panics if `bytes` is not 8 bytes long.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0; LAN_DESTINATION_LEN];
        buf.copy_from_slice(bytes);
        Self(buf)
    }

    #[inline]
    pub fn tag(&self) -> LanDestTag {
        LanDestTag::from(BigEndian::read_u16(&self.0[0..2]))
    }

    #[inline]
    pub fn value(&self) -> LanDestValue {
        match self.tag() {
            LanDestTag::MAC_ADDRESS => {
                LanDestValue::MacAddress(EthernetAddress::from_bytes(&self.0[2..8]))
            }
            LanDestTag::ROUTE_DESCRIPTOR => {
                let rd = BigEndian::read_u16(&self.0[6..8]) as u64;
                LanDestValue::RouteDescriptor {
                    lan_id: bits::bit_field(rd, 0xfff0) as u16,
                    bridge_number: bits::bit_field(rd, 0x000f) as u8,
                }
            }
            _ => LanDestValue::NotPresent,
        }
    }

    /// The MAC address, if the tag says one is present.
    #[inline]
    pub fn mac_addr(&self) -> Option<EthernetAddress> {
        match self.value() {
            LanDestValue::MacAddress(mac) => Some(mac),
            _ => None,
        }
    }

    /// The fields of this destination, which sits at `offset` of the frame.
    pub fn node(&self, name: &'static str, offset: usize) -> Node {
        let mut node = Node::group(name, offset, LAN_DESTINATION_LEN)
            .with_child(Node::new("lane.lan_dest.tag", offset, 2, self.tag()));
        match self.value() {
            LanDestValue::MacAddress(mac) => {
                node.push(Node::new("lane.lan_dest.mac", offset + 2, 6, mac.to_string()));
            }
            LanDestValue::RouteDescriptor {
                lan_id,
                bridge_number,
            } => {
                let rd = BigEndian::read_u16(&self.0[6..8]);
                node.push(
                    Node::new("lane.lan_dest.route_descriptor", offset + 6, 2, rd)
                        .with_child(Node::new("lane.lan_dest.lan_id", offset + 6, 2, lan_id))
                        .with_child(Node::new(
                            "lane.lan_dest.bridge_number",
                            offset + 6,
                            2,
                            bridge_number,
                        )),
                );
            }
            LanDestValue::NotPresent => {}
        }
        node
    }
}
