//! LE Control frames.
//!
//! Every LE Control frame carries a 16-byte header followed by a 92-byte
//! body whose layout is selected by the opcode. Bodies that end with TLVs
//! place them right after the 108 fixed bytes.

use core::fmt;

use crate::cursors::Cursor;
use crate::tree::Node;
use crate::Error;

use super::landest::{LanDestination, LAN_DESTINATION_LEN};
use super::tlv::{LeTlv, LeTlvIter};

/// A constant that defines the byte length of the LE Control header.
pub const LE_CONTROL_HEADER_LEN: usize = 16;
/// The header plus the fixed-size body.
pub const LE_CONTROL_FRAME_LEN: usize = 108;
/// A constant that defines the byte length of an ATM address.
pub const ATM_ADDRESS_LEN: usize = 20;
/// Size of the slot that holds the ELAN name.
pub const ELAN_NAME_SLOT_LEN: usize = 32;

// Offsets of the fields shared by the body layouts.
const SOURCE_OFFSET: usize = 16;
const TARGET_OFFSET: usize = 24;
const SOURCE_ATM_OFFSET: usize = 32;
const NUM_TLVS_OFFSET: usize = 54;
const TARGET_ATM_OFFSET: usize = 56;

enum_sim! {
    /// An enum-like type for representing the LE Control opcode.
    pub struct LeOpcode (u16) {
        CONFIGURE_REQUEST = 0x0001 => "LE_CONFIGURE_REQUEST",
        CONFIGURE_RESPONSE = 0x0101 => "LE_CONFIGURE_RESPONSE",
        JOIN_REQUEST = 0x0002 => "LE_JOIN_REQUEST",
        JOIN_RESPONSE = 0x0102 => "LE_JOIN_RESPONSE",
        READY_QUERY = 0x0003 => "READY_QUERY",
        READY_IND = 0x0103 => "READY_IND",
        REGISTER_REQUEST = 0x0004 => "LE_REGISTER_REQUEST",
        REGISTER_RESPONSE = 0x0104 => "LE_REGISTER_RESPONSE",
        UNREGISTER_REQUEST = 0x0005 => "LE_UNREGISTER_REQUEST",
        UNREGISTER_RESPONSE = 0x0105 => "LE_UNREGISTER_RESPONSE",
        ARP_REQUEST = 0x0006 => "LE_ARP_REQUEST",
        ARP_RESPONSE = 0x0106 => "LE_ARP_RESPONSE",
        FLUSH_REQUEST = 0x0007 => "LE_FLUSH_REQUEST",
        FLUSH_RESPONSE = 0x0107 => "LE_FLUSH_RESPONSE",
        NARP_REQUEST = 0x0008 => "LE_NARP_REQUEST",
        TOPOLOGY_REQUEST = 0x0009 => "LE_TOPOLOGY_REQUEST",
        VERIFY_REQUEST = 0x000a => "LE_VERIFY_REQUEST",
        VERIFY_RESPONSE = 0x010a => "LE_VERIFY_RESPONSE",
    }
}

impl LeOpcode {
    /// Response opcodes have bit 0x0100 set and carry a status.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.0 & 0x0100 != 0
    }

    /// READY_QUERY and READY_IND end right after the opcode.
    #[inline]
    pub fn is_ready(&self) -> bool {
        *self == LeOpcode::READY_QUERY || *self == LeOpcode::READY_IND
    }
}

enum_sim! {
    /// An enum-like type for representing the status of an LE Control response.
    pub struct LeStatus (u16) {
        SUCCESS = 0 => "Success",
        VERSION_NOT_SUPPORTED = 1 => "Version not supported",
        INVALID_REQUEST_PARAMETERS = 2 => "Invalid request parameters",
        DUPLICATE_LAN_DESTINATION = 4 => "Duplicate LAN destination registration",
        DUPLICATE_ATM_ADDRESS = 5 => "Duplicate ATM address",
        INSUFFICIENT_RESOURCES = 6 => "Insufficient resources to grant request",
        ACCESS_DENIED = 7 => "Access denied",
        INVALID_REQUESTOR_ID = 8 => "Invalid REQUESTOR-ID",
        INVALID_LAN_DESTINATION = 9 => "Invalid LAN destination",
        INVALID_ATM_ADDRESS = 10 => "Invalid ATM address",
        NO_CONFIGURATION = 20 => "No configuraton",
        CONFIGURE_ERROR = 21 => "LE_CONFIGURE error",
        INSUFFICIENT_INFORMATION = 22 => "Insufficient information",
        TLV_NOT_FOUND = 24 => "TLV not found",
    }
}

enum_sim! {
    /// An enum-like type for representing the LAN type of an emulated LAN.
    pub struct LanType (u8) {
        UNSPECIFIED = 0x00 => "Unspecified",
        ETHERNET = 0x01 => "Ethernet/802.3",
        TOKEN_RING = 0x02 => "802.5",
    }
}

enum_sim! {
    /// An enum-like type for representing the maximum frame size of an emulated LAN.
    pub struct FrameSize (u8) {
        UNSPECIFIED = 0x00 => "Unspecified",
        SIZE_1516 = 0x01 => "1516/1528/1580/1592",
        SIZE_4544 = 0x02 => "4544/4556/1580/1592",
        SIZE_9234 = 0x03 => "9234/9246",
        SIZE_18190 = 0x04 => "18190/18202",
    }
}

/// A 20-byte ATM end system address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct AtmAddress(pub [u8; ATM_ADDRESS_LEN]);

impl AtmAddress {
    /// Convert byte slice to `AtmAddress`.
    ///
    /// # Panics
    /// The function panics if `bytes` is not 20 bytes long.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0; ATM_ADDRESS_LEN];
        buf.copy_from_slice(bytes);
        Self(buf)
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Self, Error> {
        Ok(Self::from_bytes(cursor.take(ATM_ADDRESS_LEN)?))
    }

    fn node(&self, name: &'static str, offset: usize) -> Node {
        Node::new(name, offset, ATM_ADDRESS_LEN, &self.0[..])
    }
}

impl fmt::Display for AtmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// The 16-bit flags word of an LE Control frame.
///
/// Which bits mean something depends on the opcode, see `LeFlags::named_bits`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct LeFlags(pub u16);

impl LeFlags {
    pub const REMOTE_ADDRESS: u16 = 0x0001;
    pub const V2_CAPABLE: u16 = 0x0002;
    pub const SELECTIVE_MULTICAST: u16 = 0x0004;
    pub const V2_REQUIRED: u16 = 0x0008;
    pub const PROXY: u16 = 0x0080;
    pub const TOPOLOGY_CHANGE: u16 = 0x0100;
    pub const EXCLUDE_EXPLORER_FRAMES: u16 = 0x0200;

    #[inline]
    pub fn raw(&self) -> u16 {
        self.0
    }

    #[inline]
    pub fn contains(&self, mask: u16) -> bool {
        self.0 & mask != 0
    }

    /// The flag bits decoded for `opcode`, with their field names.
    pub fn named_bits(opcode: LeOpcode) -> &'static [(&'static str, u16)] {
        match opcode {
            LeOpcode::CONFIGURE_REQUEST | LeOpcode::CONFIGURE_RESPONSE => {
                &[("lane.flags.v2_capable", Self::V2_CAPABLE)]
            }
            LeOpcode::JOIN_REQUEST => &[
                ("lane.flags.v2_capable", Self::V2_CAPABLE),
                ("lane.flags.selective_multicast", Self::SELECTIVE_MULTICAST),
                ("lane.flags.proxy", Self::PROXY),
                ("lane.flags.exclude_explorer_frames", Self::EXCLUDE_EXPLORER_FRAMES),
            ],
            LeOpcode::JOIN_RESPONSE => &[
                ("lane.flags.v2_capable", Self::V2_CAPABLE),
                ("lane.flags.v2_required", Self::V2_REQUIRED),
                ("lane.flags.proxy", Self::PROXY),
                ("lane.flags.exclude_explorer_frames", Self::EXCLUDE_EXPLORER_FRAMES),
            ],
            LeOpcode::ARP_REQUEST | LeOpcode::ARP_RESPONSE => {
                &[("lane.flags.remote_address", Self::REMOTE_ADDRESS)]
            }
            LeOpcode::TOPOLOGY_REQUEST => &[("lane.flags.topology_change", Self::TOPOLOGY_CHANGE)],
            _ => &[],
        }
    }

    pub fn node(&self, opcode: LeOpcode, offset: usize) -> Node {
        let mut node = Node::new("lane.flags", offset, 2, self.0);
        for &(name, mask) in Self::named_bits(opcode) {
            node.push(Node::new(name, offset, 2, self.contains(mask)));
        }
        node
    }
}

/// The TLVs that close a body.
///
/// `tlvs` holds what was decoded before `error`, if the walk failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvBlock<'a> {
    pub tlvs: Vec<LeTlv<'a>>,
    pub error: Option<Error>,
}

impl<'a> TlvBlock<'a> {
    fn read(cursor: &Cursor<'a>, count: u8) -> Self {
        let mut tlvs = Vec::new();
        let mut error = None;
        for res in LeTlvIter::new(cursor.buf(), cursor.cursor(), count as usize) {
            match res {
                Ok(tlv) => tlvs.push(tlv),
                Err(err) => error = Some(err),
            }
        }
        TlvBlock { tlvs, error }
    }

    fn push_nodes(&self, node: &mut Node) {
        for tlv in self.tlvs.iter() {
            node.push(tlv.node());
        }
    }
}

fn read_lan_dest(cursor: &mut Cursor<'_>) -> Result<LanDestination, Error> {
    let dest = LanDestination::parse(cursor.buf(), cursor.cursor())?;
    cursor.skip(LAN_DESTINATION_LEN)?;
    Ok(dest)
}

fn push_opt<T>(node: &mut Node, value: Option<T>, f: impl FnOnce(T) -> Node) {
    if let Some(v) = value {
        node.push(f(v));
    }
}

fn push_tlvs(node: &mut Node, num_tlvs: Option<u8>, tlvs: Option<&TlvBlock<'_>>) {
    push_opt(node, num_tlvs, |n| Node::new("lane.num_tlvs", NUM_TLVS_OFFSET, 1, n));
    if let Some(tlvs) = tlvs {
        tlvs.push_nodes(node);
    }
}

// The bodies below fill their fields in wire order. A field is `None` when
// the frame ended before it.

/// Body of LE_CONFIGURE and LE_JOIN frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigureJoin<'a> {
    pub source: Option<LanDestination>,
    pub target: Option<LanDestination>,
    pub source_atm: Option<AtmAddress>,
    pub lan_type: Option<LanType>,
    pub max_frame_size: Option<FrameSize>,
    pub num_tlvs: Option<u8>,
    /// The name size as carried on the wire, possibly above 32.
    pub elan_name_size: Option<u8>,
    pub target_atm: Option<AtmAddress>,
    /// The ELAN name, at most 32 bytes.
    pub elan_name: Option<&'a [u8]>,
    pub tlvs: Option<TlvBlock<'a>>,
}

impl<'a> ConfigureJoin<'a> {
    fn read(&mut self, cursor: &mut Cursor<'a>) -> Result<(), Error> {
        self.source = Some(read_lan_dest(cursor)?);
        self.target = Some(read_lan_dest(cursor)?);
        self.source_atm = Some(AtmAddress::read(cursor)?);
        self.lan_type = Some(LanType::from(cursor.read_u8()?));
        self.max_frame_size = Some(FrameSize::from(cursor.read_u8()?));
        let num_tlvs = cursor.read_u8()?;
        self.num_tlvs = Some(num_tlvs);
        let name_size = cursor.read_u8()?;
        self.elan_name_size = Some(name_size);
        self.target_atm = Some(AtmAddress::read(cursor)?);
        let slot = cursor.take(ELAN_NAME_SLOT_LEN)?;
        self.elan_name = Some(&slot[..(name_size as usize).min(ELAN_NAME_SLOT_LEN)]);
        self.tlvs = Some(TlvBlock::read(cursor, num_tlvs));
        Ok(())
    }

    fn push_nodes(&self, node: &mut Node) {
        push_opt(node, self.source, |d| d.node("lane.source", SOURCE_OFFSET));
        push_opt(node, self.target, |d| d.node("lane.target", TARGET_OFFSET));
        push_opt(node, self.source_atm, |a| a.node("lane.source_atm", SOURCE_ATM_OFFSET));
        push_opt(node, self.lan_type, |v| Node::new("lane.lan_type", 52, 1, v));
        push_opt(node, self.max_frame_size, |v| Node::new("lane.max_frame_size", 53, 1, v));
        push_opt(node, self.num_tlvs, |n| Node::new("lane.num_tlvs", NUM_TLVS_OFFSET, 1, n));
        push_opt(node, self.elan_name_size, |n| Node::new("lane.elan_name_size", 55, 1, n));
        push_opt(node, self.target_atm, |a| a.node("lane.target_atm", TARGET_ATM_OFFSET));
        match self.elan_name {
            Some(name) if !name.is_empty() => {
                node.push(Node::new("lane.elan_name", 76, name.len(), name));
            }
            _ => {}
        }
        push_tlvs(node, None, self.tlvs.as_ref());
    }
}

/// Body of LE_REGISTER and LE_UNREGISTER frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration<'a> {
    pub source: Option<LanDestination>,
    pub target: Option<LanDestination>,
    pub source_atm: Option<AtmAddress>,
    pub num_tlvs: Option<u8>,
    pub tlvs: Option<TlvBlock<'a>>,
}

impl<'a> Registration<'a> {
    fn read(&mut self, cursor: &mut Cursor<'a>) -> Result<(), Error> {
        self.source = Some(read_lan_dest(cursor)?);
        self.target = Some(read_lan_dest(cursor)?);
        self.source_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(2)?;
        let num_tlvs = cursor.read_u8()?;
        self.num_tlvs = Some(num_tlvs);
        cursor.skip(53)?;
        self.tlvs = Some(TlvBlock::read(cursor, num_tlvs));
        Ok(())
    }

    fn push_nodes(&self, node: &mut Node) {
        push_opt(node, self.source, |d| d.node("lane.source", SOURCE_OFFSET));
        push_opt(node, self.target, |d| d.node("lane.target", TARGET_OFFSET));
        push_opt(node, self.source_atm, |a| a.node("lane.source_atm", SOURCE_ATM_OFFSET));
        push_tlvs(node, self.num_tlvs, self.tlvs.as_ref());
    }
}

/// Body of LE_ARP and LE_NARP frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arp<'a> {
    pub source: Option<LanDestination>,
    pub target: Option<LanDestination>,
    pub source_atm: Option<AtmAddress>,
    pub num_tlvs: Option<u8>,
    pub target_atm: Option<AtmAddress>,
    pub tlvs: Option<TlvBlock<'a>>,
}

impl<'a> Arp<'a> {
    fn read(&mut self, cursor: &mut Cursor<'a>) -> Result<(), Error> {
        self.source = Some(read_lan_dest(cursor)?);
        self.target = Some(read_lan_dest(cursor)?);
        self.source_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(2)?;
        let num_tlvs = cursor.read_u8()?;
        self.num_tlvs = Some(num_tlvs);
        cursor.skip(1)?;
        self.target_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(32)?;
        self.tlvs = Some(TlvBlock::read(cursor, num_tlvs));
        Ok(())
    }

    fn push_nodes(&self, node: &mut Node) {
        push_opt(node, self.source, |d| d.node("lane.source", SOURCE_OFFSET));
        push_opt(node, self.target, |d| d.node("lane.target", TARGET_OFFSET));
        push_opt(node, self.source_atm, |a| a.node("lane.source_atm", SOURCE_ATM_OFFSET));
        push_opt(node, self.num_tlvs, |n| Node::new("lane.num_tlvs", NUM_TLVS_OFFSET, 1, n));
        push_opt(node, self.target_atm, |a| a.node("lane.target_atm", TARGET_ATM_OFFSET));
        push_tlvs(node, None, self.tlvs.as_ref());
    }
}

/// Body of LE_VERIFY frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verify<'a> {
    pub num_tlvs: Option<u8>,
    pub target_atm: Option<AtmAddress>,
    pub tlvs: Option<TlvBlock<'a>>,
}

impl<'a> Verify<'a> {
    fn read(&mut self, cursor: &mut Cursor<'a>) -> Result<(), Error> {
        cursor.skip(38)?;
        let num_tlvs = cursor.read_u8()?;
        self.num_tlvs = Some(num_tlvs);
        cursor.skip(1)?;
        self.target_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(32)?;
        self.tlvs = Some(TlvBlock::read(cursor, num_tlvs));
        Ok(())
    }

    fn push_nodes(&self, node: &mut Node) {
        push_opt(node, self.num_tlvs, |n| Node::new("lane.num_tlvs", NUM_TLVS_OFFSET, 1, n));
        push_opt(node, self.target_atm, |a| a.node("lane.target_atm", TARGET_ATM_OFFSET));
        push_tlvs(node, None, self.tlvs.as_ref());
    }
}

/// Body of LE_FLUSH frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flush {
    pub source: Option<LanDestination>,
    pub target: Option<LanDestination>,
    pub source_atm: Option<AtmAddress>,
    pub target_atm: Option<AtmAddress>,
}

impl Flush {
    fn read(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Error> {
        self.source = Some(read_lan_dest(cursor)?);
        self.target = Some(read_lan_dest(cursor)?);
        self.source_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(4)?;
        self.target_atm = Some(AtmAddress::read(cursor)?);
        cursor.skip(32)?;
        Ok(())
    }

    fn push_nodes(&self, node: &mut Node) {
        push_opt(node, self.source, |d| d.node("lane.source", SOURCE_OFFSET));
        push_opt(node, self.target, |d| d.node("lane.target", TARGET_OFFSET));
        push_opt(node, self.source_atm, |a| a.node("lane.source_atm", SOURCE_ATM_OFFSET));
        push_opt(node, self.target_atm, |a| a.node("lane.target_atm", TARGET_ATM_OFFSET));
    }
}

/// The opcode-specific part of an LE Control frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeControlBody<'a> {
    /// READY frames, unknown opcodes, or a header cut before the body.
    None,
    ConfigureJoin(ConfigureJoin<'a>),
    Registration(Registration<'a>),
    Arp(Arp<'a>),
    Verify(Verify<'a>),
    Flush(Flush),
    /// LE_TOPOLOGY_REQUEST, whose body is reserved.
    Topology,
}

fn read_partial<'a, B: Default>(
    cursor: &mut Cursor<'a>,
    read: fn(&mut B, &mut Cursor<'a>) -> Result<(), Error>,
) -> (B, Option<Error>) {
    let mut body = B::default();
    let err = read(&mut body, cursor).err();
    (body, err)
}

impl<'a> LeControlBody<'a> {
    /// Decode the body selected by `opcode`, keeping the fields read before
    /// a failure.
    fn read(opcode: LeOpcode, cursor: &mut Cursor<'a>) -> (Self, Option<Error>) {
        match opcode {
            LeOpcode::CONFIGURE_REQUEST
            | LeOpcode::CONFIGURE_RESPONSE
            | LeOpcode::JOIN_REQUEST
            | LeOpcode::JOIN_RESPONSE => {
                let (b, err) = read_partial(cursor, ConfigureJoin::read);
                (LeControlBody::ConfigureJoin(b), err)
            }
            LeOpcode::REGISTER_REQUEST
            | LeOpcode::REGISTER_RESPONSE
            | LeOpcode::UNREGISTER_REQUEST
            | LeOpcode::UNREGISTER_RESPONSE => {
                let (b, err) = read_partial(cursor, Registration::read);
                (LeControlBody::Registration(b), err)
            }
            LeOpcode::ARP_REQUEST | LeOpcode::ARP_RESPONSE | LeOpcode::NARP_REQUEST => {
                let (b, err) = read_partial(cursor, Arp::read);
                (LeControlBody::Arp(b), err)
            }
            LeOpcode::VERIFY_REQUEST | LeOpcode::VERIFY_RESPONSE => {
                let (b, err) = read_partial(cursor, Verify::read);
                (LeControlBody::Verify(b), err)
            }
            LeOpcode::FLUSH_REQUEST | LeOpcode::FLUSH_RESPONSE => {
                let (b, err) = read_partial(cursor, Flush::read);
                (LeControlBody::Flush(b), err)
            }
            LeOpcode::TOPOLOGY_REQUEST => (LeControlBody::Topology, None),
            _ => (LeControlBody::None, None),
        }
    }

    /// The TLVs closing the body, if the body has any and reached them.
    pub fn tlvs(&self) -> Option<&TlvBlock<'a>> {
        match self {
            LeControlBody::ConfigureJoin(b) => b.tlvs.as_ref(),
            LeControlBody::Registration(b) => b.tlvs.as_ref(),
            LeControlBody::Arp(b) => b.tlvs.as_ref(),
            LeControlBody::Verify(b) => b.tlvs.as_ref(),
            _ => None,
        }
    }

    fn push_nodes(&self, node: &mut Node) {
        match self {
            LeControlBody::ConfigureJoin(b) => b.push_nodes(node),
            LeControlBody::Registration(b) => b.push_nodes(node),
            LeControlBody::Arp(b) => b.push_nodes(node),
            LeControlBody::Verify(b) => b.push_nodes(node),
            LeControlBody::Flush(b) => b.push_nodes(node),
            LeControlBody::None | LeControlBody::Topology => {}
        }
    }
}

/// A decoded LE Control frame.
///
/// The header fields after the opcode are `None` for READY_QUERY and
/// READY_IND or when the frame ends before them, and `status` is only
/// present for responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeControlFrame<'a> {
    pub marker: u16,
    pub protocol: u8,
    pub version: u8,
    pub opcode: LeOpcode,
    pub status: Option<LeStatus>,
    pub transaction_id: Option<u32>,
    pub requester_lecid: Option<u16>,
    pub flags: Option<LeFlags>,
    pub body: LeControlBody<'a>,
    error: Option<Error>,
}

impl<'a> LeControlFrame<'a> {
    /// Decode an LE Control frame from the start of `buf`.
    ///
    /// Only a frame too short to carry its opcode fails. Past the opcode,
    /// the fields read before the end of the buffer are kept and the
    /// failure is reported through `error`. TLVs are kept up to the first
    /// bad one.
    pub fn parse(buf: &'a [u8]) -> Result<Self, Error> {
        let mut cursor = Cursor::new(buf);
        let marker = cursor.read_u16()?;
        let protocol = cursor.read_u8()?;
        let version = cursor.read_u8()?;
        let opcode = LeOpcode::from(cursor.read_u16()?);

        let mut frame = LeControlFrame {
            marker,
            protocol,
            version,
            opcode,
            status: None,
            transaction_id: None,
            requester_lecid: None,
            flags: None,
            body: LeControlBody::None,
            error: None,
        };
        if opcode.is_ready() {
            return Ok(frame);
        }
        if let Err(err) = frame.read_rest(&mut cursor) {
            log::debug!("LE Control {} cut short: {}", opcode, err);
            frame.error = Some(err);
        }
        Ok(frame)
    }

    fn read_rest(&mut self, cursor: &mut Cursor<'a>) -> Result<(), Error> {
        // The status slot is consumed for requests too.
        let status = cursor.read_u16()?;
        if self.opcode.is_response() {
            self.status = Some(LeStatus::from(status));
        }
        self.transaction_id = Some(cursor.read_u32()?);
        self.requester_lecid = Some(cursor.read_u16()?);
        self.flags = Some(LeFlags(cursor.read_u16()?));

        let (body, err) = LeControlBody::read(self.opcode, cursor);
        self.body = body;
        match err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// The error that cut the frame or its TLVs short.
    pub fn error(&self) -> Option<&Error> {
        self.error
            .as_ref()
            .or_else(|| self.body.tlvs().and_then(|t| t.error.as_ref()))
    }

    /// Column summary, e.g. `LE Control: LE_ARP_REQUEST`.
    pub fn info(&self) -> String {
        match self.opcode.name() {
            Some(name) => format!("LE Control: {}", name),
            None => format!("LE Control: Unknown opcode ({:#06x})", self.opcode.raw()),
        }
    }

    /// The frame as an `lane` record. `len` is the size of the LANE payload.
    pub fn node(&self, len: usize) -> Node {
        let mut node = Node::group("lane", 0, LE_CONTROL_FRAME_LEN.min(len))
            .with_child(Node::new("lane.marker", 0, 2, self.marker))
            .with_child(Node::new("lane.protocol", 2, 1, self.protocol))
            .with_child(Node::new("lane.version", 3, 1, self.version))
            .with_child(Node::new("lane.opcode", 4, 2, self.opcode));
        push_opt(&mut node, self.status, |s| Node::new("lane.status", 6, 2, s));
        push_opt(&mut node, self.transaction_id, |id| {
            Node::new("lane.transaction_id", 8, 4, id)
        });
        push_opt(&mut node, self.requester_lecid, |id| {
            Node::new("lane.requester_lecid", 12, 2, id)
        });
        push_opt(&mut node, self.flags, |f| f.node(self.opcode, 14));
        self.body.push_nodes(&mut node);
        if let Some(err) = self.error() {
            node.push(Node::error(err));
        }
        node
    }
}
