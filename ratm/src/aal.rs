//! Single-cell adaptation layer bodies: AAL1, AAL3/4 and OAM.
//!
//! Each body occupies the 48-byte payload that follows the cell header.
//! `AalCell` selects the right view from the AAL carried in the
//! pseudo-header; any other AAL yields `AalCell::Unknown` with the raw
//! payload, which the caller hands to the raw data dissector.

use byteorder::{BigEndian, ByteOrder};
use bytes::Buf;

use crate::bits::bit_field;
use crate::pseudo::Aal;
use crate::tree::Node;
use crate::Error;

/// Fixed length of every single-cell AAL body.
pub const AAL_CELL_BODY_LEN: usize = 48;
/// Length of the AAL1 payload following the SAR header byte.
pub const AAL1_PAYLOAD_LEN: usize = 47;
/// Length of the AAL3/4 information field.
pub const AAL3_4_INFO_LEN: usize = 44;
/// Length of the OAM function-specific information field.
pub const OAM_FUNCTION_INFO_LEN: usize = 45;

#[inline]
fn check_body(buf: &impl Buf) -> Result<(), Error> {
    let chunk_len = buf.chunk().len();
    if chunk_len < AAL_CELL_BODY_LEN {
        return Err(Error::truncated(0, AAL_CELL_BODY_LEN, chunk_len));
    }
    Ok(())
}

/// An AAL1 SAR-PDU.
#[derive(Debug, Clone, Copy)]
pub struct Aal1Cell<T> {
    buf: T,
}

impl<T: Buf> Aal1Cell<T> {
    #[inline]
    pub fn parse(buf: T) -> Result<Self, Error> {
        check_body(&buf)?;
        Ok(Self { buf })
    }

    #[inline]
    pub fn csi(&self) -> u8 {
        self.buf.chunk()[0] >> 7
    }

    #[inline]
    pub fn sequence_count(&self) -> u8 {
        (self.buf.chunk()[0] >> 4) & 0x07
    }

    #[inline]
    pub fn crc(&self) -> u8 {
        (self.buf.chunk()[0] >> 1) & 0x07
    }

    #[inline]
    pub fn parity(&self) -> u8 {
        self.buf.chunk()[0] & 0x01
    }

    #[inline]
    pub fn payload_slice(&self) -> &[u8] {
        &self.buf.chunk()[1..1 + AAL1_PAYLOAD_LEN]
    }

    fn node(&self, offset: usize) -> Node {
        Node::group("aal1", offset, AAL_CELL_BODY_LEN)
            .with_child(Node::new("aal1.csi", offset, 1, self.csi()))
            .with_child(Node::new("aal1.seq_count", offset, 1, self.sequence_count()))
            .with_child(Node::new("aal1.crc", offset, 1, self.crc()))
            .with_child(Node::new("aal1.parity", offset, 1, self.parity()))
            .with_child(Node::new(
                "aal1.payload",
                offset + 1,
                AAL1_PAYLOAD_LEN,
                self.payload_slice(),
            ))
    }
}

enum_sim! {
    /// An enum-like type for representing the AAL3/4 segment type.
    ///
    /// The bit patterns are not in protocol order: BOM is 2, COM is 0.
    pub struct SegmentType (u8) {
        /// Beginning of message.
        BOM = 2 => "BOM",
        /// Continuation of message.
        COM = 0 => "COM",
        /// End of message.
        EOM = 1 => "EOM",
        /// Single segment message.
        SSM = 3 => "SSM",
    }
}

/// An AAL3/4 SAR-PDU.
#[derive(Debug, Clone, Copy)]
pub struct Aal34Cell<T> {
    buf: T,
}

impl<T: Buf> Aal34Cell<T> {
    #[inline]
    pub fn parse(buf: T) -> Result<Self, Error> {
        check_body(&buf)?;
        Ok(Self { buf })
    }

    #[inline]
    fn header(&self) -> u64 {
        BigEndian::read_u16(&self.buf.chunk()[0..2]) as u64
    }

    #[inline]
    fn trailer(&self) -> u64 {
        BigEndian::read_u16(&self.buf.chunk()[46..48]) as u64
    }

    #[inline]
    pub fn segment_type(&self) -> SegmentType {
        SegmentType::from(bit_field(self.header(), 0xc000) as u8)
    }

    #[inline]
    pub fn sequence_number(&self) -> u8 {
        bit_field(self.header(), 0x3c00) as u8
    }

    #[inline]
    pub fn multiplex_id(&self) -> u16 {
        bit_field(self.header(), 0x03ff) as u16
    }

    #[inline]
    pub fn information(&self) -> &[u8] {
        &self.buf.chunk()[2..2 + AAL3_4_INFO_LEN]
    }

    #[inline]
    pub fn length_indicator(&self) -> u8 {
        bit_field(self.trailer(), 0xfc00) as u8
    }

    #[inline]
    pub fn crc(&self) -> u16 {
        bit_field(self.trailer(), 0x03ff) as u16
    }

    fn node(&self, offset: usize) -> Node {
        Node::group("aal3_4", offset, AAL_CELL_BODY_LEN)
            .with_child(Node::new("aal3_4.st", offset, 2, self.segment_type()))
            .with_child(Node::new("aal3_4.sn", offset, 2, self.sequence_number()))
            .with_child(Node::new("aal3_4.mid", offset, 2, self.multiplex_id()))
            .with_child(Node::new(
                "aal3_4.information",
                offset + 2,
                AAL3_4_INFO_LEN,
                self.information(),
            ))
            .with_child(Node::new("aal3_4.li", offset + 46, 2, self.length_indicator()))
            .with_child(Node::new("aal3_4.crc", offset + 46, 2, self.crc()))
    }
}

enum_sim! {
    /// An enum-like type for representing the OAM cell type.
    pub struct OamType (u8) {
        /// Fault management.
        FAULT_MANAGEMENT = 1 => "Fault Management",
        /// Performance management.
        PERFORMANCE_MANAGEMENT = 2 => "Performance Management",
        /// Activation/deactivation.
        ACTIVATION_DEACTIVATION = 8 => "Activation/Deactivation",
    }
}

enum_sim! {
    /// Function types of fault management OAM cells.
    pub struct FaultManagementFunction (u8) {
        /// AIS.
        AIS = 0 => "Alarm Indication Signal",
        /// FERF.
        FERF = 1 => "Far End Receive Failure",
        /// Loopback.
        LOOPBACK = 8 => "OAM Cell Loopback",
        /// Continuity check.
        CONTINUITY_CHECK = 4 => "Continuity Check",
    }
}

enum_sim! {
    /// Function types of performance management OAM cells.
    pub struct PerformanceManagementFunction (u8) {
        /// Forward monitoring.
        FORWARD_MONITORING = 0 => "Forward Monitoring",
        /// Backward reporting.
        BACKWARD_REPORTING = 1 => "Backward Reporting",
        /// Monitoring and reporting.
        MONITORING_AND_REPORTING = 2 => "Monitoring and Reporting",
    }
}

enum_sim! {
    /// Function types of activation/deactivation OAM cells.
    pub struct ActivationFunction (u8) {
        /// Performance monitoring.
        PERFORMANCE_MONITORING = 0 => "Performance Monitoring",
        /// Continuity check.
        CONTINUITY_CHECK = 1 => "Continuity Check",
    }
}

/// The OAM function type, scoped to the OAM type that selects its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OamFunction {
    /// Function of a fault management cell.
    FaultManagement(FaultManagementFunction),
    /// Function of a performance management cell.
    PerformanceManagement(PerformanceManagementFunction),
    /// Function of an activation/deactivation cell.
    Activation(ActivationFunction),
    /// Function nibble of an unrecognized OAM type, shown as a number.
    Other(u8),
}

impl OamFunction {
    /// The raw 4-bit function type.
    pub fn raw(&self) -> u8 {
        match self {
            OamFunction::FaultManagement(f) => f.raw(),
            OamFunction::PerformanceManagement(f) => f.raw(),
            OamFunction::Activation(f) => f.raw(),
            OamFunction::Other(v) => *v,
        }
    }

    fn field_value(&self) -> crate::tree::FieldValue {
        match self {
            OamFunction::FaultManagement(f) => (*f).into(),
            OamFunction::PerformanceManagement(f) => (*f).into(),
            OamFunction::Activation(f) => (*f).into(),
            OamFunction::Other(v) => (*v).into(),
        }
    }
}

/// An OAM cell body.
#[derive(Debug, Clone, Copy)]
pub struct OamCell<T> {
    buf: T,
}

impl<T: Buf> OamCell<T> {
    #[inline]
    pub fn parse(buf: T) -> Result<Self, Error> {
        check_body(&buf)?;
        Ok(Self { buf })
    }

    #[inline]
    pub fn oam_type(&self) -> OamType {
        OamType::from(self.buf.chunk()[0] >> 4)
    }

    #[inline]
    pub fn function_type(&self) -> OamFunction {
        let ft = self.buf.chunk()[0] & 0x0f;
        match self.oam_type() {
            OamType::FAULT_MANAGEMENT => OamFunction::FaultManagement(ft.into()),
            OamType::PERFORMANCE_MANAGEMENT => OamFunction::PerformanceManagement(ft.into()),
            OamType::ACTIVATION_DEACTIVATION => OamFunction::Activation(ft.into()),
            _ => OamFunction::Other(ft),
        }
    }

    #[inline]
    pub fn function_specific_info(&self) -> &[u8] {
        &self.buf.chunk()[1..1 + OAM_FUNCTION_INFO_LEN]
    }

    #[inline]
    pub fn crc10(&self) -> u16 {
        BigEndian::read_u16(&self.buf.chunk()[46..48]) & 0x3ff
    }

    fn node(&self, offset: usize) -> Node {
        Node::group("oamaal", offset, AAL_CELL_BODY_LEN)
            .with_child(Node::new("oamaal.type", offset, 1, self.oam_type()))
            .with_child(Node::new(
                "oamaal.function",
                offset,
                1,
                self.function_type().field_value(),
            ))
            .with_child(Node::new(
                "oamaal.function_info",
                offset + 1,
                OAM_FUNCTION_INFO_LEN,
                self.function_specific_info(),
            ))
            .with_child(Node::new("oamaal.crc10", offset + 46, 2, self.crc10()))
    }
}

/// The body of a single cell, selected by the AAL of the pseudo-header.
#[derive(Debug, Clone, Copy)]
pub enum AalCell<T> {
    /// AAL1 cell.
    Aal1(Aal1Cell<T>),
    /// AAL3/4 cell.
    Aal34(Aal34Cell<T>),
    /// OAM cell.
    Oam(OamCell<T>),
    /// Any other AAL, the payload is left undecoded.
    Unknown(T),
}

impl<T: Buf> AalCell<T> {
    /// Decode the 48-byte body following the cell header.
    ///
    /// An AAL without a single-cell decoder is not an error, the buffer is
    /// returned untouched in `AalCell::Unknown`.
    pub fn parse(buf: T, aal: Aal) -> Result<Self, Error> {
        match aal {
            Aal::AAL1 => Aal1Cell::parse(buf).map(AalCell::Aal1),
            Aal::AAL3_4 => Aal34Cell::parse(buf).map(AalCell::Aal34),
            Aal::OAMCELL => OamCell::parse(buf).map(AalCell::Oam),
            _ => Ok(AalCell::Unknown(buf)),
        }
    }

    /// The protocol name shown for the decoded layer.
    pub fn protocol(&self) -> Option<&'static str> {
        match self {
            AalCell::Aal1(_) => Some("AAL1"),
            AalCell::Aal34(_) => Some("AAL3/4"),
            AalCell::Oam(_) => Some("OAM AAL"),
            AalCell::Unknown(_) => None,
        }
    }

    /// A one-line summary of the cell, if the layer provides one.
    pub fn info(&self) -> Option<String> {
        match self {
            AalCell::Aal1(cell) => Some(format!("Sequence count = {}", cell.sequence_count())),
            AalCell::Aal34(cell) => Some(format!(
                "{}, sequence number = {}",
                cell.segment_type(),
                cell.sequence_number()
            )),
            _ => None,
        }
    }

    /// The decoded fields, the body starting at `offset` in the frame.
    pub fn node(&self, offset: usize) -> Option<Node> {
        match self {
            AalCell::Aal1(cell) => Some(cell.node(offset)),
            AalCell::Aal34(cell) => Some(cell.node(offset)),
            AalCell::Oam(cell) => Some(cell.node(offset)),
            AalCell::Unknown(_) => None,
        }
    }
}
