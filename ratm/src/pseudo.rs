//! Out-of-band metadata supplied by the capture source for every ATM frame.

enum_sim! {
    /// An enum-like type for representing the ATM adaptation layer of a frame.
    pub struct Aal (u8) {
        /// The capture source does not know the AAL.
        UNKNOWN = 0 => "Unknown AAL",
        /// AAL1, single cell.
        AAL1 = 1 => "AAL1",
        /// AAL2.
        AAL2 = 2 => "AAL2",
        /// AAL3/4, single cell.
        AAL3_4 = 3 => "AAL3/4",
        /// AAL5, reassembled PDU.
        AAL5 = 4 => "AAL5",
        /// User-defined AAL.
        USER = 5 => "User AAL",
        /// Signalling AAL, reassembled PDU.
        SIGNALLING = 6 => "Signalling AAL",
        /// OAM cell.
        OAMCELL = 7 => "OAM cell",
    }
}

enum_sim! {
    /// An enum-like type for representing the higher-level traffic carried by AAL5.
    pub struct TrafficType (u8) {
        /// Unknown traffic.
        UNKNOWN = 0 => "Unknown traffic type",
        /// LLC multiplexed (RFC 1483).
        LLCMX = 1 => "LLC multiplexed",
        /// VC multiplexed.
        VCMX = 2 => "VC multiplexed",
        /// LAN Emulation.
        LANE = 3 => "LANE",
        /// ILMI.
        ILMI = 4 => "ILMI",
        /// Frame Relay.
        FR = 5 => "Frame Relay",
        /// FORE SPANS.
        SPANS = 6 => "FORE SPANS",
        /// Ipsilon.
        IPSILON = 7 => "Ipsilon",
    }
}

enum_sim! {
    /// Traffic subtypes for LANE traffic.
    pub struct LaneSubtype (u8) {
        /// Unknown LANE traffic.
        UNKNOWN = 0 => "Unknown LANE traffic type",
        /// LE Control frames.
        LE_CTRL = 1 => "LE Control",
        /// 802.3 data frames.
        LANE_802_3 = 2 => "802.3",
        /// 802.5 data frames.
        LANE_802_5 = 3 => "802.5",
        /// 802.3 multicast data frames.
        LANE_802_3_MC = 4 => "802.3 multicast",
        /// 802.5 multicast data frames.
        LANE_802_5_MC = 5 => "802.5 multicast",
    }
}

enum_sim! {
    /// Traffic subtypes for VC multiplexed traffic.
    pub struct VcmxSubtype (u8) {
        /// Unknown VC multiplexed traffic.
        UNKNOWN = 0 => "Unknown VC multiplexed traffic type",
        /// 802.3 with FCS.
        VCMX_802_3_FCS = 1 => "802.3 FCS",
        /// 802.4 with FCS.
        VCMX_802_4_FCS = 2 => "802.4 FCS",
        /// 802.5 with FCS.
        VCMX_802_5_FCS = 3 => "802.5 FCS",
        /// FDDI with FCS.
        VCMX_FDDI_FCS = 4 => "FDDI FCS",
        /// 802.6 with FCS.
        VCMX_802_6_FCS = 5 => "802.6 FCS",
        /// 802.3.
        VCMX_802_3 = 6 => "802.3",
        /// 802.4.
        VCMX_802_4 = 7 => "802.4",
        /// 802.5.
        VCMX_802_5 = 8 => "802.5",
        /// FDDI.
        VCMX_FDDI = 9 => "FDDI",
        /// 802.6.
        VCMX_802_6 = 10 => "802.6",
        /// Fragments.
        VCMX_FRAGMENTS = 11 => "Fragments",
        /// BPDU.
        VCMX_BPDU = 12 => "BPDU",
    }
}

enum_sim! {
    /// Traffic subtypes for Ipsilon traffic.
    pub struct IpsilonSubtype (u8) {
        /// Unknown Ipsilon traffic.
        UNKNOWN = 0 => "Unknown Ipsilon traffic type",
        /// Flow type 0.
        FT0 = 1 => "Flow type 0",
        /// Flow type 1.
        FT1 = 2 => "Flow type 1",
        /// Flow type 2.
        FT2 = 3 => "Flow type 2",
    }
}

/// Traffic from DTE to DCE.
pub const CHANNEL_DTE_TO_DCE: u8 = 0;
/// Traffic from DCE to DTE.
pub const CHANNEL_DCE_TO_DTE: u8 = 1;

/// The per-frame metadata that travels next to the captured bytes.
///
/// For reassembled traffic the cell headers are gone, so VPI/VCI come from
/// here. When the capture source stripped the AAL5 trailer, `cells` and the
/// `aal5t_*` fields carry what it contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtmPseudoHeader {
    /// Link direction, see `CHANNEL_DTE_TO_DCE` and `CHANNEL_DCE_TO_DTE`.
    pub channel: u8,
    /// The adaptation layer.
    pub aal: Aal,
    /// Virtual path identifier.
    pub vpi: u16,
    /// Virtual channel identifier.
    pub vci: u16,
    /// Higher-level traffic type, meaningful for AAL5.
    pub traffic_type: TrafficType,
    /// Traffic subtype, interpreted according to `traffic_type`.
    pub subtype: u8,
    /// Number of cells in the PDU, 0 if unknown.
    pub cells: u32,
    /// AAL5 trailer UU (high byte) and CPI (low byte).
    pub aal5t_u2u: u16,
    /// AAL5 trailer length.
    pub aal5t_len: u16,
    /// AAL5 trailer CRC-32.
    pub aal5t_chksum: u32,
}

impl Default for AtmPseudoHeader {
    fn default() -> Self {
        AtmPseudoHeader {
            channel: CHANNEL_DTE_TO_DCE,
            aal: Aal::UNKNOWN,
            vpi: 0,
            vci: 0,
            traffic_type: TrafficType::UNKNOWN,
            subtype: 0,
            cells: 0,
            aal5t_u2u: 0,
            aal5t_len: 0,
            aal5t_chksum: 0,
        }
    }
}

impl AtmPseudoHeader {
    /// Pseudo-header for a single cell of the given AAL.
    pub fn cell(aal: Aal) -> Self {
        AtmPseudoHeader {
            aal,
            ..Default::default()
        }
    }

    /// Pseudo-header for a reassembled AAL5 PDU.
    pub fn aal5(traffic_type: TrafficType, subtype: u8) -> Self {
        AtmPseudoHeader {
            aal: Aal::AAL5,
            traffic_type,
            subtype,
            ..Default::default()
        }
    }

    /// The `(source, destination)` pair implied by the channel, if known.
    pub fn direction(&self) -> Option<(&'static str, &'static str)> {
        match self.channel {
            CHANNEL_DTE_TO_DCE => Some(("DTE", "DCE")),
            CHANNEL_DCE_TO_DTE => Some(("DCE", "DTE")),
            _ => None,
        }
    }

    /// Whether the frame is a reassembled PDU rather than a single cell.
    pub fn is_reassembled(&self) -> bool {
        self.aal == Aal::AAL5 || self.aal == Aal::SIGNALLING
    }
}
