//! Decoding of complete ATM frames.
//!
//! A frame is either a single cell, header included, or a PDU reassembled
//! by the capture source. The pseudo-header decides which one it is.

use crate::aal::AalCell;
use crate::aal5::Aal5Pdu;
use crate::cell::{CellHeader, CELL_HEADER_LEN};
use crate::dissector::{Dissector, DissectorTable};
use crate::lane::{LeClientHeader, LeControlFrame, LE_CLIENT_HEADER_LEN};
use crate::pseudo::{
    Aal, AtmPseudoHeader, IpsilonSubtype, LaneSubtype, TrafficType, VcmxSubtype,
};
use crate::tree::{FieldValue, Node};
use crate::Error;

/// The captured bytes of one frame.
#[derive(Debug, Clone, Copy)]
pub struct AtmFrame<'a> {
    data: &'a [u8],
    reported_len: usize,
    truncated: bool,
}

impl<'a> AtmFrame<'a> {
    /// A frame captured in full, whose trailer is part of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        AtmFrame {
            data,
            reported_len: data.len(),
            truncated: false,
        }
    }

    /// Set the length the frame had on the wire.
    pub fn with_reported_len(mut self, reported_len: usize) -> Self {
        self.reported_len = reported_len;
        self
    }

    /// Mark the frame as stripped of its AAL5 trailer by the capture source.
    pub fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn reported_len(&self) -> usize {
        self.reported_len
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Everything decoded from one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmDissection {
    /// The `atm` record followed by the records of the inner layers.
    pub tree: Vec<Node>,
    /// Protocol column.
    pub protocol: String,
    /// Info column.
    pub info: String,
    /// Link-layer source, if the channel is known.
    pub src: Option<&'static str>,
    /// Link-layer destination, if the channel is known.
    pub dst: Option<&'static str>,
    /// Decode failures, each also present as a `malformed` node.
    pub errors: Vec<Error>,
}

impl AtmDissection {
    fn new(pseudo: &AtmPseudoHeader) -> Self {
        let info = if pseudo.aal == Aal::AAL5 {
            format!("AAL5 {}", pseudo.traffic_type)
        } else {
            pseudo.aal.to_string()
        };
        let (src, dst) = match pseudo.direction() {
            Some((src, dst)) => (Some(src), Some(dst)),
            None => (None, None),
        };
        AtmDissection {
            tree: Vec::new(),
            protocol: "ATM".to_string(),
            info,
            src,
            dst,
            errors: Vec::new(),
        }
    }

    /// Depth-first search through all records.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.tree.iter().find_map(|n| n.find(name))
    }

    fn fail(&mut self, err: Error) {
        log::debug!("ATM decode failed: {}", err);
        self.tree.push(Node::error(&err));
        self.errors.push(err);
    }
}

/// Decodes ATM frames, handing inner payloads to a `DissectorTable`.
///
/// The decoder keeps no per-frame state; a shared reference can decode on
/// many threads at once.
#[derive(Debug, Default)]
pub struct AtmDecoder {
    table: DissectorTable,
}

impl AtmDecoder {
    pub fn new(table: DissectorTable) -> Self {
        AtmDecoder { table }
    }

    pub fn table(&self) -> &DissectorTable {
        &self.table
    }

    pub fn decode(&self, frame: &AtmFrame<'_>, pseudo: &AtmPseudoHeader) -> AtmDissection {
        let mut d = AtmDissection::new(pseudo);
        let mut atm = Node::group("atm", 0, 0)
            .with_child(channel_node(pseudo))
            .with_child(Node::new("atm.aal", 0, 0, pseudo.aal));

        if pseudo.is_reassembled() {
            log::trace!("reassembled {} PDU, {} bytes", pseudo.aal, frame.data.len());
            self.decode_reassembled(frame, pseudo, &mut atm, &mut d);
        } else {
            log::trace!("single {} cell", pseudo.aal);
            atm.len = CELL_HEADER_LEN;
            self.decode_cell(frame.data, pseudo, &mut atm, &mut d);
        }
        d.tree.insert(0, atm);
        d
    }

    fn decode_cell(
        &self,
        data: &[u8],
        pseudo: &AtmPseudoHeader,
        atm: &mut Node,
        d: &mut AtmDissection,
    ) {
        let header = match CellHeader::parse(data) {
            Ok(header) => header,
            Err(err) => return d.fail(err),
        };
        atm.children.extend(header.nodes());

        match AalCell::parse(header.payload(), pseudo.aal) {
            Ok(AalCell::Unknown(rest)) => {
                self.call(self.table.data(), rest, pseudo, CELL_HEADER_LEN, d)
            }
            Ok(cell) => {
                if let Some(protocol) = cell.protocol() {
                    d.protocol = protocol.to_string();
                }
                if let Some(info) = cell.info() {
                    d.info = info;
                }
                d.tree.extend(cell.node(CELL_HEADER_LEN));
            }
            Err(err) => d.fail(err.shifted(CELL_HEADER_LEN)),
        }
    }

    fn decode_reassembled(
        &self,
        frame: &AtmFrame<'_>,
        pseudo: &AtmPseudoHeader,
        atm: &mut Node,
        d: &mut AtmDissection,
    ) {
        // The cell headers are gone, VPI/VCI come from the pseudo-header.
        atm.push(Node::new("atm.vpi", 0, 0, pseudo.vpi));
        atm.push(Node::new("atm.vci", 0, 0, pseudo.vci));
        if pseudo.aal == Aal::AAL5 {
            atm.push(Node::new("atm.traffic_type", 0, 0, pseudo.traffic_type));
            if let Some(value) = subtype_value(pseudo) {
                atm.push(Node::new("atm.subtype", 0, 0, value));
            }
        }

        let pdu = match Aal5Pdu::parse(frame.data, frame.reported_len, pseudo, frame.truncated) {
            Ok(pdu) => pdu,
            Err(err) => return d.fail(err),
        };
        atm.children.extend(pdu.nodes());
        if let Some(err) = pdu.error() {
            return d.fail(err.clone());
        }
        let payload = pdu.payload();

        if pseudo.aal == Aal::SIGNALLING {
            return self.call(self.table.sscop(), payload, pseudo, 0, d);
        }
        match pseudo.traffic_type {
            TrafficType::LLCMX => self.call(self.table.llc(), payload, pseudo, 0, d),
            TrafficType::LANE => self.decode_lane(payload, pseudo, d),
            TrafficType::ILMI => self.call(self.table.ilmi(), payload, pseudo, 0, d),
            _ => self.call(self.table.data(), payload, pseudo, 0, d),
        }
    }

    fn decode_lane(&self, payload: &[u8], pseudo: &AtmPseudoHeader, d: &mut AtmDissection) {
        d.protocol = "ATM LANE".to_string();
        let subtype = LaneSubtype::from(pseudo.subtype);
        log::trace!("LANE traffic: {}", subtype);

        match subtype {
            LaneSubtype::LE_CTRL => {
                d.info = "LE Control".to_string();
                match LeControlFrame::parse(payload) {
                    Ok(frame) => {
                        d.info = frame.info();
                        if let Some(err) = frame.error() {
                            log::debug!("LE Control frame cut short: {}", err);
                            d.errors.push(err.clone());
                        }
                        d.tree.push(frame.node(payload.len()));
                    }
                    Err(err) => d.fail(err),
                }
            }
            LaneSubtype::LANE_802_3 | LaneSubtype::LANE_802_3_MC => {
                d.info = "LE Client - Ethernet/802.3".to_string();
                self.decode_le_client(self.table.ethernet(), payload, pseudo, d);
            }
            LaneSubtype::LANE_802_5 | LaneSubtype::LANE_802_5_MC => {
                d.info = "LE Client - 802.5".to_string();
                self.decode_le_client(self.table.token_ring(), payload, pseudo, d);
            }
            _ => {
                d.info = "Unknown LANE traffic type".to_string();
                self.call(self.table.data(), payload, pseudo, 0, d);
            }
        }
    }

    fn decode_le_client(
        &self,
        lan: &dyn Dissector,
        payload: &[u8],
        pseudo: &AtmPseudoHeader,
        d: &mut AtmDissection,
    ) {
        match LeClientHeader::parse(payload) {
            Ok(header) => {
                d.tree.push(header.node());
                self.call(lan, header.payload(), pseudo, LE_CLIENT_HEADER_LEN, d);
            }
            Err(err) => d.fail(err),
        }
    }

    fn call(
        &self,
        dissector: &dyn Dissector,
        payload: &[u8],
        pseudo: &AtmPseudoHeader,
        base: usize,
        d: &mut AtmDissection,
    ) {
        d.tree.push(dissector.dissect(payload, pseudo).shifted(base));
    }
}

fn channel_node(pseudo: &AtmPseudoHeader) -> Node {
    let value = match pseudo.direction() {
        Some((src, dst)) => FieldValue::Text(format!("{}->{}", src, dst)),
        None => FieldValue::Uint(pseudo.channel as u64),
    };
    Node::new("atm.channel", 0, 0, value)
}

fn subtype_value(pseudo: &AtmPseudoHeader) -> Option<FieldValue> {
    match pseudo.traffic_type {
        TrafficType::VCMX => Some(VcmxSubtype::from(pseudo.subtype).into()),
        TrafficType::LANE => Some(LaneSubtype::from(pseudo.subtype).into()),
        TrafficType::IPSILON => Some(IpsilonSubtype::from(pseudo.subtype).into()),
        _ => None,
    }
}
