//! The protocols ATM traffic is handed to once the ATM layers are peeled off.
//!
//! Ethernet, Token Ring, LLC, SSCOP and ILMI are decoded elsewhere. The
//! caller plugs them in through a `DissectorTable`, built once and only read
//! afterwards, so one table can serve decoders on many threads.

use core::fmt;

use crate::pseudo::AtmPseudoHeader;
use crate::tree::Node;

/// A decoder for a payload carried over ATM.
///
/// Offsets in the returned node are relative to the start of `payload`; the
/// caller moves them to the frame.
pub trait Dissector: Send + Sync {
    fn dissect(&self, payload: &[u8], pseudo: &AtmPseudoHeader) -> Node;
}

impl<F> Dissector for F
where
    F: Fn(&[u8], &AtmPseudoHeader) -> Node + Send + Sync,
{
    fn dissect(&self, payload: &[u8], pseudo: &AtmPseudoHeader) -> Node {
        self(payload, pseudo)
    }
}

/// Records the payload as opaque bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawData;

impl Dissector for RawData {
    fn dissect(&self, payload: &[u8], _pseudo: &AtmPseudoHeader) -> Node {
        Node::new("data", 0, payload.len(), payload)
    }
}

/// The collaborators used by `AtmDecoder`.
pub struct DissectorTable {
    ethernet: Box<dyn Dissector>,
    token_ring: Box<dyn Dissector>,
    llc: Box<dyn Dissector>,
    sscop: Box<dyn Dissector>,
    ilmi: Box<dyn Dissector>,
    data: Box<dyn Dissector>,
}

impl DissectorTable {
    pub fn builder() -> DissectorTableBuilder {
        DissectorTableBuilder::default()
    }

    /// 802.3 frames carried over LANE.
    pub fn ethernet(&self) -> &dyn Dissector {
        self.ethernet.as_ref()
    }

    /// 802.5 frames carried over LANE.
    pub fn token_ring(&self) -> &dyn Dissector {
        self.token_ring.as_ref()
    }

    /// LLC multiplexed AAL5 traffic.
    pub fn llc(&self) -> &dyn Dissector {
        self.llc.as_ref()
    }

    /// Signalling AAL traffic.
    pub fn sscop(&self) -> &dyn Dissector {
        self.sscop.as_ref()
    }

    /// ILMI, which is SNMP over AAL5.
    pub fn ilmi(&self) -> &dyn Dissector {
        self.ilmi.as_ref()
    }

    /// Anything nobody else claims.
    pub fn data(&self) -> &dyn Dissector {
        self.data.as_ref()
    }
}

impl Default for DissectorTable {
    fn default() -> Self {
        DissectorTable::builder().build()
    }
}

impl fmt::Debug for DissectorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DissectorTable").finish_non_exhaustive()
    }
}

/// Builds a `DissectorTable`. Slots left empty fall back to `RawData`.
#[derive(Default)]
pub struct DissectorTableBuilder {
    ethernet: Option<Box<dyn Dissector>>,
    token_ring: Option<Box<dyn Dissector>>,
    llc: Option<Box<dyn Dissector>>,
    sscop: Option<Box<dyn Dissector>>,
    ilmi: Option<Box<dyn Dissector>>,
    data: Option<Box<dyn Dissector>>,
}

impl DissectorTableBuilder {
    pub fn ethernet<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.ethernet = Some(Box::new(d));
        self
    }

    pub fn token_ring<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.token_ring = Some(Box::new(d));
        self
    }

    pub fn llc<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.llc = Some(Box::new(d));
        self
    }

    pub fn sscop<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.sscop = Some(Box::new(d));
        self
    }

    pub fn ilmi<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.ilmi = Some(Box::new(d));
        self
    }

    pub fn data<D: Dissector + 'static>(mut self, d: D) -> Self {
        self.data = Some(Box::new(d));
        self
    }

    pub fn build(self) -> DissectorTable {
        let raw = || -> Box<dyn Dissector> { Box::new(RawData) };
        DissectorTable {
            ethernet: self.ethernet.unwrap_or_else(raw),
            token_ring: self.token_ring.unwrap_or_else(raw),
            llc: self.llc.unwrap_or_else(raw),
            sscop: self.sscop.unwrap_or_else(raw),
            ilmi: self.ilmi.unwrap_or_else(raw),
            data: self.data.unwrap_or_else(raw),
        }
    }
}

impl fmt::Debug for DissectorTableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DissectorTableBuilder").finish_non_exhaustive()
    }
}
