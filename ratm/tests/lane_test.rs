mod common;
use common::*;

use std::sync::{Arc, Mutex};

use pnet::packet::ethernet::{EtherTypes, EthernetPacket, MutableEthernetPacket};
use pnet::packet::{MutablePacket, Packet};
use pnet::util::MacAddr;
use smoltcp::wire::EthernetAddress;

use ratm::dissector::DissectorTable;
use ratm::lane::*;
use ratm::pseudo::*;
use ratm::tree::{FieldValue, Node};
use ratm::{AtmDecoder, AtmFrame, Error};

fn lane_pseudo_header(subtype: LaneSubtype) -> AtmPseudoHeader {
    let mut ph = AtmPseudoHeader::aal5(TrafficType::LANE, subtype.raw());
    ph.vpi = 0;
    ph.vci = 33;
    ph
}

// Wrap `payload` into a full AAL5 PDU with padding and trailer.
fn aal5_pdu(payload: &[u8]) -> Vec<u8> {
    let cells = (payload.len() + 8 + 47) / 48;
    let mut pdu = payload.to_vec();
    pdu.resize(cells * 48 - 8, 0);
    pdu.extend_from_slice(&[0x00, 0x00]);
    pdu.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    pdu.extend_from_slice(&0x89abcdefu32.to_be_bytes());
    pdu
}

fn ethernet(payload: &[u8], _: &AtmPseudoHeader) -> Node {
    let pkt = match EthernetPacket::new(payload) {
        Some(pkt) => pkt,
        None => return Node::new("eth", 0, payload.len(), payload),
    };
    Node::group("eth", 0, payload.len())
        .with_child(Node::new("eth.dst", 0, 6, pkt.get_destination().to_string()))
        .with_child(Node::new("eth.src", 6, 6, pkt.get_source().to_string()))
        .with_child(Node::new("eth.type", 12, 2, pkt.get_ethertype().0))
        .with_child(Node::new("eth.payload", 14, pkt.payload().len(), pkt.payload()))
}

#[test]
fn le_configure_request_parsing_test() {
    let packet = file_to_packet("le_configure_request.dat");
    assert_eq!(packet.len(), 129);

    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.marker, 0xff00);
    assert_eq!(frame.protocol, 1);
    assert_eq!(frame.version, 1);
    assert_eq!(frame.opcode, LeOpcode::CONFIGURE_REQUEST);
    assert_eq!(frame.status, None);
    assert_eq!(frame.transaction_id, Some(0x0b0e));
    assert_eq!(frame.requester_lecid, Some(0));
    assert_eq!(frame.flags, Some(LeFlags(LeFlags::V2_CAPABLE)));
    assert!(frame.error().is_none());

    let body = match &frame.body {
        LeControlBody::ConfigureJoin(body) => body,
        other => panic!("unexpected body {:?}", other),
    };
    assert_eq!(
        body.source.unwrap().value(),
        LanDestValue::MacAddress(EthernetAddress([0x00, 0x20, 0x48, 0x1a, 0x2b, 0x3c]))
    );
    assert_eq!(
        body.target.unwrap().value(),
        LanDestValue::RouteDescriptor {
            lan_id: 0x123,
            bridge_number: 5
        }
    );
    let source_atm = body.source_atm.unwrap();
    assert_eq!(source_atm.0[0], 0x47);
    assert_eq!(
        source_atm.to_string(),
        "47000580ffe1000000f21a2b3c0020481a2b3c00"
    );
    assert_eq!(body.lan_type, Some(LanType::ETHERNET));
    assert_eq!(body.max_frame_size.unwrap().to_string(), "1516/1528/1580/1592");
    assert_eq!(body.elan_name_size, Some(40));
    assert_eq!(body.target_atm.unwrap().0[14..16], [0xa0, 0x3e]);
    assert_eq!(body.elan_name, Some(&b"engineering-elan-building-4-floo"[..]));

    assert_eq!(body.num_tlvs, Some(3));
    let tlvs = body.tlvs.as_ref().unwrap();
    assert!(tlvs.error.is_none());
    assert_eq!(tlvs.tlvs.len(), 3);
    assert_eq!(tlvs.tlvs[0].tlv_type(), LeTlvType::CONTROL_TIMEOUT);
    assert_eq!(tlvs.tlvs[0].offset(), LE_CONTROL_FRAME_LEN);
    assert_eq!(tlvs.tlvs[0].value(), &[0x00, 0x78]);
    assert_eq!(tlvs.tlvs[1].tlv_type(), LeTlvType::ELAN_ID);
    assert_eq!(tlvs.tlvs[1].offset(), 115);
    assert_eq!(tlvs.tlvs[1].value(), &[0, 0, 0, 7]);
    assert_eq!(tlvs.tlvs[2].tlv_type().to_string(), "X5 Adjustment");
    assert_eq!(tlvs.tlvs[2].length(), 0);
    let consumed: usize = tlvs.tlvs.iter().map(|t| t.wire_len()).sum();
    assert_eq!(LE_CONTROL_FRAME_LEN + consumed, packet.len());

    let (walked, end) = walk_tlvs(&packet[..], LE_CONTROL_FRAME_LEN, 3).unwrap();
    assert_eq!(walked, tlvs.tlvs);
    assert_eq!(end, packet.len());
}

#[test]
fn le_configure_request_over_aal5() {
    let packet = file_to_packet("le_configure_request.dat");
    let pdu = aal5_pdu(&packet[..]);
    let ph = lane_pseudo_header(LaneSubtype::LE_CTRL);

    let d = AtmDecoder::default().decode(&AtmFrame::new(&pdu[..]), &ph);
    assert_eq!(d.protocol, "ATM LANE");
    assert_eq!(d.info, "LE Control: LE_CONFIGURE_REQUEST");
    assert!(d.errors.is_empty());
    assert_eq!(d.find("atm.subtype").unwrap().value.to_string(), "LE Control");
    assert_eq!(d.find("atm.cells").unwrap().value.as_uint(), Some(3));
    assert_eq!(d.find("atm.aal5.len").unwrap().value.as_uint(), Some(129));

    let lane = &d.tree[1];
    assert_eq!((lane.name, lane.offset, lane.len), ("lane", 0, LE_CONTROL_FRAME_LEN));
    assert!(lane.child("lane.status").is_none());
    assert_eq!(
        lane.child("lane.flags").unwrap().children[0],
        Node::new("lane.flags.v2_capable", 14, 2, true)
    );

    let source = lane.child("lane.source").unwrap();
    assert_eq!((source.offset, source.len), (16, 8));
    assert_eq!(
        source.child("lane.lan_dest.mac").unwrap().value.to_string(),
        "00-20-48-1a-2b-3c"
    );
    let target = lane.child("lane.target").unwrap();
    assert_eq!(
        target.find("lane.lan_dest.bridge_number").unwrap().value,
        FieldValue::Uint(5)
    );

    assert_eq!(lane.child("lane.lan_type").unwrap().value.to_string(), "Ethernet/802.3");
    assert_eq!(lane.child("lane.num_tlvs").unwrap().offset, 54);
    let name = lane.child("lane.elan_name").unwrap();
    assert_eq!((name.offset, name.len), (76, 32));

    let tlvs = find_all(&d.tree, "lane.tlv");
    assert_eq!(tlvs.len(), 3);
    assert_eq!((tlvs[1].offset, tlvs[1].len), (115, 9));
    assert_eq!(tlvs[1].value.to_string(), "ELAN ID");
    assert!(tlvs[2].child("lane.tlv.value").is_none());
}

#[test]
fn elan_name_shorter_than_slot() {
    let mut packet = file_to_packet("le_configure_request.dat");
    packet[55] = 11;
    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    match &frame.body {
        LeControlBody::ConfigureJoin(body) => assert_eq!(body.elan_name, Some(&b"engineering"[..])),
        other => panic!("unexpected body {:?}", other),
    }

    packet[55] = 0;
    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert!(frame.node(packet.len()).child("lane.elan_name").is_none());
}

#[test]
fn le_arp_response_parsing_test() {
    let packet = file_to_packet("le_arp_response.dat");

    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.opcode, LeOpcode::ARP_RESPONSE);
    assert!(frame.opcode.is_response());
    assert_eq!(frame.status, Some(LeStatus::SUCCESS));
    assert_eq!(frame.transaction_id, Some(0x00c0ffee));
    assert_eq!(frame.requester_lecid, Some(3));
    assert!(frame.flags.unwrap().contains(LeFlags::REMOTE_ADDRESS));

    let body = match &frame.body {
        LeControlBody::Arp(body) => body,
        other => panic!("unexpected body {:?}", other),
    };
    assert_eq!(
        body.target.unwrap().mac_addr(),
        Some(EthernetAddress([0x00, 0x60, 0x08, 0xaa, 0xbb, 0xcc]))
    );
    assert_eq!(body.num_tlvs, Some(1));
    let tlvs = body.tlvs.as_ref().unwrap();
    assert_eq!(tlvs.tlvs[0].tlv_type(), LeTlvType::LAYER3_ADDRESS);
    assert_eq!(tlvs.tlvs[0].value(), &[10, 0, 0, 1]);

    let node = frame.node(packet.len());
    assert_eq!(node.child("lane.status").unwrap().value.to_string(), "Success");
    let remote = node.find("lane.flags.remote_address").unwrap();
    assert_eq!(remote.value, FieldValue::Bool(true));
    assert_eq!(node.child("lane.target_atm").unwrap().offset, 56);

    // the same layout as a NARP request hides the remote address flag
    let mut narp = packet.clone();
    narp[4..6].copy_from_slice(&0x0008u16.to_be_bytes());
    let frame = LeControlFrame::parse(&narp[..]).unwrap();
    assert!(matches!(frame.body, LeControlBody::Arp(_)));
    assert_eq!(frame.status, None);
    assert!(frame.node(narp.len()).find("lane.flags.remote_address").is_none());
}

#[test]
fn ready_query_stops_after_opcode() {
    let packet = file_to_packet("le_ready_query.dat");
    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.opcode, LeOpcode::READY_QUERY);
    assert_eq!(frame.transaction_id, None);
    assert_eq!(frame.requester_lecid, None);
    assert_eq!(frame.flags, None);
    assert_eq!(frame.body, LeControlBody::None);

    let mut ph = lane_pseudo_header(LaneSubtype::LE_CTRL);
    ph.cells = 0;
    let d = AtmDecoder::default().decode(&AtmFrame::new(&packet[..]).truncated(true), &ph);
    assert_eq!(d.info, "LE Control: READY_QUERY");
    assert!(d.errors.is_empty());
    assert!(d.find("lane.transaction_id").is_none());
    assert_eq!(d.find("lane.opcode").unwrap().offset, 4);
}

#[test]
fn tlv_overrun_keeps_earlier_tlvs() {
    let packet = file_to_packet("le_configure_request.dat");
    let cut = &packet[..120];

    let frame = LeControlFrame::parse(cut).unwrap();
    let tlvs = frame.body.tlvs().unwrap();
    assert_eq!(tlvs.tlvs.len(), 1);
    let err = Error::MalformedLength {
        what: "TLV",
        offset: 119,
        declared: 4,
        available: 0,
    };
    assert_eq!(frame.error(), Some(&err));

    let mut ph = lane_pseudo_header(LaneSubtype::LE_CTRL);
    ph.cells = 0;
    let d = AtmDecoder::default().decode(&AtmFrame::new(cut).truncated(true), &ph);
    assert_eq!(d.info, "LE Control: LE_CONFIGURE_REQUEST");
    assert_eq!(d.errors, vec![err]);
    assert_eq!(find_all(&d.tree, "lane.tlv").len(), 1);
    let malformed = d.find("malformed").unwrap();
    assert_eq!(malformed.offset, 119);
}

#[test]
fn short_le_control_header() {
    let packet = file_to_packet("le_configure_request.dat");
    let mut ph = lane_pseudo_header(LaneSubtype::LE_CTRL);
    ph.cells = 0;

    let d = AtmDecoder::default().decode(&AtmFrame::new(&packet[..12]).truncated(true), &ph);
    assert_eq!(d.info, "LE Control: LE_CONFIGURE_REQUEST");
    assert_eq!(d.errors, vec![Error::TruncatedBuffer { offset: 12, needed: 2, available: 0 }]);
    let lane = d.find("lane").unwrap();
    assert_eq!(lane.len, 12);
    let opcode = lane.child("lane.opcode").unwrap();
    assert_eq!((opcode.offset, opcode.value.to_string()), (4, "LE_CONFIGURE_REQUEST".to_string()));
    assert_eq!(lane.child("lane.transaction_id").unwrap().value.as_uint(), Some(0x0b0e));
    assert!(lane.child("lane.requester_lecid").is_none());
    assert_eq!(lane.child("malformed").unwrap().offset, 12);

    // without an opcode there is no frame
    let d = AtmDecoder::default().decode(&AtmFrame::new(&packet[..5]).truncated(true), &ph);
    assert_eq!(d.info, "LE Control");
    assert_eq!(d.errors, vec![Error::TruncatedBuffer { offset: 4, needed: 2, available: 1 }]);
    assert!(d.find("lane").is_none());
    assert!(d.find("lane.opcode").is_none());
}

#[test]
fn short_registration_keeps_source() {
    let packet = file_to_packet("le_register_response.dat");
    let cut = &packet[..60];

    let frame = LeControlFrame::parse(cut).unwrap();
    assert_eq!(frame.status, Some(LeStatus::DUPLICATE_LAN_DESTINATION));
    let body = match &frame.body {
        LeControlBody::Registration(body) => body,
        other => panic!("unexpected body {:?}", other),
    };
    assert!(body.source.unwrap().mac_addr().is_some());
    assert!(body.source_atm.is_some());
    assert_eq!(body.num_tlvs, Some(1));
    assert_eq!(body.tlvs, None);
    let err = Error::TruncatedBuffer {
        offset: 55,
        needed: 53,
        available: 5,
    };
    assert_eq!(frame.error(), Some(&err));

    let node = frame.node(cut.len());
    assert_eq!(node.child("lane.source").unwrap().offset, 16);
    assert_eq!(node.child("lane.source_atm").unwrap().offset, 32);
    assert!(node.child("lane.tlv").is_none());
    assert_eq!(node.child("malformed").unwrap().offset, 55);
}

#[test]
fn le_register_response_parsing_test() {
    let packet = file_to_packet("le_register_response.dat");
    assert_eq!(packet.len(), 115);

    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.opcode, LeOpcode::REGISTER_RESPONSE);
    assert_eq!(frame.status, Some(LeStatus::DUPLICATE_LAN_DESTINATION));
    assert_eq!(frame.transaction_id, Some(0x42));
    assert_eq!(frame.requester_lecid, Some(7));
    assert!(frame.error().is_none());

    let body = match &frame.body {
        LeControlBody::Registration(body) => body,
        other => panic!("unexpected body {:?}", other),
    };
    assert_eq!(
        body.source.unwrap().mac_addr(),
        Some(EthernetAddress([0x00, 0x20, 0x48, 0x1a, 0x2b, 0x3c]))
    );
    assert_eq!(body.target.unwrap().value(), LanDestValue::NotPresent);
    assert_eq!(body.num_tlvs, Some(1));
    let tlvs = body.tlvs.as_ref().unwrap();
    assert_eq!(tlvs.tlvs.len(), 1);
    assert_eq!(tlvs.tlvs[0].offset(), LE_CONTROL_FRAME_LEN);
    assert_eq!(tlvs.tlvs[0].tlv_type(), LeTlvType::LOCAL_SEGMENT_ID);
    assert_eq!(tlvs.tlvs[0].value(), &[0x0a, 0xbc]);

    let pdu = aal5_pdu(&packet[..]);
    let d = AtmDecoder::default().decode(
        &AtmFrame::new(&pdu[..]),
        &lane_pseudo_header(LaneSubtype::LE_CTRL),
    );
    assert_eq!(d.info, "LE Control: LE_REGISTER_RESPONSE");
    assert!(d.errors.is_empty());
    let lane = d.find("lane").unwrap();
    assert_eq!(
        lane.child("lane.status").unwrap().value.to_string(),
        "Duplicate LAN destination registration"
    );
    assert_eq!(lane.child("lane.num_tlvs").unwrap().offset, 54);
    assert!(lane.child("lane.target").unwrap().child("lane.lan_dest.mac").is_none());

    let tlv = lane.child("lane.tlv").unwrap();
    assert_eq!((tlv.offset, tlv.len), (108, 7));
    assert_eq!(tlv.value.to_string(), "Local Segment ID");
    let value = tlv.child("lane.tlv.value").unwrap();
    assert_eq!((value.offset, value.len), (113, 2));
}

#[test]
fn le_join_request_and_response() {
    let mut packet = file_to_packet("le_configure_request.dat");
    packet[4..6].copy_from_slice(&0x0002u16.to_be_bytes());
    packet[14..16].copy_from_slice(&0x0006u16.to_be_bytes());

    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.opcode, LeOpcode::JOIN_REQUEST);
    assert_eq!(frame.status, None);
    assert!(matches!(frame.body, LeControlBody::ConfigureJoin(_)));
    assert_eq!(frame.body.tlvs().unwrap().tlvs.len(), 3);

    let pdu = aal5_pdu(&packet[..]);
    let ph = lane_pseudo_header(LaneSubtype::LE_CTRL);
    let d = AtmDecoder::default().decode(&AtmFrame::new(&pdu[..]), &ph);
    assert_eq!(d.info, "LE Control: LE_JOIN_REQUEST");
    assert!(d.errors.is_empty());
    let lane = d.find("lane").unwrap();
    assert!(lane.child("lane.status").is_none());
    let flags = lane.child("lane.flags").unwrap();
    assert_eq!(flags.value.as_uint(), Some(0x0006));
    assert_eq!(
        flags.children,
        vec![
            Node::new("lane.flags.v2_capable", 14, 2, true),
            Node::new("lane.flags.selective_multicast", 14, 2, true),
            Node::new("lane.flags.proxy", 14, 2, false),
            Node::new("lane.flags.exclude_explorer_frames", 14, 2, false),
        ]
    );
    assert_eq!(lane.child("lane.elan_name").unwrap().len, 32);

    packet[4..6].copy_from_slice(&0x0102u16.to_be_bytes());
    packet[6..8].copy_from_slice(&0x0007u16.to_be_bytes());
    packet[14..16].copy_from_slice(&0x0288u16.to_be_bytes());

    let frame = LeControlFrame::parse(&packet[..]).unwrap();
    assert_eq!(frame.opcode, LeOpcode::JOIN_RESPONSE);
    assert_eq!(frame.status, Some(LeStatus::ACCESS_DENIED));

    let pdu = aal5_pdu(&packet[..]);
    let d = AtmDecoder::default().decode(&AtmFrame::new(&pdu[..]), &ph);
    assert_eq!(d.info, "LE Control: LE_JOIN_RESPONSE");
    let lane = d.find("lane").unwrap();
    let status = lane.child("lane.status").unwrap();
    assert_eq!((status.offset, status.value.to_string()), (6, "Access denied".to_string()));
    let flags = lane.child("lane.flags").unwrap();
    assert_eq!(
        flags.children,
        vec![
            Node::new("lane.flags.v2_capable", 14, 2, false),
            Node::new("lane.flags.v2_required", 14, 2, true),
            Node::new("lane.flags.proxy", 14, 2, true),
            Node::new("lane.flags.exclude_explorer_frames", 14, 2, true),
        ]
    );
    assert!(flags.child("lane.flags.selective_multicast").is_none());
    assert_eq!(find_all(&d.tree, "lane.tlv").len(), 3);
}

#[test]
fn le_client_ethernet_frame() {
    let mut eth = [0u8; 60];
    {
        let mut frame = MutableEthernetPacket::new(&mut eth[..]).unwrap();
        frame.set_destination(MacAddr(0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0));
        frame.set_source(MacAddr(0x00, 0x50, 0x56, 0xae, 0x76, 0xf5));
        frame.set_ethertype(EtherTypes::Ipv4);
        frame.payload_mut()[0] = 0x45;
    }
    let mut lane = vec![0x00, 0x05];
    lane.extend_from_slice(&eth[..]);
    let pdu = aal5_pdu(&lane[..]);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let seen = seen.clone();
        move |payload: &[u8], ph: &AtmPseudoHeader| {
            seen.lock().unwrap().push((payload.to_vec(), ph.vci));
            ethernet(payload, ph)
        }
    };
    let decoder = AtmDecoder::new(DissectorTable::builder().ethernet(recorder).build());

    for subtype in [LaneSubtype::LANE_802_3, LaneSubtype::LANE_802_3_MC] {
        let d = decoder.decode(&AtmFrame::new(&pdu[..]), &lane_pseudo_header(subtype));
        assert_eq!(d.protocol, "ATM LANE");
        assert_eq!(d.info, "LE Client - Ethernet/802.3");
        assert!(d.errors.is_empty());

        let client = d.find("lane.le_client").unwrap();
        assert_eq!((client.offset, client.len, client.value.as_uint()), (0, 2, Some(5)));

        let eth_node = &d.tree[2];
        assert_eq!((eth_node.name, eth_node.offset, eth_node.len), ("eth", 2, 60));
        let src = eth_node.child("eth.src").unwrap();
        assert_eq!(src.offset, 8);
        assert_eq!(src.value.to_string(), "00:50:56:ae:76:f5");
        assert_eq!(eth_node.child("eth.type").unwrap().value.as_uint(), Some(0x0800));
    }

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, eth.to_vec());
    assert_eq!(seen[0].1, 33);
}

#[test]
fn le_client_token_ring_and_unknown_subtypes() {
    let token_ring =
        |payload: &[u8], _: &AtmPseudoHeader| Node::new("tr", 0, payload.len(), payload.len() as u32);
    let decoder = AtmDecoder::new(DissectorTable::builder().token_ring(token_ring).build());
    let pdu = aal5_pdu(&[0x00, 0x09, 0x10, 0x40, 0xc0, 0x00, 0x00, 0x0a]);

    let d = decoder.decode(&AtmFrame::new(&pdu[..]), &lane_pseudo_header(LaneSubtype::LANE_802_5_MC));
    assert_eq!(d.info, "LE Client - 802.5");
    let tr = d.find("tr").unwrap();
    assert_eq!((tr.offset, tr.value.as_uint()), (2, Some(6)));
    assert_eq!(
        d.find("atm.subtype").unwrap().value.to_string(),
        "802.5 multicast"
    );

    for subtype in [LaneSubtype::UNKNOWN, LaneSubtype::from(6)] {
        let d = decoder.decode(&AtmFrame::new(&pdu[..]), &lane_pseudo_header(subtype));
        assert_eq!(d.protocol, "ATM LANE");
        assert_eq!(d.info, "Unknown LANE traffic type");
        let data = d.find("data").unwrap();
        assert_eq!((data.offset, data.len), (0, 8));
    }

    let d = decoder.decode(&AtmFrame::new(&[0x00]).truncated(true), &lane_pseudo_header(LaneSubtype::LANE_802_5));
    assert_eq!(d.errors, vec![Error::TruncatedBuffer { offset: 0, needed: 2, available: 1 }]);
    assert!(d.find("tr").is_none());
}

#[test]
fn concurrent_decoding() {
    let decoder = AtmDecoder::new(DissectorTable::builder().ethernet(ethernet).build());
    let configure = aal5_pdu(&file_to_packet("le_configure_request.dat")[..]);
    let arp = aal5_pdu(&file_to_packet("le_arp_response.dat")[..]);
    let ph = lane_pseudo_header(LaneSubtype::LE_CTRL);

    let expected_configure = decoder.decode(&AtmFrame::new(&configure[..]), &ph);
    let expected_arp = decoder.decode(&AtmFrame::new(&arp[..]), &ph);

    std::thread::scope(|s| {
        for i in 0..4 {
            let (pdu, expected) = if i % 2 == 0 {
                (&configure, &expected_configure)
            } else {
                (&arp, &expected_arp)
            };
            let decoder = &decoder;
            let ph = &ph;
            s.spawn(move || {
                for _ in 0..100 {
                    let d = decoder.decode(&AtmFrame::new(&pdu[..]), ph);
                    assert_eq!(&d, expected);
                }
            });
        }
    });
    assert_eq!(expected_arp.info, "LE Control: LE_ARP_RESPONSE");
}
