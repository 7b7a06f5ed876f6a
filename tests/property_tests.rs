//! Property-based tests using proptest
//!
//! These tests validate codec invariants across randomly generated packets
//! and arbitrary input buffers.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use packet_codec::{
    CodecKind, Packet, PacketCodec, PacketFlags, PacketType, BASE64_CODEC, BINARY_CODEC,
    STRING_CODEC,
};
use proptest::prelude::*;

fn packet_type() -> impl Strategy<Value = PacketType> {
    prop::sample::select(PacketType::ALL.to_vec())
}

fn codec_kind() -> impl Strategy<Value = CodecKind> {
    prop::sample::select(CodecKind::ALL.to_vec())
}

// Property: binary decode(encode(p)) == p for binary-flagged packets
proptest! {
    #[test]
    fn prop_binary_roundtrip(ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..4096)) {
        let packet = Packet::with_flags(ptype, payload, PacketFlags::BINARY);
        let encoded = BINARY_CODEC.encode(&packet).expect("encode should not fail");
        let decoded = BINARY_CODEC.decode(&encoded).expect("decode should not fail");
        prop_assert_eq!(decoded, packet);
    }
}

// Property: string decode(encode(p)) == p for default-flagged packets
proptest! {
    #[test]
    fn prop_string_roundtrip(ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..4096)) {
        let packet = Packet::new(ptype, payload);
        let encoded = STRING_CODEC.encode(&packet).expect("encode should not fail");
        let decoded = STRING_CODEC.decode(&encoded).expect("decode should not fail");
        prop_assert_eq!(decoded, packet);
    }
}

// Property: base64 decode(encode(p)) keeps type and payload and always sets BINARY
proptest! {
    #[test]
    fn prop_base64_roundtrip(ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..4096)) {
        let packet = Packet::new(ptype, payload.clone());
        let encoded = BASE64_CODEC.encode(&packet).expect("encode should not fail");
        let decoded = BASE64_CODEC.decode(&encoded).expect("decode should not fail");
        prop_assert_eq!(decoded.ptype, ptype);
        prop_assert_eq!(&decoded.data[..], &payload[..]);
        prop_assert_eq!(decoded.flags, PacketFlags::BINARY);
    }
}

// Property: base64 output is printable ASCII
proptest! {
    #[test]
    fn prop_base64_output_is_text(ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..1024)) {
        let encoded = BASE64_CODEC.encode(&Packet::new(ptype, payload)).unwrap();
        prop_assert!(encoded.iter().all(|b| b.is_ascii_graphic()));
    }
}

// Property: encoded_len is exact for every codec
proptest! {
    #[test]
    fn prop_encoded_len_exact(kind in codec_kind(), ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        let codec = kind.codec();
        let packet = Packet::new(ptype, payload);
        let encoded = codec.encode(&packet).unwrap();
        prop_assert_eq!(encoded.len(), codec.encoded_len(&packet));
    }
}

// Property: encoding is deterministic
proptest! {
    #[test]
    fn prop_encoding_deterministic(kind in codec_kind(), ptype in packet_type(), payload in prop::collection::vec(any::<u8>(), 0..512)) {
        let codec = kind.codec();
        let packet = Packet::new(ptype, payload);
        prop_assert_eq!(codec.encode(&packet).unwrap(), codec.encode(&packet).unwrap());
    }
}

// Property: decoding arbitrary bytes never panics and never invents a type
proptest! {
    #[test]
    fn prop_decode_arbitrary_input(kind in codec_kind(), data in prop::collection::vec(any::<u8>(), 0..512)) {
        if let Ok(packet) = kind.codec().decode(&data) {
            prop_assert!(PacketType::ALL.contains(&packet.ptype));
        }
    }
}

// Property: binary decode accepts exactly the seven raw type bytes
proptest! {
    #[test]
    fn prop_binary_type_byte_range(first in any::<u8>(), rest in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut data = vec![first];
        data.extend_from_slice(&rest);
        let result = BINARY_CODEC.decode(&data);
        prop_assert_eq!(result.is_ok(), first <= 6);
    }
}

// Property: string decode accepts exactly the seven digits
proptest! {
    #[test]
    fn prop_string_type_digit_range(first in any::<u8>(), rest in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut data = vec![first];
        data.extend_from_slice(&rest);
        let result = STRING_CODEC.decode(&data);
        prop_assert_eq!(result.is_ok(), (b'0'..=b'6').contains(&first));
    }
}
