#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use packet_codec::{CodecKind, Packet, PacketCodec, PacketType};

fuzz_target!(|data: &[u8]| {
    let Some((&first, payload)) = data.split_first() else {
        return;
    };
    let ptype = PacketType::ALL[first as usize % PacketType::ALL.len()];
    let packet = Packet::new(ptype, Bytes::copy_from_slice(payload));

    for kind in CodecKind::ALL {
        let codec = kind.codec();
        let encoded = codec.encode(&packet).expect("encoding into a Vec cannot fail");
        let decoded = codec.decode(&encoded).expect("encoded packets must decode");
        assert_eq!(decoded.ptype, packet.ptype);
        assert_eq!(decoded.data, packet.data);
    }
});
