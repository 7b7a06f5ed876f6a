//! Shared codec instances used from many tasks and threads at once.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use packet_codec::{CodecKind, Packet, PacketCodec, PacketType};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_encode_decode_heavy() {
    use tokio::task::JoinSet;

    let iterations = 5_000usize;
    let payload_sizes = [0usize, 64, 512, 4096];

    let mut tasks = JoinSet::new();
    for kind in CodecKind::ALL {
        for &size in &payload_sizes {
            tasks.spawn(async move {
                let codec = kind.codec();
                for i in 0..iterations {
                    let ptype = PacketType::ALL[i % PacketType::ALL.len()];
                    let packet = Packet::new(ptype, vec![((i + size) & 0xFF) as u8; size]);
                    let encoded = codec.encode(&packet).unwrap();
                    let decoded = codec.decode(&encoded).unwrap();
                    assert_eq!(decoded.ptype, packet.ptype);
                    assert_eq!(decoded.data, packet.data);
                }
            });
        }
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

#[test]
fn shared_static_across_threads() {
    let codec: &'static dyn PacketCodec = CodecKind::Base64.codec();

    let handles: Vec<_> = (0..8u8)
        .map(|t| {
            std::thread::spawn(move || {
                let packet = Packet::new(PacketType::Message, vec![t; 100]);
                for _ in 0..1_000 {
                    let encoded = codec.encode(&packet).unwrap();
                    assert_eq!(codec.decode(&encoded).unwrap().data, packet.data);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
