//! Example: The three wire formats side by side
//!
//! Encodes the same packets with the binary, string and base64 codecs and
//! decodes them back.
//!
//! Run with: `cargo run --example wire_formats`

use packet_codec::config::LoggingConfig;
use packet_codec::utils::logging::init_logging;
use packet_codec::{CodecKind, Packet, PacketCodec, PacketType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default());

    let packets = [
        Packet::empty(PacketType::Ping),
        Packet::new(PacketType::Message, "hello"),
        Packet::new(PacketType::Message, vec![0xDE, 0xAD, 0xBE, 0xEF]),
    ];

    for kind in CodecKind::ALL {
        let codec = kind.codec();
        println!("== {kind} (text safe: {})", kind.is_text_safe());

        for packet in &packets {
            let wire = codec.encode(packet)?;
            let decoded = codec.decode(&wire)?;
            println!(
                "   {:<8} {:>2} payload bytes -> {:02X?} ({}) binary flag on decode: {}",
                packet.ptype.name(),
                packet.len(),
                wire,
                String::from_utf8_lossy(&wire),
                decoded.is_binary()
            );
        }
        println!();
    }

    Ok(())
}
