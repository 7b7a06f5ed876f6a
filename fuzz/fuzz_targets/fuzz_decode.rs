#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_codec::{CodecKind, PacketCodec};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic, whatever the wire format
    for kind in CodecKind::ALL {
        let _ = kind.codec().decode(data);
    }
});
