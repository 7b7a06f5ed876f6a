//! String wire format: `[digit][payload]`.
//!
//! The payload is passed through untouched. Keeping it text-safe is the
//! caller's job; nothing here escapes or validates it.

use super::{CodecKind, PacketCodec};
use crate::core::packet::{Packet, PacketFlags, PacketType};
use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use std::io::Write;
use tracing::trace;

/// Codec for text-only channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

impl PacketCodec for StringCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::String
    }

    fn decode_bytes(&self, mut data: Bytes) -> Result<Packet> {
        if data.is_empty() {
            return Err(ProtocolError::EmptyInput);
        }

        let ptype = PacketType::from_char(data[0])?;
        let payload = data.split_off(1);
        trace!(codec = "string", %ptype, len = payload.len(), "decoded packet");

        Ok(Packet::with_flags(ptype, payload, PacketFlags::NONE))
    }

    fn write_to(&self, writer: &mut dyn Write, packet: &Packet) -> Result<()> {
        writer.write_all(&[packet.ptype.to_char()])?;
        if packet.data.is_empty() {
            // The payload write is issued even when empty.
            let _written = writer.write(&[])?;
        } else {
            writer.write_all(&packet.data)?;
        }
        trace!(codec = "string", ptype = %packet.ptype, len = packet.data.len(), "encoded packet");
        Ok(())
    }

    #[inline]
    fn encoded_len(&self, packet: &Packet) -> usize {
        1 + packet.data.len()
    }
}
