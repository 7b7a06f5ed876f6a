//! Binary wire format: `[type byte][payload]`.
//!
//! The type byte is the raw numeric value of [`PacketType`], not its digit.

use super::{CodecKind, PacketCodec};
use crate::core::packet::{Packet, PacketFlags, PacketType};
use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use std::io::Write;
use tracing::trace;

/// Codec for raw binary channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCodec;

impl PacketCodec for BinaryCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Binary
    }

    fn decode_bytes(&self, mut data: Bytes) -> Result<Packet> {
        if data.is_empty() {
            return Err(ProtocolError::EmptyInput);
        }

        let ptype = PacketType::try_from(data[0])?;
        let payload = data.split_off(1);
        trace!(codec = "binary", %ptype, len = payload.len(), "decoded packet");

        Ok(Packet::with_flags(ptype, payload, PacketFlags::BINARY))
    }

    fn write_to(&self, writer: &mut dyn Write, packet: &Packet) -> Result<()> {
        writer.write_all(&[packet.ptype.as_byte()])?;
        if !packet.data.is_empty() {
            writer.write_all(&packet.data)?;
        }
        trace!(codec = "binary", ptype = %packet.ptype, len = packet.data.len(), "encoded packet");
        Ok(())
    }

    #[inline]
    fn encoded_len(&self, packet: &Packet) -> usize {
        1 + packet.data.len()
    }
}
