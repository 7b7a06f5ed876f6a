//! Base64 wire format for text channels carrying binary payloads.
//!
//! ```text
//! short form (no payload): [digit]
//! long form:               ['b'] [digit] [standard padded base64 of payload]
//! ```
//!
//! Decoding always marks the packet `BINARY`, including the short form
//! where no payload was present.

use super::{CodecKind, PacketCodec};
use crate::core::packet::{Packet, PacketFlags, PacketType};
use crate::error::{ProtocolError, Result};
use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, PAD};
use ::base64::Engine as _;
use bytes::Bytes;
use std::io::Write;
use tracing::trace;

/// Marker byte opening every long-form message.
const BINARY_MARKER: u8 = b'b';

/// Standard alphabet with required padding. Non-zero trailing bits in the
/// last symbol are accepted.
const PAYLOAD_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Decode a payload body, skipping line breaks.
fn decode_payload(body: &[u8]) -> Result<Vec<u8>> {
    if body.iter().any(|&b| b == b'\r' || b == b'\n') {
        let stripped: Vec<u8> = body
            .iter()
            .copied()
            .filter(|&b| b != b'\r' && b != b'\n')
            .collect();
        return Ok(PAYLOAD_ENGINE.decode(stripped)?);
    }
    Ok(PAYLOAD_ENGINE.decode(body)?)
}

/// Codec for text channels that must carry binary payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Codec;

impl Base64Codec {
    fn decode_slice(&self, data: &[u8]) -> Result<Packet> {
        match data.len() {
            0 => Err(ProtocolError::EmptyInput),
            1 => {
                let ptype = PacketType::from_char(data[0])?;
                trace!(codec = "base64", %ptype, len = 0, "decoded short-form packet");
                Ok(Packet::with_flags(ptype, Bytes::new(), PacketFlags::BINARY))
            }
            _ => {
                if data[0] != BINARY_MARKER {
                    return Err(ProtocolError::InvalidFraming(Bytes::copy_from_slice(data)));
                }
                let ptype = PacketType::from_char(data[1])?;
                let payload = decode_payload(&data[2..])?;
                trace!(codec = "base64", %ptype, len = payload.len(), "decoded packet");
                Ok(Packet::with_flags(ptype, payload, PacketFlags::BINARY))
            }
        }
    }
}

impl PacketCodec for Base64Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Base64
    }

    fn decode_bytes(&self, data: Bytes) -> Result<Packet> {
        self.decode_slice(&data)
    }

    fn decode(&self, data: &[u8]) -> Result<Packet> {
        self.decode_slice(data)
    }

    fn write_to(&self, writer: &mut dyn Write, packet: &Packet) -> Result<()> {
        let digit = packet.ptype.to_char();
        if packet.data.is_empty() {
            writer.write_all(&[digit])?;
            trace!(codec = "base64", ptype = %packet.ptype, len = 0, "encoded short-form packet");
            return Ok(());
        }

        writer.write_all(&[BINARY_MARKER])?;
        writer.write_all(&[digit])?;
        let body = PAYLOAD_ENGINE.encode(&packet.data);
        writer.write_all(body.as_bytes())?;
        trace!(codec = "base64", ptype = %packet.ptype, len = packet.data.len(), "encoded packet");
        Ok(())
    }

    fn encoded_len(&self, packet: &Packet) -> usize {
        if packet.data.is_empty() {
            1
        } else {
            // only overflows for payloads near usize::MAX
            2 + ::base64::encoded_len(packet.data.len(), true).unwrap_or(usize::MAX - 2)
        }
    }
}
