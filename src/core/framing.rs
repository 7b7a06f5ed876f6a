//! # Message Adapter
//!
//! `tokio_util` codec for message-oriented transports where every transport
//! message carries exactly one packet (one WebSocket frame, one datagram,
//! one long-poll body).
//!
//! The decoder treats the whole buffer as one packet. It does not look for
//! packet boundaries inside a message; splitting and joining several packets
//! belongs to the layer above.

use crate::config::{CodecConfig, DEFAULT_MAX_MESSAGE_SIZE};
use crate::core::codec::{CodecKind, PacketCodec};
use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};
use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::debug;

/// One-packet-per-message codec backed by one of the wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCodec {
    kind: CodecKind,
    max_message_size: usize,
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new(CodecKind::default())
    }
}

impl MessageCodec {
    pub fn new(kind: CodecKind) -> Self {
        Self {
            kind,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Build from the `[codec]` section of a configuration.
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            kind: config.codec.kind,
            max_message_size: config.codec.max_message_size,
        }
    }

    /// Limit the size of a single inbound message.
    #[must_use]
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    pub fn kind(&self) -> CodecKind {
        self.kind
    }

    pub fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    #[inline]
    fn codec(&self) -> &'static dyn PacketCodec {
        self.kind.codec()
    }

    fn encode_into(&self, item: &Packet, dst: &mut BytesMut) -> Result<()> {
        let codec = self.codec();
        dst.reserve(codec.encoded_len(item));
        let mut writer = dst.writer();
        codec.write_to(&mut writer, item)
    }
}

impl Decoder for MessageCodec {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>> {
        if src.is_empty() {
            return Ok(None);
        }
        if src.len() > self.max_message_size {
            debug!(
                codec = %self.kind,
                size = src.len(),
                limit = self.max_message_size,
                "rejecting oversized message"
            );
            return Err(ProtocolError::OversizedMessage(src.len()));
        }

        let message = src.split().freeze();
        self.codec().decode_bytes(message).map(Some)
    }
}

impl Encoder<Packet> for MessageCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<()> {
        self.encode_into(&item, dst)
    }
}

impl Encoder<&Packet> for MessageCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: &Packet, dst: &mut BytesMut) -> Result<()> {
        self.encode_into(item, dst)
    }
}
