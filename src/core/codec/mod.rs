//! # Packet Codecs
//!
//! Three byte-exact wire formats behind the [`PacketCodec`] trait.
//!
//! - [`BinaryCodec`]: raw binary channels, type as a raw byte
//! - [`StringCodec`]: text-only channels, type as an ASCII digit
//! - [`Base64Codec`]: text channels carrying binary payloads
//!
//! Codecs are zero-sized and stateless. Use the shared statics
//! ([`BINARY_CODEC`], [`STRING_CODEC`], [`BASE64_CODEC`]) or pick one at
//! runtime through [`CodecKind::codec`].
//!
//! ## Sink semantics
//! `write_to` issues a short ordered sequence of writes. The first failing
//! write aborts the sequence and its error is returned; bytes already
//! accepted by the sink stay there. Use `encode` to get the whole packet
//! in one buffer first.

mod base64;
mod binary;
mod text;

pub use self::base64::Base64Codec;
pub use self::binary::BinaryCodec;
pub use self::text::StringCodec;

use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Shared binary codec instance.
pub static BINARY_CODEC: BinaryCodec = BinaryCodec;
/// Shared string codec instance.
pub static STRING_CODEC: StringCodec = StringCodec;
/// Shared base64 codec instance.
pub static BASE64_CODEC: Base64Codec = Base64Codec;

/// A wire format for single packets.
pub trait PacketCodec: Send + Sync {
    /// Which wire format this codec implements.
    fn kind(&self) -> CodecKind;

    /// Parse one packet from an owned buffer.
    ///
    /// Codecs whose payload is carried verbatim slice `data` without copying.
    fn decode_bytes(&self, data: Bytes) -> Result<Packet>;

    /// Parse one packet from a borrowed buffer.
    fn decode(&self, data: &[u8]) -> Result<Packet> {
        self.decode_bytes(Bytes::copy_from_slice(data))
    }

    /// Write the encoded form of `packet` to `writer`.
    ///
    /// # Errors
    /// Any error from `writer` is returned as `ProtocolError::Io` and no
    /// further writes are attempted.
    fn write_to(&self, writer: &mut dyn Write, packet: &Packet) -> Result<()>;

    /// Exact number of bytes `write_to` produces for `packet`.
    fn encoded_len(&self, packet: &Packet) -> usize;

    /// Encode `packet` into a fresh buffer.
    fn encode(&self, packet: &Packet) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len(packet));
        self.write_to(&mut buf, packet)?;
        Ok(buf)
    }
}

/// Selects one of the three wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// Raw binary channel (default)
    #[default]
    Binary,
    /// Text-only channel
    String,
    /// Text channel carrying base64 binary payloads
    Base64,
}

impl CodecKind {
    pub const ALL: [CodecKind; 3] = [CodecKind::Binary, CodecKind::String, CodecKind::Base64];

    /// The shared codec instance for this format.
    pub fn codec(self) -> &'static dyn PacketCodec {
        match self {
            CodecKind::Binary => &BINARY_CODEC,
            CodecKind::String => &STRING_CODEC,
            CodecKind::Base64 => &BASE64_CODEC,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Binary => "binary",
            CodecKind::String => "string",
            CodecKind::Base64 => "base64",
        }
    }

    /// Whether the wire form is safe for text-only transports.
    ///
    /// The string codec only qualifies when payloads are text themselves.
    pub fn is_text_safe(self) -> bool {
        !matches!(self, CodecKind::Binary)
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(CodecKind::Binary),
            "string" => Ok(CodecKind::String),
            "base64" => Ok(CodecKind::Base64),
            other => Err(ProtocolError::ConfigError(format!(
                "Unknown codec kind: '{other}' (expected binary, string or base64)"
            ))),
        }
    }
}
