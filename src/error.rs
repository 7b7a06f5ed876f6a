//! # Error Types
//!
//! Error handling for packet encoding and decoding.
//!
//! Every codec operation reports failure through [`ProtocolError`]. Errors are
//! returned to the caller as-is; codecs never log, retry, or recover.
//!
//! ## Error Categories
//! - **Input Errors**: empty buffers, unknown packet types
//! - **Framing Errors**: base64 long-form messages without the `b` marker
//! - **Payload Errors**: base64 bodies that fail to decode
//! - **Sink Errors**: I/O failures from the writer passed to `write_to`
//! - **Configuration Errors**: unreadable or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use packet_codec::{PacketCodec, ProtocolError, BINARY_CODEC};
//!
//! match BINARY_CODEC.decode(&[7, 1, 2]) {
//!     Err(ProtocolError::InvalidPacketType(7)) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use bytes::Bytes;
use std::io;
use thiserror::Error;

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("packet bytes is empty")]
    EmptyInput,

    #[error("invalid packet type: {0:#04x}")]
    InvalidPacketType(u8),

    #[error("invalid b64 packet: {}", String::from_utf8_lossy(.0))]
    InvalidFraming(Bytes),

    #[error("invalid base64 payload: {0}")]
    InvalidPayloadEncoding(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Message too large: {0} bytes")]
    OversizedMessage(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ProtocolError {
    /// True for errors caused by the bytes being decoded rather than by the
    /// sink or the configuration.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ProtocolError::EmptyInput
                | ProtocolError::InvalidPacketType(_)
                | ProtocolError::InvalidFraming(_)
                | ProtocolError::InvalidPayloadEncoding(_)
        )
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
