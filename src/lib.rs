//! # packet-codec
//!
//! Packet serialization layer for real-time message transports.
//!
//! A [`Packet`] is a type tag plus an optional payload. This crate turns a
//! packet into bytes for one of three wire encodings and parses received
//! bytes back into packets:
//!
//! | Codec  | Empty payload | Non-empty payload                         |
//! |--------|---------------|-------------------------------------------|
//! | Binary | `[type]`      | `[type][payload]`                         |
//! | String | `[digit]`     | `[digit][payload]`                        |
//! | Base64 | `[digit]`     | `['b'][digit][base64(payload)]`           |
//!
//! The codec for a connection is chosen by the caller. Every codec is a
//! stateless `'static` value and may be shared freely across threads.
//!
//! ## Example
//! ```rust
//! use packet_codec::{Packet, PacketCodec, PacketType, STRING_CODEC};
//!
//! let packet = Packet::new(PacketType::Message, "hello");
//! let wire = STRING_CODEC.encode(&packet).unwrap();
//! assert_eq!(wire, b"4hello");
//!
//! let decoded = STRING_CODEC.decode(&wire).unwrap();
//! assert_eq!(decoded, packet);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::codec::{
    Base64Codec, BinaryCodec, CodecKind, PacketCodec, StringCodec, BASE64_CODEC, BINARY_CODEC,
    STRING_CODEC,
};
pub use crate::core::framing::MessageCodec;
pub use crate::core::packet::{Packet, PacketFlags, PacketType};
pub use crate::error::{ProtocolError, Result};
