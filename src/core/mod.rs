//! # Core Codec Components
//!
//! Packet model, wire codecs, and the message adapter.
//!
//! ## Components
//! - **Packet**: type tag, payload, and decode-time flags
//! - **Codec**: binary, string, and base64 wire formats behind one trait
//! - **Framing**: tokio-util adapter for one-packet-per-message transports
//!
//! ## Wire Formats
//! ```text
//! Binary: [TypeByte(1)] [Payload(N)]
//! String: [Digit(1)]    [Payload(N)]
//! Base64: [Digit(1)]                          when N == 0
//!         ['b'(1)] [Digit(1)] [Base64(Payload)] when N > 0
//! ```

pub mod codec;
pub mod framing;
pub mod packet;
