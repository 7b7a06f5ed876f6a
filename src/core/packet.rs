//! Packet model shared by every wire format.
//!
//! A packet is a value object: a [`PacketType`] tag, a payload, and the
//! [`PacketFlags`] a decoder recorded about the wire form it observed.
//! Packets carry no identity and are never mutated by the codecs.

use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of packet types.
///
/// The discriminant is the raw byte used by the binary codec. The text
/// codecs use [`PacketType::to_char`] / [`PacketType::from_char`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PacketType {
    Open = 0,
    Close = 1,
    Ping = 2,
    Pong = 3,
    Message = 4,
    Upgrade = 5,
    Noop = 6,
}

impl PacketType {
    /// Every packet type, in wire order.
    pub const ALL: [PacketType; 7] = [
        PacketType::Open,
        PacketType::Close,
        PacketType::Ping,
        PacketType::Pong,
        PacketType::Message,
        PacketType::Upgrade,
        PacketType::Noop,
    ];

    /// Raw numeric value written by the binary codec.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Map an ASCII digit `'0'..='6'` to its packet type.
    ///
    /// # Errors
    /// Returns `ProtocolError::InvalidPacketType` carrying `c` for any other byte.
    pub fn from_char(c: u8) -> Result<Self> {
        match c {
            b'0' => Ok(PacketType::Open),
            b'1' => Ok(PacketType::Close),
            b'2' => Ok(PacketType::Ping),
            b'3' => Ok(PacketType::Pong),
            b'4' => Ok(PacketType::Message),
            b'5' => Ok(PacketType::Upgrade),
            b'6' => Ok(PacketType::Noop),
            _ => Err(ProtocolError::InvalidPacketType(c)),
        }
    }

    /// ASCII digit used by the string and base64 codecs.
    #[inline]
    pub const fn to_char(self) -> u8 {
        match self {
            PacketType::Open => b'0',
            PacketType::Close => b'1',
            PacketType::Ping => b'2',
            PacketType::Pong => b'3',
            PacketType::Message => b'4',
            PacketType::Upgrade => b'5',
            PacketType::Noop => b'6',
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            PacketType::Open => "open",
            PacketType::Close => "close",
            PacketType::Ping => "ping",
            PacketType::Pong => "pong",
            PacketType::Message => "message",
            PacketType::Upgrade => "upgrade",
            PacketType::Noop => "noop",
        }
    }
}

/// Raw-byte conversion used by the binary codec. Digits are not accepted here.
impl TryFrom<u8> for PacketType {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PacketType::Open),
            1 => Ok(PacketType::Close),
            2 => Ok(PacketType::Ping),
            3 => Ok(PacketType::Pong),
            4 => Ok(PacketType::Message),
            5 => Ok(PacketType::Upgrade),
            6 => Ok(PacketType::Noop),
            other => Err(ProtocolError::InvalidPacketType(other)),
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Markers describing how a decoded payload was represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PacketFlags(u8);

impl PacketFlags {
    pub const NONE: PacketFlags = PacketFlags(0);
    /// Payload arrived in a binary-capable wire form.
    pub const BINARY: PacketFlags = PacketFlags(1);

    #[inline]
    pub const fn contains(self, other: PacketFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A single protocol packet.
///
/// An absent payload and an empty payload are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packet {
    pub ptype: PacketType,
    pub data: Bytes,
    pub flags: PacketFlags,
}

impl Packet {
    /// Create a packet with default flags.
    pub fn new(ptype: PacketType, data: impl Into<Bytes>) -> Self {
        Self::with_flags(ptype, data, PacketFlags::NONE)
    }

    /// Create a packet without a payload.
    pub fn empty(ptype: PacketType) -> Self {
        Self::with_flags(ptype, Bytes::new(), PacketFlags::NONE)
    }

    pub fn with_flags(ptype: PacketType, data: impl Into<Bytes>, flags: PacketFlags) -> Self {
        Self {
            ptype,
            data: data.into(),
            flags,
        }
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.flags.contains(PacketFlags::BINARY)
    }

    /// Payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_table_is_bijective() {
        for (i, ptype) in PacketType::ALL.iter().enumerate() {
            let digit = ptype.to_char();
            assert_eq!(digit, b'0' + i as u8);
            assert_eq!(PacketType::from_char(digit).unwrap(), *ptype);
        }
    }

    #[test]
    fn test_raw_byte_roundtrip() {
        for ptype in PacketType::ALL {
            assert_eq!(PacketType::try_from(ptype.as_byte()).unwrap(), ptype);
        }
    }

    #[test]
    fn test_from_char_rejects_out_of_range() {
        for c in [b'7', b'9', b'/', b'b', 0u8, 6u8] {
            assert!(matches!(
                PacketType::from_char(c),
                Err(ProtocolError::InvalidPacketType(v)) if v == c
            ));
        }
    }

    #[test]
    fn test_raw_conversion_does_not_accept_digits() {
        assert!(matches!(
            PacketType::try_from(b'4'),
            Err(ProtocolError::InvalidPacketType(b'4'))
        ));
        assert!(PacketType::try_from(7).is_err());
        assert!(PacketType::try_from(0xFF).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(PacketType::Message.to_string(), "message");
        assert_eq!(PacketType::Noop.name(), "noop");
    }

    #[test]
    fn test_flags() {
        assert!(PacketFlags::default().is_empty());
        assert!(PacketFlags::BINARY.contains(PacketFlags::BINARY));
        assert!(!PacketFlags::NONE.contains(PacketFlags::BINARY));
    }

    #[test]
    fn test_absent_and_empty_payload_are_equal() {
        assert_eq!(
            Packet::empty(PacketType::Ping),
            Packet::new(PacketType::Ping, Vec::new())
        );
    }

    #[test]
    fn test_packet_accessors() {
        let packet = Packet::with_flags(PacketType::Message, "hello", PacketFlags::BINARY);
        assert!(packet.is_binary());
        assert_eq!(packet.len(), 5);
        assert!(!packet.is_empty());
        assert!(!Packet::new(PacketType::Message, "x").is_binary());
    }
}
