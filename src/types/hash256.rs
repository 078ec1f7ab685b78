//! 32-byte hash element used by hash-valued ledger fields.

use crate::error::{CodecError, Result};
use crate::parser::BinaryParser;
use crate::types::serialized::SerializedType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width of a single hash element in bytes.
pub const HASH_LENGTH_BYTES: usize = 32;

/// A fixed-width 256-bit hash.
///
/// Renders as 64 uppercase hex characters. Accepts hex in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; HASH_LENGTH_BYTES]);

impl Hash256 {
    pub fn new(bytes: [u8; HASH_LENGTH_BYTES]) -> Self {
        Hash256(bytes)
    }

    /// All-zero hash.
    pub fn zero() -> Self {
        Hash256([0u8; HASH_LENGTH_BYTES])
    }

    /// Parses a hash from its hex encoding.
    pub fn from_value(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_slice(&bytes)
    }

    /// Copies a hash out of a slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; HASH_LENGTH_BYTES] = bytes.try_into().map_err(|_| {
            CodecError::Format(format!(
                "Hash256 must be exactly {} bytes, got {}",
                HASH_LENGTH_BYTES,
                bytes.len()
            ))
        })?;
        Ok(Hash256(array))
    }

    pub fn as_array(&self) -> &[u8; HASH_LENGTH_BYTES] {
        &self.0
    }
}

impl SerializedType for Hash256 {
    fn from_parser(parser: &mut BinaryParser, length_hint: Option<usize>) -> Result<Self> {
        let num_bytes = length_hint.unwrap_or(HASH_LENGTH_BYTES);
        if num_bytes != HASH_LENGTH_BYTES {
            return Err(CodecError::Format(format!(
                "Hash256 must be exactly {} bytes, length hint was {}",
                HASH_LENGTH_BYTES, num_bytes
            )));
        }
        Self::from_slice(parser.read(num_bytes)?)
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::Value::String(self.to_hex()))
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LENGTH_BYTES]> for Hash256 {
    fn from(bytes: [u8; HASH_LENGTH_BYTES]) -> Self {
        Hash256(bytes)
    }
}

impl FromStr for Hash256 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(s)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_value(&s).map_err(serde::de::Error::custom)
    }
}
