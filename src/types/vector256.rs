//! Vector of 256-bit hashes.
//!
//! # Binary Format
//!
//! A `Vector256` of `N` hashes is exactly `32 * N` bytes on the wire: the
//! hashes concatenated in order, with no length prefix, padding or
//! separators. How many bytes belong to the field is decided by the
//! enclosing framing, which passes it in as the length hint.
//!
//! # Interchange Format
//!
//! A JSON array of 64-character uppercase hex strings, one per hash, in wire
//! order.

use crate::config::DecodeConfig;
use crate::error::{CodecError, Result};
use crate::parser::BinaryParser;
use crate::types::hash256::{Hash256, HASH_LENGTH_BYTES};
use crate::types::serialized::SerializedType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// An ordered sequence of [`Hash256`] values backed by their wire bytes.
///
/// Order is significant and is preserved through every conversion.
/// Instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector256 {
    buffer: Vec<u8>,
}

impl Vector256 {
    /// Wraps raw wire bytes without validating them.
    ///
    /// A buffer that is not a whole number of hashes is accepted here and
    /// rejected later by [`Vector256::to_json`] and friends.
    pub fn new(buffer: Vec<u8>) -> Self {
        Vector256 { buffer }
    }

    /// Builds a vector from hex-encoded hashes, keeping their order.
    pub fn from_value<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut buffer = Vec::new();
        for value in values {
            Hash256::from_value(value.as_ref())?.write_to(&mut buffer);
        }
        Ok(Vector256 { buffer })
    }

    /// Builds a vector from its JSON interchange form.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            CodecError::Format(format!("Vector256 expects a JSON array, got {}", value))
        })?;
        let strings = items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    CodecError::Format(format!("Vector256 entries must be strings, got {}", item))
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        Self::from_value(strings)
    }

    /// Decodes every byte of a hex-encoded wire buffer.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let mut parser = BinaryParser::from_hex(hex_str)?;
        Self::from_parser(&mut parser, None)
    }

    /// Decodes with an explicit policy for misaligned byte counts and size.
    ///
    /// With `strict` set, a byte count that is not a multiple of 32 fails with
    /// [`CodecError::InvalidLength`] before anything is consumed. Otherwise the
    /// remainder is left in the parser. `max_hashes` is checked before
    /// reading as well.
    pub fn from_parser_with(
        parser: &mut BinaryParser,
        length_hint: Option<usize>,
        config: &DecodeConfig,
    ) -> Result<Self> {
        let num_bytes = length_hint.unwrap_or_else(|| parser.remaining_length());
        let num_hashes = num_bytes / HASH_LENGTH_BYTES;
        let remainder = num_bytes % HASH_LENGTH_BYTES;

        if remainder != 0 {
            if config.strict {
                return Err(CodecError::InvalidLength {
                    len: num_bytes,
                    width: HASH_LENGTH_BYTES,
                });
            }
            warn!(
                "Vector256 byte count {} is not a multiple of {}; leaving {} bytes unread",
                num_bytes, HASH_LENGTH_BYTES, remainder
            );
        }

        if let Some(limit) = config.max_hashes {
            if num_hashes > limit {
                return Err(CodecError::TooManyHashes {
                    count: num_hashes,
                    limit,
                });
            }
        }

        // The hint is untrusted; never reserve more than the parser can supply
        let capacity = (num_hashes * HASH_LENGTH_BYTES).min(parser.remaining_length());
        let mut buffer = Vec::with_capacity(capacity);
        for _ in 0..num_hashes {
            Hash256::from_parser(parser, None)?.write_to(&mut buffer);
        }

        debug!("Decoded Vector256 with {} hashes", num_hashes);
        Ok(Vector256 { buffer })
    }

    /// Like [`SerializedType::from_parser`], but rejects a byte count that is
    /// not a whole number of hashes.
    pub fn from_parser_strict(
        parser: &mut BinaryParser,
        length_hint: Option<usize>,
    ) -> Result<Self> {
        Self::from_parser_with(parser, length_hint, &DecodeConfig::strict())
    }

    /// Number of whole hashes in the buffer.
    pub fn len_hashes(&self) -> usize {
        self.buffer.len() / HASH_LENGTH_BYTES
    }

    /// Iterates the hashes in order.
    pub fn try_iter(&self) -> Result<impl Iterator<Item = Hash256> + '_> {
        self.check_aligned()?;
        Ok(self.buffer.chunks_exact(HASH_LENGTH_BYTES).map(|chunk| {
            let mut bytes = [0u8; HASH_LENGTH_BYTES];
            bytes.copy_from_slice(chunk);
            Hash256::new(bytes)
        }))
    }

    pub fn hashes(&self) -> Result<Vec<Hash256>> {
        Ok(self.try_iter()?.collect())
    }

    /// The interchange form as plain strings.
    pub fn to_hex_list(&self) -> Result<Vec<String>> {
        Ok(self.try_iter()?.map(|hash| hash.to_hex()).collect())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    fn check_aligned(&self) -> Result<()> {
        if self.buffer.len() % HASH_LENGTH_BYTES != 0 {
            return Err(CodecError::InvalidLength {
                len: self.buffer.len(),
                width: HASH_LENGTH_BYTES,
            });
        }
        Ok(())
    }
}

impl SerializedType for Vector256 {
    /// Decodes `length_hint` bytes of hashes, or everything left in the
    /// parser when no hint is given.
    ///
    /// Without a hint this consumes the rest of the stream, so it is only
    /// correct for the last field of an object or for a field whose length
    /// the caller already knows. Trailing bytes that do not fill a whole
    /// hash are left unread.
    fn from_parser(parser: &mut BinaryParser, length_hint: Option<usize>) -> Result<Self> {
        Self::from_parser_with(parser, length_hint, &DecodeConfig::default())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        let list = self
            .to_hex_list()?
            .into_iter()
            .map(serde_json::Value::String)
            .collect();
        Ok(serde_json::Value::Array(list))
    }
}

impl FromIterator<Hash256> for Vector256 {
    fn from_iter<T: IntoIterator<Item = Hash256>>(iter: T) -> Self {
        let mut buffer = Vec::new();
        for hash in iter {
            hash.write_to(&mut buffer);
        }
        Vector256 { buffer }
    }
}

impl From<Vec<Hash256>> for Vector256 {
    fn from(hashes: Vec<Hash256>) -> Self {
        hashes.into_iter().collect()
    }
}

impl fmt::Display for Vector256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Vector256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let list = self.to_hex_list().map_err(serde::ser::Error::custom)?;
        list.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let list = Vec::<String>::deserialize(deserializer)?;
        Vector256::from_value(list).map_err(serde::de::Error::custom)
    }
}
