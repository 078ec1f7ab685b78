//! Capability shared by every wire type.

use crate::error::Result;
use crate::parser::BinaryParser;

/// A value with a canonical binary encoding and a JSON interchange form.
///
/// Implementors own their encoded bytes. Decoding reads from a shared
/// [`BinaryParser`]; `length_hint` is the number of bytes the enclosing
/// framing says this field occupies, when known.
pub trait SerializedType: Sized {
    /// Decodes a value from the parser, advancing it past the consumed bytes.
    fn from_parser(parser: &mut BinaryParser, length_hint: Option<usize>) -> Result<Self>;

    /// The canonical wire bytes.
    fn as_bytes(&self) -> &[u8];

    /// The JSON interchange representation.
    fn to_json(&self) -> Result<serde_json::Value>;

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Uppercase hex of the wire bytes.
    fn to_hex(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }

    /// Appends the wire bytes to a sink.
    fn write_to(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(self.as_bytes());
    }

    /// Encoded length in bytes.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
