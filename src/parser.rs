//! Forward-only byte cursor over a serialized ledger object.

use crate::error::{CodecError, Result};
use tracing::trace;

/// Sequential reader over an in-memory buffer.
///
/// Reads advance the position and never rewind. A parser is taken by
/// `&mut` during decoding, so one cursor cannot be driven from two places
/// at once; parse independent streams with independent parsers.
#[derive(Debug, Clone)]
pub struct BinaryParser {
    bytes: Vec<u8>,
    position: usize,
}

impl BinaryParser {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        BinaryParser {
            bytes: bytes.into(),
            position: 0,
        }
    }

    /// Creates a parser over the bytes of a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Ok(Self::new(bytes))
    }

    /// Number of bytes not yet consumed.
    pub fn remaining_length(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn is_end(&self) -> bool {
        self.remaining_length() == 0
    }

    /// Current read offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    /// Advances past `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.position += n;
        Ok(())
    }

    /// Reads exactly `n` bytes, advancing the position.
    pub fn read(&mut self, n: usize) -> Result<&[u8]> {
        self.ensure(n)?;
        let start = self.position;
        self.position += n;
        trace!("read {} bytes at offset {}", n, start);
        Ok(&self.bytes[start..self.position])
    }

    pub fn read_uint8(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    fn ensure(&self, n: usize) -> Result<()> {
        let remaining = self.remaining_length();
        if n > remaining {
            return Err(CodecError::StreamUnderrun {
                requested: n,
                remaining,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances_position() {
        let mut parser = BinaryParser::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(parser.remaining_length(), 5);

        assert_eq!(parser.read(2).unwrap(), &[1, 2]);
        assert_eq!(parser.position(), 2);
        assert_eq!(parser.remaining_length(), 3);

        assert_eq!(parser.read_uint8().unwrap(), 3);
        assert_eq!(parser.peek(), Some(4));
        parser.skip(2).unwrap();
        assert!(parser.is_end());
        assert_eq!(parser.peek(), None);
    }

    #[test]
    fn test_read_past_end_is_underrun() {
        let mut parser = BinaryParser::new(vec![0u8; 10]);
        parser.skip(4).unwrap();

        let err = parser.read(7).unwrap_err();
        assert_eq!(
            err,
            CodecError::StreamUnderrun {
                requested: 7,
                remaining: 6
            }
        );
        // A failed read leaves the cursor where it was
        assert_eq!(parser.position(), 4);
    }

    #[test]
    fn test_from_hex() {
        let mut parser = BinaryParser::from_hex("00ff10").unwrap();
        assert_eq!(parser.read(3).unwrap(), &[0x00, 0xff, 0x10]);

        let result = BinaryParser::from_hex("abc");
        assert!(matches!(result, Err(CodecError::Format(_))));
    }

    #[test]
    fn test_zero_length_read() {
        let mut parser = BinaryParser::new(Vec::new());
        assert!(parser.read(0).unwrap().is_empty());
        assert!(parser.read_uint8().is_err());
    }
}
