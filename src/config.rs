//! Configuration management for the ledger codec

use crate::error::{CodecError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Controls how hash vectors are read off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DecodeConfig {
    /// Reject byte counts that are not a whole number of hashes instead of
    /// leaving the remainder in the stream.
    #[serde(default)]
    pub strict: bool,
    /// Upper bound on hashes per vector. `None` means unbounded.
    #[serde(default)]
    pub max_hashes: Option<usize>,
}

impl DecodeConfig {
    pub fn strict() -> Self {
        DecodeConfig {
            strict: true,
            ..Default::default()
        }
    }
}

/// Loads the codec configuration from a TOML file.
///
/// A missing or empty file yields the default (permissive, unbounded) config.
/// Any other read failure is an error.
pub fn load_config(path: impl AsRef<Path>) -> Result<CodecConfig> {
    let config_str = match fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let config: CodecConfig = if config_str.trim().is_empty() {
        CodecConfig::default()
    } else {
        toml::from_str(&config_str)?
    };

    if config.decode.max_hashes == Some(0) {
        return Err(CodecError::Config(
            "decode.max_hashes must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CodecConfig::default());
        assert!(!config.decode.strict);
        assert_eq!(config.decode.max_hashes, None);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path());
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn test_non_utf8_file_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x00, 0x80]).unwrap();
        let result = load_config(file.path());
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn test_parses_decode_section() {
        let file = write_config("[decode]\nstrict = true\nmax_hashes = 16\n");
        let config = load_config(file.path()).unwrap();
        assert!(config.decode.strict);
        assert_eq!(config.decode.max_hashes, Some(16));
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let file = write_config("[decode]\nmax_hashes = 4\n");
        let config = load_config(file.path()).unwrap();
        assert!(!config.decode.strict);
        assert_eq!(config.decode.max_hashes, Some(4));
    }

    #[test]
    fn test_zero_max_hashes_rejected() {
        let file = write_config("[decode]\nmax_hashes = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(CodecError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("[decode\nstrict = ");
        assert!(matches!(
            load_config(file.path()),
            Err(CodecError::Config(_))
        ));
    }
}
