#![forbid(unsafe_code)]
//! Convert Vector256 fields between wire hex and JSON

use clap::{Parser, Subcommand};
use ledger_codec::config::{load_config, DecodeConfig};
use ledger_codec::{BinaryParser, SerializedType, Vector256};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decodes wire hex into a JSON array of hashes
    Decode {
        /// The serialized field, hex encoded
        hex: String,
        /// Number of bytes the field occupies; defaults to the whole input
        #[arg(long)]
        length_hint: Option<usize>,
        /// Reject inputs that are not a whole number of hashes
        #[arg(long)]
        strict: bool,
        /// Path to a TOML config with a [decode] section
        #[arg(long, default_value = "codec.toml")]
        config: PathBuf,
    },
    /// Encodes a JSON array of hashes into wire hex
    Encode {
        /// JSON array of 64-character hex strings
        json: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            hex,
            length_hint,
            strict,
            config,
        } => {
            let mut decode_config = load_config(&config)?.decode;
            decode_config.strict |= strict;
            println!("{}", decode(&hex, length_hint, &decode_config)?);
        }
        Commands::Encode { json } => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            let vector = Vector256::from_json(&value)?;
            println!("{}", vector.to_hex());
        }
    }

    Ok(())
}

fn decode(
    hex: &str,
    length_hint: Option<usize>,
    config: &DecodeConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut parser = BinaryParser::from_hex(hex)?;
    let vector = Vector256::from_parser_with(&mut parser, length_hint, config)?;
    if !parser.is_end() {
        info!(
            "{} trailing bytes left after Vector256",
            parser.remaining_length()
        );
    }
    Ok(serde_json::to_string_pretty(&vector.to_json()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misaligned_decode_output_is_json() {
        // 70 bytes: two hashes plus six trailing bytes
        let hex = "AB".repeat(70);
        let output = decode(&hex, None, &DecodeConfig::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let hashes = value.as_array().unwrap();
        assert_eq!(hashes.len(), 2);
        assert_eq!(hashes[0], "AB".repeat(32));
    }

    #[test]
    fn test_strict_decode_rejects_misaligned() {
        let hex = "00".repeat(33);
        let result = decode(&hex, None, &DecodeConfig::strict());
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Invalid length: 33 bytes"));
    }
}
