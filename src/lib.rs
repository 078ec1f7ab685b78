//! ledger-codec - Binary codec for vectors of 256-bit hashes
//!
//! # Architecture
//!
//! ## Wire Types
//! - [`types`] - The [`SerializedType`] capability, [`Hash256`] and [`Vector256`]
//!
//! ## Decoding
//! - [`parser`] - Forward-only byte cursor over serialized data
//!
//! ## Configuration & Utilities
//! - [`config`] - Decode policy loaded from TOML
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Wire Types
// ============================================================================
pub mod types;

// ============================================================================
// Decoding
// ============================================================================
pub mod parser;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use error::{CodecError, Result};
pub use parser::BinaryParser;
pub use types::{Hash256, SerializedType, Vector256, HASH_LENGTH_BYTES};
