//! Wire types, split into the shared capability trait and the concrete types

pub mod hash256;
pub mod serialized;
pub mod vector256;

pub use hash256::{Hash256, HASH_LENGTH_BYTES};
pub use serialized::SerializedType;
pub use vector256::Vector256;
