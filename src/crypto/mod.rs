//! Crypto module - double-SHA256 hashing and merkle roots

mod hash;
mod merkle;

pub use hash::*;
pub use merkle::*;
