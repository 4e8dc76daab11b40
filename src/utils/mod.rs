//! Shared helpers: hashing, address encoding, redacting logger.

pub mod crypto;
pub mod logging;
