//! Core data model for accounts and raw transactions.
//!
//! The account repository owns these values; this crate only holds transient
//! references (or snapshots) during a call. Encrypted key records are opaque
//! here: decryption is the `KeyExporter` collaborator's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// A wallet account as stored by the key repository.
///
/// `address` is the base58check `T...` form derived from the public key and
/// is the lookup key for every signing and export operation.
#[derive(Clone, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    /// Uncompressed secp256k1 public key (65 bytes, `0x04` prefix).
    pub public_key: Vec<u8>,
    /// Opaque encrypted key record. Never interpreted by this crate.
    pub key_record: KeyRecord,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .field("public_key_len", &self.public_key.len())
            .field("key_record", &self.key_record)
            .finish()
    }
}

/// Encrypted key material, owned by the repository.
///
/// Zeroed on drop; `Debug` prints only the length so records can never leak
/// through log or panic output.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyRecord(pub Vec<u8>);

impl Drop for KeyRecord {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyRecord({} bytes)", self.0.len())
    }
}

/// A signable sub-instruction within a raw transaction.
///
/// The signing core only counts entries; the payload stays opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub contract_type: String,
    #[serde(default)]
    pub parameter: Vec<u8>,
}

/// A serialized transaction plus its accumulated signatures.
///
/// `signatures` is append-only from this crate's perspective: each signing
/// call pushes one 65-byte `r || s || v` entry and never reorders or
/// truncates what is already there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Protocol-serialized `raw_data` bytes, hashed as-is for signing.
    pub raw_data: Vec<u8>,
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub signatures: Vec<Vec<u8>>,
}

/// Input encoding selector for v2 message signing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageV2Type {
    /// Interpret the input as UTF-8 text.
    #[default]
    #[serde(rename = "STRING")]
    String,
    /// Interpret the input as a hexadecimal byte string.
    #[serde(rename = "HASHSTRING")]
    HashString,
    /// Interpret the input as comma-separated decimal byte values.
    #[serde(rename = "ARRAY")]
    Array,
}
