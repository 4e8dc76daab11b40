//! Digest construction for the three signing modes.
//!
//! Transaction digests are sha256 over the serialized `raw_data`, optionally
//! re-hashed with a chain salt for cross-chain replay protection. Message
//! digests prepend the Tron personal-message prefix and hash with keccak256.
//! The v1 prefix carries the literal length `32` regardless of the actual
//! message length; v2 encodes the real byte length.

use crate::error::{WalletError, WalletResult};
use crate::types::MessageV2Type;
use crate::utils::crypto::{keccak256, sha256};

/// Personal-message prefix shared by both signing generations.
pub const MESSAGE_PREFIX: &str = "\x19TRON Signed Message:\n";

/// Fixed length field of the v1 prefix. A protocol constant, not a computed
/// length.
const V1_LENGTH_FIELD: &str = "32";

/// Transaction-mode digest: `sha256(raw_data)`, salted when a dapp chain id
/// is supplied.
///
/// A non-empty `dapp_chain_id` is hex-decoded (`0x` prefix tolerated),
/// appended to the base digest, and the result re-hashed. An empty salt
/// yields the base digest unmodified.
pub fn transaction_digest(raw_data: &[u8], dapp_chain_id: &str) -> WalletResult<[u8; 32]> {
    let base = sha256(raw_data);
    if dapp_chain_id.is_empty() {
        return Ok(base);
    }

    let salt = hex::decode(dapp_chain_id.trim_start_matches("0x"))
        .map_err(|e| WalletError::InvalidChainId(format!("{}: {}", dapp_chain_id, e)))?;

    let mut salted = Vec::with_capacity(base.len() + salt.len());
    salted.extend_from_slice(&base);
    salted.extend_from_slice(&salt);
    Ok(sha256(&salted))
}

/// v1 message digest: fixed-`32` prefix over the canonical message bytes.
pub fn message_v1_digest(text: &str) -> [u8; 32] {
    let person_data = canonical_message_bytes(text);
    let prefix = format!("{}{}", MESSAGE_PREFIX, V1_LENGTH_FIELD);

    let mut prefixed = Vec::with_capacity(prefix.len() + person_data.len());
    prefixed.extend_from_slice(prefix.as_bytes());
    prefixed.extend_from_slice(&person_data);
    keccak256(&prefixed)
}

/// v2 message digest: prefix length field equals the decoded byte length.
pub fn message_v2_digest(text: &str, v2_type: MessageV2Type) -> WalletResult<[u8; 32]> {
    let person_data = v2_person_data(text, v2_type)?;
    let prefix = format!("{}{}", MESSAGE_PREFIX, person_data.len());

    let mut prefixed = Vec::with_capacity(prefix.len() + person_data.len());
    prefixed.extend_from_slice(prefix.as_bytes());
    prefixed.extend_from_slice(&person_data);
    Ok(keccak256(&prefixed))
}

/// Canonical byte form of a v1 message.
///
/// The upstream codec hex-encodes the string and immediately hex-decodes it
/// before hashing; the round trip is the identity, so this is the string's
/// UTF-8 bytes.
pub fn canonical_message_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode a v2 input string into person data per the selected encoding.
pub fn v2_person_data(text: &str, v2_type: MessageV2Type) -> WalletResult<Vec<u8>> {
    match v2_type {
        MessageV2Type::String => Ok(text.as_bytes().to_vec()),
        MessageV2Type::HashString => hex::decode(text.trim_start_matches("0x"))
            .map_err(|e| WalletError::InvalidMessage(format!("not a hex string: {}", e))),
        // Tokens that do not parse as a decimal byte are dropped; callers
        // are expected to pre-validate.
        MessageV2Type::Array => Ok(text
            .split(',')
            .filter_map(|token| token.trim().parse::<u8>().ok())
            .collect()),
    }
}
