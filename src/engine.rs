//! ECDSA signing engine seam and the default secp256k1 implementation.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, Secp256k1, SecretKey};

use crate::error::{WalletError, WalletResult};
use crate::utils::crypto::tron_address_from_public_key;

/// Raw recoverable signature parts as produced by an engine.
///
/// `recovery_id` follows whatever convention the engine uses (0/1 or 27/28);
/// [`crate::signing::TronSignature`] normalizes it to the wire form.
#[derive(Debug, Clone, Copy)]
pub struct RecoverableParts {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub recovery_id: u8,
}

/// Deterministic recoverable ECDSA over a 32-byte digest.
pub trait SigningEngine {
    fn sign_digest(&self, digest: &[u8; 32], private_key: &[u8]) -> WalletResult<RecoverableParts>;
}

/// Default engine backed by libsecp256k1.
pub struct Secp256k1Engine {
    secp: Secp256k1<All>,
}

impl Secp256k1Engine {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl SigningEngine for Secp256k1Engine {
    fn sign_digest(&self, digest: &[u8; 32], private_key: &[u8]) -> WalletResult<RecoverableParts> {
        if private_key.len() != 32 {
            return Err(WalletError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                private_key.len()
            )));
        }
        let secret_key = SecretKey::from_slice(private_key)
            .map_err(|e| WalletError::InvalidPrivateKey(e.to_string()))?;
        let message = Message::from_digest_slice(digest)
            .map_err(|e| WalletError::SigningFailed(e.to_string()))?;

        let signature = self.secp.sign_ecdsa_recoverable(&message, &secret_key);
        let (recovery_id, bytes) = signature.serialize_compact();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableParts {
            r,
            s,
            recovery_id: recovery_id.to_i32() as u8,
        })
    }
}

/// Recover the signer's `T...` address from a digest and 65-byte signature.
///
/// Accepts both recovery-id conventions in the trailing byte. Used to verify
/// that a produced signature binds to the expected account.
pub fn recover_address(digest: &[u8; 32], signature: &[u8]) -> WalletResult<String> {
    if signature.len() != 65 {
        return Err(WalletError::SigningFailed(format!(
            "expected 65 signature bytes, got {}",
            signature.len()
        )));
    }

    let v = signature[64];
    let recovery_id = if v >= 27 { v - 27 } else { v };
    let rec_id = RecoveryId::from_i32(recovery_id as i32)
        .map_err(|e| WalletError::SigningFailed(e.to_string()))?;

    let recoverable = RecoverableSignature::from_compact(&signature[..64], rec_id)
        .map_err(|e| WalletError::SigningFailed(e.to_string()))?;
    let message = Message::from_digest_slice(digest)
        .map_err(|e| WalletError::SigningFailed(e.to_string()))?;

    let secp = Secp256k1::new();
    let public_key = secp
        .recover_ecdsa(&message, &recoverable)
        .map_err(|e| WalletError::SigningFailed(e.to_string()))?;

    Ok(tron_address_from_public_key(
        &public_key.serialize_uncompressed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::crypto::keccak256;

    const TEST_KEY: [u8; 32] = [0xA5; 32];

    fn test_address() -> String {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&TEST_KEY).unwrap();
        let public = secret.public_key(&secp).serialize_uncompressed();
        tron_address_from_public_key(&public)
    }

    #[test]
    fn sign_and_recover_round_trip() {
        let engine = Secp256k1Engine::new();
        let digest = keccak256(b"sign me");

        let parts = engine.sign_digest(&digest, &TEST_KEY).unwrap();
        assert!(parts.recovery_id <= 1);

        let mut wire = [0u8; 65];
        wire[..32].copy_from_slice(&parts.r);
        wire[32..64].copy_from_slice(&parts.s);
        wire[64] = parts.recovery_id;

        assert_eq!(recover_address(&digest, &wire).unwrap(), test_address());

        // Legacy 27/28 trailing byte recovers to the same signer.
        wire[64] = parts.recovery_id + 27;
        assert_eq!(recover_address(&digest, &wire).unwrap(), test_address());
    }

    #[test]
    fn rejects_bad_key_material() {
        let engine = Secp256k1Engine::new();
        let digest = keccak256(b"digest");

        let err = engine.sign_digest(&digest, &[0u8; 16]).unwrap_err();
        assert!(matches!(err, WalletError::InvalidPrivateKey(_)));

        // All-zero scalar is outside the curve order.
        let err = engine.sign_digest(&digest, &[0u8; 32]).unwrap_err();
        assert!(matches!(err, WalletError::InvalidPrivateKey(_)));
    }

    #[test]
    fn rejects_short_signature() {
        let digest = keccak256(b"digest");
        let err = recover_address(&digest, &[0u8; 64]).unwrap_err();
        assert!(matches!(err, WalletError::SigningFailed(_)));
    }
}
