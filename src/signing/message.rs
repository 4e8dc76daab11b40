//! Personal-message signing, v1 and v2.
//!
//! Both generations share the orchestration: resolve the account, build the
//! digest for the mode, sign inside a key guard, return the hex wire form.
//! They differ only in prefixing and length-encoding rules (see
//! [`crate::signing::digest`]).

use crate::engine::SigningEngine;
use crate::error::{WalletError, WalletResult};
use crate::keystore::{find_account, with_private_key, AccountRepository, KeyExporter};
use crate::signing::digest::{message_v1_digest, message_v2_digest};
use crate::signing::signature::TronSignature;
use crate::types::MessageV2Type;

/// Sign a personal message with the v1 fixed-`32` prefix.
pub fn sign_message_v1<K, E>(
    keystore: &K,
    engine: &E,
    text: &str,
    password: &str,
    address: &str,
) -> WalletResult<String>
where
    K: AccountRepository + KeyExporter,
    E: SigningEngine,
{
    let digest = message_v1_digest(text);
    sign_digest_for(keystore, engine, &digest, password, address)
}

/// Sign a personal message with the v2 variable-length prefix.
pub fn sign_message_v2<K, E>(
    keystore: &K,
    engine: &E,
    text: &str,
    password: &str,
    address: &str,
    v2_type: MessageV2Type,
) -> WalletResult<String>
where
    K: AccountRepository + KeyExporter,
    E: SigningEngine,
{
    let digest = message_v2_digest(text, v2_type)?;
    sign_digest_for(keystore, engine, &digest, password, address)
}

fn sign_digest_for<K, E>(
    keystore: &K,
    engine: &E,
    digest: &[u8; 32],
    password: &str,
    address: &str,
) -> WalletResult<String>
where
    K: AccountRepository + KeyExporter,
    E: SigningEngine,
{
    let accounts = keystore.accounts();
    let account = find_account(&accounts, address)?;

    let signature = with_private_key(keystore, account, password, |key| {
        let parts = engine.sign_digest(digest, key).map_err(|e| match e {
            err @ WalletError::SigningFailed(_) => err,
            other => WalletError::SigningFailed(other.to_string()),
        })?;
        Ok(TronSignature::from_parts(parts))
    })?;

    Ok(signature.to_hex())
}
