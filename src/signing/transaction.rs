//! Raw transaction signing.

use crate::engine::SigningEngine;
use crate::error::{WalletError, WalletResult};
use crate::keystore::{find_account, with_private_key, AccountRepository, KeyExporter};
use crate::log_debug;
use crate::signing::digest::transaction_digest;
use crate::signing::signature::TronSignature;
use crate::types::RawTransaction;

/// Sign a raw transaction and append the signature in place.
///
/// Preconditions are checked before any digest or key material is touched:
/// the account must resolve and the contract list must be non-empty.
///
/// Exactly one 65-byte signature is appended per call, covering the first
/// contract entry; callers that need per-entry signatures invoke this once
/// per entry. Repeated calls append repeatedly, they never deduplicate.
pub fn sign_transaction<K, E>(
    keystore: &K,
    engine: &E,
    mut transaction: RawTransaction,
    password: &str,
    address: &str,
    dapp_chain_id: &str,
) -> WalletResult<RawTransaction>
where
    K: AccountRepository + KeyExporter,
    E: SigningEngine,
{
    let accounts = keystore.accounts();
    let account = find_account(&accounts, address)?;

    if transaction.contracts.is_empty() {
        return Err(WalletError::MalformedTransaction(
            "empty contract list".into(),
        ));
    }

    let digest = transaction_digest(&transaction.raw_data, dapp_chain_id)?;
    log_debug!(
        "signing::transaction",
        "transaction digest ready",
        address = address,
        contracts = transaction.contracts.len(),
        salted = !dapp_chain_id.is_empty(),
    );

    let signature = with_private_key(keystore, account, password, |key| {
        let parts = engine.sign_digest(&digest, key).map_err(|e| match e {
            err @ WalletError::SigningFailed(_) => err,
            other => WalletError::SigningFailed(other.to_string()),
        })?;
        Ok(TronSignature::from_parts(parts))
    })?;

    transaction.signatures.push(signature.to_bytes().to_vec());
    Ok(transaction)
}
