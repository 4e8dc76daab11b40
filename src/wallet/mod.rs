//! The wallet facade: the operations a caller actually invokes.
//!
//! `TronWallet` wires an account repository / key exporter together with a
//! signing engine and exposes account creation, password-gated export, and
//! the three signing operations. All calls are synchronous and run to
//! completion; serialization of concurrent access to the same underlying
//! repository is the repository's responsibility.

use zeroize::Zeroizing;

use crate::engine::{Secp256k1Engine, SigningEngine};
use crate::error::{WalletError, WalletResult};
use crate::keystore::{find_account, with_mnemonic, with_private_key, AccountRepository, KeyExporter};
use crate::signing;
use crate::types::{Account, MessageV2Type, RawTransaction};
use crate::{log_info, log_warn};

const MODULE: &str = "wallet";

/// Signing facade over a key repository and an ECDSA engine.
pub struct TronWallet<K, E = Secp256k1Engine> {
    keystore: K,
    engine: E,
}

impl<K> TronWallet<K>
where
    K: AccountRepository + KeyExporter,
{
    /// Build a wallet over `keystore` with the default secp256k1 engine.
    pub fn new(keystore: K) -> Self {
        Self::with_engine(keystore, Secp256k1Engine::new())
    }
}

impl<K, E> TronWallet<K, E>
where
    K: AccountRepository + KeyExporter,
    E: SigningEngine,
{
    /// Build a wallet over `keystore` with a caller-supplied engine.
    pub fn with_engine(keystore: K, engine: E) -> Self {
        Self { keystore, engine }
    }

    /// Snapshot of the repository's accounts.
    pub fn accounts(&self) -> Vec<Account> {
        self.keystore.accounts()
    }

    /// Create a new password-protected account in the repository.
    pub fn create_account(&mut self, password: &str) -> WalletResult<Account> {
        let account = self
            .keystore
            .create_account(password)
            .map_err(|e| match e {
                err @ WalletError::FailedToCreateWallet(_) => err,
                other => WalletError::FailedToCreateWallet(other.to_string()),
            })?;
        log_info!(MODULE, "account created", address = account.address);
        Ok(account)
    }

    /// Export an account's private key as a hex string.
    ///
    /// The returned string is the caller's copy; the decrypted working
    /// buffer is zeroed before this returns. Failures are typed, never an
    /// empty-string sentinel.
    pub fn export_private_key(&self, password: &str, address: &str) -> WalletResult<String> {
        let accounts = self.keystore.accounts();
        let account = find_account(&accounts, address)?;

        let exported =
            with_private_key(&self.keystore, account, password, |key| Ok(hex::encode(key)));
        match &exported {
            Ok(_) => log_info!(MODULE, "private key exported", address = address),
            Err(e) => log_warn!(MODULE, "private key export refused", address = address, reason = e),
        }
        exported
    }

    /// Export an account's mnemonic phrase.
    ///
    /// The caller's copy is `Zeroizing`, so it also wipes itself on drop.
    pub fn export_mnemonic(
        &self,
        password: &str,
        address: &str,
    ) -> WalletResult<Zeroizing<String>> {
        let accounts = self.keystore.accounts();
        let account = find_account(&accounts, address)?;
        with_mnemonic(&self.keystore, account, password, |phrase| {
            Ok(Zeroizing::new(phrase.to_string()))
        })
    }

    /// Sign a raw transaction, appending one signature (see
    /// [`signing::sign_transaction`] for the one-per-call contract).
    ///
    /// `dapp_chain_id` is the optional hex chain salt; pass `""` for the
    /// main chain.
    pub fn sign_transaction(
        &self,
        transaction: RawTransaction,
        password: &str,
        address: &str,
        dapp_chain_id: &str,
    ) -> WalletResult<RawTransaction> {
        let signed = signing::sign_transaction(
            &self.keystore,
            &self.engine,
            transaction,
            password,
            address,
            dapp_chain_id,
        )?;
        log_info!(MODULE, "transaction signed", address = address);
        Ok(signed)
    }

    /// Sign a personal message with the v1 fixed-`32` prefix.
    pub fn sign_message_v1(
        &self,
        text: &str,
        password: &str,
        address: &str,
    ) -> WalletResult<String> {
        signing::sign_message_v1(&self.keystore, &self.engine, text, password, address)
    }

    /// Sign a personal message with the v2 variable-length prefix.
    pub fn sign_message_v2(
        &self,
        text: &str,
        password: &str,
        address: &str,
        v2_type: MessageV2Type,
    ) -> WalletResult<String> {
        signing::sign_message_v2(&self.keystore, &self.engine, text, password, address, v2_type)
    }
}
