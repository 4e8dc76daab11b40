//! Key repository seam: account listing, lookup, and password-gated export.
//!
//! Durable storage and encryption-at-rest live behind these traits. The
//! signing core takes a fresh account snapshot per call and never assumes
//! in-place mutation of the repository is visible to it. Repositories are
//! responsible for serializing concurrent access to the same account.

mod guard;

pub use guard::{with_mnemonic, with_private_key};

use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};
use crate::types::Account;

/// Read access to the repository's account list, plus account creation.
pub trait AccountRepository {
    /// Immutable snapshot of all stored accounts.
    fn accounts(&self) -> Vec<Account>;

    /// Create and persist a new account protected by `password`.
    fn create_account(&mut self, password: &str) -> WalletResult<Account>;
}

/// Password-gated decryption of stored key material.
///
/// Implementations must fail with [`WalletError::WrongPassword`] or
/// [`WalletError::CorruptKeyRecord`] without returning partial plaintext.
/// Returned buffers are sole owners of their memory and zero themselves on
/// drop; callers go through [`with_private_key`] / [`with_mnemonic`] rather
/// than holding the plaintext directly.
pub trait KeyExporter {
    fn export_private_key(
        &self,
        account: &Account,
        password: &str,
    ) -> WalletResult<Zeroizing<Vec<u8>>>;

    fn export_mnemonic(
        &self,
        account: &Account,
        password: &str,
    ) -> WalletResult<Zeroizing<String>>;
}

/// Locate an account by exact address match.
///
/// Linear scan over the snapshot; no caching. Absence is a local condition,
/// not a fatal one.
pub fn find_account<'a>(accounts: &'a [Account], address: &str) -> WalletResult<&'a Account> {
    accounts
        .iter()
        .find(|account| account.address == address)
        .ok_or_else(|| WalletError::AccountNotFound(address.to_string()))
}
