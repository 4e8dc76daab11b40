//! Scoped access to decrypted key material.
//!
//! Every decrypted secret is acquired, used, and zeroed inside one guard
//! call. The zero-on-exit invariant holds on success, on an error from the
//! body, and on unwind: the buffer never leaves a `Zeroizing` wrapper, so
//! there is no control path that skips the wipe.

use zeroize::Zeroizing;

use crate::error::WalletResult;
use crate::keystore::KeyExporter;
use crate::types::Account;

/// Decrypt `account`'s private key and run `body` over the raw bytes.
///
/// Wrong password or a corrupt record fails before `body` is invoked. The
/// key buffer is the sole copy of the plaintext and is overwritten with
/// zeros when this function returns, whatever the outcome.
pub fn with_private_key<K, T, F>(
    exporter: &K,
    account: &Account,
    password: &str,
    body: F,
) -> WalletResult<T>
where
    K: KeyExporter + ?Sized,
    F: FnOnce(&[u8]) -> WalletResult<T>,
{
    let key: Zeroizing<Vec<u8>> = exporter.export_private_key(account, password)?;
    body(&key)
    // `key` drops here on every path and zeroes its backing memory.
}

/// Decrypt `account`'s mnemonic and run `body` over the phrase.
///
/// Same contract as [`with_private_key`], operating on a string buffer.
pub fn with_mnemonic<K, T, F>(
    exporter: &K,
    account: &Account,
    password: &str,
    body: F,
) -> WalletResult<T>
where
    K: KeyExporter + ?Sized,
    F: FnOnce(&str) -> WalletResult<T>,
{
    let mnemonic: Zeroizing<String> = exporter.export_mnemonic(account, password)?;
    body(&mnemonic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::keystore::mock::MemoryKeyStore;
    use crate::keystore::{find_account, AccountRepository};
    use std::cell::Cell;

    #[test]
    fn body_sees_the_decrypted_key() {
        let mut store = MemoryKeyStore::new();
        let address = store.add_account(&[0x55; 32], "pw", "");
        let accounts = store.accounts();
        let account = find_account(&accounts, &address).unwrap();

        let first = with_private_key(&store, account, "pw", |key| {
            assert_eq!(key.len(), 32);
            Ok(key[0])
        })
        .unwrap();
        assert_eq!(first, 0x55);
    }

    #[test]
    fn wrong_password_never_invokes_body() {
        let mut store = MemoryKeyStore::new();
        let address = store.add_account(&[0x66; 32], "pw", "");
        let accounts = store.accounts();
        let account = find_account(&accounts, &address).unwrap();

        let invoked = Cell::new(false);
        let result = with_private_key(&store, account, "nope", |_| {
            invoked.set(true);
            Ok(())
        });

        assert!(matches!(result, Err(WalletError::WrongPassword)));
        assert!(!invoked.get());
    }

    #[test]
    fn body_error_propagates() {
        let mut store = MemoryKeyStore::new();
        let address = store.add_account(&[0x77; 32], "pw", "");
        let accounts = store.accounts();
        let account = find_account(&accounts, &address).unwrap();

        let result: WalletResult<()> = with_private_key(&store, account, "pw", |_| {
            Err(WalletError::SigningFailed("engine said no".into()))
        });
        assert!(matches!(result, Err(WalletError::SigningFailed(_))));

        // The failure left the store usable; a second scoped access works.
        with_private_key(&store, account, "pw", |key| {
            assert_eq!(key, &[0x77; 32]);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn mnemonic_guard_round_trips() {
        let mut store = MemoryKeyStore::new();
        let address = store.add_account(&[0x88; 32], "pw", "abandon ability able");
        let accounts = store.accounts();
        let account = find_account(&accounts, &address).unwrap();

        let words = with_mnemonic(&store, account, "pw", |m| Ok(m.to_string())).unwrap();
        assert_eq!(words, "abandon ability able");
    }
}
