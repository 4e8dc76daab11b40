//! Tron Wallet Signing Core
//!
//! Signing facade for the Tron account model: account lookup inside an
//! encrypted key repository, password-gated export of key material, and
//! protocol-correct signatures for raw transactions and both generations of
//! personal-message signing.
//!
//! # Architecture
//!
//! - **keystore**: repository and exporter traits, account lookup, scoped
//!   key access with guaranteed zeroization
//! - **signing**: digest construction (transaction, message v1/v2),
//!   recovery-id normalization, signing orchestration
//! - **engine**: recoverable ECDSA seam plus the default secp256k1 engine
//! - **wallet**: the `TronWallet` facade callers interact with
//! - **utils**: hashing, base58check addresses, redacting structured logging
//!
//! # Security
//!
//! Decrypted private keys and mnemonics exist only inside a scoped guard and
//! are overwritten with zeros on every exit path, including errors. Log
//! fields holding secrets are redacted by construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use tron_wallet_core::{TronWallet, MessageV2Type};
//!
//! let wallet = TronWallet::new(keystore);
//! let signed = wallet.sign_transaction(tx, password, address, "")?;
//! let sig = wallet.sign_message_v2(msg, password, address, MessageV2Type::String)?;
//! ```

pub mod engine;
pub mod error;
pub mod keystore;
pub mod signing;
pub mod types;
pub mod utils;
pub mod wallet;

pub use engine::{RecoverableParts, Secp256k1Engine, SigningEngine};
pub use error::{WalletError, WalletResult};
pub use keystore::{find_account, with_mnemonic, with_private_key, AccountRepository, KeyExporter};
pub use signing::{
    message_v1_digest, message_v2_digest, sign_message_v1, sign_message_v2, sign_transaction,
    transaction_digest, TronSignature, MESSAGE_PREFIX,
};
pub use types::{Account, Contract, KeyRecord, MessageV2Type, RawTransaction};
pub use utils::crypto::{is_tron_address, keccak256, sha256, tron_address_from_public_key};
pub use wallet::TronWallet;
