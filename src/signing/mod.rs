//! Signing subsystem: digest construction, signature normalization, and the
//! transaction / message orchestration built on them.

pub mod digest;
pub mod message;
pub mod signature;
pub mod transaction;

pub use digest::{message_v1_digest, message_v2_digest, transaction_digest, MESSAGE_PREFIX};
pub use message::{sign_message_v1, sign_message_v2};
pub use signature::TronSignature;
pub use transaction::sign_transaction;
