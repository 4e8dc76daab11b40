//! Error types for the wallet signing core.
//!
//! Lookup and export failures are local conditions: every variant leaves the
//! account repository untouched and is safe to surface to the caller. The
//! legacy convention of collapsing failures into an empty string is gone;
//! each failure keeps its reason.

/// Errors produced by account lookup, key export, and signing.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("no account with address {0}")]
    AccountNotFound(String),

    #[error("wrong password")]
    WrongPassword,

    #[error("corrupt key record: {0}")]
    CorruptKeyRecord(String),

    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("failed to create wallet: {0}")]
    FailedToCreateWallet(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Result type alias for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_the_failure_reason() {
        let err = WalletError::AccountNotFound("TAbc".into());
        assert_eq!(err.to_string(), "no account with address TAbc");

        let err = WalletError::InvalidChainId("zz".into());
        assert!(err.to_string().contains("zz"));
    }
}
