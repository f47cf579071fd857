//! Wallet error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum WalletErrorKind {
    /// No wallet extension is available.
    #[display("Petra wallet not found. Please install the Petra extension.")]
    NotInstalled,
    /// A wallet other than the supported one was picked.
    #[display("Only Petra wallet is supported in this demo.")]
    UnsupportedWallet(String),
    /// An operation needed a connected account.
    #[display("Wallet not connected")]
    NotConnected,
    /// The wallet declined the request.
    #[display("{}", _0)]
    Rejected(String),
    /// A string that is not an account address.
    #[display("Invalid account address: {}", _0)]
    InvalidAddress(String),
    /// The transaction could not be submitted.
    #[display("{}", _0)]
    Submission(String),
}

/// Wallet error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Wallet error: {} at {}:{}", kind, file, line)]
pub struct WalletError {
    /// Error category and detail.
    pub kind: WalletErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WalletError {
    /// Creates a new wallet error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: WalletErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The message shown in the hub banner.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<WalletErrorKind> for WalletError {
    #[track_caller]
    fn from(kind: WalletErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_omits_location() {
        let err = WalletError::new(WalletErrorKind::NotInstalled);
        assert_eq!(
            err.user_message(),
            "Petra wallet not found. Please install the Petra extension."
        );
        assert!(err.to_string().contains("error.rs"));
    }

    #[test]
    fn test_location_is_caller() {
        let err: WalletError = WalletErrorKind::NotConnected.into();
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
