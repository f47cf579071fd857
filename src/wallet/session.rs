//! Connection state shown by the hub.

use super::{WalletAccount, WalletError, WalletErrorKind, WalletProvider};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Wallets the hub offers.
pub const SUPPORTED_WALLETS: [&str; 1] = ["Petra"];

/// Whether `name` is a wallet the hub can use.
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_WALLETS.contains(&name)
}

/// The hub's view of the wallet: account, pending connect, last error.
#[derive(Debug, Clone, Default, Getters)]
pub struct WalletSession {
    account: Option<WalletAccount>,
    connecting: bool,
    error: Option<String>,
}

impl WalletSession {
    /// Starts disconnected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an account is connected.
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Records a failure for the banner.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clears the banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Checks a wallet picked from the list, recording an error if it is not
    /// supported.
    #[instrument(skip(self))]
    pub fn select_wallet(&mut self, name: &str) -> Result<(), WalletError> {
        if is_supported(name) {
            return Ok(());
        }
        let err = WalletError::new(WalletErrorKind::UnsupportedWallet(name.to_string()));
        warn!(wallet = name, "Unsupported wallet selected");
        self.record_error(err.user_message());
        Err(err)
    }

    /// Connects through `provider`. On failure the session stays
    /// disconnected and keeps the message.
    #[instrument(skip(self, provider), fields(wallet = provider.name()))]
    pub async fn connect(&mut self, provider: &dyn WalletProvider) -> Result<(), WalletError> {
        self.connecting = true;
        self.error = None;
        let result = provider.connect().await;
        self.connecting = false;

        match result {
            Ok(account) => {
                info!(address = %account.address(), "Wallet connected");
                self.account = Some(account);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Wallet connection failed");
                self.account = None;
                self.record_error(err.user_message());
                Err(err)
            }
        }
    }

    /// Drops the account and any error.
    #[instrument(skip(self, provider), fields(wallet = provider.name()))]
    pub async fn disconnect(&mut self, provider: &dyn WalletProvider) {
        if let Err(err) = provider.disconnect().await {
            warn!(error = %err, "Wallet disconnect reported an error");
        }
        self.account = None;
        self.error = None;
        info!("Wallet disconnected");
    }
}
