//! Wallet provider capability and the in-process dev wallet.

use super::{AccountAddress, WalletError, WalletErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Entry-function transaction handed to a wallet for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Payload kind, always `entry_function_payload` here.
    #[serde(rename = "type")]
    pub kind: String,
    /// Fully qualified Move function.
    pub function: String,
    /// Positional arguments.
    pub arguments: Vec<serde_json::Value>,
    /// Generic type arguments.
    pub type_arguments: Vec<String>,
}

/// What a wallet returns after submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TransactionReceipt {
    hash: String,
}

impl TransactionReceipt {
    /// Wraps a transaction hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// An account exposed by a connected wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WalletAccount {
    address: AccountAddress,
}

impl WalletAccount {
    /// Wraps an address.
    pub fn new(address: AccountAddress) -> Self {
        Self { address }
    }
}

/// A wallet the hub can connect to and ask to sign transactions.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Wallet display name.
    fn name(&self) -> &str;

    /// Asks the wallet for an account.
    async fn connect(&self) -> Result<WalletAccount, WalletError>;

    /// Forgets the connection.
    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Signs and submits a transaction.
    async fn sign_and_submit_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<TransactionReceipt, WalletError>;
}

#[derive(Debug, Default)]
struct DevWalletState {
    connected: bool,
    submitted: Vec<TransactionPayload>,
}

/// Simulated wallet that never touches a chain.
///
/// Every submitted payload is recorded and answered with a made-up hash.
#[derive(Debug)]
pub struct DevWallet {
    name: String,
    address: AccountAddress,
    installed: bool,
    rejection: Option<String>,
    state: Mutex<DevWalletState>,
}

impl DevWallet {
    /// A working wallet holding `address`.
    pub fn new(address: AccountAddress) -> Self {
        Self {
            name: "Petra".to_string(),
            address,
            installed: true,
            rejection: None,
            state: Mutex::new(DevWalletState::default()),
        }
    }

    /// A wallet whose extension is missing.
    pub fn not_installed(address: AccountAddress) -> Self {
        Self {
            installed: false,
            ..Self::new(address)
        }
    }

    /// A wallet that declines every signing request with `reason`.
    pub fn rejecting(address: AccountAddress, reason: impl Into<String>) -> Self {
        Self {
            rejection: Some(reason.into()),
            ..Self::new(address)
        }
    }

    /// Payloads submitted so far.
    pub fn submitted(&self) -> Vec<TransactionPayload> {
        self.lock().submitted.clone()
    }

    /// Whether an account is currently handed out.
    pub fn is_connected(&self) -> bool {
        self.lock().connected
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DevWalletState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[track_caller]
    fn ensure_installed(&self) -> Result<(), WalletError> {
        if self.installed {
            Ok(())
        } else {
            Err(WalletError::new(WalletErrorKind::NotInstalled))
        }
    }
}

#[async_trait::async_trait]
impl WalletProvider for DevWallet {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(wallet = %self.name))]
    async fn connect(&self) -> Result<WalletAccount, WalletError> {
        self.ensure_installed()?;
        self.lock().connected = true;
        info!(address = %self.address, "Dev wallet connected");
        Ok(WalletAccount::new(self.address.clone()))
    }

    #[instrument(skip(self), fields(wallet = %self.name))]
    async fn disconnect(&self) -> Result<(), WalletError> {
        self.lock().connected = false;
        debug!("Dev wallet disconnected");
        Ok(())
    }

    #[instrument(skip(self, payload), fields(wallet = %self.name, function = %payload.function))]
    async fn sign_and_submit_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<TransactionReceipt, WalletError> {
        self.ensure_installed()?;
        if let Some(reason) = &self.rejection {
            warn!(%reason, "Dev wallet rejected transaction");
            return Err(WalletError::new(WalletErrorKind::Rejected(reason.clone())));
        }

        let mut state = self.lock();
        if !state.connected {
            return Err(WalletError::new(WalletErrorKind::NotConnected));
        }
        state.submitted.push(payload.clone());
        let receipt = TransactionReceipt::new(format!("0x{:064x}", state.submitted.len()));
        info!(hash = %receipt.hash(), "Dev wallet accepted transaction");
        Ok(receipt)
    }
}
