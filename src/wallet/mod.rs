//! Wallet connection and token rewards.
//!
//! Real chain access is out of scope; [`DevWallet`] stands in for the
//! browser extension and records what it is asked to sign.

mod address;
mod error;
mod provider;
mod reward;
mod session;

pub use address::AccountAddress;
pub use error::{WalletError, WalletErrorKind};
pub use provider::{
    DevWallet, TransactionPayload, TransactionReceipt, WalletAccount, WalletProvider,
};
pub use reward::{DEFAULT_REWARD_OCTAS, ENTRY_FUNCTION_PAYLOAD, RewardIssuer, TRANSFER_FUNCTION};
pub use session::{SUPPORTED_WALLETS, WalletSession, is_supported};
