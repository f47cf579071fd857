//! Token rewards for winning rounds.

use super::{
    AccountAddress, TransactionPayload, TransactionReceipt, WalletError, WalletErrorKind,
    WalletProvider, WalletSession,
};
use derive_getters::Getters;
use serde_json::json;
use tracing::{info, instrument, warn};

/// Payload kind for entry-function calls.
pub const ENTRY_FUNCTION_PAYLOAD: &str = "entry_function_payload";

/// Coin transfer entry function.
pub const TRANSFER_FUNCTION: &str = "0x1::aptos_account::transfer";

/// 0.001 APT.
pub const DEFAULT_REWARD_OCTAS: u64 = 100_000;

/// Builds and submits reward transfers.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RewardIssuer {
    amount_octas: u64,
}

impl RewardIssuer {
    /// Issuer paying `amount_octas` per win.
    pub fn new(amount_octas: u64) -> Self {
        Self { amount_octas }
    }

    /// Transfer payload paying `to`.
    pub fn payload_for(&self, to: &AccountAddress) -> TransactionPayload {
        TransactionPayload {
            kind: ENTRY_FUNCTION_PAYLOAD.to_string(),
            function: TRANSFER_FUNCTION.to_string(),
            arguments: vec![json!(to.as_str()), json!(self.amount_octas)],
            type_arguments: Vec::new(),
        }
    }

    /// Pays the connected account. Failures are recorded on the session as
    /// well as returned.
    #[instrument(skip(self, session, provider), fields(amount = self.amount_octas))]
    pub async fn issue(
        &self,
        session: &mut WalletSession,
        provider: &dyn WalletProvider,
    ) -> Result<TransactionReceipt, WalletError> {
        let Some(account) = session.account().clone() else {
            let err = WalletError::new(WalletErrorKind::NotConnected);
            session.record_error(err.user_message());
            return Err(err);
        };

        let payload = self.payload_for(account.address());
        match provider.sign_and_submit_transaction(&payload).await {
            Ok(receipt) => {
                info!(to = %account.address(), hash = %receipt.hash(), "Reward sent");
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "Reward transfer failed");
                session.record_error(err.user_message());
                Err(err)
            }
        }
    }
}

impl Default for RewardIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_REWARD_OCTAS)
    }
}
