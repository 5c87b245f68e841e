//! # Distributor
//!
//! Fans one amount out to many recipients from a single source account.
//! The total cost is checked up front so an underfunded batch fails before
//! any recipient is paid.

use crate::domain::errors::AirdropError;
use shared_types::{AccountId, U256};
use std::sync::Arc;
use tessera_ledger::AccountLedger;
use tracing::info;

pub struct Distributor {
    ledger: Arc<AccountLedger>,
    /// The funded account drops are paid from.
    account: AccountId,
}

impl Distributor {
    pub fn new(ledger: Arc<AccountLedger>, account: AccountId) -> Self {
        Self { ledger, account }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    /// Pay `amount` to every recipient, or to none.
    ///
    /// The balance pre-check makes underfunding atomic. Per-recipient
    /// failures (a null recipient, a freeze landing mid-batch) still abort
    /// the remainder; the pre-check cannot see those.
    pub fn distribute(
        &self,
        amount: U256,
        recipients: &[AccountId],
    ) -> Result<(), AirdropError> {
        if recipients.is_empty() {
            return Err(AirdropError::EmptyBatch);
        }
        let required = amount
            .checked_mul(U256::from(recipients.len()))
            .ok_or(AirdropError::Overflow)?;
        let available = self.ledger.balance_of(&self.account);
        if available < required {
            return Err(AirdropError::InsufficientBalance {
                required,
                available,
            });
        }
        for recipient in recipients {
            self.ledger.transfer(&self.account, *recipient, amount)?;
        }
        info!(
            count = recipients.len(),
            amount = %amount,
            "airdrop distributed"
        );
        Ok(())
    }
}
