//! # Exchange Engine
//!
//! Trades ledger units against the base-currency reserve. The engine owns a
//! ledger account (the holding account) seeded with inventory by the owner;
//! every trade is an ordinary ledger transfer with the engine on one side,
//! so the supply invariant and the transaction log cover trades for free.

use crate::domain::errors::ExchangeError;
use parking_lot::RwLock;
use shared_types::{AccountId, U256};
use std::sync::Arc;
use tessera_access::{AccessControl, Permission};
use tessera_ledger::AccountLedger;
use tessera_registry::VerificationRegistry;
use tracing::{debug, info};

/// Deployment-time policy switches.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Require a registry entry before a buy is accepted.
    pub require_verification: bool,
    /// Allow bots to settle externally-paid purchases.
    pub bots_may_settle: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            require_verification: true,
            bots_may_settle: true,
        }
    }
}

pub struct ExchangeEngine {
    /// The engine's holding account on the ledger.
    account: AccountId,
    access: Arc<AccessControl>,
    ledger: Arc<AccountLedger>,
    registry: Arc<VerificationRegistry>,
    config: EngineConfig,
    /// Base currency held against future sells, in the smallest unit.
    reserve: RwLock<U256>,
}

impl ExchangeEngine {
    pub fn new(
        account: AccountId,
        access: Arc<AccessControl>,
        ledger: Arc<AccountLedger>,
        registry: Arc<VerificationRegistry>,
        config: EngineConfig,
    ) -> Self {
        Self {
            account,
            access,
            ledger,
            registry,
            config,
            reserve: RwLock::new(U256::zero()),
        }
    }

    /// The ledger account holding the engine's sale inventory.
    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn contract_balance(&self) -> U256 {
        *self.reserve.read()
    }

    fn require_bound(&self) -> Result<(), ExchangeError> {
        if self.ledger.engine() == Some(self.account) {
            Ok(())
        } else {
            Err(ExchangeError::EngineNotBound)
        }
    }

    // =========================================================================
    // TRADING
    // =========================================================================

    /// Exchange `payment` base currency for units at the current buy price.
    ///
    /// Check order: binding, caller freeze, pause, verification, zero
    /// purchase. The payment joins the reserve only after the unit transfer
    /// succeeds.
    pub fn buy(&self, caller: &AccountId, payment: U256) -> Result<U256, ExchangeError> {
        self.require_bound()?;
        if self.access.is_frozen(caller) {
            return Err(ExchangeError::FrozenAccount);
        }
        if self.access.is_paused() {
            return Err(ExchangeError::Paused);
        }
        if self.config.require_verification && !self.registry.is_verified(caller) {
            return Err(ExchangeError::NotVerified);
        }
        // A zero buy price disables this direction; folding it into the
        // zero-purchase rejection keeps the caller-facing surface small.
        let units = payment
            .checked_div(self.access.buy_price())
            .unwrap_or_default();
        if units.is_zero() {
            return Err(ExchangeError::ZeroPurchase);
        }
        {
            let mut reserve = self.reserve.write();
            let credited = reserve
                .checked_add(payment)
                .ok_or(ExchangeError::Overflow)?;
            self.ledger.transfer(&self.account, *caller, units)?;
            *reserve = credited;
        }
        info!(buyer = ?caller, payment = %payment, units = %units, "buy executed");
        Ok(units)
    }

    /// Sell `amount` units back to the engine at the current sell price.
    ///
    /// Check order: binding, pause, caller freeze, payout arithmetic, zero
    /// payout, reserve coverage. All-or-nothing: the unit transfer only runs
    /// once the payout is known to be coverable.
    pub fn sell(&self, caller: &AccountId, amount: U256) -> Result<U256, ExchangeError> {
        self.require_bound()?;
        if self.access.is_paused() {
            return Err(ExchangeError::Paused);
        }
        if self.access.is_frozen(caller) {
            return Err(ExchangeError::FrozenAccount);
        }
        // A zero payout covers both a zero amount and a zero sell price;
        // units never leave the seller for nothing.
        let owed = amount
            .checked_mul(self.access.sell_price())
            .ok_or(ExchangeError::Overflow)?;
        if owed.is_zero() {
            return Err(ExchangeError::BelowMinimum);
        }
        {
            let mut reserve = self.reserve.write();
            if *reserve < owed {
                return Err(ExchangeError::InsufficientReserve);
            }
            self.ledger.transfer(caller, self.account, amount)?;
            *reserve = *reserve - owed;
        }
        info!(seller = ?caller, amount = %amount, owed = %owed, "sell executed");
        Ok(owed)
    }

    /// Deliver units for a purchase paid outside the base currency: a
    /// transfer out of the holding account with no reserve movement.
    /// Owner always; bots only when the policy allows.
    pub fn settle_external_purchase(
        &self,
        caller: &AccountId,
        to: AccountId,
        amount: U256,
    ) -> Result<(), ExchangeError> {
        self.require_bound()?;
        let permitted = if self.config.bots_may_settle {
            Permission::OwnerOrBot
        } else {
            Permission::Owner
        };
        self.access.require(caller, permitted)?;
        self.ledger.transfer(&self.account, to, amount)?;
        debug!(to = ?to, amount = %amount, "external purchase settled");
        Ok(())
    }

    // =========================================================================
    // RESERVE
    // =========================================================================

    /// Accept a base-currency deposit into the reserve with no unit
    /// movement. Open to anyone, matching a plain payable receive.
    pub fn receive(&self, payment: U256) -> Result<(), ExchangeError> {
        let mut reserve = self.reserve.write();
        *reserve = reserve
            .checked_add(payment)
            .ok_or(ExchangeError::Overflow)?;
        debug!(payment = %payment, "reserve deposit");
        Ok(())
    }

    /// Pay `amount` of the reserve out to the configured treasury wallet.
    /// Owner-only; refused until a wallet has been set.
    pub fn withdraw(&self, caller: &AccountId, amount: U256) -> Result<AccountId, ExchangeError> {
        self.access.require(caller, Permission::Owner)?;
        let wallet = self.access.wallet().ok_or(ExchangeError::WalletNotSet)?;
        let mut reserve = self.reserve.write();
        if *reserve < amount {
            return Err(ExchangeError::InsufficientReserve);
        }
        *reserve = *reserve - amount;
        info!(wallet = ?wallet, amount = %amount, "reserve withdrawn");
        Ok(wallet)
    }
}
