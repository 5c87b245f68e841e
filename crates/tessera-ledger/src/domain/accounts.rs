//! # Account Ledger
//!
//! Balances, allowances, and total supply, mutated only through the
//! operations below. Check order inside each operation is normative: the
//! first failing precondition aborts the call before any state is touched,
//! so a failed call never leaves a partial mutation behind.
//!
//! Mint and burn deliberately ignore the global pause: supply seeding and
//! emergency contraction happen while trading is paused, exactly as the
//! deployment lifecycle expects.

use crate::domain::errors::LedgerError;
use crate::ports::TransactionWriter;
use parking_lot::RwLock;
use shared_types::{is_null, AccountId, Event, EventSink, NULL_ACCOUNT, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tessera_access::{AccessControl, Permission};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<AccountId, U256>,
    allowances: HashMap<AccountId, HashMap<AccountId, U256>>,
    total_supply: U256,
    engine: Option<AccountId>,
}

impl LedgerState {
    fn balance(&self, id: &AccountId) -> U256 {
        self.balances.get(id).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> U256 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: AccountId, spender: AccountId, amount: U256) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);
    }

    /// Move `amount` between two accounts. Caller has already verified the
    /// source balance; the credit is still overflow-checked. A self-transfer
    /// leaves the balance untouched.
    fn move_balance(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if from == to {
            return Ok(());
        }
        let debited = self.balance(from) - amount;
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(*from, debited);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

/// The account ledger. Shares one `AccessControl` with the other components
/// and mirrors every balance movement into the injected transaction log.
pub struct AccountLedger {
    access: Arc<AccessControl>,
    log: Arc<dyn TransactionWriter>,
    sink: Arc<dyn EventSink>,
    state: RwLock<LedgerState>,
}

impl AccountLedger {
    pub fn new(
        access: Arc<AccessControl>,
        log: Arc<dyn TransactionWriter>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            access,
            log,
            sink,
            state: RwLock::new(LedgerState::default()),
        }
    }

    // =========================================================================
    // TRANSFERS
    // =========================================================================

    /// Move `amount` from the caller to `to`.
    ///
    /// Check order: pause, caller freeze, null recipient, balance.
    pub fn transfer(
        &self,
        caller: &AccountId,
        to: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if self.access.is_paused() {
            return Err(LedgerError::Paused);
        }
        if self.access.is_frozen(caller) {
            return Err(LedgerError::FrozenAccount);
        }
        if is_null(&to) {
            return Err(LedgerError::ZeroAccount);
        }
        {
            let mut state = self.state.write();
            let available = state.balance(caller);
            if available < amount {
                return Err(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                });
            }
            state.move_balance(caller, &to, amount)?;
        }
        debug!(from = ?caller, to = ?to, amount = %amount, "transfer");
        self.log.append(*caller, to, amount);
        self.sink.publish(Event::Transfer {
            from: *caller,
            to,
            amount,
        });
        Ok(())
    }

    /// Spend `from`'s allowance granted to the caller.
    ///
    /// Check order: pause, null recipient, allowance, balance.
    pub fn transfer_from(
        &self,
        caller: &AccountId,
        from: AccountId,
        to: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if self.access.is_paused() {
            return Err(LedgerError::Paused);
        }
        if is_null(&to) {
            return Err(LedgerError::ZeroAccount);
        }
        {
            let mut state = self.state.write();
            let approved = state.allowance(&from, caller);
            if approved < amount {
                return Err(LedgerError::InsufficientAllowance {
                    required: amount,
                    available: approved,
                });
            }
            let available = state.balance(&from);
            if available < amount {
                return Err(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                });
            }
            state.set_allowance(from, *caller, approved - amount);
            state.move_balance(&from, &to, amount)?;
        }
        debug!(spender = ?caller, from = ?from, to = ?to, amount = %amount, "transfer_from");
        self.log.append(from, to, amount);
        self.sink.publish(Event::Transfer { from, to, amount });
        Ok(())
    }

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    /// Unconditional overwrite of the caller's allowance for `spender`.
    pub fn approve(
        &self,
        caller: &AccountId,
        spender: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if self.access.is_paused() {
            return Err(LedgerError::Paused);
        }
        self.state.write().set_allowance(*caller, spender, amount);
        self.sink.publish(Event::Approval {
            owner: *caller,
            spender,
            amount,
        });
        Ok(())
    }

    /// Saturating increase of the allowance; notifies with the new value.
    pub fn increase_approval(
        &self,
        caller: &AccountId,
        spender: AccountId,
        delta: U256,
    ) -> Result<(), LedgerError> {
        if self.access.is_paused() {
            return Err(LedgerError::Paused);
        }
        let amount = {
            let mut state = self.state.write();
            let amount = state.allowance(caller, &spender).saturating_add(delta);
            state.set_allowance(*caller, spender, amount);
            amount
        };
        self.sink.publish(Event::Approval {
            owner: *caller,
            spender,
            amount,
        });
        Ok(())
    }

    /// Saturating decrease of the allowance; floors at zero and notifies
    /// with the new value.
    pub fn decrease_approval(
        &self,
        caller: &AccountId,
        spender: AccountId,
        delta: U256,
    ) -> Result<(), LedgerError> {
        if self.access.is_paused() {
            return Err(LedgerError::Paused);
        }
        let amount = {
            let mut state = self.state.write();
            let amount = state.allowance(caller, &spender).saturating_sub(delta);
            state.set_allowance(*caller, spender, amount);
            amount
        };
        self.sink.publish(Event::Approval {
            owner: *caller,
            spender,
            amount,
        });
        Ok(())
    }

    // =========================================================================
    // SUPPLY (mint / burn) — not pause-gated
    // =========================================================================

    /// Expand supply into `to`. Owner-only; refused once minting finished.
    ///
    /// Emits the synthetic transfer from the null account first, then the
    /// mint notification, and mirrors the transfer into the log.
    pub fn mint(
        &self,
        caller: &AccountId,
        to: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        self.access.require(caller, Permission::Owner)?;
        if self.access.minting_finished() {
            return Err(LedgerError::MintingFinished);
        }
        if is_null(&to) {
            return Err(LedgerError::ZeroAccount);
        }
        {
            let mut state = self.state.write();
            let supply = state
                .total_supply
                .checked_add(amount)
                .ok_or(LedgerError::Overflow)?;
            let credited = state
                .balance(&to)
                .checked_add(amount)
                .ok_or(LedgerError::Overflow)?;
            state.total_supply = supply;
            state.balances.insert(to, credited);
        }
        info!(to = ?to, amount = %amount, "minted");
        self.log.append(NULL_ACCOUNT, to, amount);
        self.sink.publish(Event::Transfer {
            from: NULL_ACCOUNT,
            to,
            amount,
        });
        self.sink.publish(Event::Mint { to, amount });
        Ok(())
    }

    /// Contract supply out of the caller's own balance.
    ///
    /// Emits the burn notification first, then the synthetic transfer to the
    /// null account, and mirrors the transfer into the log.
    pub fn burn(&self, caller: &AccountId, amount: U256) -> Result<(), LedgerError> {
        {
            let mut state = self.state.write();
            let available = state.balance(caller);
            if available < amount {
                return Err(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                });
            }
            state.balances.insert(*caller, available - amount);
            state.total_supply = state.total_supply - amount;
        }
        self.finish_burn(*caller, amount);
        Ok(())
    }

    /// Burn out of `from`'s balance using the caller's allowance.
    pub fn burn_from(
        &self,
        caller: &AccountId,
        from: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        {
            let mut state = self.state.write();
            let approved = state.allowance(&from, caller);
            if approved < amount {
                return Err(LedgerError::InsufficientAllowance {
                    required: amount,
                    available: approved,
                });
            }
            let available = state.balance(&from);
            if available < amount {
                return Err(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                });
            }
            state.set_allowance(from, *caller, approved - amount);
            state.balances.insert(from, available - amount);
            state.total_supply = state.total_supply - amount;
        }
        self.finish_burn(from, amount);
        Ok(())
    }

    fn finish_burn(&self, burner: AccountId, amount: U256) {
        info!(burner = ?burner, amount = %amount, "burned");
        self.log.append(burner, NULL_ACCOUNT, amount);
        self.sink.publish(Event::Burn { burner, amount });
        self.sink.publish(Event::Transfer {
            from: burner,
            to: NULL_ACCOUNT,
            amount,
        });
    }

    // =========================================================================
    // ENGINE BINDING (construction-time wiring)
    // =========================================================================

    /// One-time, owner-only registration of the exchange engine's holding
    /// account. Performed after construction by the deployer.
    pub fn bind_engine(&self, caller: &AccountId, engine: AccountId) -> Result<(), LedgerError> {
        self.access.require(caller, Permission::Owner)?;
        let mut state = self.state.write();
        if state.engine.is_some() {
            return Err(LedgerError::EngineAlreadyBound);
        }
        state.engine = Some(engine);
        info!(engine = ?engine, "exchange engine bound");
        Ok(())
    }

    pub fn engine(&self) -> Option<AccountId> {
        self.state.read().engine
    }

    // =========================================================================
    // PURE READS
    // =========================================================================

    pub fn balance_of(&self, id: &AccountId) -> U256 {
        self.state.read().balance(id)
    }

    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> U256 {
        self.state.read().allowance(owner, spender)
    }

    pub fn total_supply(&self) -> U256 {
        self.state.read().total_supply
    }
}
