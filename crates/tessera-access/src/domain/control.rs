//! # Access Control State Machine
//!
//! Owner/bot role sets, the global pause flag, the frozen-account set, the
//! one-way minting-finished flag, and the exchange pricing/treasury fields.
//!
//! The external execution environment delivers one mutating call at a time;
//! the internal lock only keeps each call atomic when the instance is shared
//! through an `Arc` across components.

use crate::domain::errors::AccessError;
use parking_lot::RwLock;
use shared_types::{AccountId, Event, EventSink, U256};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Permission required by a gated operation.
///
/// Every call site states its requirement explicitly and evaluates it through
/// [`AccessControl::require`]; overlapping role predicates are never duplicated
/// inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    /// Caller must be in the owner set.
    Owner,
    /// Caller must be in the owner set or the bot set.
    OwnerOrBot,
}

#[derive(Debug)]
struct AccessState {
    owners: HashSet<AccountId>,
    bots: HashSet<AccountId>,
    paused: bool,
    frozen: HashSet<AccountId>,
    minting_finished: bool,
    sell_price: U256,
    buy_price: U256,
    wallet: Option<AccountId>,
}

/// Shared role/flag store consulted by every mutating operation in the
/// workspace.
pub struct AccessControl {
    state: RwLock<AccessState>,
    sink: Arc<dyn EventSink>,
}

impl AccessControl {
    /// Create the store with `deployer` as the first owner.
    ///
    /// The ledger starts paused: supply seeding and role setup happen before
    /// trading opens, so deployments unpause explicitly once wired.
    pub fn new(deployer: AccountId, sink: Arc<dyn EventSink>) -> Self {
        let mut owners = HashSet::new();
        owners.insert(deployer);
        Self {
            state: RwLock::new(AccessState {
                owners,
                bots: HashSet::new(),
                paused: true,
                frozen: HashSet::new(),
                minting_finished: false,
                sell_price: U256::zero(),
                buy_price: U256::zero(),
                wallet: None,
            }),
            sink,
        }
    }

    // =========================================================================
    // AUTHORIZATION PREDICATE
    // =========================================================================

    /// Check that `caller` holds `permission`. Performs no state change.
    pub fn require(&self, caller: &AccountId, permission: Permission) -> Result<(), AccessError> {
        let state = self.state.read();
        let granted = match permission {
            Permission::Owner => state.owners.contains(caller),
            Permission::OwnerOrBot => {
                state.owners.contains(caller) || state.bots.contains(caller)
            }
        };
        if granted {
            Ok(())
        } else {
            debug!(caller = ?caller, ?permission, "authorization denied");
            Err(AccessError::Unauthorized)
        }
    }

    // =========================================================================
    // ROLE MANAGEMENT (owner-only)
    // =========================================================================

    pub fn is_owner(&self, id: &AccountId) -> bool {
        self.state.read().owners.contains(id)
    }

    pub fn is_bot(&self, id: &AccountId) -> bool {
        self.state.read().bots.contains(id)
    }

    pub fn add_owner(&self, caller: &AccountId, id: AccountId) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        self.state.write().owners.insert(id);
        info!(owner = ?id, "owner added");
        Ok(())
    }

    /// Remove `id` from the owner set. Returns `false` (not an error) when
    /// `id` was not an owner. Refuses to empty the owner set.
    pub fn remove_owner(&self, caller: &AccountId, id: &AccountId) -> Result<bool, AccessError> {
        self.require(caller, Permission::Owner)?;
        let mut state = self.state.write();
        if !state.owners.contains(id) {
            return Ok(false);
        }
        if state.owners.len() == 1 {
            return Err(AccessError::LastOwner);
        }
        state.owners.remove(id);
        info!(owner = ?id, "owner removed");
        Ok(true)
    }

    pub fn set_owner(
        &self,
        caller: &AccountId,
        id: AccountId,
        enabled: bool,
    ) -> Result<(), AccessError> {
        if enabled {
            self.add_owner(caller, id)
        } else {
            self.remove_owner(caller, &id).map(|_| ())
        }
    }

    pub fn set_bot(
        &self,
        caller: &AccountId,
        id: AccountId,
        enabled: bool,
    ) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        let mut state = self.state.write();
        if enabled {
            state.bots.insert(id);
        } else {
            state.bots.remove(&id);
        }
        info!(bot = ?id, enabled, "bot set updated");
        Ok(())
    }

    // =========================================================================
    // PAUSE / FREEZE
    // =========================================================================

    pub fn is_paused(&self) -> bool {
        self.state.read().paused
    }

    /// Engage the global pause. Bots may pause (emergency stop); only owners
    /// may unpause. Pausing an already-paused ledger is a state no-op but
    /// remains gated and still notifies.
    pub fn pause(&self, caller: &AccountId) -> Result<(), AccessError> {
        self.require(caller, Permission::OwnerOrBot)?;
        self.state.write().paused = true;
        info!(caller = ?caller, "ledger paused");
        self.sink.publish(Event::Paused);
        Ok(())
    }

    pub fn unpause(&self, caller: &AccountId) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        self.state.write().paused = false;
        info!(caller = ?caller, "ledger unpaused");
        self.sink.publish(Event::Unpaused);
        Ok(())
    }

    pub fn is_frozen(&self, id: &AccountId) -> bool {
        self.state.read().frozen.contains(id)
    }

    /// Toggle the per-account freeze. Idempotent: freezing a frozen account
    /// leaves it frozen.
    pub fn freeze_account(
        &self,
        caller: &AccountId,
        target: AccountId,
        frozen: bool,
    ) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        {
            let mut state = self.state.write();
            if frozen {
                state.frozen.insert(target);
            } else {
                state.frozen.remove(&target);
            }
        }
        info!(target = ?target, frozen, "freeze state changed");
        self.sink.publish(Event::FrozenFunds { target, frozen });
        Ok(())
    }

    // =========================================================================
    // MINTING FINALIZATION (one-way)
    // =========================================================================

    pub fn minting_finished(&self) -> bool {
        self.state.read().minting_finished
    }

    /// Permanently finish minting. The flag is monotonic: a second call fails
    /// with `MintingFinished` and the flag can never be reset.
    pub fn finish_minting(&self, caller: &AccountId) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        {
            let mut state = self.state.write();
            if state.minting_finished {
                return Err(AccessError::MintingFinished);
            }
            state.minting_finished = true;
        }
        info!("minting finished");
        self.sink.publish(Event::MintFinished);
        Ok(())
    }

    // =========================================================================
    // EXCHANGE PRICING / TREASURY
    // =========================================================================

    /// Unconditional overwrite of both prices. No validation: a zero price
    /// simply disables the corresponding exchange direction.
    pub fn set_prices(
        &self,
        caller: &AccountId,
        sell_price: U256,
        buy_price: U256,
    ) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        let mut state = self.state.write();
        state.sell_price = sell_price;
        state.buy_price = buy_price;
        info!(sell = %sell_price, buy = %buy_price, "prices set");
        Ok(())
    }

    pub fn sell_price(&self) -> U256 {
        self.state.read().sell_price
    }

    pub fn buy_price(&self) -> U256 {
        self.state.read().buy_price
    }

    pub fn set_wallet(&self, caller: &AccountId, wallet: AccountId) -> Result<(), AccessError> {
        self.require(caller, Permission::Owner)?;
        self.state.write().wallet = Some(wallet);
        info!(wallet = ?wallet, "treasury wallet set");
        Ok(())
    }

    pub fn wallet(&self) -> Option<AccountId> {
        self.state.read().wallet
    }
}
