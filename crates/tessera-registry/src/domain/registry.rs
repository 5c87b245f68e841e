//! # Verification Level Store
//!
//! One entry per account: an opaque 32-byte credential plus an explicit rank
//! tier. The rank is carried as its own field instead of being parsed out of
//! the credential's trailing byte, so level comparison is a plain integer
//! compare and never a numeric-string ambiguity.
//!
//! ## Write Rule
//!
//! Upgrade-only. An upsert with `rank >= current` replaces the entry; a lower
//! rank silently retains the existing entry. Removal clears to the absent
//! sentinel and reports the removed level for audit.

use crate::domain::errors::RegistryError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{is_null, AccountId, Event, EventSink};
use std::collections::HashMap;
use std::sync::Arc;
use tessera_access::{AccessControl, Permission};
use tracing::{debug, info};

/// Largest batch `upsert_many` accepts in one call.
pub const MAX_BATCH: usize = 128;

/// A stored verification level: the externally-issued credential and its
/// rank in the KYC hierarchy. Absence of an entry is the sentinel state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationLevel {
    /// Opaque 32-byte credential issued by the verification provider.
    pub credential: [u8; 32],
    /// Rank tier; higher ranks encompass lower ones.
    pub rank: u8,
}

impl VerificationLevel {
    pub fn new(credential: [u8; 32], rank: u8) -> Self {
        Self { credential, rank }
    }

    /// The all-zero credential marks absence and is never storable.
    pub fn is_sentinel(&self) -> bool {
        self.credential == [0u8; 32]
    }
}

/// Per-account KYC level store with hierarchical-upgrade semantics.
pub struct VerificationRegistry {
    access: Arc<AccessControl>,
    sink: Arc<dyn EventSink>,
    levels: RwLock<HashMap<AccountId, VerificationLevel>>,
}

impl VerificationRegistry {
    pub fn new(access: Arc<AccessControl>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            access,
            sink,
            levels: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or upgrade the level for one account. Owner or bot.
    ///
    /// A downgrade (lower rank than stored) is a defined no-op: the call
    /// succeeds and the existing entry is retained.
    pub fn upsert(
        &self,
        caller: &AccountId,
        account: AccountId,
        level: VerificationLevel,
    ) -> Result<(), RegistryError> {
        self.access.require(caller, Permission::OwnerOrBot)?;
        Self::validate(&account, &level)?;
        self.apply(account, level);
        Ok(())
    }

    /// Batch insert/upgrade. Owner or bot. All-or-nothing: every entry is
    /// validated before any is applied, and a batch outside `1..=MAX_BATCH`
    /// fails with `InvalidBatch` leaving the registry untouched.
    pub fn upsert_many(
        &self,
        caller: &AccountId,
        entries: &[(AccountId, VerificationLevel)],
    ) -> Result<(), RegistryError> {
        self.access.require(caller, Permission::OwnerOrBot)?;
        if entries.is_empty() || entries.len() > MAX_BATCH {
            return Err(RegistryError::InvalidBatch {
                len: entries.len(),
                max: MAX_BATCH,
            });
        }
        for (account, level) in entries {
            Self::validate(account, level)?;
        }
        for (account, level) in entries {
            self.apply(*account, *level);
        }
        debug!(count = entries.len(), "batch verification upsert applied");
        Ok(())
    }

    /// Clear the entry for `account`, returning the removed level. Owner or
    /// bot. The deletion notification carries the removed rank for audit.
    pub fn remove(
        &self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<VerificationLevel, RegistryError> {
        self.access.require(caller, Permission::OwnerOrBot)?;
        if is_null(account) {
            return Err(RegistryError::ZeroAccount);
        }
        let removed = self
            .levels
            .write()
            .remove(account)
            .ok_or(RegistryError::NotFound)?;
        info!(account = ?account, rank = removed.rank, "verification entry removed");
        self.sink.publish(Event::CustomerDeleted {
            customer: *account,
            rank: removed.rank,
        });
        Ok(removed)
    }

    /// Pure read: the stored level, if any.
    pub fn level_of(&self, account: &AccountId) -> Option<VerificationLevel> {
        self.levels.read().get(account).copied()
    }

    /// True iff a non-sentinel level is stored for `account`.
    pub fn is_verified(&self, account: &AccountId) -> bool {
        self.levels.read().contains_key(account)
    }

    fn validate(account: &AccountId, level: &VerificationLevel) -> Result<(), RegistryError> {
        if is_null(account) {
            return Err(RegistryError::ZeroAccount);
        }
        if level.is_sentinel() {
            return Err(RegistryError::InvalidLevel);
        }
        Ok(())
    }

    fn apply(&self, account: AccountId, level: VerificationLevel) {
        let mut levels = self.levels.write();
        match levels.get(&account) {
            None => {
                levels.insert(account, level);
                drop(levels);
                self.sink.publish(Event::CustomerAdded {
                    customer: account,
                    rank: level.rank,
                });
            }
            Some(current) if level.rank >= current.rank => {
                levels.insert(account, level);
                drop(levels);
                self.sink.publish(Event::CustomerUpdated {
                    customer: account,
                    rank: level.rank,
                });
            }
            Some(current) => {
                // Downgrade rejected: defined no-op, existing entry retained.
                debug!(
                    account = ?account,
                    stored = current.rank,
                    offered = level.rank,
                    "downgrade ignored"
                );
            }
        }
    }
}
