//! In-memory transaction log: the production `TransactionWriter` adapter,
//! which also serves the audit reads used by external tooling.

use crate::domain::{LedgerError, TransactionRecord};
use crate::ports::TransactionWriter;
use parking_lot::RwLock;
use shared_types::{AccountId, U256};

/// Append-only, index-addressable record of completed transfers.
#[derive(Debug, Default)]
pub struct InMemoryTransactionLog {
    records: RwLock<Vec<TransactionRecord>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit read: the record at `index`, zero-based in append order.
    pub fn get(&self, index: usize) -> Result<TransactionRecord, LedgerError> {
        let records = self.records.read();
        records
            .get(index)
            .copied()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                count: records.len(),
            })
    }

    /// Audit read: total number of records.
    pub fn count(&self) -> usize {
        self.records.read().len()
    }
}

impl TransactionWriter for InMemoryTransactionLog {
    fn append(&self, from: AccountId, to: AccountId, amount: U256) {
        self.records
            .write()
            .push(TransactionRecord { from, to, amount });
    }
}
