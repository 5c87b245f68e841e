use serde::{Deserialize, Serialize};
use shared_types::{AccountId, U256};

/// One completed balance movement, recorded in strict call order.
///
/// Records are immutable once appended; mint and burn appear with the null
/// account as the synthetic counterparty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: U256,
}
