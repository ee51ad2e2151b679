// Transaction log entries. Immutable once created; owned solely by the
// ledger's newest-first log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Mint,
    Transfer,
    Swap,
    Stake,
    Unstake,
    Burn,
    Airdrop,
    Reward,
}

/// Only `Success` is produced by current operations; `Pending` and `Failed`
/// exist for log consumers that render other sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    /// Tokens moved, or SOL for airdrops; meaning depends on `kind`.
    pub amount: f64,
    pub timestamp_ms: u64,
    pub status: TxStatus,
    pub details: String,
}
