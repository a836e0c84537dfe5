//! Transaction log reads.

use super::BridgeManager;
use crate::blockchain::bridge::{explorer_url, BridgeTransaction, TransactionFilter};

/// How many records the dashboard's recent-activity panel shows.
pub const RECENT_LIMIT: usize = 5;

impl BridgeManager {
    /// Every record, newest first.
    pub fn transactions(&self) -> Vec<BridgeTransaction> {
        self.state.read().log.to_vec()
    }

    pub fn transaction(&self, id: &str) -> Option<BridgeTransaction> {
        self.state.read().log.get(id).cloned()
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<BridgeTransaction> {
        self.state.read().log.recent(limit)
    }

    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Vec<BridgeTransaction> {
        self.state.read().log.filter(filter)
    }

    /// Block explorer link for a record's hash.
    pub fn explorer_url(&self, hash: &str) -> String {
        explorer_url(&self.config.explorer.tx_url_prefix, hash)
    }
}
