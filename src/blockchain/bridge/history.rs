//! Most-recent-first transaction log and the history filters.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{BridgeTransaction, BridgeTransactionStatus};
use crate::core::domain::ChainKind;

/// Conjunctive history filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring of hash, source, destination or amount.
    pub query: String,
    pub status: Option<BridgeTransactionStatus>,
    /// Matches transactions where the chain is either endpoint.
    pub chain: Option<ChainKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn status(mut self, status: BridgeTransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn chain(mut self, chain: ChainKind) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn matches(&self, tx: &BridgeTransaction) -> bool {
        self.matches_query(tx)
            && self.status.map_or(true, |status| tx.status == status)
            && self.chain.map_or(true, |chain| tx.involves(chain))
    }

    fn matches_query(&self, tx: &BridgeTransaction) -> bool {
        let needle = self.query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [tx.hash.as_str(), tx.source.as_str(), tx.destination.as_str(), tx.amount.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Transactions, newest at the front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLog {
    entries: VecDeque<BridgeTransaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from records already in most-recent-first order.
    pub fn from_entries(entries: Vec<BridgeTransaction>) -> Self {
        Self { entries: entries.into() }
    }

    /// Prepends a new record.
    pub fn record(&mut self, tx: BridgeTransaction) {
        self.entries.push_front(tx);
    }

    /// Flips a pending record to completed. Returns false when the id is unknown
    /// or the record already left `Pending`.
    pub fn mark_completed(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|tx| tx.id == id) {
            Some(tx) if tx.is_pending() => {
                tx.status = BridgeTransactionStatus::Completed;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&BridgeTransaction> {
        self.entries.iter().find(|tx| tx.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BridgeTransaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<BridgeTransaction> {
        self.entries.iter().cloned().collect()
    }

    /// The newest `limit` records.
    pub fn recent(&self, limit: usize) -> Vec<BridgeTransaction> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn filter(&self, filter: &TransactionFilter) -> Vec<BridgeTransaction> {
        self.entries.iter().filter(|tx| filter.matches(tx)).cloned().collect()
    }
}
