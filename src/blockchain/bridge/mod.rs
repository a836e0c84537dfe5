// src/blockchain/bridge/mod.rs

pub mod history;
pub mod mock;
pub mod transfer;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::domain::ChainKind;
use crate::core::errors::BridgeError;
use crate::core::validation::parse_amount;

/// Lifecycle of a simulated cross-chain transfer.
///
/// Only `Pending -> Completed` ever happens. `Failed` is kept for display
/// filters; nothing produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeTransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl BridgeTransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeTransactionStatus::Pending => "pending",
            BridgeTransactionStatus::Completed => "completed",
            BridgeTransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for BridgeTransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeTransactionStatus {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(BridgeTransactionStatus::Pending),
            "completed" => Ok(BridgeTransactionStatus::Completed),
            "failed" => Ok(BridgeTransactionStatus::Failed),
            other => Err(BridgeError::UnknownStatus(other.to_string())),
        }
    }
}

/// A simulated cross-chain transfer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeTransaction {
    pub id: String,
    pub source: ChainKind,
    pub destination: ChainKind,
    /// Amount exactly as entered (trimmed).
    pub amount: String,
    pub status: BridgeTransactionStatus,
    pub created_at: DateTime<Utc>,
    /// Opaque display hash, e.g. `0x1a2b3c4d...9f8e`.
    pub hash: String,
}

impl BridgeTransaction {
    pub fn is_pending(&self) -> bool {
        self.status == BridgeTransactionStatus::Pending
    }

    /// Numeric amount, if the stored text parses.
    pub fn amount_value(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }

    pub fn involves(&self, kind: ChainKind) -> bool {
        self.source == kind || self.destination == kind
    }
}

/// Block explorer link for a transaction hash.
pub fn explorer_url(prefix: &str, hash: &str) -> String {
    format!("{}{}", prefix, hash)
}

pub use history::{TransactionFilter, TransactionLog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            BridgeTransactionStatus::Pending,
            BridgeTransactionStatus::Completed,
            BridgeTransactionStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<BridgeTransactionStatus>().unwrap(), status);
        }
        assert_eq!(
            "settled".parse::<BridgeTransactionStatus>().unwrap_err(),
            BridgeError::UnknownStatus("settled".to_string())
        );
    }

    #[test]
    fn explorer_url_appends_hash() {
        assert_eq!(
            explorer_url("https://layerzeroscan.com/tx/", "0xabc...def"),
            "https://layerzeroscan.com/tx/0xabc...def"
        );
    }
}
