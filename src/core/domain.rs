//! Domain types for the simulated chains.
//!
//! A [`Chain`] is a display/state record only. Nothing here talks to a node;
//! `connected` and `balance` are flipped by the wallet and transfer simulators
//! in [`crate::core::bridge_manager`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::errors::BridgeError;

/// The five supported chains, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    Solana,
    Ethereum,
    Avalanche,
    Polygon,
    Bnb,
}

impl ChainKind {
    /// All kinds in the fixed registry order.
    pub const ALL: [ChainKind; 5] = [
        ChainKind::Solana,
        ChainKind::Ethereum,
        ChainKind::Avalanche,
        ChainKind::Polygon,
        ChainKind::Bnb,
    ];

    /// Stable lowercase identifier, also used by the history search.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKind::Solana => "solana",
            ChainKind::Ethereum => "ethereum",
            ChainKind::Avalanche => "avalanche",
            ChainKind::Polygon => "polygon",
            ChainKind::Bnb => "bnb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChainKind::Solana => "Solana",
            ChainKind::Ethereum => "Ethereum",
            ChainKind::Avalanche => "Avalanche",
            ChainKind::Polygon => "Polygon",
            ChainKind::Bnb => "BNB Chain",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ChainKind::Solana => "⚡",
            ChainKind::Ethereum => "💎",
            ChainKind::Avalanche => "❄️",
            ChainKind::Polygon => "🔷",
            ChainKind::Bnb => "🟡",
        }
    }

    /// Numeric id shown next to the chain (1-based registry position).
    pub fn id(&self) -> u8 {
        match self {
            ChainKind::Solana => 1,
            ChainKind::Ethereum => 2,
            ChainKind::Avalanche => 3,
            ChainKind::Polygon => 4,
            ChainKind::Bnb => 5,
        }
    }

    /// Short unit label: the first three letters of the identifier, upper-cased.
    pub fn ticker(&self) -> String {
        self.as_str().chars().take(3).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ChainKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BridgeError::UnknownChain(needle.to_string()))
    }
}

/// One registry record. `connected` and `balance` are the only fields that change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub id: u8,
    pub kind: ChainKind,
    pub name: String,
    pub icon: String,
    pub connected: bool,
    /// Always non-negative with exactly two fractional digits.
    pub balance: Decimal,
}

impl Chain {
    /// A disconnected record with a zero balance.
    pub fn new(kind: ChainKind) -> Self {
        Self {
            id: kind.id(),
            kind,
            name: kind.display_name().to_string(),
            icon: kind.icon().to_string(),
            connected: false,
            balance: Decimal::new(0, 2),
        }
    }

    /// Balance rendered the way the views show it, e.g. `"5.00"`.
    pub fn balance_display(&self) -> String {
        self.balance.to_string()
    }
}

/// Transient bridge-form selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub source: Option<ChainKind>,
    pub destination: Option<ChainKind>,
}

impl Selection {
    /// Both endpoints chosen.
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }

    /// Drop whichever endpoint points at `kind`.
    pub fn clear_chain(&mut self, kind: ChainKind) {
        if self.source == Some(kind) {
            self.source = None;
        }
        if self.destination == Some(kind) {
            self.destination = None;
        }
    }
}
