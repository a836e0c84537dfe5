//! The fixed set of supported chains.

use rust_decimal::Decimal;
use tracing::warn;

use crate::core::domain::{Chain, ChainKind};
use crate::core::validation::to_balance;

/// Exactly one [`Chain`] per [`ChainKind`], in `ChainKind::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainRegistry {
    chains: Vec<Chain>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self { chains: ChainKind::ALL.iter().copied().map(Chain::new).collect() }
    }

    /// All chains in registry order.
    pub fn list(&self) -> &[Chain] {
        &self.chains
    }

    pub fn get(&self, kind: ChainKind) -> &Chain {
        // The vector is built from ChainKind::ALL, so every kind is present at its index.
        &self.chains[Self::index(kind)]
    }

    pub(crate) fn get_mut(&mut self, kind: ChainKind) -> &mut Chain {
        &mut self.chains[Self::index(kind)]
    }

    fn index(kind: ChainKind) -> usize {
        usize::from(kind.id()) - 1
    }

    pub fn connected(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter().filter(|chain| chain.connected)
    }

    pub(crate) fn set_connected(&mut self, kind: ChainKind, balance: Decimal) {
        let chain = self.get_mut(kind);
        chain.connected = true;
        chain.balance = to_balance(balance);
    }

    pub(crate) fn set_disconnected(&mut self, kind: ChainKind) {
        let chain = self.get_mut(kind);
        chain.connected = false;
        chain.balance = Decimal::new(0, 2);
    }

    pub(crate) fn debit(&mut self, kind: ChainKind, amount: Decimal) {
        let chain = self.get_mut(kind);
        chain.balance = to_balance((chain.balance - amount).max(Decimal::ZERO));
    }

    /// Adds `amount` to the balance. A sum past the `Decimal` range leaves the
    /// balance unchanged and returns false.
    pub(crate) fn credit(&mut self, kind: ChainKind, amount: Decimal) -> bool {
        let chain = self.get_mut(kind);
        match chain.balance.checked_add(amount) {
            Some(balance) => {
                chain.balance = to_balance(balance);
                true
            }
            None => {
                warn!("Credit of {} to {} overflows balance {}", amount, kind, chain.balance);
                false
            }
        }
    }

    /// Sum of every balance, two decimals. Saturates at `Decimal::MAX`.
    pub fn total_balance(&self) -> Decimal {
        let total = self
            .chains
            .iter()
            .try_fold(Decimal::ZERO, |sum, chain| sum.checked_add(chain.balance))
            .unwrap_or(Decimal::MAX);
        to_balance(total)
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}
