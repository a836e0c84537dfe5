//! Bridge Manager Core Module
//!
//! The single state store behind every view: chain registry, bridge-form
//! selection, the shared connecting flag and the transaction log. It is owned by
//! the composition root and handed to callers as a cheap clone.
//!
//! ## Module Structure
//! - `wallet` - Simulated wallet connect / disconnect
//! - `selection` - Source / destination selection and swap
//! - `fee` - Simulated fee quotes
//! - `transfer` - Transfer submission and delayed completion
//! - `history` - Transaction log reads and filters
//! - `summary` - Dashboard and route aggregates
//!
//! All delays go through the injected [`Scheduler`]; all user-visible messages
//! go through the injected [`Notifier`].

pub mod fee;
pub mod history;
pub mod selection;
pub mod summary;
pub mod transfer;
pub mod wallet;

use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::blockchain::bridge::mock::sample_history;
use crate::blockchain::bridge::TransactionLog;
use crate::blockchain::registry::ChainRegistry;
use crate::core::config::BridgeConfig;
use crate::core::domain::{Chain, ChainKind, Selection};
use crate::core::errors::BridgeError;
use crate::service::notifier::{Notification, Notifier};
use crate::tools::scheduler::Scheduler;

pub use summary::{relative_time, DashboardSummary, RouteStat};

/// Everything the simulators mutate.
#[derive(Debug, Default)]
struct BridgeState {
    registry: ChainRegistry,
    selection: Selection,
    /// One flag for all chains: overlapping connects share it.
    connecting: bool,
    log: TransactionLog,
}

/// Injectable state store and command surface for the bridge views.
#[derive(Clone)]
pub struct BridgeManager {
    /// Configuration the manager was built with
    pub config: BridgeConfig,

    state: Arc<RwLock<BridgeState>>,

    scheduler: Arc<dyn Scheduler>,

    notifier: Arc<dyn Notifier>,

    rng: Arc<Mutex<StdRng>>,
}

impl BridgeManager {
    /// Creates a manager. Chains start disconnected unless listed in
    /// `config.preconnected`.
    ///
    /// # Arguments
    /// * `config` - timing, explorer and history settings
    /// * `scheduler` - where every simulated delay is queued
    /// * `notifier` - sink for user-visible messages
    pub fn new(
        config: BridgeConfig,
        scheduler: Arc<dyn Scheduler>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, BridgeError> {
        config.validate()?;

        let rng = match config.simulation.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let log = if config.seed_sample_history {
            TransactionLog::from_entries(sample_history(Utc::now()))
        } else {
            TransactionLog::new()
        };

        let mut registry = ChainRegistry::new();
        for wallet in &config.preconnected {
            registry.set_connected(wallet.chain, wallet.balance);
        }

        info!(
            "Bridge manager ready: {} chains ({} connected), {} transactions in history",
            registry.list().len(),
            registry.connected().count(),
            log.len()
        );

        Ok(Self {
            config,
            state: Arc::new(RwLock::new(BridgeState {
                registry,
                log,
                ..BridgeState::default()
            })),
            scheduler,
            notifier,
            rng: Arc::new(Mutex::new(rng)),
        })
    }

    /// Snapshot of every chain in registry order.
    pub fn chains(&self) -> Vec<Chain> {
        self.state.read().registry.list().to_vec()
    }

    pub fn chain(&self, kind: ChainKind) -> Chain {
        self.state.read().registry.get(kind).clone()
    }

    pub fn selection(&self) -> Selection {
        self.state.read().selection
    }

    /// True while any connect is in flight.
    pub fn is_connecting(&self) -> bool {
        self.state.read().connecting
    }

    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

impl std::fmt::Debug for BridgeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeManager")
            .field("config", &self.config)
            .field("selection", &self.selection())
            .field("connecting", &self.is_connecting())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::notifier::MemoryNotifier;
    use crate::tools::scheduler::ManualScheduler;

    #[test]
    fn starts_disconnected_with_sample_history() {
        let manager = BridgeManager::new(
            BridgeConfig::default(),
            Arc::new(ManualScheduler::new()),
            Arc::new(MemoryNotifier::new()),
        )
        .unwrap();
        assert_eq!(manager.chains().len(), 5);
        assert!(manager.chains().iter().all(|c| !c.connected));
        assert_eq!(manager.transactions().len(), 3);
        assert!(!manager.is_connecting());
        assert_eq!(manager.selection(), Selection::default());
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = BridgeConfig::default();
        config.simulation.transfer_delay_min_ms = 20;
        config.simulation.transfer_delay_max_ms = 10;
        let err = BridgeManager::new(
            config,
            Arc::new(ManualScheduler::new()),
            Arc::new(MemoryNotifier::new()),
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn applies_preconnected_wallets() {
        let mut config = BridgeConfig::default();
        config.preconnected = vec![crate::core::config::PreconnectedWallet {
            chain: ChainKind::Solana,
            balance: rust_decimal::Decimal::new(1000, 2),
        }];
        let manager = BridgeManager::new(
            config,
            Arc::new(ManualScheduler::new()),
            Arc::new(MemoryNotifier::new()),
        )
        .unwrap();
        let solana = manager.chain(ChainKind::Solana);
        assert!(solana.connected);
        assert_eq!(solana.balance_display(), "10.00");
        assert!(!manager.chain(ChainKind::Ethereum).connected);
    }
}
