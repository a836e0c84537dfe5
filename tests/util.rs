// tests/util.rs
// Shared test helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use omni_bridge_sim::core::config::PreconnectedWallet;
use omni_bridge_sim::core::{BridgeConfig, BridgeManager, ChainKind};
use omni_bridge_sim::service::MemoryNotifier;
use omni_bridge_sim::tools::ManualScheduler;
use rust_decimal::Decimal;

pub const SEED: u64 = 42;

/// Manager wired to a manual clock and an in-memory notifier.
pub struct Harness {
    pub manager: BridgeManager,
    pub scheduler: Arc<ManualScheduler>,
    pub notifier: Arc<MemoryNotifier>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Starts with the given chains already connected.
    pub fn preconnected(wallets: &[(ChainKind, &str)]) -> Self {
        let mut config = test_config();
        config.preconnected = wallets
            .iter()
            .map(|(chain, balance)| PreconnectedWallet {
                chain: *chain,
                balance: balance.parse::<Decimal>().unwrap(),
            })
            .collect();
        Self::with_config(config)
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        let scheduler = Arc::new(ManualScheduler::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let manager = BridgeManager::new(config, scheduler.clone(), notifier.clone()).unwrap();
        Self { manager, scheduler, notifier }
    }

    /// Connects `kind` and lets the connect delay elapse.
    pub fn connect(&self, kind: ChainKind) {
        self.manager.connect(kind);
        self.advance_ms(self.manager.config.simulation.connect_delay_ms);
    }

    pub fn advance_ms(&self, ms: u64) -> usize {
        self.scheduler.advance(Duration::from_millis(ms))
    }

    /// Runs every scheduled callback, however far out.
    pub fn settle(&self) -> usize {
        self.scheduler.run_until_idle()
    }
}

/// Seeded, empty-history configuration with the stock delays.
pub fn test_config() -> BridgeConfig {
    let mut config = BridgeConfig::default();
    config.seed_sample_history = false;
    config.simulation.rng_seed = Some(SEED);
    config
}
