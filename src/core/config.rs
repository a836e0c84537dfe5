use std::fs;
use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::domain::ChainKind;
use crate::core::errors::BridgeError;

/// Longest accepted simulated delay: one day.
pub const MAX_DELAY_MS: u64 = 86_400_000;

/// Largest accepted preconnected balance. Keeps every credit far from the
/// `Decimal` range limit.
pub const MAX_PRECONNECTED_BALANCE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Timing and randomness knobs for the simulated chain behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Delay before a wallet connect lands (ms)
    #[serde(default = "SimulationConfig::default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Delay before a fee quote resolves (ms)
    #[serde(default = "SimulationConfig::default_fee_delay_ms")]
    pub fee_delay_ms: u64,

    /// Lower bound of the transfer maturation delay (ms)
    #[serde(default = "SimulationConfig::default_transfer_delay_min_ms")]
    pub transfer_delay_min_ms: u64,

    /// Upper bound of the transfer maturation delay (ms)
    #[serde(default = "SimulationConfig::default_transfer_delay_max_ms")]
    pub transfer_delay_max_ms: u64,

    /// Fixed seed for every random draw; entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SimulationConfig {
    fn default_connect_delay_ms() -> u64 { 1_500 }
    fn default_fee_delay_ms() -> u64 { 800 }
    fn default_transfer_delay_min_ms() -> u64 { 5_000 }
    fn default_transfer_delay_max_ms() -> u64 { 10_000 }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn fee_delay(&self) -> Duration {
        Duration::from_millis(self.fee_delay_ms)
    }

    /// Upper bound on a connect-both, quote, transfer run: two connects, one fee
    /// quote and the slowest transfer. Saturates instead of overflowing.
    pub fn worst_case_ms(&self) -> u64 {
        self.connect_delay_ms
            .saturating_mul(2)
            .saturating_add(self.fee_delay_ms)
            .saturating_add(self.transfer_delay_max_ms)
    }

    /// Multiplies every delay by `factor`. Used by the CLI demo to run faster than real time.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| ((ms as f64) * factor.max(0.0)).round() as u64;
        Self {
            connect_delay_ms: scale(self.connect_delay_ms),
            fee_delay_ms: scale(self.fee_delay_ms),
            transfer_delay_min_ms: scale(self.transfer_delay_min_ms),
            transfer_delay_max_ms: scale(self.transfer_delay_max_ms),
            rng_seed: self.rng_seed,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: Self::default_connect_delay_ms(),
            fee_delay_ms: Self::default_fee_delay_ms(),
            transfer_delay_min_ms: Self::default_transfer_delay_min_ms(),
            transfer_delay_max_ms: Self::default_transfer_delay_max_ms(),
            rng_seed: None,
        }
    }
}

/// Block explorer link settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "ExplorerConfig::default_tx_url_prefix")]
    pub tx_url_prefix: String,
}

impl ExplorerConfig {
    fn default_tx_url_prefix() -> String {
        "https://layerzeroscan.com/tx/".to_string()
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self { tx_url_prefix: Self::default_tx_url_prefix() }
    }
}

/// A wallet that is already connected when the manager starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreconnectedWallet {
    pub chain: ChainKind,
    pub balance: Decimal,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub explorer: ExplorerConfig,

    /// Start the transaction log with the demo history records
    #[serde(default = "BridgeConfig::default_seed_sample_history")]
    pub seed_sample_history: bool,

    /// Wallets connected from the start, with fixed balances
    #[serde(default)]
    pub preconnected: Vec<PreconnectedWallet>,
}

impl BridgeConfig {
    fn default_seed_sample_history() -> bool { true }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, BridgeError> {
        let config: BridgeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        let sim = &self.simulation;
        if sim.transfer_delay_min_ms > sim.transfer_delay_max_ms {
            return Err(BridgeError::Config(format!(
                "transfer_delay_min_ms ({}) exceeds transfer_delay_max_ms ({})",
                sim.transfer_delay_min_ms, sim.transfer_delay_max_ms
            )));
        }
        for (name, ms) in [
            ("connect_delay_ms", sim.connect_delay_ms),
            ("fee_delay_ms", sim.fee_delay_ms),
            ("transfer_delay_min_ms", sim.transfer_delay_min_ms),
            ("transfer_delay_max_ms", sim.transfer_delay_max_ms),
        ] {
            if ms > MAX_DELAY_MS {
                return Err(BridgeError::Config(format!(
                    "{} ({}) exceeds the {} ms limit",
                    name, ms, MAX_DELAY_MS
                )));
            }
        }
        if self.explorer.tx_url_prefix.trim().is_empty() {
            return Err(BridgeError::Config("explorer.tx_url_prefix cannot be empty".into()));
        }
        if let Some(wallet) = self.preconnected.iter().find(|w| w.balance < Decimal::ZERO) {
            return Err(BridgeError::Config(format!(
                "preconnected balance for {} is negative: {}",
                wallet.chain, wallet.balance
            )));
        }
        if let Some(wallet) =
            self.preconnected.iter().find(|w| w.balance > MAX_PRECONNECTED_BALANCE)
        {
            return Err(BridgeError::Config(format!(
                "preconnected balance for {} exceeds {}: {}",
                wallet.chain, MAX_PRECONNECTED_BALANCE, wallet.balance
            )));
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            explorer: ExplorerConfig::default(),
            seed_sample_history: Self::default_seed_sample_history(),
            preconnected: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulated_timings() {
        let config = BridgeConfig::default();
        assert_eq!(config.simulation.connect_delay(), Duration::from_millis(1500));
        assert_eq!(config.simulation.fee_delay(), Duration::from_millis(800));
        assert_eq!(config.simulation.transfer_delay_min_ms, 5000);
        assert_eq!(config.simulation.transfer_delay_max_ms, 10000);
        assert!(config.seed_sample_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = BridgeConfig::from_toml_str(
            r#"
            seed_sample_history = false
            [simulation]
            rng_seed = 7
            fee_delay_ms = 10
            "#,
        )
        .unwrap();
        assert!(!config.seed_sample_history);
        assert_eq!(config.simulation.rng_seed, Some(7));
        assert_eq!(config.simulation.fee_delay_ms, 10);
        assert_eq!(config.simulation.connect_delay_ms, 1500);
        assert_eq!(config.explorer, ExplorerConfig::default());
    }

    #[test]
    fn rejects_inverted_transfer_window() {
        let err = BridgeConfig::from_toml_str(
            "[simulation]\ntransfer_delay_min_ms = 10\ntransfer_delay_max_ms = 5\n",
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn parses_preconnected_wallets() {
        let config = BridgeConfig::from_toml_str(
            r#"
            [[preconnected]]
            chain = "solana"
            balance = "10.00"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.preconnected,
            vec![PreconnectedWallet { chain: ChainKind::Solana, balance: Decimal::new(1000, 2) }]
        );
    }

    #[test]
    fn rejects_negative_preconnected_balance() {
        let err = BridgeConfig::from_toml_str(
            "[[preconnected]]\nchain = \"bnb\"\nbalance = \"-1\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn rejects_oversized_preconnected_balance() {
        let err = BridgeConfig::from_toml_str(
            "[[preconnected]]\nchain = \"solana\"\nbalance = \"50000000000000000000000000000\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn rejects_delays_longer_than_a_day() {
        let err = BridgeConfig::from_toml_str("[simulation]\ntransfer_delay_max_ms = 86400001\n")
            .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn huge_scale_saturates_without_overflow() {
        let scaled = SimulationConfig::default().scaled(1e30);
        assert_eq!(scaled.connect_delay_ms, u64::MAX);
        assert_eq!(scaled.worst_case_ms(), u64::MAX);

        let mut config = BridgeConfig::default();
        config.simulation = scaled;
        assert!(matches!(config.validate(), Err(BridgeError::Config(_))));
    }

    #[test]
    fn worst_case_adds_two_connects_fee_and_slowest_transfer() {
        assert_eq!(SimulationConfig::default().worst_case_ms(), 2 * 1500 + 800 + 10_000);
    }

    #[test]
    fn scaled_shrinks_all_delays() {
        let scaled = SimulationConfig::default().scaled(0.1);
        assert_eq!(scaled.connect_delay_ms, 150);
        assert_eq!(scaled.fee_delay_ms, 80);
        assert_eq!(scaled.transfer_delay_min_ms, 500);
        assert_eq!(scaled.transfer_delay_max_ms, 1000);
    }
}
