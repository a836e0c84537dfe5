use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::blockchain::bridge::BridgeTransactionStatus;
use crate::core::domain::ChainKind;

/// Omni bridge simulator CLI (library-facing definitions)
#[derive(Debug, Parser)]
#[command(name = "omni-bridge", about = "Cross-chain bridge simulator", version)]
pub struct Cli {
    /// TOML config file; falls back to OMNI_BRIDGE_CONFIG, then defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the supported chains
    Chains,
    /// Show the transaction history with optional filters
    History {
        /// Only this status (pending, completed, failed)
        #[arg(long)]
        status: Option<BridgeTransactionStatus>,
        /// Only transactions touching this chain
        #[arg(long)]
        chain: Option<ChainKind>,
        /// Case-insensitive search over hash, chains and amount
        #[arg(long, default_value = "")]
        query: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Connect two wallets, quote a fee, bridge an amount and wait for completion
    Demo {
        #[arg(long = "from")]
        from: ChainKind,
        #[arg(long = "to")]
        to: ChainKind,
        #[arg(long)]
        amount: Option<String>,
        /// Multiplier applied to every simulated delay
        #[arg(long, default_value_t = 1.0)]
        time_scale: f64,
        /// Print the final history as JSON
        #[arg(long)]
        json: bool,
    },
}
