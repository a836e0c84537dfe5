// src/main.rs
//! Omni Bridge simulator entry point
//! Lists chains, prints history, or runs a scripted bridge transfer against the
//! in-memory simulation.
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use omni_bridge_sim::blockchain::bridge::{BridgeTransaction, BridgeTransactionStatus, TransactionFilter};
use omni_bridge_sim::blockchain::registry::ChainRegistry;
use omni_bridge_sim::cli::{Cli, Commands};
use omni_bridge_sim::core::bridge_manager::fee::total_with_fee;
use omni_bridge_sim::core::bridge_manager::relative_time;
use omni_bridge_sim::core::domain::ChainKind;
use omni_bridge_sim::core::validation::{parse_amount, to_balance};
use omni_bridge_sim::core::{BridgeConfig, BridgeManager};
use omni_bridge_sim::service::{BroadcastNotifier, Notification, Severity, TracingNotifier};
use omni_bridge_sim::tools::TokioScheduler;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const CONFIG_ENV: &str = "OMNI_BRIDGE_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    info!("Starting Omni Bridge simulator v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chains => print_chains(),
        Commands::History { status, chain, query, json } => {
            print_history(config, TransactionFilter { query, status, chain }, json)
        }
        Commands::Demo { from, to, amount, time_scale, json } => {
            run_demo(config, from, to, amount, time_scale, json).await
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// `--config` must load; a path from the environment falls back to defaults on error.
fn load_config(explicit: Option<&Path>) -> Result<BridgeConfig> {
    if let Some(path) = explicit {
        return BridgeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Ok(BridgeConfig::load(&path).unwrap_or_else(|e| {
            warn!("Failed to load {}: {}. Using default configuration", path, e);
            BridgeConfig::default()
        })),
        Err(_) => Ok(BridgeConfig::default()),
    }
}

fn print_chains() -> Result<()> {
    let registry = ChainRegistry::new();
    println!("{:<4} {:<12} {:<6} {:<10}", "ID", "CHAIN", "UNIT", "KEY");
    for chain in registry.list() {
        println!(
            "{:<4} {:<12} {:<6} {:<10}",
            chain.id,
            chain.name,
            chain.kind.ticker(),
            chain.kind.as_str()
        );
    }
    Ok(())
}

fn print_history(config: BridgeConfig, filter: TransactionFilter, json: bool) -> Result<()> {
    let manager = BridgeManager::new(
        config,
        Arc::new(TokioScheduler::current()),
        Arc::new(TracingNotifier),
    )?;
    let rows = manager.filter_transactions(&filter);
    render_transactions(&manager, &rows, json)
}

fn render_transactions(manager: &BridgeManager, rows: &[BridgeTransaction], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No results found");
        return Ok(());
    }
    let now = Utc::now();
    println!(
        "{:<10} {:<24} {:>10} {:<18} {:<12} {}",
        "STATUS", "ROUTE", "AMOUNT", "HASH", "TIME", "EXPLORER"
    );
    for tx in rows {
        println!(
            "{:<10} {:<24} {:>10} {:<18} {:<12} {}",
            tx.status,
            format!("{} -> {}", tx.source, tx.destination),
            tx.amount,
            tx.hash,
            relative_time(tx.created_at, now),
            manager.explorer_url(&tx.hash)
        );
    }
    Ok(())
}

async fn run_demo(
    mut config: BridgeConfig,
    from: ChainKind,
    to: ChainKind,
    amount: Option<String>,
    time_scale: f64,
    json: bool,
) -> Result<()> {
    if from == to {
        bail!("source and destination must be different chains");
    }
    if !(time_scale.is_finite() && time_scale >= 0.0) {
        bail!("time scale must be a non-negative number");
    }
    config.simulation = config.simulation.scaled(time_scale);
    config.validate().context("time scale pushes the simulated delays out of range")?;

    let sim = &config.simulation;
    let budget = Duration::from_millis(sim.worst_case_ms()).saturating_add(Duration::from_secs(5));

    let notifier = Arc::new(BroadcastNotifier::new(64));
    let mut events = notifier.subscribe();
    let manager = BridgeManager::new(config, Arc::new(TokioScheduler::current()), notifier)?;

    let needs_connect = !manager.chain(from).connected;
    manager.select_source(from);
    if needs_connect {
        wait_for_connect(&mut events, budget, from).await?;
    }

    let needs_connect = !manager.chain(to).connected;
    manager.select_destination(to);
    if needs_connect {
        wait_for_connect(&mut events, budget, to).await?;
    }

    let source = manager.chain(from);
    println!("{} balance: {} {}", source.name, source.balance, from.ticker());

    let fee = manager.quote_fee().await;
    let amount = amount.unwrap_or_else(|| {
        let half = manager.max_transfer_amount().unwrap_or(Decimal::ZERO) / Decimal::TWO;
        to_balance(half).to_string()
    });
    if let (Some(value), Some(fee_value)) = (parse_amount(&amount), parse_amount(&fee)) {
        println!(
            "Sending {} {} (fee {}, total {})",
            amount,
            from.ticker(),
            fee,
            total_with_fee(value, fee_value)
        );
    }

    let selection = manager.selection();
    let tx = manager.try_submit_transfer(selection.source, selection.destination, &amount)?;
    println!("Submitted {} ({})", tx.id, manager.explorer_url(&tx.hash));

    wait_for(&mut events, budget, |n| {
        n.severity == Severity::Success && n.message == "Transaction completed!"
    })
    .await?;

    let settled = manager
        .transaction(&tx.id)
        .map(|t| t.status)
        .unwrap_or(BridgeTransactionStatus::Pending);
    println!("Transfer {}: {}", tx.id, settled);
    for chain in [manager.chain(from), manager.chain(to)] {
        println!("{} balance: {} {}", chain.name, chain.balance, chain.kind.ticker());
    }

    render_transactions(&manager, &manager.transactions(), json)
}

async fn wait_for_connect(
    events: &mut broadcast::Receiver<Notification>,
    budget: Duration,
    kind: ChainKind,
) -> Result<Notification> {
    let expected = format!("Connected to {}", kind.display_name());
    wait_for(events, budget, |n| n.message == expected).await
}

/// Waits for the first notification matching `pred`, giving up after `budget`.
async fn wait_for<F>(
    events: &mut broadcast::Receiver<Notification>,
    budget: Duration,
    pred: F,
) -> Result<Notification>
where
    F: Fn(&Notification) -> bool,
{
    let search = async {
        loop {
            match events.recv().await {
                Ok(notification) if pred(&notification) => return Ok(notification),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Notification stream lagged, skipped {}", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => bail!("notification channel closed"),
            }
        }
    };
    tokio::time::timeout(budget, search)
        .await
        .context("timed out waiting for the simulation")?
}
