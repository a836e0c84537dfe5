// tests/scheduler_tests.rs
//! The tokio-backed scheduler against a paused runtime clock.

use std::sync::Arc;
use std::time::Duration;

use omni_bridge_sim::core::{BridgeConfig, BridgeManager, ChainKind};
use omni_bridge_sim::service::BroadcastNotifier;
use omni_bridge_sim::tools::{Scheduler, TokioScheduler};
use tokio::sync::oneshot;

#[tokio::test(start_paused = true)]
async fn tokio_scheduler_fires_after_delay() {
    let scheduler = TokioScheduler::current();
    let (tx, mut rx) = oneshot::channel();
    scheduler.schedule(
        Duration::from_millis(800),
        Box::new(move || {
            let _ = tx.send("fired");
        }),
    );

    tokio::time::sleep(Duration::from_millis(799)).await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(rx.try_recv().unwrap(), "fired");
}

#[tokio::test(start_paused = true)]
async fn manager_connects_on_tokio_clock() {
    let mut config = BridgeConfig::default();
    config.seed_sample_history = false;
    let notifier = Arc::new(BroadcastNotifier::new(8));
    let mut events = notifier.subscribe();
    let manager =
        BridgeManager::new(config, Arc::new(TokioScheduler::current()), notifier).unwrap();

    manager.connect(ChainKind::Avalanche);
    assert!(manager.is_connecting());

    let event = events.recv().await.unwrap();
    assert_eq!(event.message, "Connected to Avalanche");
    assert!(manager.chain(ChainKind::Avalanche).connected);
    assert!(!manager.is_connecting());
}

#[tokio::test(start_paused = true)]
async fn quote_fee_resolves_with_both_endpoints() {
    let manager = BridgeManager::new(
        BridgeConfig::default(),
        Arc::new(TokioScheduler::current()),
        Arc::new(BroadcastNotifier::new(8)),
    )
    .unwrap();
    manager.set_source(Some(ChainKind::Solana));
    manager.set_destination(Some(ChainKind::Ethereum));

    let fee = manager.quote_fee().await;
    assert_eq!(fee.split('.').nth(1).map(str::len), Some(4));
}
