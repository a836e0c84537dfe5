// filepath: src/blockchain/bridge/mock.rs
//! Random draws and canned data behind the simulated bridge.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Builder;

use super::{BridgeTransaction, BridgeTransactionStatus};
use crate::core::domain::ChainKind;

/// Balance handed out on wallet connect: uniform in [0, 10), two decimals.
pub fn mock_balance<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(0..1_000), 2)
}

/// Fee quote: uniform in [0, 0.05), four decimals.
pub fn mock_fee<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(0..500), 4)
}

/// Transfer maturation delay in ms, uniform in [min, max].
pub fn mock_transfer_delay_ms<R: Rng>(rng: &mut R, min: u64, max: u64) -> u64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Random-bytes UUID drawn from `rng`, so seeded runs reproduce ids.
pub fn mock_tx_id<R: Rng>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().simple().to_string()
}

/// Shortened display hash in the `0x<8 hex>...<4 hex>` shape.
pub fn mock_tx_hash<R: Rng>(rng: &mut R) -> String {
    format!("0x{:08x}...{:04x}", rng.gen::<u32>(), rng.gen::<u16>())
}

/// The three demo records the history view starts with, newest first.
///
/// The pending one never matures: nothing is scheduled for it.
pub fn sample_history(now: DateTime<Utc>) -> Vec<BridgeTransaction> {
    vec![
        BridgeTransaction {
            id: "3".to_string(),
            source: ChainKind::Solana,
            destination: ChainKind::Avalanche,
            amount: "10".to_string(),
            status: BridgeTransactionStatus::Pending,
            created_at: now,
            hash: "0x789...ghi".to_string(),
        },
        BridgeTransaction {
            id: "1".to_string(),
            source: ChainKind::Solana,
            destination: ChainKind::Ethereum,
            amount: "1.5".to_string(),
            status: BridgeTransactionStatus::Completed,
            created_at: now - ChronoDuration::hours(1),
            hash: "0x123...abc".to_string(),
        },
        BridgeTransaction {
            id: "2".to_string(),
            source: ChainKind::Ethereum,
            destination: ChainKind::Solana,
            amount: "0.5".to_string(),
            status: BridgeTransactionStatus::Completed,
            created_at: now - ChronoDuration::hours(2),
            hash: "0x456...def".to_string(),
        },
    ]
}
