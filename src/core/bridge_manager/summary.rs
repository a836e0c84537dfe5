//! Dashboard and analytics aggregates.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BridgeManager;
use crate::core::domain::ChainKind;
use crate::core::validation::to_balance;

/// Header figures on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub connected_chains: usize,
    pub total_chains: usize,
    pub transaction_count: usize,
}

/// Usage of one source -> destination route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStat {
    pub source: ChainKind,
    pub destination: ChainKind,
    pub count: usize,
    pub volume: Decimal,
}

impl BridgeManager {
    pub fn summary(&self) -> DashboardSummary {
        let state = self.state.read();
        DashboardSummary {
            total_balance: state.registry.total_balance(),
            connected_chains: state.registry.connected().count(),
            total_chains: state.registry.list().len(),
            transaction_count: state.log.len(),
        }
    }

    /// Per-route count and summed amount, busiest route first.
    pub fn route_stats(&self) -> Vec<RouteStat> {
        let state = self.state.read();
        let mut routes: HashMap<(ChainKind, ChainKind), (usize, Decimal)> = HashMap::new();
        for tx in state.log.iter() {
            let entry = routes.entry((tx.source, tx.destination)).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += tx.amount_value().unwrap_or(Decimal::ZERO);
        }

        let mut stats: Vec<RouteStat> = routes
            .into_iter()
            .map(|((source, destination), (count, volume))| RouteStat {
                source,
                destination,
                count,
                volume: to_balance(volume),
            })
            .collect();
        stats.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.volume.cmp(&a.volume))
                .then_with(|| (a.source, a.destination).cmp(&(b.source, b.destination)))
        });
        stats
    }
}

/// Coarse "time ago" label used by the activity lists.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3_600 {
        format!("{} mins ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} hours ago", secs / 3_600)
    } else {
        format!("{} days ago", secs / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 mins ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
        // Clock skew: a future timestamp still reads as fresh.
        assert_eq!(relative_time(now + Duration::seconds(10), now), "Just now");
    }
}
