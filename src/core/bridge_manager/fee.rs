//! Simulated fee quotes.

use rust_decimal::Decimal;
use tokio::sync::oneshot;
use tracing::debug;

use super::BridgeManager;
use crate::blockchain::bridge::mock::mock_fee;
use crate::core::validation::to_fixed;

/// Resolves to the fee string once the fee delay has elapsed.
pub type PendingFee = oneshot::Receiver<String>;

/// What the form shows when either endpoint is missing.
pub const NO_FEE: &str = "0.00";

impl BridgeManager {
    /// Quotes a random fee in [0, 0.05) with four decimals, delivered after the
    /// fee delay. Callers only ask when both endpoints are selected.
    pub fn estimate_fee(&self) -> PendingFee {
        let (sender, receiver) = oneshot::channel();
        self.estimate_fee_with(move |fee| {
            // A dropped receiver just means nobody is waiting for the quote anymore.
            let _ = sender.send(fee);
        });
        receiver
    }

    /// Callback form of [`BridgeManager::estimate_fee`].
    pub fn estimate_fee_with<F>(&self, on_ready: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        let fee = self.draw(mock_fee);
        let delay = self.config.simulation.fee_delay();
        debug!("Fee quote {} scheduled in {:?}", fee, delay);
        self.scheduler.schedule(delay, Box::new(move || on_ready(fee.to_string())));
    }

    /// The form's fee field: a fresh quote when both endpoints are chosen,
    /// otherwise `"0.00"` straight away.
    pub async fn quote_fee(&self) -> String {
        if !self.selection().is_complete() {
            return NO_FEE.to_string();
        }
        self.estimate_fee().await.unwrap_or_else(|_| NO_FEE.to_string())
    }
}

/// Summary total shown under the form: amount plus fee, four decimals.
pub fn total_with_fee(amount: Decimal, fee: Decimal) -> Decimal {
    to_fixed(amount + fee, 4)
}
