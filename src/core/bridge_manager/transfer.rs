//! Transfer submission and delayed completion.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::BridgeManager;
use crate::blockchain::bridge::mock::{mock_transfer_delay_ms, mock_tx_hash, mock_tx_id};
use crate::blockchain::bridge::transfer::validate_transfer;
use crate::blockchain::bridge::{BridgeTransaction, BridgeTransactionStatus};
use crate::core::domain::ChainKind;
use crate::core::errors::BridgeError;
use crate::service::notifier::Notification;

impl BridgeManager {
    /// Validates and submits a transfer.
    ///
    /// On success the pending record is at the head of the log and the source
    /// is already debited. A single callback, after a random delay inside the
    /// configured window, credits the destination and marks the record
    /// completed. On error nothing changes.
    ///
    /// # Arguments
    /// * `source` - source chain, if selected
    /// * `destination` - destination chain, if selected
    /// * `amount` - amount as typed by the user
    ///
    /// # Returns
    /// The pending transaction record
    pub fn try_submit_transfer(
        &self,
        source: Option<ChainKind>,
        destination: Option<ChainKind>,
        amount: &str,
    ) -> Result<BridgeTransaction, BridgeError> {
        let sim = &self.config.simulation;
        let (tx, transfer, delay) = {
            let mut state = self.state.write();
            let transfer = validate_transfer(&state.registry, source, destination, amount)?;

            let (id, hash, delay_ms) = self.draw(|rng| {
                let id = mock_tx_id(rng);
                let hash = mock_tx_hash(rng);
                let delay_ms =
                    mock_transfer_delay_ms(rng, sim.transfer_delay_min_ms, sim.transfer_delay_max_ms);
                (id, hash, delay_ms)
            });

            let tx = BridgeTransaction {
                id,
                source: transfer.source,
                destination: transfer.destination,
                amount: amount.trim().to_string(),
                status: BridgeTransactionStatus::Pending,
                created_at: Utc::now(),
                hash,
            };

            state.log.record(tx.clone());
            state.registry.debit(transfer.source, transfer.amount);
            (tx, transfer, Duration::from_millis(delay_ms))
        };

        info!(
            "Transfer {} submitted: {} {} -> {} (completes in {:?})",
            tx.id, tx.amount, tx.source, tx.destination, delay
        );

        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        let id = tx.id.clone();
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                let completed = {
                    let mut state = state.write();
                    state.registry.credit(transfer.destination, transfer.amount);
                    state.log.mark_completed(&id)
                };
                if completed {
                    info!("Transfer {} completed on {}", id, transfer.destination);
                } else {
                    warn!("Transfer {} matured but was no longer pending", id);
                }
                notifier.notify(Notification::success("Transaction completed!"));
            }),
        );

        self.notify(Notification::success("Transaction submitted!"));
        Ok(tx)
    }

    /// Boolean form: validation errors become an error notification and `false`.
    pub fn submit_transfer(
        &self,
        source: Option<ChainKind>,
        destination: Option<ChainKind>,
        amount: &str,
    ) -> bool {
        match self.try_submit_transfer(source, destination, amount) {
            Ok(_) => true,
            Err(e) => {
                warn!("Transfer rejected: {}", e);
                self.notify(Notification::error(e.to_string()));
                false
            }
        }
    }

    /// Submits `amount` between the currently selected chains.
    pub fn submit(&self, amount: &str) -> bool {
        let selection = self.selection();
        self.submit_transfer(selection.source, selection.destination, amount)
    }
}
