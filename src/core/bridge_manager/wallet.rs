//! Simulated wallet connect / disconnect.

use std::sync::Arc;

use tracing::{debug, info};

use super::BridgeManager;
use crate::blockchain::bridge::mock::mock_balance;
use crate::core::domain::ChainKind;
use crate::service::notifier::Notification;

impl BridgeManager {
    /// Starts a simulated wallet connection.
    ///
    /// The connecting flag goes up immediately. After the connect delay the
    /// chain is marked connected with a fresh random balance, the flag drops and
    /// a success notification goes out. Connecting an already-connected chain
    /// re-rolls its balance.
    pub fn connect(&self, kind: ChainKind) {
        self.state.write().connecting = true;
        let balance = self.draw(mock_balance);
        let delay = self.config.simulation.connect_delay();
        debug!("Connect to {} scheduled in {:?}", kind, delay);

        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                {
                    let mut state = state.write();
                    state.registry.set_connected(kind, balance);
                    state.connecting = false;
                }
                info!("Wallet connected: {} (balance {})", kind, balance);
                notifier.notify(Notification::success(format!(
                    "Connected to {}",
                    kind.display_name()
                )));
            }),
        );
    }

    /// Disconnects synchronously: balance back to `0.00`, and the chain is
    /// removed from the selection. Transfers already in flight are not touched.
    pub fn disconnect(&self, kind: ChainKind) {
        {
            let mut state = self.state.write();
            state.registry.set_disconnected(kind);
            state.selection.clear_chain(kind);
        }
        info!("Wallet disconnected: {}", kind);
        self.notify(Notification::info(format!("Disconnected from {}", kind.display_name())));
    }
}
