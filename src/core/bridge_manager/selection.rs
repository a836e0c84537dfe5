//! Bridge-form selection.

use rust_decimal::Decimal;
use tracing::debug;

use super::BridgeManager;
use crate::core::domain::ChainKind;

impl BridgeManager {
    pub fn set_source(&self, kind: Option<ChainKind>) {
        self.state.write().selection.source = kind;
    }

    pub fn set_destination(&self, kind: Option<ChainKind>) {
        self.state.write().selection.destination = kind;
    }

    /// Exchanges source and destination. Does nothing unless both are set.
    pub fn swap(&self) -> bool {
        let mut state = self.state.write();
        let selection = &mut state.selection;
        match (selection.source, selection.destination) {
            (Some(source), Some(destination)) => {
                selection.source = Some(destination);
                selection.destination = Some(source);
                debug!("Swapped selection: {} -> {}", destination, source);
                true
            }
            _ => false,
        }
    }

    /// Picks a source the way the bridge form does: a destination equal to the
    /// new source is cleared, and a disconnected chain starts connecting.
    pub fn select_source(&self, kind: ChainKind) {
        let needs_connect = {
            let mut state = self.state.write();
            state.selection.source = Some(kind);
            if state.selection.destination == Some(kind) {
                state.selection.destination = None;
            }
            !state.registry.get(kind).connected
        };
        if needs_connect {
            self.connect(kind);
        }
    }

    /// Picks a destination, connecting it if needed.
    pub fn select_destination(&self, kind: ChainKind) {
        let needs_connect = {
            let mut state = self.state.write();
            state.selection.destination = Some(kind);
            !state.registry.get(kind).connected
        };
        if needs_connect {
            self.connect(kind);
        }
    }

    /// The "MAX" amount: the selected source's balance, if it is connected.
    pub fn max_transfer_amount(&self) -> Option<Decimal> {
        let state = self.state.read();
        let source = state.registry.get(state.selection.source?);
        source.connected.then_some(source.balance)
    }
}
