pub mod bridge;
pub mod registry;

pub use bridge::{BridgeTransaction, BridgeTransactionStatus, TransactionFilter, TransactionLog};
pub use registry::ChainRegistry;
