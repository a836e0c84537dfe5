pub mod bridge_manager;
pub mod config;
pub mod domain;
pub mod errors;
pub mod validation;

// Re-export the types most callers need
pub use bridge_manager::BridgeManager;
pub use config::BridgeConfig;
pub use domain::{Chain, ChainKind, Selection};
pub use errors::BridgeError;
