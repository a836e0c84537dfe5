use thiserror::Error;

/// Error type for bridge simulation operations.
///
/// The first four variants are transfer validation failures. Their `Display`
/// text is what the user sees in the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("Source and destination chains must be selected")]
    ChainsNotSelected,
    #[error("{chain} wallet not connected")]
    WalletNotConnected { chain: String },
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Insufficient balance")]
    InsufficientBalance,
    /// A chain identifier that is not one of the five supported kinds.
    #[error("Unknown chain: {0}")]
    UnknownChain(String),
    #[error("Unknown transaction status: {0}")]
    UnknownStatus(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl BridgeError {
    /// Transfer validation failures: non-fatal, reported, no state change.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BridgeError::ChainsNotSelected
                | BridgeError::WalletNotConnected { .. }
                | BridgeError::InvalidAmount
                | BridgeError::InsufficientBalance
        )
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for BridgeError {
    fn from(err: toml::de::Error) -> Self {
        BridgeError::Config(err.to_string())
    }
}
