// filepath: src/blockchain/bridge/transfer.rs
use rust_decimal::Decimal;

use crate::blockchain::registry::ChainRegistry;
use crate::core::domain::ChainKind;
use crate::core::errors::BridgeError;
use crate::core::validation::parse_amount;

/// A transfer request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub source: ChainKind,
    pub destination: ChainKind,
    pub amount: Decimal,
}

/// Checks a proposed transfer against the current registry.
///
/// Order matters, the first failure wins: both endpoints selected, source
/// connected, amount a positive number, amount covered by the source balance.
pub fn validate_transfer(
    registry: &ChainRegistry,
    source: Option<ChainKind>,
    destination: Option<ChainKind>,
    amount: &str,
) -> Result<ValidatedTransfer, BridgeError> {
    let (source, destination) = match (source, destination) {
        (Some(source), Some(destination)) => (source, destination),
        _ => return Err(BridgeError::ChainsNotSelected),
    };

    let source_chain = registry.get(source);
    if !source_chain.connected {
        return Err(BridgeError::WalletNotConnected { chain: source_chain.name.clone() });
    }

    let amount = parse_amount(amount).ok_or(BridgeError::InvalidAmount)?;

    if amount > source_chain.balance {
        return Err(BridgeError::InsufficientBalance);
    }

    Ok(ValidatedTransfer { source, destination, amount })
}
