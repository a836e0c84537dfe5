use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a user-entered transfer amount.
///
/// Accepts plain decimals and scientific notation after trimming. Returns
/// `None` for anything unparsable, zero or negative.
pub fn parse_amount(amount: &str) -> Option<Decimal> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    if value > Decimal::ZERO {
        Some(value)
    } else {
        None
    }
}

/// Rounds half away from zero and pins the scale, so `5` becomes `5.00` for `dp = 2`.
pub fn to_fixed(value: Decimal, dp: u32) -> Decimal {
    let mut fixed = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(dp);
    fixed
}

/// Chain balances carry two fractional digits.
pub fn to_balance(value: Decimal) -> Decimal {
    to_fixed(value, 2)
}
