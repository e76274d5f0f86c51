//! Fixed-point currency helpers.
//!
//! Prices, weights and costs are `rust_decimal::Decimal` throughout. Values are
//! only rounded when they are finalized for a caller, always to two decimals
//! with half-up (midpoint away from zero) semantics.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

/// Number of fractional digits kept on finalized monetary values.
pub const CURRENCY_SCALE: u32 = 2;

/// Round to two decimals, half-up. The result always carries scale 2.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Reject negative amounts with `InvalidArgument(message)`.
pub fn ensure_non_negative(value: Decimal, message: &str) -> DomainResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(value)
}

/// Sum that reports overflow of the decimal range instead of panicking.
///
/// `what` names the quantity in the error message.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>, what: &str) -> DomainResult<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).ok_or_else(|| overflow(what))
    })
}

/// Product that reports overflow of the decimal range instead of panicking.
pub fn checked_product(lhs: Decimal, rhs: Decimal, what: &str) -> DomainResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(what))
}

fn overflow(what: &str) -> DomainError {
    DomainError::invalid_argument(format!("{what} exceeds the supported decimal range."))
}
