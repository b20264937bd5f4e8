//! Cart amount arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every money amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round an amount to two decimal places, halves away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `round(price × qty, 2)`
#[must_use]
pub fn line_total(price: Decimal, qty: u64) -> Decimal {
    round_money(price.saturating_mul(Decimal::from(qty)))
}

/// Sum of already rounded line totals, rounded again.
///
/// Lines are rounded before summation, so the result can differ by a few cents
/// from rounding the unrounded sum once.
#[must_use]
pub fn cart_total<I>(line_totals: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_money(
        line_totals
            .into_iter()
            .fold(Decimal::ZERO, Decimal::saturating_add),
    )
}
