//! Invoice rounding rules.
//!
//! This module provides the two rounding operations invoices use: half-up
//! to the nearest rupee for the displayed gross amount, and half-up to
//! paise for tax components and the rounding adjustment. `rust_decimal`'s
//! default `round()` is banker's rounding and would diverge on `.5`
//! boundaries, so the strategy is always spelled out here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount half-up to the nearest rupee.
///
/// A half-rupee rounds up (`2.5 → 3`), matching the amount an invoice
/// displays as its gross total. Negative midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::round_to_rupee;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_rupee(Decimal::new(25, 1)), Decimal::from(3));
/// assert_eq!(round_to_rupee(Decimal::new(2499, 3)), Decimal::from(2));
/// ```
pub fn round_to_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount half-up to paise (two decimal places).
pub fn round_to_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
