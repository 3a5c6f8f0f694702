//! Calculation logic for the invoice engine.
//!
//! This module contains the totals calculator: effective-rate resolution
//! from the tax type, the invoice rounding rules, and the reconciled totals
//! computation itself.

mod rates;
mod rounding;
mod totals;

pub use rates::{EffectiveRates, resolve_rates};
pub use rounding::{round_to_paise, round_to_rupee};
pub use totals::compute_totals;
