//! Calculated totals model.
//!
//! This module contains the [`CalculatedTotals`] type: the fully reconciled
//! output of the totals calculator, consumed by rendering components to
//! print the tax breakdown of an invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fully reconciled totals of one invoice.
///
/// Produced fresh per invoice by
/// [`compute_totals`](crate::calculation::compute_totals) and treated as a
/// value afterwards: never mutated, never shared mutably.
///
/// Invariant: `gross_amount == total_amount + rounding_off` exactly, given
/// line totals at paise precision.
///
/// # Example
///
/// ```
/// use invoice_engine::models::CalculatedTotals;
/// use rust_decimal::Decimal;
///
/// let totals = CalculatedTotals {
///     total_before_gst: Decimal::from(1500),
///     total_taxable: Decimal::from(1000),
///     cgst_amount: Decimal::from(90),
///     sgst_amount: Decimal::from(90),
///     igst_amount: Decimal::ZERO,
///     fuel_surcharge_amount: Decimal::ZERO,
///     total_gst_amount: Decimal::from(180),
///     total_amount: Decimal::from(1680),
///     gross_amount: Decimal::from(1680),
///     rounding_off: Decimal::ZERO,
/// };
/// assert!(totals.reconciles());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedTotals {
    /// Sum of all line totals, taxable or not: the displayed pre-tax
    /// subtotal.
    pub total_before_gst: Decimal,
    /// Sum of the line totals with `apply_gst` set: the taxable base.
    pub total_taxable: Decimal,
    /// CGST component on the taxable base.
    pub cgst_amount: Decimal,
    /// SGST component on the taxable base.
    pub sgst_amount: Decimal,
    /// IGST component on the taxable base.
    pub igst_amount: Decimal,
    /// Fuel surcharge component on the taxable base.
    pub fuel_surcharge_amount: Decimal,
    /// Sum of the four tax components.
    pub total_gst_amount: Decimal,
    /// Non-taxable sum + taxable sum + total GST.
    pub total_amount: Decimal,
    /// `total_amount` rounded half-up to the nearest rupee: the figure the
    /// invoice displays.
    pub gross_amount: Decimal,
    /// The signed adjustment between `total_amount` and `gross_amount`.
    pub rounding_off: Decimal,
}

impl CalculatedTotals {
    /// Returns true if the rounding adjustment reconciles the gross amount
    /// with the exact total.
    pub fn reconciles(&self) -> bool {
        self.gross_amount == self.total_amount + self.rounding_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_totals() -> CalculatedTotals {
        CalculatedTotals {
            total_before_gst: dec("1500"),
            total_taxable: dec("1000"),
            cgst_amount: dec("90"),
            sgst_amount: dec("90"),
            igst_amount: dec("0"),
            fuel_surcharge_amount: dec("0"),
            total_gst_amount: dec("180"),
            total_amount: dec("1680"),
            gross_amount: dec("1680"),
            rounding_off: dec("0"),
        }
    }

    #[test]
    fn test_reconciles_with_zero_rounding() {
        assert!(sample_totals().reconciles());
    }

    #[test]
    fn test_reconciles_with_negative_rounding() {
        let mut totals = sample_totals();
        totals.total_amount = dec("1680.30");
        totals.gross_amount = dec("1680");
        totals.rounding_off = dec("-0.30");
        assert!(totals.reconciles());
    }

    #[test]
    fn test_does_not_reconcile_with_wrong_adjustment() {
        let mut totals = sample_totals();
        totals.rounding_off = dec("0.05");
        assert!(!totals.reconciles());
    }

    #[test]
    fn test_serialization() {
        let totals = sample_totals();
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"total_before_gst\":\"1500\""));
        assert!(json.contains("\"total_taxable\":\"1000\""));
        assert!(json.contains("\"total_gst_amount\":\"180\""));
        assert!(json.contains("\"gross_amount\":\"1680\""));
        assert!(json.contains("\"rounding_off\":\"0\""));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "total_before_gst": "1500",
            "total_taxable": "1000",
            "cgst_amount": "90",
            "sgst_amount": "90",
            "igst_amount": "0",
            "fuel_surcharge_amount": "0",
            "total_gst_amount": "180",
            "total_amount": "1680",
            "gross_amount": "1680",
            "rounding_off": "0"
        }"#;

        let totals: CalculatedTotals = serde_json::from_str(json).unwrap();
        assert_eq!(totals, sample_totals());
    }
}
