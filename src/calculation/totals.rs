//! Reconciled invoice totals computation.
//!
//! This module provides [`compute_totals`], the heart of the engine: it
//! turns a list of line items and a tax configuration into a fully
//! reconciled [`CalculatedTotals`] record.

use rust_decimal::Decimal;

use crate::models::{CalculatedTotals, InvoiceLineItem, TaxConfiguration};

use super::rates::resolve_rates;
use super::rounding::{round_to_paise, round_to_rupee};

/// Computes the reconciled totals for an invoice.
///
/// Pure and deterministic; never fails. Line totals that are missing or do
/// not parse as numbers contribute zero to every sum they participate in,
/// so one malformed row degrades the figures instead of aborting the
/// computation.
///
/// Each GST component is `total_taxable × rate / 100`, rounded to paise so
/// the printed breakdown always adds up to the printed GST total. The gross
/// amount is the total rounded half-up to the nearest rupee, and
/// `rounding_off` is the signed adjustment between the two; with line
/// totals at paise precision, `gross_amount == total_amount + rounding_off`
/// holds exactly.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::compute_totals;
/// use invoice_engine::models::{AmountField, InvoiceLineItem, TaxConfiguration};
/// use rust_decimal::Decimal;
///
/// let items = vec![InvoiceLineItem {
///     description: "Freight charges".to_string(),
///     hsn_code: None,
///     unit_price: None,
///     quantity: None,
///     total: AmountField::Number(Decimal::from(1000)),
///     apply_gst: true,
/// }];
/// let tax = TaxConfiguration::cgst(Decimal::from(9), Decimal::from(9));
///
/// let totals = compute_totals(&items, &tax);
/// assert_eq!(totals.total_gst_amount, Decimal::from(180));
/// assert_eq!(totals.gross_amount, Decimal::from(1180));
/// ```
pub fn compute_totals(items: &[InvoiceLineItem], tax: &TaxConfiguration) -> CalculatedTotals {
    let mut total_taxable = Decimal::ZERO;
    let mut total_non_taxable = Decimal::ZERO;

    for item in items {
        let amount = item.total_amount();
        if item.apply_gst {
            total_taxable += amount;
        } else {
            total_non_taxable += amount;
        }
    }

    let total_before_gst = total_taxable + total_non_taxable;

    let rates = resolve_rates(tax);
    let component = |rate: Decimal| round_to_paise(total_taxable * rate / Decimal::ONE_HUNDRED);

    let cgst_amount = component(rates.cgst);
    let sgst_amount = component(rates.sgst);
    let igst_amount = component(rates.igst);
    let fuel_surcharge_amount = component(rates.fuel_surcharge);

    let total_gst_amount = cgst_amount + sgst_amount + igst_amount + fuel_surcharge_amount;
    let total_amount = total_non_taxable + total_taxable + total_gst_amount;
    let gross_amount = round_to_rupee(total_amount);
    let rounding_off = round_to_paise(gross_amount - total_amount);

    CalculatedTotals {
        total_before_gst,
        total_taxable,
        cgst_amount,
        sgst_amount,
        igst_amount,
        fuel_surcharge_amount,
        total_gst_amount,
        total_amount,
        gross_amount,
        rounding_off,
    }
}
