//! Property-based tests for the invoice engine.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use rust_decimal::Decimal;

use invoice_engine::calculation::compute_totals;
use invoice_engine::models::{AmountField, InvoiceLineItem, TaxConfiguration, TaxType};
use invoice_engine::template::TemplateRegistry;
use invoice_engine::words::amount_in_words;

/// A money value at paise precision, up to one crore.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

/// A percentage rate at two decimal places, up to 28%.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2800).prop_map(|basis| Decimal::new(basis, 2))
}

fn tax_type() -> impl Strategy<Value = TaxType> {
    prop_oneof![
        Just(TaxType::Cgst),
        Just(TaxType::Igst),
        Just(TaxType::None),
    ]
}

fn tax_configuration() -> impl Strategy<Value = TaxConfiguration> {
    (tax_type(), rate(), rate(), rate(), rate()).prop_map(
        |(tax_type, cgst_rate, sgst_rate, igst_rate, fuel_surcharge_rate)| TaxConfiguration {
            tax_type,
            cgst_rate,
            sgst_rate,
            igst_rate,
            fuel_surcharge_rate,
        },
    )
}

fn line_items() -> impl Strategy<Value = Vec<InvoiceLineItem>> {
    prop::collection::vec((money(), any::<bool>()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .map(|(total, apply_gst)| InvoiceLineItem {
                description: "Line".to_string(),
                hsn_code: None,
                unit_price: None,
                quantity: None,
                total: AmountField::Number(total),
                apply_gst,
            })
            .collect()
    })
}

proptest! {
    /// The rounding adjustment always reconciles the gross amount exactly.
    #[test]
    fn prop_gross_equals_total_plus_rounding(items in line_items(), tax in tax_configuration()) {
        let totals = compute_totals(&items, &tax);
        prop_assert_eq!(totals.gross_amount, totals.total_amount + totals.rounding_off);
    }

    /// The gross amount never drifts more than half a rupee from the total.
    #[test]
    fn prop_rounding_within_half_rupee(items in line_items(), tax in tax_configuration()) {
        let totals = compute_totals(&items, &tax);
        prop_assert!(totals.rounding_off.abs() <= Decimal::new(5, 1));
    }

    /// The tax type is exclusive: components of the other kind are zero.
    #[test]
    fn prop_tax_type_is_exclusive(items in line_items(), tax in tax_configuration()) {
        let totals = compute_totals(&items, &tax);
        match tax.tax_type {
            TaxType::Cgst => prop_assert_eq!(totals.igst_amount, Decimal::ZERO),
            TaxType::Igst => {
                prop_assert_eq!(totals.cgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.sgst_amount, Decimal::ZERO);
            }
            TaxType::None => {
                prop_assert_eq!(totals.cgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.sgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.igst_amount, Decimal::ZERO);
            }
        }
    }

    /// The GST total is always the sum of its printed components.
    #[test]
    fn prop_gst_total_is_component_sum(items in line_items(), tax in tax_configuration()) {
        let totals = compute_totals(&items, &tax);
        prop_assert_eq!(
            totals.total_gst_amount,
            totals.cgst_amount + totals.sgst_amount + totals.igst_amount
                + totals.fuel_surcharge_amount
        );
    }

    /// Invoices with no taxable lines collect no tax at all.
    #[test]
    fn prop_no_taxable_lines_no_tax(amounts in prop::collection::vec(money(), 0..12), tax in tax_configuration()) {
        let items: Vec<InvoiceLineItem> = amounts
            .into_iter()
            .map(|total| InvoiceLineItem {
                description: "Line".to_string(),
                hsn_code: None,
                unit_price: None,
                quantity: None,
                total: AmountField::Number(total),
                apply_gst: false,
            })
            .collect();

        let totals = compute_totals(&items, &tax);
        prop_assert_eq!(totals.total_taxable, Decimal::ZERO);
        prop_assert_eq!(totals.total_gst_amount, Decimal::ZERO);
        prop_assert_eq!(totals.total_amount, totals.total_before_gst);
    }

    /// Every words rendering is framed as a legal amount line.
    #[test]
    fn prop_words_are_framed(amount in money()) {
        let words = amount_in_words(amount);
        prop_assert!(words.starts_with("Rupees "));
        prop_assert!(words.ends_with(" Only"));
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
    }

    /// Template resolution never fails and is stable for arbitrary ids.
    #[test]
    fn prop_resolution_total_and_stable(tenant_id in "[a-z0-9-]{0,24}") {
        let registry = TemplateRegistry::standard();
        let first = registry.resolve(&tenant_id).template().name();
        let second = registry.resolve(&tenant_id).template().name();
        prop_assert_eq!(first, "standard");
        prop_assert_eq!(first, second);
    }
}
