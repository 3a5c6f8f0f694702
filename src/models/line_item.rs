//! Invoice line item model and the lenient amount field.
//!
//! This module defines the [`InvoiceLineItem`] struct and the
//! [`AmountField`] type that absorbs the loosely-typed numeric input the
//! invoice-editing UI is allowed to send.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numeric value that may arrive as a number, a numeric-looking string,
/// or not at all.
///
/// Line totals are entered in a browser form, so the engine accepts them in
/// whatever shape the form state delivers them. [`AmountField::to_decimal`]
/// is the single conversion point: anything that does not parse as a number
/// contributes zero, so one bad line item degrades the total instead of
/// failing the whole computation.
///
/// # Example
///
/// ```
/// use invoice_engine::models::AmountField;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AmountField::Text("12.50".to_string()).to_decimal(), Decimal::new(1250, 2));
/// assert_eq!(AmountField::Text("n/a".to_string()).to_decimal(), Decimal::ZERO);
/// assert_eq!(AmountField::Missing.to_decimal(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    /// A value that arrived as a JSON number or a string `rust_decimal`
    /// accepts directly.
    Number(Decimal),
    /// A value that arrived as free text; parsed leniently on conversion.
    Text(String),
    /// No value was supplied.
    #[default]
    Missing,
}

impl AmountField {
    /// Converts the field to a [`Decimal`], substituting zero for missing
    /// or non-numeric input.
    pub fn to_decimal(&self) -> Decimal {
        match self {
            AmountField::Number(value) => *value,
            AmountField::Text(text) => text.trim().parse().unwrap_or(Decimal::ZERO),
            AmountField::Missing => Decimal::ZERO,
        }
    }
}

/// One billable row of an invoice.
///
/// Line items are owned by the invoice-editing UI and are immutable once
/// passed to the calculator. Only `total` and `apply_gst` participate in the
/// totals computation; the remaining fields are carried through for display.
///
/// # Example
///
/// ```
/// use invoice_engine::models::{AmountField, InvoiceLineItem};
/// use rust_decimal::Decimal;
///
/// let item = InvoiceLineItem {
///     description: "Freight charges".to_string(),
///     hsn_code: Some("9965".to_string()),
///     unit_price: Some(Decimal::new(50000, 2)),
///     quantity: Some(2),
///     total: AmountField::Number(Decimal::new(100000, 2)),
///     apply_gst: true,
/// };
/// assert_eq!(item.total_amount(), Decimal::new(100000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Description of the goods or service.
    pub description: String,
    /// HSN/SAC classification code; carried for display, not used in
    /// computation.
    #[serde(default)]
    pub hsn_code: Option<String>,
    /// Price per unit, if the row is itemized.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// Number of units, if the row is itemized.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// The line's pre-tax amount.
    #[serde(default)]
    pub total: AmountField,
    /// Whether this line participates in the tax calculation.
    pub apply_gst: bool,
}

impl InvoiceLineItem {
    /// Returns the line's pre-tax amount, with zero substituted for missing
    /// or malformed input.
    pub fn total_amount(&self) -> Decimal {
        self.total.to_decimal()
    }
}
