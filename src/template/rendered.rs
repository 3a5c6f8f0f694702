//! The rendered-document data model.
//!
//! Templates produce a [`RenderedDocument`]: the structured data a visual
//! layer (PDF renderer, print view) consumes. Borders, fonts and positions
//! are that layer's concern; everything printable lives here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatedTotals, Invoice, TaxConfiguration, TaxType};

/// A labelled value on the document, e.g. `Invoice No` → `INV-2025-0042`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentField {
    /// The printed label.
    pub label: String,
    /// The printed value.
    pub value: String,
}

impl DocumentField {
    /// Creates a field from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One row of the document's line item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Description of the goods or service.
    pub description: String,
    /// HSN/SAC classification code, if carried on the item.
    pub hsn_code: Option<String>,
    /// Number of units, if the row is itemized.
    pub quantity: Option<u32>,
    /// Price per unit, if the row is itemized.
    pub unit_price: Option<Decimal>,
    /// The line amount as it participates in the totals (zero for
    /// malformed input).
    pub amount: Decimal,
    /// Whether GST was applied to this line.
    pub gst_applied: bool,
}

/// The complete data of one rendered invoice document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Name of the template that produced the document.
    pub template: String,
    /// The document title, e.g. `TAX INVOICE`.
    pub title: String,
    /// Header fields: invoice number, date, parties.
    pub header: Vec<DocumentField>,
    /// The line item table.
    pub lines: Vec<RenderedLine>,
    /// The printed tax breakdown, one field per printed row.
    pub tax_summary: Vec<DocumentField>,
    /// The reconciled totals backing the breakdown.
    pub totals: CalculatedTotals,
    /// The legal amount line.
    pub amount_in_words: String,
}

/// A visual invoice template, keyed by tenant in the
/// [`TemplateRegistry`](super::TemplateRegistry).
///
/// Implementations are pure: they arrange invoice data into a
/// [`RenderedDocument`] and never perform I/O.
pub trait InvoiceTemplate: Send + Sync {
    /// The template's registry name.
    fn name(&self) -> &'static str;

    /// Renders an invoice, its reconciled totals and its legal amount line
    /// into the document data the visual layer consumes.
    fn render(
        &self,
        invoice: &Invoice,
        totals: &CalculatedTotals,
        amount_words: &str,
    ) -> RenderedDocument;
}

/// Builds the line item table rows shared by all templates.
pub(crate) fn line_rows(invoice: &Invoice) -> Vec<RenderedLine> {
    invoice
        .items
        .iter()
        .map(|item| RenderedLine {
            description: item.description.clone(),
            hsn_code: item.hsn_code.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            amount: item.total_amount(),
            gst_applied: item.apply_gst,
        })
        .collect()
}

/// Builds the printed tax breakdown: one row per applicable component plus
/// the rounding adjustment and the gross total.
pub(crate) fn tax_breakdown(tax: &TaxConfiguration, totals: &CalculatedTotals) -> Vec<DocumentField> {
    let mut rows = vec![DocumentField::new(
        "Total Before GST",
        format!("{:.2}", totals.total_before_gst),
    )];

    match tax.tax_type {
        TaxType::Cgst => {
            rows.push(DocumentField::new(
                format!("CGST @ {}%", tax.cgst_rate.normalize()),
                format!("{:.2}", totals.cgst_amount),
            ));
            rows.push(DocumentField::new(
                format!("SGST @ {}%", tax.sgst_rate.normalize()),
                format!("{:.2}", totals.sgst_amount),
            ));
        }
        TaxType::Igst => {
            rows.push(DocumentField::new(
                format!("IGST @ {}%", tax.igst_rate.normalize()),
                format!("{:.2}", totals.igst_amount),
            ));
        }
        TaxType::None => {}
    }

    if !tax.fuel_surcharge_rate.is_zero() {
        rows.push(DocumentField::new(
            format!("Fuel Surcharge @ {}%", tax.fuel_surcharge_rate.normalize()),
            format!("{:.2}", totals.fuel_surcharge_amount),
        ));
    }

    rows.push(DocumentField::new(
        "Rounding Off",
        format!("{:.2}", totals.rounding_off),
    ));
    rows.push(DocumentField::new(
        "Gross Total",
        format!("{:.2}", totals.gross_amount),
    ));

    rows
}
