//! The standard invoice template.

use crate::models::{CalculatedTotals, Invoice};

use super::rendered::{DocumentField, InvoiceTemplate, RenderedDocument, line_rows, tax_breakdown};

/// The default document template: a plain tax invoice with the billing
/// party header and the standard tax breakdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTemplate;

impl InvoiceTemplate for StandardTemplate {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn render(
        &self,
        invoice: &Invoice,
        totals: &CalculatedTotals,
        amount_words: &str,
    ) -> RenderedDocument {
        let mut header = vec![
            DocumentField::new("Company", invoice.company_name.clone()),
            DocumentField::new("Invoice No", invoice.invoice_number.clone()),
            DocumentField::new("Invoice Date", invoice.invoice_date.format("%d-%m-%Y").to_string()),
            DocumentField::new("Billed To", invoice.client_name.clone()),
        ];
        if let Some(address) = &invoice.client_address {
            header.push(DocumentField::new("Billing Address", address.clone()));
        }

        RenderedDocument {
            template: self.name().to_string(),
            title: "TAX INVOICE".to_string(),
            header,
            lines: line_rows(invoice),
            tax_summary: tax_breakdown(&invoice.tax, totals),
            totals: totals.clone(),
            amount_in_words: amount_words.to_string(),
        }
    }
}
