//! The transport invoice template.

use crate::models::{CalculatedTotals, Invoice};

use super::rendered::{DocumentField, InvoiceTemplate, RenderedDocument, line_rows, tax_breakdown};

/// The template for goods-transport tenants: adds the consignee block and
/// the vehicle number to the document header.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportTemplate;

impl InvoiceTemplate for TransportTemplate {
    fn name(&self) -> &'static str {
        "transport"
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

        // Consignee defaults to the billed party when goods ship to them
        // directly.
        let consignee = invoice
            .consignee_name
            .clone()
            .unwrap_or_else(|| invoice.client_name.clone());
        header.push(DocumentField::new("Consignee", consignee));
        if let Some(address) = &invoice.consignee_address {
            header.push(DocumentField::new("Delivery Address", address.clone()));
        }
        if let Some(vehicle) = &invoice.vehicle_number {
            header.push(DocumentField::new("Vehicle No", vehicle.clone()));
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
