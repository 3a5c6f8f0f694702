//! Invoice document assembly.
//!
//! This module runs the engine end to end for one invoice: reconciled
//! totals, the legal amount line, tenant template resolution, rendering,
//! and optionally export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::compute_totals;
use crate::error::EngineResult;
use crate::models::{CalculatedTotals, Invoice};
use crate::template::{ExportedFile, RenderedDocument, TemplateRegistry};
use crate::words::amount_in_words;

/// The complete output of one document build.
///
/// Carries the rendered document together with the figures it was rendered
/// from and the provenance of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Unique identifier for this build.
    pub document_id: Uuid,
    /// When the document was built.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that built the document.
    pub engine_version: String,
    /// The reconciled totals backing the document.
    pub totals: CalculatedTotals,
    /// The legal amount line, derived from the gross amount.
    pub amount_in_words: String,
    /// The rendered document data for the visual layer.
    pub rendered: RenderedDocument,
}

/// Builds the invoice document for the invoice's tenant.
///
/// Computes the totals, derives the amount-in-words line from the gross
/// (displayed) amount, resolves the tenant's template (falling back to the
/// default for unknown tenants) and renders. Pure apart from the id,
/// timestamp, and log event stamped on the way out.
///
/// # Example
///
/// ```
/// use invoice_engine::document::build_document;
/// use invoice_engine::models::{Invoice, TaxConfiguration};
/// use invoice_engine::template::TemplateRegistry;
/// use chrono::NaiveDate;
///
/// let invoice = Invoice {
///     invoice_number: "INV-001".to_string(),
///     invoice_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
///     company_id: "kumar-traders".to_string(),
///     company_name: "Kumar Traders".to_string(),
///     client_name: "Apex Fabricators".to_string(),
///     client_address: None,
///     consignee_name: None,
///     consignee_address: None,
///     vehicle_number: None,
///     items: vec![],
///     tax: TaxConfiguration::none(),
/// };
///
/// let document = build_document(&invoice, &TemplateRegistry::standard());
/// assert_eq!(document.amount_in_words, "Rupees Zero Only");
/// ```
pub fn build_document(invoice: &Invoice, registry: &TemplateRegistry) -> InvoiceDocument {
    let document_id = Uuid::new_v4();

    let totals = compute_totals(&invoice.items, &invoice.tax);
    let words = amount_in_words(totals.gross_amount);
    let handle = registry.resolve(&invoice.company_id);
    let rendered = handle.template().render(invoice, &totals, &words);

    info!(
        document_id = %document_id,
        invoice_number = %invoice.invoice_number,
        tenant_id = %invoice.company_id,
        template = %rendered.template,
        gross_amount = %totals.gross_amount,
        "Built invoice document"
    );

    InvoiceDocument {
        document_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        totals,
        amount_in_words: words,
        rendered,
    }
}

/// Builds and exports the invoice document under the given filename, using
/// the exporter registered for the invoice's tenant.
pub fn export_document(
    invoice: &Invoice,
    registry: &TemplateRegistry,
    filename: &str,
) -> EngineResult<ExportedFile> {
    let document = build_document(invoice, registry);
    registry
        .exporter_for(&invoice.company_id)
        .export(&document.rendered, filename)
}
