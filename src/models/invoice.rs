//! Invoice model.
//!
//! This module defines the [`Invoice`] struct: the fields the editing UI
//! hands to the engine alongside the line items and tax configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{InvoiceLineItem, TaxConfiguration};

/// One invoice as assembled by the editing UI.
///
/// The engine reads this value; it never mutates it. `company_id` doubles
/// as the tenant identifier for template resolution.
///
/// # Example
///
/// ```
/// use invoice_engine::models::{Invoice, TaxConfiguration};
/// use chrono::NaiveDate;
///
/// let invoice = Invoice {
///     invoice_number: "INV-2025-0042".to_string(),
///     invoice_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
///     company_id: "shreeji-transport".to_string(),
///     company_name: "Shreeji Transport Co.".to_string(),
///     client_name: "Medha Engineering Works".to_string(),
///     client_address: Some("Plot 14, GIDC Estate, Vapi".to_string()),
///     consignee_name: None,
///     consignee_address: None,
///     vehicle_number: None,
///     items: vec![],
///     tax: TaxConfiguration::none(),
/// };
/// assert_eq!(invoice.company_id, "shreeji-transport");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// The invoice number as printed on the document.
    pub invoice_number: String,
    /// The invoice date.
    pub invoice_date: NaiveDate,
    /// Persistent identifier of the issuing company; used as the tenant key
    /// for template resolution.
    pub company_id: String,
    /// Display name of the issuing company.
    pub company_name: String,
    /// Name of the billed client.
    pub client_name: String,
    /// Billing address of the client.
    #[serde(default)]
    pub client_address: Option<String>,
    /// Name of the consignee, when goods are delivered to a party other
    /// than the client.
    #[serde(default)]
    pub consignee_name: Option<String>,
    /// Delivery address of the consignee.
    #[serde(default)]
    pub consignee_address: Option<String>,
    /// Vehicle number for transport invoices.
    #[serde(default)]
    pub vehicle_number: Option<String>,
    /// The billable rows of the invoice.
    pub items: Vec<InvoiceLineItem>,
    /// The tax regime applied to the invoice.
    #[serde(default)]
    pub tax: TaxConfiguration,
}
