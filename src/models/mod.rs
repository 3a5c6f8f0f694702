//! Core data models for the invoice engine.
//!
//! This module contains all the domain models used throughout the engine.

mod invoice;
mod line_item;
mod tax;
mod totals;

pub use invoice::Invoice;
pub use line_item::{AmountField, InvoiceLineItem};
pub use tax::{TaxConfiguration, TaxType};
pub use totals::CalculatedTotals;
