//! Invoice computation engine for Indian GST invoicing.
//!
//! This crate provides the financial core of an invoicing administration
//! tool: reconciled totals calculation under the CGST/SGST/IGST regime,
//! legal-document amount-in-words rendering on the Indian numbering scale,
//! and tenant-to-template resolution for document export.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod template;
pub mod words;
