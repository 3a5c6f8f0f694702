//! Tenant template resolution and document rendering surface.
//!
//! This module owns the data side of invoice presentation: the
//! [`InvoiceTemplate`] trait and its built-in implementations, the
//! [`RenderedDocument`] model handed to the visual layer, the
//! [`DocumentExporter`] serialization seam, and the [`TemplateRegistry`]
//! that resolves a tenant identifier to both.

mod export;
mod registry;
mod rendered;
mod standard;
mod transport;

pub use export::{DocumentExporter, ExportedFile, JsonExporter};
pub use registry::{TemplateHandle, TemplateRegistry};
pub use rendered::{DocumentField, InvoiceTemplate, RenderedDocument, RenderedLine};
pub use standard::StandardTemplate;
pub use transport::TransportTemplate;
