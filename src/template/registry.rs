//! Tenant → template registry.
//!
//! One authoritative table maps tenant identifiers to their document
//! template and export function. The historical system kept two parallel
//! maps (one for the download flow, one for template selection) that had to
//! be edited in sync; here both flows are thin accessors over the single
//! registry, so adding a tenant is one registration call.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::export::{DocumentExporter, JsonExporter};
use super::rendered::InvoiceTemplate;
use super::standard::StandardTemplate;

/// A tenant's render template and export function, resolved together.
#[derive(Clone)]
pub struct TemplateHandle {
    template: Arc<dyn InvoiceTemplate>,
    exporter: Arc<dyn DocumentExporter>,
}

impl TemplateHandle {
    /// Bundles a template and an exporter into one handle.
    pub fn new(template: Arc<dyn InvoiceTemplate>, exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { template, exporter }
    }

    /// The render template.
    pub fn template(&self) -> &dyn InvoiceTemplate {
        self.template.as_ref()
    }

    /// The export function.
    pub fn exporter(&self) -> &dyn DocumentExporter {
        self.exporter.as_ref()
    }
}

impl fmt::Debug for TemplateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateHandle")
            .field("template", &self.template.name())
            .field("extension", &self.exporter.extension())
            .finish()
    }
}

/// The process-wide tenant → template mapping.
///
/// Populated at startup, read-only afterwards. A default handle is
/// mandatory at construction, so resolution never fails: an unknown tenant
/// identifier falls back to the default entry.
///
/// # Example
///
/// ```
/// use invoice_engine::template::TemplateRegistry;
///
/// let registry = TemplateRegistry::standard();
/// let handle = registry.resolve("unknown-tenant");
/// assert_eq!(handle.template().name(), "standard");
/// ```
pub struct TemplateRegistry {
    default: TemplateHandle,
    tenants: HashMap<String, TemplateHandle>,
}

impl TemplateRegistry {
    /// Creates a registry with the mandatory default handle and no tenant
    /// entries.
    pub fn new(default: TemplateHandle) -> Self {
        Self {
            default,
            tenants: HashMap::new(),
        }
    }

    /// Creates the built-in registry: the standard template with JSON
    /// export as the default, no tenant overrides.
    pub fn standard() -> Self {
        Self::new(TemplateHandle::new(
            Arc::new(StandardTemplate),
            Arc::new(JsonExporter),
        ))
    }

    /// Registers (or replaces) the handle for a tenant.
    pub fn register(&mut self, tenant_id: impl Into<String>, handle: TemplateHandle) {
        let tenant_id = tenant_id.into();
        info!(
            tenant_id = %tenant_id,
            template = handle.template().name(),
            "Registered tenant template"
        );
        self.tenants.insert(tenant_id, handle);
    }

    /// Resolves the handle for a tenant, falling back to the default entry
    /// on a miss. Never fails; repeated calls with the same identifier
    /// return the same handle.
    pub fn resolve(&self, tenant_id: &str) -> &TemplateHandle {
        self.tenants.get(tenant_id).unwrap_or(&self.default)
    }

    /// Thin accessor over [`resolve`](Self::resolve) for the template
    /// selection flow.
    pub fn template_for(&self, tenant_id: &str) -> &dyn InvoiceTemplate {
        self.resolve(tenant_id).template()
    }

    /// Thin accessor over [`resolve`](Self::resolve) for the download flow.
    pub fn exporter_for(&self, tenant_id: &str) -> &dyn DocumentExporter {
        self.resolve(tenant_id).exporter()
    }

    /// Returns true if the tenant has its own entry (rather than falling
    /// back to the default).
    pub fn is_registered(&self, tenant_id: &str) -> bool {
        self.tenants.contains_key(tenant_id)
    }

    /// The number of tenant-specific entries.
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    /// Returns true if no tenant-specific entries exist.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("default", &self.default)
            .field("tenants", &self.tenants)
            .finish()
    }
}
