//! Configuration types for the invoice engine.
//!
//! This module contains the strongly-typed structures deserialized from
//! the YAML configuration file.

use serde::Deserialize;
use std::collections::HashMap;

/// The tenants configuration file structure (`tenants.yaml`).
///
/// Maps tenant identifiers to the name of the template they export with.
/// The default template is mandatory: tenants without an entry, and
/// unknown tenant identifiers at runtime, fall back to it.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantsConfig {
    /// Name of the template used when a tenant has no entry of its own.
    pub default_template: String,
    /// Map of tenant identifier to template name.
    #[serde(default)]
    pub tenants: HashMap<String, String>,
}
