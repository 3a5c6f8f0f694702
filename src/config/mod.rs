//! Startup configuration for the invoice engine.
//!
//! This module loads the tenant → template assignments from YAML and
//! builds the [`TemplateRegistry`](crate::template::TemplateRegistry)
//! from them.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::TenantsConfig;
