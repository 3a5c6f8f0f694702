//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tenant
//! configuration from a YAML file and building the template registry from
//! it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::template::{
    JsonExporter, StandardTemplate, TemplateHandle, TemplateRegistry, TransportTemplate,
};

use super::types::TenantsConfig;

/// Loads and provides access to the tenant configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// └── tenants.yaml   # Default template and tenant assignments
/// ```
///
/// # Example
///
/// ```no_run
/// use invoice_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let registry = loader.build_registry().unwrap();
/// assert_eq!(registry.resolve("unknown").template().name(), "standard");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TenantsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let tenants_path = path.as_ref().join("tenants.yaml");
        let config = Self::load_yaml::<TenantsConfig>(&tenants_path)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tenant configuration.
    pub fn config(&self) -> &TenantsConfig {
        &self.config
    }

    /// Returns the template name configured for a tenant, falling back to
    /// the default template name.
    pub fn template_name(&self, tenant_id: &str) -> &str {
        self.config
            .tenants
            .get(tenant_id)
            .unwrap_or(&self.config.default_template)
    }

    /// Builds the template registry from the configuration.
    ///
    /// # Returns
    ///
    /// Returns the populated registry, or `UnknownTemplate` if the default
    /// or any tenant assignment names a template the engine does not ship.
    pub fn build_registry(&self) -> EngineResult<TemplateRegistry> {
        let default = Self::handle_for(&self.config.default_template, "Default")?;
        let mut registry = TemplateRegistry::new(default);

        for (tenant_id, template_name) in &self.config.tenants {
            let handle = Self::handle_for(template_name, tenant_id)?;
            registry.register(tenant_id.clone(), handle);
        }

        Ok(registry)
    }

    /// Maps a configured template name onto a built-in template handle.
    fn handle_for(template_name: &str, tenant_id: &str) -> EngineResult<TemplateHandle> {
        match template_name {
            "standard" => Ok(TemplateHandle::new(
                Arc::new(StandardTemplate),
                Arc::new(JsonExporter),
            )),
            "transport" => Ok(TemplateHandle::new(
                Arc::new(TransportTemplate),
                Arc::new(JsonExporter),
            )),
            _ => Err(EngineError::UnknownTemplate {
                name: template_name.to_string(),
                tenant_id: tenant_id.to_string(),
            }),
        }
    }
}
