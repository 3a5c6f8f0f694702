//! Error types for the invoice engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the fallible edges of the engine: configuration loading and document
//! export. The computation core itself is total and never returns an error.

use thiserror::Error;

/// The main error type for the invoice engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use invoice_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tenants.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tenants.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tenant configuration referenced a template name that is not
    /// registered with the engine.
    #[error("Unknown template '{name}' assigned to tenant '{tenant_id}'")]
    UnknownTemplate {
        /// The template name that was not recognised.
        name: String,
        /// The tenant the assignment was for.
        tenant_id: String,
    },

    /// A rendered document could not be serialized for export.
    #[error("Failed to export document '{filename}': {message}")]
    ExportFailed {
        /// The filename the export was addressed to.
        filename: String,
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/tenants.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tenants.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_template_displays_name_and_tenant() {
        let error = EngineError::UnknownTemplate {
            name: "fancy".to_string(),
            tenant_id: "acme-logistics".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown template 'fancy' assigned to tenant 'acme-logistics'"
        );
    }

    #[test]
    fn test_export_failed_displays_filename_and_message() {
        let error = EngineError::ExportFailed {
            filename: "INV-0042".to_string(),
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to export document 'INV-0042': key must be a string"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
