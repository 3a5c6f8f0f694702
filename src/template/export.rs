//! Document export.
//!
//! This module provides the [`DocumentExporter`] trait: the one-shot
//! serialize-to-downloadable-file step at the end of the pipeline. The
//! engine ships a JSON exporter; the PDF byte format itself belongs to the
//! excluded visual renderer, which consumes the same [`RenderedDocument`]
//! data.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::rendered::RenderedDocument;

/// A serialized document ready to be handed to the file-save utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    /// The full filename, extension included.
    pub filename: String,
    /// The MIME type of the serialized bytes.
    pub content_type: String,
    /// The serialized document.
    pub bytes: Vec<u8>,
}

/// Serializes rendered documents into downloadable files.
///
/// Exporters are one-shot: a call either produces the file or reports the
/// serialization failure; retrying is the caller's concern.
pub trait DocumentExporter: Send + Sync {
    /// The file extension this exporter produces, without the dot.
    fn extension(&self) -> &'static str;

    /// The MIME type of the files this exporter produces.
    fn content_type(&self) -> &'static str;

    /// Serializes a rendered document under the given filename. The
    /// exporter's extension is appended when the filename does not already
    /// carry it.
    fn export(&self, document: &RenderedDocument, filename: &str) -> EngineResult<ExportedFile>;
}

/// Exports the rendered document as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn export(&self, document: &RenderedDocument, filename: &str) -> EngineResult<ExportedFile> {
        let bytes =
            serde_json::to_vec_pretty(document).map_err(|e| EngineError::ExportFailed {
                filename: filename.to_string(),
                message: e.to_string(),
            })?;

        Ok(ExportedFile {
            filename: with_extension(filename, self.extension()),
            content_type: self.content_type().to_string(),
            bytes,
        })
    }
}

/// Appends `.{extension}` unless the filename already ends with it.
fn with_extension(filename: &str, extension: &str) -> String {
    let suffix = format!(".{}", extension);
    if filename.ends_with(&suffix) {
        filename.to_string()
    } else {
        format!("{}{}", filename, suffix)
    }
}
