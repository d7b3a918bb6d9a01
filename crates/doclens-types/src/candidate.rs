use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Only media type the analysis backend accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// File selected for analysis, before any submission has started.
///
/// A candidate carries metadata only; the file content is read by the
/// adapter that performs the upload. Candidates are replaced wholesale by
/// each new selection and persist across submission success and failure so
/// the user can retry without re-selecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
}

impl UploadCandidate {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }

    /// Build a candidate from a filesystem path (picker adapter for the CLI).
    ///
    /// The media type is derived from the file extension; validation happens
    /// separately so a rejected selection can be reported without touching
    /// any previously accepted candidate.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, metadata.len(), media_type_for(path)))
    }

    /// Gate for entering the request lifecycle: only PDFs are accepted.
    pub fn validate(&self) -> Result<()> {
        if self.media_type == PDF_MEDIA_TYPE {
            Ok(())
        } else {
            Err(Error::UnsupportedMediaType(self.media_type.clone()))
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }

    /// File size in megabytes, for display alongside the filename.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("txt") | Some("md") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
