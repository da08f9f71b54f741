use thiserror::Error;

/// Failures surfaced by the crate. Parsing itself never fails — malformed
/// text degrades to a sparser document — so the variants here cover only
/// the collaborators around the core: text extraction, file I/O, and
/// serialization.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The external text-extraction step could not read the document.
    /// Propagated unchanged to the caller; never retried here.
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
