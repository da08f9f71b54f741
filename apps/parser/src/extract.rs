//! PDF text-extraction collaborator: `(document) → raw text`.

use std::path::Path;

use tracing::{error, info};

use crate::errors::ResumeError;

/// Extracts plain UTF-8 text from a PDF. The only fallible step ahead of
/// parsing; its failure is surfaced as `ResumeError::Extraction`.
pub fn extract_text(path: &Path) -> Result<String, ResumeError> {
    info!("Extracting text from {}", path.display());
    match pdf_extract::extract_text(path) {
        Ok(text) => {
            info!(chars = text.len(), "Text extraction complete");
            Ok(text)
        }
        Err(e) => {
            error!("Text extraction failed: {e}");
            Err(ResumeError::Extraction(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_propagates_extraction_error() {
        let err = extract_text(Path::new("/nonexistent/resume.pdf")).unwrap_err();
        assert!(matches!(err, ResumeError::Extraction(_)));
    }
}
