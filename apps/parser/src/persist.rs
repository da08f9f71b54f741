//! Persistence boundary: writes the parsed document to a JSON file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::errors::ResumeError;
use crate::parser::ParsedResume;

/// Serializes the parsed résumé to pretty-printed JSON at `path`.
pub fn write_json(resume: &ParsedResume, path: &Path) -> Result<(), ResumeError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), resume)?;
    info!("Parsed resume saved to {}", path.display());
    Ok(())
}
