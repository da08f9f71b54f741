//! Fallback parser for sections with no dedicated entry shape.

use crate::parser::bullets;
use crate::parser::document::SectionContent;

/// Returns the section's bullet list when the body contains at least one
/// bullet; otherwise the trimmed raw body string.
pub fn parse(body: &str) -> SectionContent {
    let lines: Vec<&str> = body.lines().map(str::trim).collect();
    let collected = bullets::collect_all(&lines);
    if collected.is_empty() {
        SectionContent::Text(body.trim().to_string())
    } else {
        SectionContent::Bullets(collected)
    }
}
