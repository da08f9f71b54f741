//! Heading/section segmentation — one pass over classified lines.

use crate::parser::line::{classify, LineClass};

/// Splits raw résumé text into the contact heading block and an ordered
/// header → body mapping.
///
/// The heading block is everything before the first header line. Each
/// section body runs from just after its header to just before the next
/// one (or end of text). If no header is found the whole trimmed text is
/// the heading and the section list is empty.
///
/// A repeated header keeps its first position in the order but takes the
/// later occurrence's body (last-write-wins).
pub fn segment(text: &str) -> (String, Vec<(String, String)>) {
    let lines: Vec<&str> = text.lines().collect();
    let header_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| classify(l) == LineClass::Header)
        .map(|(i, _)| i)
        .collect();

    if header_indices.is_empty() {
        return (text.trim().to_string(), Vec::new());
    }

    let heading = lines[..header_indices[0]].join("\n").trim().to_string();
    let mut sections: Vec<(String, String)> = Vec::new();

    for (n, &h) in header_indices.iter().enumerate() {
        let end = header_indices
            .get(n + 1)
            .copied()
            .unwrap_or(lines.len());
        let key = lines[h].trim().trim_end_matches(':').to_string();
        let body = lines[h + 1..end].join("\n").trim().to_string();
        match sections.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = body,
            None => sections.push((key, body)),
        }
    }

    (heading, sections)
}
