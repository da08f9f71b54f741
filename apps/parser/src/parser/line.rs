//! Line classification — the closed tag set every downstream parser consumes.
//!
//! Classification precedence is Blank, Header, BulletStart, Continuation.
//! Header outranks Continuation so an all-caps header line always terminates
//! an open bullet run instead of being glued onto it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Section headers are all-caps lines of letters, spaces, `&`, `-`, `.`,
/// and parentheses, optionally ending with a colon. Lowercase anywhere
/// disqualifies the line, which keeps ordinary prose out.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z &.()\-]+:?$").unwrap());

/// How a single line participates in the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming.
    Blank,
    /// All-caps section header (see `HEADER_RE`).
    Header,
    /// Starts with `•` or `-`; opens a new logical bullet.
    BulletStart,
    /// Any other non-blank line. Meaningful only relative to an open
    /// bullet; inert otherwise.
    Continuation,
}

/// Classifies one line. The line is trimmed internally, so callers may
/// pass raw source lines.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if HEADER_RE.is_match(trimmed) {
        return LineClass::Header;
    }
    if trimmed.starts_with('•') || trimmed.starts_with('-') {
        return LineClass::BulletStart;
    }
    LineClass::Continuation
}

/// Strips a single leading bullet marker and surrounding whitespace.
/// On a non-bullet line this returns the trimmed line unchanged.
pub fn bullet_text(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix('•')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed)
        .trim_start()
}
