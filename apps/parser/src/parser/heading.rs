//! Contact extraction from the heading block.
//!
//! Every field is independent and best-effort: a pattern that fails to
//! match simply leaves its field unset.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").unwrap());

/// 10 digits grouped (3)(3)(4) with optional parentheses, dashes, spaces.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{4}").unwrap());

/// Link detection is deliberately narrowed to professional-network URLs;
/// generic portfolio links are not extracted here.
static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[\w.]*linkedin\.com/\S+").unwrap());

/// City-like words, two-letter state code, optional ZIP.
static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z ]*,\s*[A-Z]{2}\s*\d{0,5}").unwrap());

/// Contact fields recovered from the heading block. Absence of a field
/// means "not found", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Extracts contact fields from the heading block. The name is the first
/// non-blank line, taken verbatim; the rest come from first regex matches
/// over the whole block.
pub fn extract(heading: &str) -> ContactInfo {
    let name = heading
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from);

    ContactInfo {
        name,
        email: first_match(&EMAIL_RE, heading),
        phone: first_match(&PHONE_RE, heading),
        link: first_match(&LINKEDIN_RE, heading),
        location: first_match(&LOCATION_RE, heading),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().trim().to_string())
}
