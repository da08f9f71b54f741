//! Experience section parser.
//!
//! An entry is a 2-line header (company/location, then role and dates)
//! followed by a bullet run. Entries repeat until the section is
//! exhausted; a trailing fragment with fewer than two header lines is
//! dropped rather than emitted half-formed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::bullets;

/// All-caps company name, two or more spaces, location-looking tail.
static COMPANY_LOC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z\s&.()\-]+?)\s{2,}([A-Za-z\s,]+)$").unwrap());

/// `role <dash> Mon YYYY (-|to|–) (Mon YYYY|Present)`, captured as
/// separate start and end dates. Tried before the naive dash split.
static ROLE_DATES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s*[–\-]\s*([A-Za-z]+ \d{4})\s*(?:-|–|to)\s*([A-Za-z]+ \d{4}|Present)$")
        .unwrap()
});

/// Date-range search applied to the tail of a naive split.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]+ \d{4})\s*(?:-|–|to)\s*([A-Za-z]+ \d{4}|Present)").unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub location: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

/// Parses one experience section body into ordered entries.
pub fn parse(body: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = body.lines().map(str::trim).collect();
    let mut entries = Vec::new();
    let mut i = 0;

    loop {
        while i < lines.len() && lines[i].is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }
        let company_line = lines[i];
        i += 1;

        while i < lines.len() && lines[i].is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            // EntryTruncation: a lone company line at the end is dropped.
            break;
        }
        let role_line = lines[i];
        i += 1;

        let (company, location) = split_company(company_line);
        let (role, start_date, end_date) = split_role_dates(role_line);
        let (bullets, next) = bullets::collect(&lines, i);
        i = next;

        entries.push(ExperienceEntry {
            company,
            location,
            role,
            start_date,
            end_date,
            bullets,
        });
    }

    entries
}

/// Splits `ALLCAPS COMPANY  City, ST` on the 2+ space gap; without the
/// gap the whole line is the company and the location stays empty.
fn split_company(line: &str) -> (String, String) {
    match COMPANY_LOC_RE.captures(line) {
        Some(c) => (c[1].trim().to_string(), c[2].trim().to_string()),
        None => (line.to_string(), String::new()),
    }
}

/// Structured date pattern first; on failure, split on the first dash and
/// search the tail for a date range. A tail with no recognizable range
/// leaves both date fields empty.
fn split_role_dates(line: &str) -> (String, String, String) {
    if let Some(c) = ROLE_DATES_RE.captures(line) {
        return (
            c[1].trim().to_string(),
            c[2].to_string(),
            c[3].to_string(),
        );
    }
    match line.split_once(['-', '–']) {
        Some((role, tail)) => {
            let (start, end) = match DATE_RANGE_RE.captures(tail) {
                Some(c) => (c[1].to_string(), c[2].to_string()),
                None => (String::new(), String::new()),
            };
            (role.trim().to_string(), start, end)
        }
        None => (line.to_string(), String::new(), String::new()),
    }
}
