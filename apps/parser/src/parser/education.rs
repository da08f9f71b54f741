//! Education section parser — same 2-line-header-then-bullets shape as
//! the experience parser, with school/location then degree/date.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::bullets;

static SCHOOL_LOC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z\s,.()\-]+?)\s{2,}([A-Za-z\s,]+)$").unwrap());

/// `degree, Mon YYYY` with the comma optional.
static DEGREE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?),?\s+([A-Za-z]+ \d{4})$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub location: String,
    pub degree: String,
    pub date: String,
    pub bullets: Vec<String>,
}

/// Parses one education section body into ordered entries.
pub fn parse(body: &str) -> Vec<EducationEntry> {
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
        let school_line = lines[i];
        i += 1;

        while i < lines.len() && lines[i].is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }
        let degree_line = lines[i];
        i += 1;

        let (school, location) = split_school(school_line);
        let (degree, date) = split_degree_date(degree_line);
        let (bullets, next) = bullets::collect(&lines, i);
        i = next;

        entries.push(EducationEntry {
            school,
            location,
            degree,
            date,
            bullets,
        });
    }

    entries
}

fn split_school(line: &str) -> (String, String) {
    match SCHOOL_LOC_RE.captures(line) {
        Some(c) => (c[1].trim().to_string(), c[2].trim().to_string()),
        None => (line.to_string(), String::new()),
    }
}

/// Structured pattern first, comma split as the fallback. A line matching
/// neither keeps the whole text as the degree and an empty date.
fn split_degree_date(line: &str) -> (String, String) {
    if let Some(c) = DEGREE_DATE_RE.captures(line) {
        return (c[1].trim().to_string(), c[2].to_string());
    }
    match line.split_once(',') {
        Some((degree, date)) => (degree.trim().to_string(), date.trim().to_string()),
        None => (line.to_string(), String::new()),
    }
}
