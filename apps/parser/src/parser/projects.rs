//! Project section parser — single-line header per entry, then bullets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::bullets;

/// Trailing URL, or the literal tokens `GitHub`/`Website`, at end of line.
static PROJECT_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://\S+|GitHub|Website)$").unwrap());

static TECH_STACK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Tech Stack: ([^|]+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub tech_stack: String,
    pub link: String,
    pub bullets: Vec<String>,
}

/// Parses one projects section body into ordered entries.
pub fn parse(body: &str) -> Vec<ProjectEntry> {
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
        let header = lines[i];
        i += 1;

        let (name, tech_stack, link) = split_header(header);
        let (bullets, next) = bullets::collect(&lines, i);
        i = next;

        entries.push(ProjectEntry {
            name,
            tech_stack,
            link,
            bullets,
        });
    }

    entries
}

/// Strips the trailing link, then splits out `Tech Stack: <value>`; the
/// name is the text before the first `|`. Without a tech stack the whole
/// remaining text is the name.
fn split_header(line: &str) -> (String, String, String) {
    let mut rest = line;
    let mut link = String::new();
    if let Some(m) = PROJECT_LINK_RE.find(rest) {
        link = m.as_str().to_string();
        rest = rest[..m.start()].trim_end();
    }

    match TECH_STACK_RE.captures(rest) {
        Some(c) => {
            let name = rest.split('|').next().unwrap_or(rest).trim().to_string();
            (name, c[1].trim().to_string(), link)
        }
        None => (rest.trim().to_string(), String::new(), link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_stack_and_url() {
        let entries =
            parse("Budget Tracker | Tech Stack: Rust, Axum https://github.com/jane/budget\n• Tracks spending");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.name, "Budget Tracker");
        assert_eq!(e.tech_stack, "Rust, Axum");
        assert_eq!(e.link, "https://github.com/jane/budget");
        assert_eq!(e.bullets, vec!["Tracks spending"]);
    }

    #[test]
    fn test_literal_github_token_as_link() {
        let entries = parse("Portfolio Site | Tech Stack: React, Node | GitHub\n• Static site");
        let e = &entries[0];
        assert_eq!(e.name, "Portfolio Site");
        assert_eq!(e.tech_stack, "React, Node");
        assert_eq!(e.link, "GitHub");
    }

    #[test]
    fn test_literal_website_token_as_link() {
        let entries = parse("Blog Engine Website");
        assert_eq!(entries[0].link, "Website");
        assert_eq!(entries[0].name, "Blog Engine");
    }

    #[test]
    fn test_no_tech_stack_keeps_whole_text_as_name() {
        let entries = parse("Weather CLI\n• Fetches forecasts");
        let e = &entries[0];
        assert_eq!(e.name, "Weather CLI");
        assert_eq!(e.tech_stack, "");
        assert_eq!(e.link, "");
    }

    #[test]
    fn test_two_projects_with_wrapped_bullets() {
        let body = "Weather CLI\n• Fetches forecasts\nfrom three providers\n\nChat Bot\n• Answers questions";
        let entries = parse(body);
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].bullets,
            vec!["Fetches forecasts from three providers"]
        );
        assert_eq!(entries[1].name, "Chat Bot");
        assert_eq!(entries[1].bullets, vec!["Answers questions"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_projects_preserve_source_order() {
        let names: Vec<String> = parse("Zeta\n• z\n\nAlpha\n• a")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }
}
