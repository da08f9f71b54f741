//! Heuristic résumé parser.
//!
//! Converts already-extracted plain résumé text into a structured,
//! hierarchical document: a contact block plus named sections holding
//! free text, a flat bullet list, or typed entries (jobs, degrees,
//! projects). The core is a pure, deterministic line-classification
//! engine — tolerant of wrapped bullets, multi-line headers, and
//! ambiguous date ranges — that degrades gracefully instead of erroring.

pub mod config;
pub mod errors;
pub mod extract;
pub mod parser;
pub mod persist;

pub use errors::ResumeError;
pub use parser::{
    parse_resume, ContactInfo, EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry,
    SectionContent,
};
