//! Pipeline orchestration: segment, extract contact fields, route each
//! section to its parser, assemble the final document.

use tracing::debug;

use crate::parser::document::{ParsedResume, ResumeBuilder, SectionContent};
use crate::parser::{education, experience, generic, heading, projects, segment};

/// Parses raw résumé text into a structured document.
///
/// Pure and infallible: malformed input degrades to a sparser document,
/// never an error. Identical input always yields identical output.
pub fn parse_resume(text: &str) -> ParsedResume {
    let (heading_block, sections) = segment::segment(text);
    let contact = heading::extract(&heading_block);
    debug!(
        sections = sections.len(),
        heading_bytes = heading_block.len(),
        "segmented resume text"
    );

    let mut builder = ResumeBuilder::new().contact(contact);
    for (header, body) in sections {
        let content = route(&header, &body);
        builder = builder.section(header, content);
    }
    builder.build()
}

/// Deterministic routing by header prefix.
fn route(header: &str, body: &str) -> SectionContent {
    if header.starts_with("EXPERIENCE") {
        SectionContent::Experience(experience::parse(body))
    } else if header.starts_with("TECHNICAL PROJECTS") {
        SectionContent::Projects(projects::parse(body))
    } else if header.starts_with("EDUCATION") {
        SectionContent::Education(education::parse(body))
    } else {
        generic::parse(body)
    }
}
