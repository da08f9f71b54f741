//! Heuristic résumé parsing pipeline.
//!
//! Leaf components first: line classification, bullet collection, and
//! segmentation feed the per-section entry parsers, and `assemble` ties
//! the pipeline together.

pub mod assemble;
pub mod bullets;
pub mod document;
pub mod education;
pub mod experience;
pub mod generic;
pub mod heading;
pub mod line;
pub mod projects;
pub mod segment;

pub use assemble::parse_resume;
pub use document::{ParsedResume, ResumeBuilder, SectionContent};
pub use education::EducationEntry;
pub use experience::ExperienceEntry;
pub use heading::ContactInfo;
pub use line::LineClass;
pub use projects::ProjectEntry;
