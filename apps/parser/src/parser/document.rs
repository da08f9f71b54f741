//! The assembled document: a fixed-shape record with contact fields and
//! an ordered header → content mapping.
//!
//! `ParsedResume` serializes to a single flat JSON object — contact
//! fields first, then one key per section in source order — so the
//! output stays interchangeable with the LLM parsing path's schema.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::parser::education::EducationEntry;
use crate::parser::experience::ExperienceEntry;
use crate::parser::heading::ContactInfo;
use crate::parser::projects::ProjectEntry;

/// Parsed value of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Projects(Vec<ProjectEntry>),
    Bullets(Vec<String>),
    Text(String),
}

/// A fully parsed résumé. Immutable once built; every field is optional
/// from a consumer's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    sections: Vec<(String, SectionContent)>,
}

impl ParsedResume {
    /// Sections in source order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionContent)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a section by its (colon-stripped) header.
    pub fn get(&self, header: &str) -> Option<&SectionContent> {
        self.sections
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v)
    }
}

/// Assembles a `ParsedResume` one section at a time.
#[derive(Debug, Default)]
pub struct ResumeBuilder {
    contact: ContactInfo,
    sections: Vec<(String, SectionContent)>,
}

impl ResumeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    /// Inserts a section. A repeated header keeps its first position but
    /// takes the later content (last-write-wins).
    pub fn section(mut self, header: impl Into<String>, content: SectionContent) -> Self {
        let header = header.into();
        match self.sections.iter_mut().find(|(k, _)| *k == header) {
            Some(existing) => existing.1 = content,
            None => self.sections.push((header, content)),
        }
        self
    }

    pub fn build(self) -> ParsedResume {
        ParsedResume {
            contact: self.contact,
            sections: self.sections,
        }
    }
}

impl Serialize for ParsedResume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(name) = &self.contact.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(email) = &self.contact.email {
            map.serialize_entry("email", email)?;
        }
        if let Some(phone) = &self.contact.phone {
            map.serialize_entry("phone", phone)?;
        }
        if let Some(link) = &self.contact.link {
            map.serialize_entry("link", link)?;
        }
        if let Some(location) = &self.contact.location {
            map.serialize_entry("location", location)?;
        }
        for (header, content) in &self.sections {
            map.serialize_entry(header, content)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> ContactInfo {
        ContactInfo {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            ..ContactInfo::default()
        }
    }

    #[test]
    fn test_builder_preserves_insertion_order() {
        let resume = ResumeBuilder::new()
            .section("EXPERIENCE", SectionContent::Text("a".to_string()))
            .section("EDUCATION", SectionContent::Text("b".to_string()))
            .section("SKILLS", SectionContent::Text("c".to_string()))
            .build();
        let keys: Vec<&str> = resume.sections().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["EXPERIENCE", "EDUCATION", "SKILLS"]);
    }

    #[test]
    fn test_builder_duplicate_header_last_write_wins() {
        let resume = ResumeBuilder::new()
            .section("SKILLS", SectionContent::Text("old".to_string()))
            .section("EDUCATION", SectionContent::Text("x".to_string()))
            .section("SKILLS", SectionContent::Text("new".to_string()))
            .build();
        let keys: Vec<&str> = resume.sections().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["SKILLS", "EDUCATION"]);
        assert_eq!(
            resume.get("SKILLS"),
            Some(&SectionContent::Text("new".to_string()))
        );
    }

    #[test]
    fn test_get_missing_section() {
        assert!(ResumeBuilder::new().build().get("NOPE").is_none());
    }

    #[test]
    fn test_serializes_contact_fields_at_top_level() {
        let resume = ResumeBuilder::new().contact(sample_contact()).build();
        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@x.com");
        assert!(json.get("phone").is_none(), "missing fields are omitted");
    }

    #[test]
    fn test_serialized_key_order_matches_source_order() {
        let resume = ResumeBuilder::new()
            .contact(sample_contact())
            .section(
                "TECHNICAL SKILLS",
                SectionContent::Bullets(vec!["Rust, SQL".to_string()]),
            )
            .section("SUMMARY", SectionContent::Text("prose".to_string()))
            .build();
        let json = serde_json::to_string(&resume).unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let skills_at = json.find("\"TECHNICAL SKILLS\"").unwrap();
        let summary_at = json.find("\"SUMMARY\"").unwrap();
        assert!(name_at < skills_at && skills_at < summary_at);
    }

    #[test]
    fn test_bullets_serialize_as_string_array() {
        let content = SectionContent::Bullets(vec!["Rust, SQL".to_string()]);
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            serde_json::json!(["Rust, SQL"])
        );
    }

    #[test]
    fn test_entries_serialize_untagged() {
        let content = SectionContent::Experience(vec![ExperienceEntry {
            company: "ACME CORP".to_string(),
            ..ExperienceEntry::default()
        }]);
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json[0]["company"], "ACME CORP");
        assert!(json[0].get("Experience").is_none());
    }
}
