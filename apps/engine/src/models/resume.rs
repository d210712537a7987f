//! Resume form data model.
//!
//! Plain value records with no hidden state. The host UI owns the
//! accumulated form; the engine only reads it. Shape checking happens here,
//! at the JSON boundary, so the validator and analyzers can assume the
//! declared shapes throughout.

use serde::{Deserialize, Serialize};

use crate::config::PersonalField;
use crate::errors::EngineError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// Field value by policy key; optional fields read as "" when unset.
    pub fn field_text(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => self.phone.as_deref().unwrap_or(""),
            PersonalField::Location => self.location.as_deref().unwrap_or(""),
            PersonalField::Title => self.title.as_deref().unwrap_or(""),
            PersonalField::Summary => self.summary.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    /// Field of study; the form stores it under the key "field".
    #[serde(default, rename = "field")]
    pub field_of_study: String,
    /// ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    /// Newline-delimited bullet list.
    #[serde(default)]
    pub highlights: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Newline-delimited bullet list.
    #[serde(default)]
    pub highlights: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// One skill group: a category name plus a comma-separated items string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub items: String,
}

/// User-defined section (certifications, awards, publications, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// The accumulated form state across all wizard steps. Personal-info fields
/// sit at the top level of the JSON object, matching the host's merged
/// form dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeForm {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub custom_sections: Vec<CustomSection>,
}

impl ResumeForm {
    /// Parses a form from its JSON representation, rejecting payloads that
    /// do not match the declared shapes.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Deterministic concatenation of every text field, in fixed field
    /// order. The whole-resume scans (metric counting, action-verb and
    /// weak-phrase detection, industry detection) run over this.
    pub fn flatten_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let p = &self.personal;
        parts.push(&p.name);
        parts.push(&p.email);
        for opt in [
            &p.phone, &p.location, &p.title, &p.website, &p.linkedin, &p.github, &p.summary,
        ] {
            if let Some(value) = opt {
                parts.push(value);
            }
        }
        for edu in &self.education {
            parts.push(&edu.institution);
            parts.push(&edu.degree);
            parts.push(&edu.field_of_study);
            for opt in [&edu.start_date, &edu.end_date, &edu.gpa] {
                if let Some(value) = opt {
                    parts.push(value);
                }
            }
            parts.push(&edu.highlights);
        }
        for exp in &self.experience {
            parts.push(&exp.company);
            parts.push(&exp.position);
            for opt in [&exp.location, &exp.start_date, &exp.end_date] {
                if let Some(value) = opt {
                    parts.push(value);
                }
            }
            parts.push(&exp.highlights);
        }
        for proj in &self.projects {
            parts.push(&proj.name);
            for opt in [&proj.date, &proj.url] {
                if let Some(value) = opt {
                    parts.push(value);
                }
            }
            parts.push(&proj.description);
        }
        for skill in &self.skills {
            parts.push(&skill.category);
            parts.push(&skill.items);
        }
        for section in &self.custom_sections {
            parts.push(&section.title);
            parts.push(&section.content);
        }
        parts.retain(|s| !s.is_empty());
        parts.join("\n")
    }
}

/// True when an optional field carries non-blank text.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}
