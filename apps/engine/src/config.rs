//! Validation policy configuration.
//!
//! Which fields are hard-required is configuration resolved once at
//! composition time, not a hardcoded rule set. Two presets are provided:
//! `strict` (the default) gates on the full personal-info field set plus
//! education and skills; `lenient` hard-requires only name and email and
//! soft-validates everything else when present.

use serde::{Deserialize, Serialize};

/// Personal-info fields that a policy may mark as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Title,
    Summary,
}

impl PersonalField {
    /// Stable key used in `FieldError::field_name`.
    pub fn key(&self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Title => "title",
            PersonalField::Summary => "summary",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalField::Name => "Full Name",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone Number",
            PersonalField::Location => "Location",
            PersonalField::Title => "Professional Title",
            PersonalField::Summary => "Professional Summary",
        }
    }
}

/// Enumerates which fields and sections are mandatory. Construct once and
/// hand to `Validator::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Personal-info fields that must be present and non-blank.
    pub required_personal: Vec<PersonalField>,
    /// Whether an empty education section is a validation error.
    pub education_required: bool,
    /// Whether an empty skills section is a validation error.
    pub skills_required: bool,
}

impl ValidationPolicy {
    /// Full gating: all six personal fields required, education and skills
    /// sections must be non-empty.
    pub fn strict() -> Self {
        Self {
            required_personal: vec![
                PersonalField::Name,
                PersonalField::Email,
                PersonalField::Phone,
                PersonalField::Location,
                PersonalField::Title,
                PersonalField::Summary,
            ],
            education_required: true,
            skills_required: true,
        }
    }

    /// Minimal gating: only name and email are hard-required; phone and
    /// summary are still format-checked when present. Education and skills
    /// sections may be empty.
    pub fn lenient() -> Self {
        Self {
            required_personal: vec![PersonalField::Name, PersonalField::Email],
            education_required: false,
            skills_required: false,
        }
    }

    pub fn requires(&self, field: PersonalField) -> bool {
        self.required_personal.contains(&field)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
