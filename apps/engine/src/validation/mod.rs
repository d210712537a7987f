//! Structural and format validation for each resume section.
//!
//! Pure, side-effect-free checks. Every rule runs regardless of earlier
//! failures so a single submission surfaces all of its problems at once;
//! violations come back as a batched `ValidationResult`, never as an error
//! return.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{PersonalField, ValidationPolicy};
use crate::models::{has_text, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillCategory};
use crate::text::word_count;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// One violated rule. Batched, not exception-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating one section. Invariant: `is_valid` is true exactly
/// when `errors` is empty; the constructor enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }
}

/// Section validator, configured once with a `ValidationPolicy` at
/// composition time.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validates the personal-info section. Required-field presence comes
    /// from the policy; format rules (email shape, phone digits, summary
    /// length) apply to any non-blank value whether or not it is required.
    pub fn validate_personal_info(&self, info: &PersonalInfo) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.policy.required_personal {
            if info.field_text(*field).trim().is_empty() {
                errors.push(FieldError::new(
                    field.key(),
                    format!("{} is required.", field.label()),
                ));
            }
        }

        let email = info.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(FieldError::new(
                "email",
                "Invalid email format (e.g., user@example.com).",
            ));
        }

        if has_text(&info.phone) {
            let phone = info.phone.as_deref().unwrap_or("");
            if !is_valid_phone(phone) {
                errors.push(FieldError::new(
                    "phone",
                    "Phone must contain 10-15 digits (numbers only).",
                ));
            }
        }

        if has_text(&info.summary) {
            let summary = info.summary.as_deref().unwrap_or("");
            if word_count(summary) < 5 {
                errors.push(FieldError::new(
                    "summary",
                    "Summary is too short (min 5 words).",
                ));
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Validates education entries. Emptiness is gated by the policy; each
    /// entry needs institution and degree, and a coherent date range.
    pub fn validate_education(&self, entries: &[EducationEntry]) -> ValidationResult {
        if entries.is_empty() {
            if self.policy.education_required {
                return ValidationResult::from_errors(vec![FieldError::new(
                    "education",
                    "At least one education entry is required.",
                )]);
            }
            return ValidationResult::valid();
        }

        let mut errors = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.institution.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("edu_inst_{i}"),
                    format!("Entry #{}: Institution is required.", i + 1),
                ));
            }
            if entry.degree.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("edu_degree_{i}"),
                    format!("Entry #{}: Degree is required.", i + 1),
                ));
            }
            if let Some(error) = check_date_order(&entry.start_date, &entry.end_date, "edu_end", i) {
                errors.push(error);
            }
        }
        ValidationResult::from_errors(errors)
    }

    /// Validates experience entries. An empty list is always invalid:
    /// experience is the one mandatory section under every policy.
    pub fn validate_experience(&self, entries: &[ExperienceEntry]) -> ValidationResult {
        if entries.is_empty() {
            return ValidationResult::from_errors(vec![FieldError::new(
                "experience",
                "At least one work experience entry is required.",
            )]);
        }

        let mut errors = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.company.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("exp_company_{i}"),
                    format!("Entry #{}: Company is required.", i + 1),
                ));
            }
            if entry.position.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("exp_position_{i}"),
                    format!("Entry #{}: Position is required.", i + 1),
                ));
            }
            if let Some(error) = check_date_order(&entry.start_date, &entry.end_date, "exp_end", i) {
                errors.push(error);
            }
        }
        ValidationResult::from_errors(errors)
    }

    /// Validates project entries. The section is fully optional; each listed
    /// entry only needs a name.
    pub fn validate_projects(&self, entries: &[ProjectEntry]) -> ValidationResult {
        let mut errors = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("proj_name_{i}"),
                    format!("Project #{}: Name is required.", i + 1),
                ));
            }
        }
        ValidationResult::from_errors(errors)
    }

    /// Validates skill categories; emptiness is gated by the policy.
    pub fn validate_skills(&self, entries: &[SkillCategory]) -> ValidationResult {
        if entries.is_empty() && self.policy.skills_required {
            return ValidationResult::from_errors(vec![FieldError::new(
                "skills",
                "Please add at least one skill category.",
            )]);
        }
        ValidationResult::valid()
    }
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strips spacing and phone punctuation; the remainder must be all digits,
/// 10 to 15 of them.
fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '+'))
        .collect();
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Emits a date-order error when both dates are present and start >= end.
/// Well-formed ISO dates are compared as dates; anything else falls back to
/// a lexicographic comparison, which is order-equivalent for ISO strings.
fn check_date_order(
    start: &Option<String>,
    end: &Option<String>,
    key_prefix: &str,
    index: usize,
) -> Option<FieldError> {
    let (start, end) = match (start.as_deref(), end.as_deref()) {
        (Some(s), Some(e)) if !s.trim().is_empty() && !e.trim().is_empty() => (s.trim(), e.trim()),
        _ => return None,
    };

    let out_of_order = match (parse_iso_date(start), parse_iso_date(end)) {
        (Some(s), Some(e)) => s >= e,
        _ => start >= end,
    };

    out_of_order.then(|| {
        FieldError::new(
            format!("{key_prefix}_{index}"),
            format!("Entry #{}: End date must be after start date.", index + 1),
        )
    })
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
