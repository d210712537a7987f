//! Whole-resume scoring: a deterministic additive rubric over completeness
//! (40), content quality (35), and language quality (25), with fixed rating
//! bands over the total.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::all_action_verbs;
use crate::models::{has_text, ResumeForm};
use crate::text::{metric_mentions, split_bullets, weak_phrases_in};

/// Rating bands over the final score. The thresholds (85/70/50) are part of
/// the engine's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl StrengthRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => StrengthRating::Excellent,
            s if s >= 70 => StrengthRating::Good,
            s if s >= 50 => StrengthRating::Fair,
            _ => StrengthRating::NeedsImprovement,
        }
    }

    fn line(&self) -> &'static str {
        match self {
            StrengthRating::Excellent => "**Excellent** - Your resume is strong and ready!",
            StrengthRating::Good => "**Good** - Minor improvements will make it great",
            StrengthRating::Fair => "**Fair** - Needs some work to stand out",
            StrengthRating::NeedsImprovement => {
                "**Needs Improvement** - Focus on the suggestions below"
            }
        }
    }
}

/// Result of the whole-resume analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub score: u32,
    pub rating: StrengthRating,
    /// Markdown feedback: score header, then the completeness, content, and
    /// language sections in fixed order.
    pub feedback: String,
}

/// Scores the complete resume and assembles the feedback report.
pub fn analyze_overall_resume(form: &ResumeForm) -> ResumeReport {
    let mut score = 0u32;
    let mut sections: Vec<String> = Vec::new();
    let all_text = form.flatten_text();

    // Completeness (max 40)
    sections.push("## Resume Completeness".to_string());
    let mut items: Vec<&str> = Vec::new();

    let has_contact =
        !form.personal.name.trim().is_empty() && !form.personal.email.trim().is_empty();
    if has_contact {
        score += 10;
        items.push("[x] Contact information present");
    } else {
        items.push("[ ] Missing contact information");
    }

    if has_text(&form.personal.summary) {
        score += 10;
        items.push("[x] Professional summary included");
    } else {
        items.push("[ ] Add a professional summary");
    }

    if !form.education.is_empty() {
        score += 10;
        items.push("[x] Education section filled");
    } else {
        items.push("[ ] Add education details");
    }

    if !form.experience.is_empty() {
        score += 10;
        items.push("[x] Work experience included");
    } else {
        items.push("[ ] Add work experience");
    }
    sections.push(items.join("\n"));

    // Content quality (max 35)
    sections.push("\n## Content Quality".to_string());
    let mut items: Vec<String> = Vec::new();

    let total_bullets: usize = form
        .experience
        .iter()
        .map(|exp| split_bullets(&exp.highlights).len())
        .sum();
    if total_bullets >= 6 {
        score += 15;
        items.push(format!(
            "[x] Strong detail level ({total_bullets} achievement bullets)"
        ));
    } else if total_bullets >= 3 {
        score += 10;
        items.push(format!(
            "[~] Good detail, consider adding more achievements ({total_bullets} bullets)"
        ));
    } else {
        items.push("[ ] Add more specific achievements and responsibilities".to_string());
    }

    let numbers_count = metric_mentions(&all_text);
    if numbers_count >= 5 {
        score += 20;
        items.push(format!(
            "[x] Excellent use of metrics ({numbers_count} quantified achievements)"
        ));
    } else if numbers_count >= 2 {
        score += 12;
        items.push(format!(
            "[~] Good metrics usage, add more numbers ({numbers_count} found)"
        ));
    } else {
        items.push("[ ] Add metrics and numbers to quantify your impact".to_string());
    }
    sections.push(items.join("\n"));

    // Language quality (max 25)
    sections.push("\n## Language & Impact".to_string());
    let mut items: Vec<String> = Vec::new();

    let action_verb_count = distinct_action_verbs(&all_text);
    if action_verb_count >= 5 {
        score += 15;
        items.push("[x] Strong use of action verbs".to_string());
    } else if action_verb_count >= 2 {
        score += 8;
        items.push("[~] Add more action verbs to strengthen impact".to_string());
    } else {
        items.push("[ ] Start bullets with action verbs (Led, Developed, Achieved, etc.)".to_string());
    }

    let weak_count = weak_phrases_in(&all_text).len();
    if weak_count == 0 {
        score += 10;
        items.push("[x] No passive language detected".to_string());
    } else {
        score += 5;
        items.push(format!("[~] Remove {weak_count} instances of passive phrases"));
    }
    sections.push(items.join("\n"));

    let rating = StrengthRating::from_score(score);
    debug!(score, rating = ?rating, "overall resume scored");

    let header = format!(
        "# Resume Strength Analysis\n\n## Overall Score: {score}/100\n{}\n\n",
        rating.line()
    );

    ResumeReport {
        score,
        rating,
        feedback: header + &sections.join("\n"),
    }
}

/// Number of distinct lexicon verbs appearing anywhere in the text,
/// case-insensitive. Verbs listed in two categories count once.
fn distinct_action_verbs(text: &str) -> usize {
    let lower = text.to_lowercase();
    all_action_verbs()
        .map(|verb| verb.to_lowercase())
        .filter(|verb| lower.contains(verb.as_str()))
        .collect::<BTreeSet<_>>()
        .len()
}
