//! Education analyzer: GPA and achievement-detail prompts per entry.

use tracing::debug;

use crate::models::EducationEntry;
use crate::suggestions::{join_blocks, push_bullets};

const EMPTY_GUIDANCE: &str = "Education is optional. Include it if you are early in your career \
or the degree is relevant to the role you are targeting.";

const AFFIRMATION: &str =
    "### Education section looks strong!\n\nYour education entries are well-detailed.";

/// Analyzes education entries and returns Markdown feedback.
pub fn analyze_education(entries: &[EducationEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_GUIDANCE.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let mut entry_suggestions: Vec<String> = Vec::new();

        // Advisory only: the GPA field is free text, so this fires whenever
        // it is blank rather than attempting a numeric comparison.
        if entry.gpa.as_deref().map_or(true, |g| g.trim().is_empty()) {
            entry_suggestions.push("Consider adding GPA if it's 3.5 or above".into());
        }

        let highlights = entry.highlights.trim();
        if highlights.is_empty() {
            entry_suggestions.push("Add relevant achievements, honors, or coursework".into());
        } else if highlights.lines().count() < 2 {
            entry_suggestions
                .push("Add more specific achievements (awards, projects, relevant coursework)".into());
        }

        if !entry_suggestions.is_empty() {
            let degree = if entry.degree.trim().is_empty() {
                "Entry"
            } else {
                entry.degree.as_str()
            };
            blocks.push(format!("### Education #{}: {degree}", i + 1));
            push_bullets(&mut blocks, entry_suggestions);
        }
    }

    debug!(entries = entries.len(), blocks = blocks.len(), "education analyzed");

    if blocks.is_empty() {
        return AFFIRMATION.to_string();
    }
    join_blocks(&blocks)
}
