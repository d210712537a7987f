//! Personal-info analyzer: summary writing quality and title specificity.

use tracing::debug;

use crate::models::PersonalInfo;
use crate::suggestions::{join_blocks, push_bullets};
use crate::text::{contains_digit, weak_phrases_in, word_count};

const AFFIRMATION: &str = "### Personal info looks great!

Your personal information section is well-structured. Here are some general tips:
- Keep your summary concise (2-3 sentences)
- Highlight your unique value proposition
- Include relevant keywords for your industry";

/// First-person tokens checked as literal substrings, matching how they
/// appear mid-sentence ("I led", "grew my team").
const FIRST_PERSON_TOKENS: &[&str] = &["I ", "my ", "me "];

/// Analyzes the personal-info section and returns Markdown feedback.
pub fn analyze_personal_info(info: &PersonalInfo) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(summary) = info.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        let suggestions = summary_suggestions(summary);
        if !suggestions.is_empty() {
            blocks.push("### Professional Summary".to_string());
            push_bullets(&mut blocks, suggestions);
        }
    }

    if let Some(title) = info.title.as_deref().filter(|t| !t.trim().is_empty()) {
        if word_count(title) < 2 {
            blocks.push("### Professional Title".to_string());
            blocks.push(
                "- Consider making your title more specific (e.g., 'Senior Software Engineer' \
                 instead of 'Engineer')"
                    .to_string(),
            );
        }
    }

    debug!(blocks = blocks.len(), "personal info analyzed");

    if blocks.is_empty() {
        return AFFIRMATION.to_string();
    }
    join_blocks(&blocks)
}

/// Summary heuristics. 20 and 80 words are the firing thresholds; 30-60 is
/// the advised ideal band.
pub(crate) fn summary_suggestions(summary: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    let words = word_count(summary);
    if words < 20 {
        suggestions
            .push("Your summary is quite brief. Aim for 30-60 words to showcase your value.".into());
    } else if words > 80 {
        suggestions.push(
            "Your summary is a bit long. Try to condense it to 30-60 words for better impact."
                .into(),
        );
    }

    let weak_found = weak_phrases_in(summary);
    if !weak_found.is_empty() {
        let shown: Vec<&str> = weak_found.iter().take(2).copied().collect();
        suggestions.push(format!(
            "Avoid passive phrases like: {}. Use action-oriented language instead.",
            shown.join(", ")
        ));
    }

    if !contains_digit(summary) {
        suggestions.push(
            "Add numbers or metrics to quantify your experience (e.g., '5+ years', '20% improvement')."
                .into(),
        );
    }

    if FIRST_PERSON_TOKENS.iter().any(|t| summary.contains(t)) {
        suggestions.push("Write in third person or without pronouns (remove 'I', 'my', 'me').".into());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_summary(summary: &str) -> PersonalInfo {
        PersonalInfo {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            summary: Some(summary.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_brief_summary_flagged() {
        let suggestions = summary_suggestions("Engineer with experience.");
        assert!(suggestions.iter().any(|s| s.contains("quite brief")));
    }

    #[test]
    fn test_long_summary_flagged() {
        let long = "word ".repeat(81);
        let suggestions = summary_suggestions(&long);
        assert!(suggestions.iter().any(|s| s.contains("a bit long")));
    }

    #[test]
    fn test_weak_phrases_reports_at_most_first_two() {
        let summary =
            "Responsible for builds, worked on releases, helped with deploys across many teams.";
        let suggestions = summary_suggestions(&summary.to_string());
        let weak = suggestions
            .iter()
            .find(|s| s.starts_with("Avoid passive phrases"))
            .expect("weak-language suggestion");
        assert!(weak.contains("responsible for"));
        assert!(weak.contains("worked on"));
        assert!(!weak.contains("helped with"));
    }

    #[test]
    fn test_missing_digits_flagged() {
        let suggestions = summary_suggestions(
            "Seasoned engineer delivering large distributed systems across multiple industries \
             with a track record of shipping reliable software platforms",
        );
        assert!(suggestions.iter().any(|s| s.contains("numbers or metrics")));
    }

    #[test]
    fn test_first_person_flagged() {
        let suggestions = summary_suggestions(
            "I build large distributed systems and lead platform teams of 12 engineers \
             delivering critical infrastructure across 3 product lines every single year",
        );
        assert!(suggestions.iter().any(|s| s.contains("third person")));
    }

    #[test]
    fn test_short_title_flagged() {
        let mut info = with_summary(
            "Seasoned engineer with 8+ years delivering distributed systems, platform tooling, \
             and reliability improvements measured at 40% fewer incidents year over year.",
        );
        info.title = Some("Engineer".into());
        let feedback = analyze_personal_info(&info);
        assert!(feedback.contains("Professional Title"));
        assert!(feedback.contains("more specific"));
    }

    #[test]
    fn test_clean_section_returns_affirmation() {
        let mut info = with_summary(
            "Seasoned engineer with 8+ years delivering distributed systems, platform tooling, \
             and reliability improvements measured at 40% fewer incidents year over year.",
        );
        info.title = Some("Senior Software Engineer".into());
        let feedback = analyze_personal_info(&info);
        assert!(feedback.contains("Personal info looks great"));
        assert!(!feedback.is_empty());
    }

    #[test]
    fn test_analyzer_is_idempotent() {
        let info = with_summary("Short summary only.");
        assert_eq!(analyze_personal_info(&info), analyze_personal_info(&info));
    }
}
