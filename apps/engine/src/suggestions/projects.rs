//! Projects analyzer: description depth, public URL, and technology mentions.

use tracing::debug;

use crate::lexicon::INDUSTRY_KEYWORDS;
use crate::models::ProjectEntry;
use crate::suggestions::{join_blocks, push_bullets};
use crate::text::word_count;

const EMPTY_GUIDANCE: &str =
    "Projects are optional but can strengthen your resume, especially for technical roles.";

const AFFIRMATION: &str = "### Projects section looks great!\n\nYour projects are well-documented.";

/// Analyzes project entries and returns Markdown feedback.
pub fn analyze_projects(entries: &[ProjectEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_GUIDANCE.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let mut entry_suggestions: Vec<String> = Vec::new();
        let description = entry.description.trim();

        if description.is_empty() {
            entry_suggestions.push("Add a description of the project and your contributions".into());
        } else if word_count(description) < 10 {
            entry_suggestions.push("Expand description to include technologies used and impact".into());
        }

        if entry.url.as_deref().map_or(true, |u| u.trim().is_empty()) {
            entry_suggestions
                .push("Add a URL if the project is publicly available (GitHub, live demo, etc.)".into());
        }

        if !description.is_empty() && !mentions_industry_keyword(description) {
            entry_suggestions.push("Mention specific technologies or skills used".into());
        }

        if !entry_suggestions.is_empty() {
            let name = if entry.name.trim().is_empty() {
                "Entry"
            } else {
                entry.name.as_str()
            };
            blocks.push(format!("### Project #{}: {name}", i + 1));
            push_bullets(&mut blocks, entry_suggestions);
        }
    }

    debug!(entries = entries.len(), blocks = blocks.len(), "projects analyzed");

    if blocks.is_empty() {
        return AFFIRMATION.to_string();
    }
    join_blocks(&blocks)
}

/// Any keyword from any industry category, case-insensitive.
fn mentions_industry_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter())
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, description: &str, url: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            name: name.into(),
            description: description.into(),
            url: url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_returns_optional_guidance() {
        assert!(analyze_projects(&[]).contains("optional"));
    }

    #[test]
    fn test_missing_description_prompts() {
        let feedback = analyze_projects(&[project("Shop", "", Some("github.com/x/shop"))]);
        assert!(feedback.contains("Add a description"));
    }

    #[test]
    fn test_short_description_prompts_expansion() {
        let feedback =
            analyze_projects(&[project("Shop", "A small online shop", Some("github.com/x/shop"))]);
        assert!(feedback.contains("Expand description"));
    }

    #[test]
    fn test_missing_url_prompts() {
        let feedback = analyze_projects(&[project(
            "Shop",
            "Full-stack e-commerce platform with docker deployment and cloud hosting for thousands",
            None,
        )]);
        assert!(feedback.contains("Add a URL"));
    }

    #[test]
    fn test_description_without_keywords_prompts_technologies() {
        let feedback = analyze_projects(&[project(
            "Shop",
            "A storefront people can browse and buy things from with a cart and checkout",
            Some("github.com/x/shop"),
        )]);
        assert!(feedback.contains("specific technologies"));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let feedback = analyze_projects(&[project(
            "Shop",
            "E-commerce platform exposing a REST api behind Docker, deployed to managed cloud hosting",
            Some("github.com/x/shop"),
        )]);
        assert!(!feedback.contains("specific technologies"));
    }

    #[test]
    fn test_complete_project_returns_affirmation() {
        let feedback = analyze_projects(&[project(
            "Shop",
            "Full-stack e-commerce platform using docker and kubernetes with automated testing and cloud deployment",
            Some("github.com/x/shop"),
        )]);
        assert!(feedback.contains("looks great"));
    }

    #[test]
    fn test_heading_names_project_and_index() {
        let feedback = analyze_projects(&[project("Shop", "", None)]);
        assert!(feedback.contains("### Project #1: Shop"));
    }
}
