//! Experience analyzer and the highlight-bullet heuristics.
//!
//! The bullet analyzer is the core of the engine: leading-action-verb,
//! quantification, and weak-language tallies over the newline-delimited
//! bullet list. The verb and digit suggestions use a strictly-more-than-half
//! threshold, so a list where exactly half the bullets fall short does not
//! fire them.

use tracing::debug;

use crate::lexicon::{is_action_verb, TECHNICAL_VERBS};
use crate::models::ExperienceEntry;
use crate::suggestions::{join_blocks, push_bullets};
use crate::text::{contains_digit, contains_weak_phrase, leading_word, split_bullets, weak_phrases_in, word_count};

const EMPTY_GUIDANCE: &str = "Add work experience to showcase your professional background.";

const AFFIRMATION: &str = "### Experience section is strong!\n\nYour work experience is \
well-documented with achievements.";

/// Analyzes experience entries and returns Markdown feedback.
pub fn analyze_experience(entries: &[ExperienceEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_GUIDANCE.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let highlights = entry.highlights.trim();

        if highlights.is_empty() {
            let position = if entry.position.trim().is_empty() {
                "Entry"
            } else {
                entry.position.as_str()
            };
            blocks.push(format!("### Experience #{}: {position}", i + 1));
            blocks.push("- Add key achievements and responsibilities".to_string());
            continue;
        }

        let entry_suggestions = analyze_highlights(highlights);
        if !entry_suggestions.is_empty() {
            let position = if entry.position.trim().is_empty() {
                "Position"
            } else {
                entry.position.as_str()
            };
            let company = if entry.company.trim().is_empty() {
                "Company"
            } else {
                entry.company.as_str()
            };
            blocks.push(format!("### {position} at {company}"));
            push_bullets(&mut blocks, entry_suggestions);
        }
    }

    debug!(entries = entries.len(), blocks = blocks.len(), "experience analyzed");

    if blocks.is_empty() {
        return AFFIRMATION.to_string();
    }
    join_blocks(&blocks)
}

/// Analyzes one newline-delimited highlight list and returns the fired
/// suggestions (possibly empty).
pub fn analyze_highlights(highlights: &str) -> Vec<String> {
    let bullets = split_bullets(highlights);
    let mut suggestions = Vec::new();

    if bullets.len() < 2 {
        suggestions.push("Add more bullet points (aim for 3-5 key achievements)".to_string());
    } else if bullets.len() > 6 {
        suggestions.push("Consider condensing to 4-6 most impactful achievements".to_string());
    }

    let mut without_action_verb = 0usize;
    let mut without_numbers = 0usize;
    let mut with_weak_language = 0usize;

    for bullet in &bullets {
        let starts_with_verb = leading_word(bullet).is_some_and(is_action_verb);
        if !starts_with_verb {
            without_action_verb += 1;
        }
        if !contains_digit(bullet) {
            without_numbers += 1;
        }
        if contains_weak_phrase(bullet) {
            with_weak_language += 1;
        }
    }

    // Strictly more than half; exactly half does not fire.
    if 2 * without_action_verb > bullets.len() {
        let examples: Vec<&str> = TECHNICAL_VERBS.iter().take(3).copied().collect();
        suggestions.push(format!(
            "Start more bullets with strong action verbs (e.g., {})",
            examples.join(", ")
        ));
    }

    if 2 * without_numbers > bullets.len() {
        suggestions.push(
            "Add metrics and numbers to quantify your impact (e.g., 'Increased efficiency by 30%')"
                .to_string(),
        );
    }

    if with_weak_language > 0 {
        suggestions.push(
            "Remove passive phrases like 'responsible for' - be direct and action-oriented"
                .to_string(),
        );
    }

    suggestions
}

/// Single-bullet advisory used while the user is drafting one achievement
/// line, before it joins a highlight list.
pub fn suggest_bullet_improvements(text: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    if text.trim().is_empty() {
        return suggestions;
    }

    if let Some(phrase) = weak_phrases_in(text).first() {
        suggestions.push(format!(
            "Replace '{phrase}' with a direct action verb that shows ownership"
        ));
    }

    if !contains_digit(text) {
        suggestions.push("Add metrics or numbers to quantify your impact".to_string());
    }

    let words = word_count(text);
    if words < 5 {
        suggestions.push("Provide more detail about your achievements".to_string());
    } else if words > 30 {
        suggestions.push("Consider making this more concise".to_string());
    }

    if let Some(first) = leading_word(text) {
        if !is_action_verb(first) {
            suggestions.push(format!(
                "Start with an action verb (e.g., {})",
                TECHNICAL_VERBS[0]
            ));
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_bullets_prompts_more() {
        let suggestions = analyze_highlights("Led team of 5");
        assert!(suggestions.iter().any(|s| s.contains("Add more bullet points")));
    }

    #[test]
    fn test_many_bullets_prompts_condensing() {
        let highlights = (0..7)
            .map(|i| format!("Led initiative {i} with 10% gains"))
            .collect::<Vec<_>>()
            .join("\n");
        let suggestions = analyze_highlights(&highlights);
        assert!(suggestions.iter().any(|s| s.contains("condensing to 4-6")));
    }

    #[test]
    fn test_exactly_half_boundary_does_not_fire() {
        // 2 bullets: one starts with an action verb and has a digit, the
        // other does neither and carries a weak phrase. Exactly half lacking
        // is not strictly more than half, so only the weak-language
        // suggestion may fire.
        let suggestions = analyze_highlights("Led team of 5\nHelped with launch");
        assert_eq!(suggestions.len(), 1, "got: {suggestions:?}");
        assert!(suggestions[0].contains("passive phrases"));
    }

    #[test]
    fn test_majority_without_verbs_fires_with_examples() {
        let suggestions =
            analyze_highlights("Helped the team ship 3 things\nSaw 20% growth\nKept 5 systems running");
        let verb = suggestions
            .iter()
            .find(|s| s.contains("action verbs"))
            .expect("verb suggestion");
        assert!(verb.contains("Developed, Engineered, Programmed"));
    }

    #[test]
    fn test_majority_without_numbers_fires() {
        let suggestions =
            analyze_highlights("Led the platform team\nBuilt the deploy tooling\nManaged rollouts");
        assert!(suggestions.iter().any(|s| s.contains("quantify your impact")));
    }

    #[test]
    fn test_weak_language_fires_once() {
        let suggestions = analyze_highlights(
            "Led 3 teams, responsible for delivery\nBuilt 5 services, worked on scaling\nManaged 10 rollouts",
        );
        let weak: Vec<_> = suggestions
            .iter()
            .filter(|s| s.contains("passive phrases"))
            .collect();
        assert_eq!(weak.len(), 1);
    }

    #[test]
    fn test_strong_highlights_produce_no_suggestions() {
        let suggestions = analyze_highlights(
            "Led migration of 12 services\nBuilt pipeline serving 30+ engineers\nOptimized latency by 35%",
        );
        assert!(suggestions.is_empty(), "got: {suggestions:?}");
    }

    #[test]
    fn test_punctuation_stripped_from_leading_word() {
        // "Led," still counts as a leading action verb.
        let suggestions = analyze_highlights("Led, with 20% gains\nBuilt 3 services\nManaged 4 teams");
        assert!(suggestions.is_empty(), "got: {suggestions:?}");
    }

    #[test]
    fn test_empty_entries_guidance() {
        assert!(analyze_experience(&[]).contains("Add work experience"));
    }

    #[test]
    fn test_entry_without_highlights_gets_direct_prompt() {
        let entries = vec![ExperienceEntry {
            company: "Acme".into(),
            position: "Engineer".into(),
            ..Default::default()
        }];
        let feedback = analyze_experience(&entries);
        assert!(feedback.contains("### Experience #1: Engineer"));
        assert!(feedback.contains("Add key achievements"));
    }

    #[test]
    fn test_entry_heading_names_position_and_company() {
        let entries = vec![ExperienceEntry {
            company: "Acme".into(),
            position: "Engineer".into(),
            highlights: "Did some things".into(),
            ..Default::default()
        }];
        let feedback = analyze_experience(&entries);
        assert!(feedback.contains("### Engineer at Acme"));
    }

    #[test]
    fn test_strong_entries_return_affirmation() {
        let entries = vec![ExperienceEntry {
            company: "Acme".into(),
            position: "Engineer".into(),
            highlights: "Led migration of 12 services\nBuilt pipeline serving 30+ engineers\nOptimized latency by 35%"
                .into(),
            ..Default::default()
        }];
        assert!(analyze_experience(&entries).contains("Experience section is strong"));
    }

    #[test]
    fn test_single_bullet_advisory() {
        let suggestions = suggest_bullet_improvements("Helped with the platform");
        assert!(suggestions.iter().any(|s| s.contains("helped with")));
        assert!(suggestions.iter().any(|s| s.contains("metrics or numbers")));
        assert!(suggestions.iter().any(|s| s.contains("Start with an action verb")));
    }

    #[test]
    fn test_single_bullet_advisory_clean() {
        assert!(suggest_bullet_improvements("Led migration of 12 services to Kubernetes").is_empty());
        assert!(suggest_bullet_improvements("   ").is_empty());
    }
}
