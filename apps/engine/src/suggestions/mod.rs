//! Content-quality suggestion engine.
//!
//! Each analyzer is a pure function of the form data: it decides which
//! heuristic suggestions fire and assembles them into Markdown feedback.
//! A section that produces zero suggestions returns a fixed affirmation
//! block, so callers always receive non-empty guidance text. Advisory only:
//! analyzers never block progression and run independently of validation.

pub mod education;
pub mod experience;
pub mod industry;
pub mod overall;
pub mod personal;
pub mod projects;

pub use education::analyze_education;
pub use experience::{analyze_experience, analyze_highlights, suggest_bullet_improvements};
pub use industry::{detect_industry, extract_skills_from_text, industry_tips};
pub use overall::{analyze_overall_resume, ResumeReport, StrengthRating};
pub use personal::analyze_personal_info;
pub use projects::analyze_projects;

/// Joins heading and bullet blocks into one Markdown document.
pub(crate) fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n\n")
}

/// Renders a suggestion list as Markdown bullet lines.
pub(crate) fn push_bullets(blocks: &mut Vec<String>, suggestions: Vec<String>) {
    for suggestion in suggestions {
        blocks.push(format!("- {suggestion}"));
    }
}
