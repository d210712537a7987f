//! Industry detection and industry-specific guidance.
//!
//! Detection counts keyword hits per category over the flattened form text.
//! The highest count wins; ties go to the first-declared category, and an
//! all-zero scan yields "general". Always returns a category *name*, never a
//! raw count.

use tracing::debug;

use crate::lexicon::INDUSTRY_KEYWORDS;
use crate::models::ResumeForm;

pub const GENERAL_INDUSTRY: &str = "general";

/// Detects the likely industry from the accumulated form data.
pub fn detect_industry(form: &ResumeForm) -> &'static str {
    let text = form.flatten_text().to_lowercase();

    let mut best: (&'static str, usize) = (GENERAL_INDUSTRY, 0);
    for (industry, keywords) in INDUSTRY_KEYWORDS.iter().copied() {
        let hits = keywords
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();
        // Strict comparison keeps the first-declared category on ties.
        if hits > best.1 {
            best = (industry, hits);
        }
    }

    debug!(industry = best.0, hits = best.1, "industry detected");
    best.0
}

/// Distinct industry keywords found in free text, in lexicon order.
pub fn extract_skills_from_text(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found = Vec::new();
    for (_, keywords) in INDUSTRY_KEYWORDS {
        for keyword in *keywords {
            if lower.contains(&keyword.to_lowercase()) && !found.contains(keyword) {
                found.push(*keyword);
            }
        }
    }
    found
}

/// Static tip block for an industry; unknown names fall back to the general
/// tips rather than erroring.
pub fn industry_tips(industry: &str) -> &'static str {
    match industry {
        "software" => SOFTWARE_TIPS,
        "data" => DATA_TIPS,
        "product" => PRODUCT_TIPS,
        "marketing" => MARKETING_TIPS,
        _ => GENERAL_TIPS,
    }
}

const SOFTWARE_TIPS: &str = "### Software Engineering Tips
- Highlight specific technologies and frameworks
- Include GitHub/portfolio links
- Mention agile/scrum experience
- Quantify code improvements (performance, efficiency)
- Showcase side projects and open source contributions";

const DATA_TIPS: &str = "### Data Science/Analytics Tips
- Emphasize statistical methods and ML algorithms
- Mention tools: Python, R, SQL, Tableau, etc.
- Quantify insights and business impact
- Include relevant publications or research
- Showcase data visualization skills";

const PRODUCT_TIPS: &str = "### Product Management Tips
- Focus on user impact and business metrics
- Highlight cross-functional collaboration
- Mention product launches and roadmap planning
- Include A/B testing and data-driven decisions
- Showcase stakeholder management skills";

const MARKETING_TIPS: &str = "### Marketing Tips
- Quantify campaign performance (ROI, conversion rates)
- Highlight multi-channel experience
- Mention analytics tools and metrics
- Showcase content creation and strategy
- Include growth and engagement metrics";

const GENERAL_TIPS: &str = "### General Resume Tips
- Use action verbs to start each bullet
- Quantify achievements with numbers
- Keep format clean and consistent
- Tailor content to job descriptions
- Proofread for errors";
