//! Static reference lexicon: action verbs by category, weak-language phrases,
//! and industry keyword sets.
//!
//! Loaded once as process-wide constants; nothing in the engine mutates these
//! tables. Lookups never fail: unknown verb categories fall back to
//! `technical`, unknown industries fall back to `general`.

pub const LEADERSHIP_VERBS: &[&str] = &[
    "Led",
    "Directed",
    "Managed",
    "Supervised",
    "Coordinated",
    "Orchestrated",
    "Spearheaded",
    "Mentored",
    "Guided",
    "Facilitated",
];

pub const TECHNICAL_VERBS: &[&str] = &[
    "Developed",
    "Engineered",
    "Programmed",
    "Designed",
    "Architected",
    "Built",
    "Implemented",
    "Coded",
    "Debugged",
    "Optimized",
];

pub const ANALYTICAL_VERBS: &[&str] = &[
    "Analyzed",
    "Evaluated",
    "Assessed",
    "Investigated",
    "Researched",
    "Examined",
    "Audited",
    "Measured",
    "Calculated",
    "Forecasted",
];

pub const CREATIVE_VERBS: &[&str] = &[
    "Designed",
    "Created",
    "Conceptualized",
    "Innovated",
    "Invented",
    "Crafted",
    "Produced",
    "Authored",
    "Illustrated",
    "Composed",
];

pub const IMPROVEMENT_VERBS: &[&str] = &[
    "Improved",
    "Enhanced",
    "Optimized",
    "Streamlined",
    "Upgraded",
    "Revamped",
    "Transformed",
    "Modernized",
    "Automated",
    "Refined",
];

pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "Achieved",
    "Accomplished",
    "Delivered",
    "Exceeded",
    "Surpassed",
    "Attained",
    "Completed",
    "Earned",
    "Won",
    "Secured",
];

/// Action verb categories in declaration order. A few verbs (e.g. "Designed",
/// "Optimized") legitimately appear in two categories.
pub const ACTION_VERBS: &[(&str, &[&str])] = &[
    ("leadership", LEADERSHIP_VERBS),
    ("technical", TECHNICAL_VERBS),
    ("analytical", ANALYTICAL_VERBS),
    ("creative", CREATIVE_VERBS),
    ("improvement", IMPROVEMENT_VERBS),
    ("achievement", ACHIEVEMENT_VERBS),
];

/// Passive or non-committal phrases that reduce resume impact.
/// Matched case-insensitively as substrings.
pub const WEAK_WORDS: &[&str] = &[
    "responsible for",
    "duties included",
    "worked on",
    "helped with",
    "assisted with",
    "participated in",
    "involved in",
    "was part of",
];

/// Industry keyword sets in declaration order. Declaration order is the
/// tie-break for industry detection: the first category with the highest hit
/// count wins.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software",
        &[
            "agile",
            "scrum",
            "CI/CD",
            "microservices",
            "API",
            "cloud",
            "testing",
            "deployment",
            "DevOps",
            "git",
            "docker",
            "kubernetes",
        ],
    ),
    (
        "data",
        &[
            "machine learning",
            "data analysis",
            "SQL",
            "Python",
            "statistics",
            "visualization",
            "ETL",
            "big data",
            "ML models",
            "algorithms",
        ],
    ),
    (
        "product",
        &[
            "roadmap",
            "stakeholders",
            "user research",
            "product strategy",
            "metrics",
            "A/B testing",
            "KPIs",
            "market analysis",
            "user stories",
        ],
    ),
    (
        "marketing",
        &[
            "campaigns",
            "ROI",
            "analytics",
            "SEO",
            "content strategy",
            "social media",
            "conversion",
            "engagement",
            "branding",
            "growth",
        ],
    ),
];

/// Returns the verb list for a category, falling back to `technical` for
/// unknown category names rather than erroring.
pub fn verbs_for_category(category: &str) -> &'static [&'static str] {
    ACTION_VERBS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, verbs)| *verbs)
        .unwrap_or(TECHNICAL_VERBS)
}

/// Iterates every verb across all categories (duplicates included, in
/// declaration order).
pub fn all_action_verbs() -> impl Iterator<Item = &'static str> {
    ACTION_VERBS.iter().flat_map(|(_, verbs)| verbs.iter().copied())
}

/// Exact (case-sensitive) membership test against the full verb vocabulary.
/// Bullets are expected to start with the capitalized form.
pub fn is_action_verb(word: &str) -> bool {
    all_action_verbs().any(|v| v == word)
}
