//! Resume content-quality engine.
//!
//! Two independent, composable components over the same form data model:
//!
//! - [`validation::Validator`] enforces structural and format correctness of
//!   each resume section, batching every violation into a
//!   [`validation::ValidationResult`].
//! - The [`suggestions`] analyzers score content quality against rule-based
//!   writing heuristics and produce Markdown improvement feedback plus a
//!   0-100 strength score.
//!
//! Both are pure, synchronous, and stateless: all state lives in the
//! caller-supplied [`models::ResumeForm`], and the [`lexicon`] reference
//! tables are immutable process-wide constants. Hosts validate a section
//! before persisting it and may invoke the analyzers at any time,
//! independent of validation outcome.

pub mod config;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod suggestions;
pub mod text;
pub mod validation;

pub use config::{PersonalField, ValidationPolicy};
pub use errors::EngineError;
pub use models::ResumeForm;
pub use suggestions::{analyze_overall_resume, ResumeReport, StrengthRating};
pub use validation::{FieldError, ValidationResult, Validator};
