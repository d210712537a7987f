//! CLI driver: reads a resume form as JSON, runs full validation, and prints
//! the suggestion and strength-analysis report.
//!
//! This is the host-application side of the library contract; the engine
//! itself stays an in-process library.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_engine::suggestions::{
    analyze_education, analyze_experience, analyze_overall_resume, analyze_personal_info,
    analyze_projects, detect_industry, industry_tips,
};
use resume_engine::{ResumeForm, ValidationPolicy, ValidationResult, Validator};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: resume-engine <resume.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let form = ResumeForm::from_json(&raw)?;
    info!(%path, "resume form loaded");

    let validator = Validator::new(ValidationPolicy::lenient());
    let mut all_valid = true;
    for (section, result) in [
        ("personal info", validator.validate_personal_info(&form.personal)),
        ("education", validator.validate_education(&form.education)),
        ("experience", validator.validate_experience(&form.experience)),
        ("projects", validator.validate_projects(&form.projects)),
        ("skills", validator.validate_skills(&form.skills)),
    ] {
        print_validation(section, &result);
        all_valid &= result.is_valid;
    }
    info!(all_valid, "validation complete");

    println!("\n--- Section suggestions ---\n");
    println!("{}\n", analyze_personal_info(&form.personal));
    println!("{}\n", analyze_education(&form.education));
    println!("{}\n", analyze_experience(&form.experience));
    println!("{}\n", analyze_projects(&form.projects));

    let report = analyze_overall_resume(&form);
    println!("--- Strength analysis ---\n");
    println!("{}\n", report.feedback);

    let industry = detect_industry(&form);
    info!(industry, score = report.score, "analysis complete");
    println!("{}", industry_tips(industry));

    Ok(())
}

fn print_validation(section: &str, result: &ValidationResult) {
    if result.is_valid {
        println!("{section}: ok");
    } else {
        println!("{section}: {} problem(s)", result.errors.len());
        for error in &result.errors {
            println!("  - {}", error.message);
        }
    }
}
