pub mod resume;

pub use resume::{
    has_text, CustomSection, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeForm, SkillCategory,
};
