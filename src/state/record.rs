//! The application record collected by the form

use serde::{Deserialize, Serialize};

/// Highest education level reached by the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationLevel {
    #[default]
    NoFormalEducation,
    HighSchoolDiploma,
    BachelorsDegree,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 3] = [
        EducationLevel::NoFormalEducation,
        EducationLevel::HighSchoolDiploma,
        EducationLevel::BachelorsDegree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoFormalEducation => "No Formal Education",
            Self::HighSchoolDiploma => "High School Diploma",
            Self::BachelorsDegree => "Bachelor's Degree",
        }
    }

    /// Next level in display order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::NoFormalEducation => Self::HighSchoolDiploma,
            Self::HighSchoolDiploma => Self::BachelorsDegree,
            Self::BachelorsDegree => Self::NoFormalEducation,
        }
    }

    /// Previous level in display order (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::NoFormalEducation => Self::BachelorsDegree,
            Self::HighSchoolDiploma => Self::NoFormalEducation,
            Self::BachelorsDegree => Self::HighSchoolDiploma,
        }
    }
}

/// One entry in the known-languages list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The single data object the form collects and validates.
///
/// The shape is always full: conditional fields keep whatever value they
/// last held even when their controlling flag/enum no longer selects them,
/// and the serialized payload carries them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub full_name: String,
    pub has_work_experience: bool,
    pub company_name: String,
    pub knows_other_languages: bool,
    pub languages: Vec<LanguageEntry>,
    pub education_level: EducationLevel,
    pub school_name: String,
    pub university_name: String,
}

impl Default for ApplicationRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            has_work_experience: false,
            company_name: String::new(),
            knows_other_languages: false,
            languages: vec![LanguageEntry::default()],
            education_level: EducationLevel::default(),
            school_name: String::new(),
            university_name: String::new(),
        }
    }
}
