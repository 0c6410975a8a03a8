//! Record validation with per-field error paths
//!
//! Conditional requiredness is dispatched over tagged variants: the record
//! is projected into one variant per controlling flag/enum value, and each
//! variant validates only the fields it carries.

use super::record::{ApplicationRecord, EducationLevel, LanguageEntry};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Addressable location of one field or list entry within the record,
/// used to key errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    FullName,
    CompanyName,
    Languages,
    LanguageName(usize),
    SchoolName,
    UniversityName,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullName => write!(f, "fullName"),
            Self::CompanyName => write!(f, "companyName"),
            Self::Languages => write!(f, "languages"),
            Self::LanguageName(index) => write!(f, "languages.{index}.name"),
            Self::SchoolName => write!(f, "schoolName"),
            Self::UniversityName => write!(f, "universityName"),
        }
    }
}

/// A field whose current value fails its applicable rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct FieldError {
    pub path: FieldPath,
    pub message: String,
}

/// Validation errors keyed by field path, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldPath, String>);

impl ValidationErrors {
    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.0.insert(path, message.into());
    }

    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.0.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.0.contains_key(&path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &str)> {
        self.0.iter().map(|(path, msg)| (*path, msg.as_str()))
    }
}

/// Work-experience variant: the company name only exists when the flag is set
enum WorkExperience<'a> {
    No,
    Yes { company_name: &'a str },
}

impl<'a> WorkExperience<'a> {
    fn of(record: &'a ApplicationRecord) -> Self {
        if record.has_work_experience {
            Self::Yes {
                company_name: &record.company_name,
            }
        } else {
            Self::No
        }
    }
}

/// Language-skills variant: the list only exists when the flag is set
enum LanguageSkills<'a> {
    No,
    Yes { languages: &'a [LanguageEntry] },
}

impl<'a> LanguageSkills<'a> {
    fn of(record: &'a ApplicationRecord) -> Self {
        if record.knows_other_languages {
            Self::Yes {
                languages: &record.languages,
            }
        } else {
            Self::No
        }
    }
}

/// Education variant: each level carries only the field it requires
enum Education<'a> {
    NoFormalEducation,
    HighSchoolDiploma { school_name: &'a str },
    BachelorsDegree { university_name: &'a str },
}

impl<'a> Education<'a> {
    fn of(record: &'a ApplicationRecord) -> Self {
        match record.education_level {
            EducationLevel::NoFormalEducation => Self::NoFormalEducation,
            EducationLevel::HighSchoolDiploma => Self::HighSchoolDiploma {
                school_name: &record.school_name,
            },
            EducationLevel::BachelorsDegree => Self::BachelorsDegree {
                university_name: &record.university_name,
            },
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Validate the record against its current controlling flags/enum.
///
/// Fields whose condition is not met are not validated at all; on success
/// the full record (stale fields included) is returned for submission.
pub fn validate(record: &ApplicationRecord) -> Result<ApplicationRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if is_blank(&record.full_name) {
        errors.insert(FieldPath::FullName, "Full name is required");
    }

    match WorkExperience::of(record) {
        WorkExperience::No => {}
        WorkExperience::Yes { company_name } => {
            if is_blank(company_name) {
                errors.insert(FieldPath::CompanyName, "Company name is required");
            }
        }
    }

    match LanguageSkills::of(record) {
        LanguageSkills::No => {}
        LanguageSkills::Yes { languages } => {
            if languages.is_empty() {
                errors.insert(FieldPath::Languages, "At least one language is required");
            }
            for (index, entry) in languages.iter().enumerate() {
                if is_blank(&entry.name) {
                    errors.insert(FieldPath::LanguageName(index), "Language name is required");
                }
            }
        }
    }

    match Education::of(record) {
        Education::NoFormalEducation => {}
        Education::HighSchoolDiploma { school_name } => {
            if is_blank(school_name) {
                errors.insert(FieldPath::SchoolName, "School name is required");
            }
        }
        Education::BachelorsDegree { university_name } => {
            if is_blank(university_name) {
                errors.insert(FieldPath::UniversityName, "University name is required");
            }
        }
    }

    if errors.is_empty() {
        Ok(record.clone())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_base() -> ApplicationRecord {
        ApplicationRecord {
            full_name: "Ana".to_string(),
            ..Default::default()
        }
    }

    mod full_name {
        use super::*;

        #[test]
        fn test_empty_full_name_rejected() {
            let record = ApplicationRecord::default();
            let errors = validate(&record).unwrap_err();
            assert!(errors.contains(FieldPath::FullName));
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let record = ApplicationRecord {
                full_name: "   ".to_string(),
                ..Default::default()
            };
            let errors = validate(&record).unwrap_err();
            assert!(errors.contains(FieldPath::FullName));
        }
    }

    mod work_experience {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_company_name_ignored_without_work_experience() {
            // companyName may be empty or stale; neither is validated
            for company in ["", "stale value"] {
                let record = ApplicationRecord {
                    company_name: company.to_string(),
                    ..valid_base()
                };
                assert!(validate(&record).is_ok());
            }
        }

        #[test]
        fn test_empty_company_name_rejected_with_work_experience() {
            let record = ApplicationRecord {
                has_work_experience: true,
                ..valid_base()
            };
            let errors = validate(&record).unwrap_err();
            assert_eq!(
                errors.get(FieldPath::CompanyName),
                Some("Company name is required")
            );
        }

        #[test]
        fn test_filled_company_name_accepted() {
            let record = ApplicationRecord {
                has_work_experience: true,
                company_name: "Acme".to_string(),
                ..valid_base()
            };
            assert!(validate(&record).is_ok());
        }
    }

    mod languages {
        use super::*;
        use crate::state::record::LanguageEntry;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_languages_ignored_when_flag_off() {
            let record = ApplicationRecord {
                languages: vec![LanguageEntry::default()],
                ..valid_base()
            };
            assert!(validate(&record).is_ok());
        }

        #[test]
        fn test_empty_entry_errors_on_its_index() {
            let record = ApplicationRecord {
                knows_other_languages: true,
                languages: vec![LanguageEntry::new("Spanish"), LanguageEntry::default()],
                ..valid_base()
            };
            let errors = validate(&record).unwrap_err();
            assert!(!errors.contains(FieldPath::LanguageName(0)));
            assert_eq!(
                errors.get(FieldPath::LanguageName(1)),
                Some("Language name is required")
            );
        }

        #[test]
        fn test_empty_list_errors_on_list_path() {
            let record = ApplicationRecord {
                knows_other_languages: true,
                languages: vec![],
                ..valid_base()
            };
            let errors = validate(&record).unwrap_err();
            assert!(errors.contains(FieldPath::Languages));
        }

        #[test]
        fn test_all_entries_filled_accepted() {
            let record = ApplicationRecord {
                knows_other_languages: true,
                languages: vec![LanguageEntry::new("Spanish"), LanguageEntry::new("French")],
                ..valid_base()
            };
            assert!(validate(&record).is_ok());
        }
    }

    mod education {
        use super::*;
        use crate::state::record::EducationLevel;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_school_name_only_validated_for_high_school() {
            for level in [
                EducationLevel::NoFormalEducation,
                EducationLevel::BachelorsDegree,
            ] {
                let record = ApplicationRecord {
                    education_level: level,
                    university_name: "MIT".to_string(),
                    ..valid_base()
                };
                let result = validate(&record);
                assert!(
                    !matches!(&result, Err(e) if e.contains(FieldPath::SchoolName)),
                    "schoolName must not be validated for {level:?}"
                );
            }

            let record = ApplicationRecord {
                education_level: EducationLevel::HighSchoolDiploma,
                ..valid_base()
            };
            let errors = validate(&record).unwrap_err();
            assert_eq!(
                errors.get(FieldPath::SchoolName),
                Some("School name is required")
            );
        }

        #[test]
        fn test_university_name_only_validated_for_bachelors() {
            for level in [
                EducationLevel::NoFormalEducation,
                EducationLevel::HighSchoolDiploma,
            ] {
                let record = ApplicationRecord {
                    education_level: level,
                    school_name: "Central High".to_string(),
                    ..valid_base()
                };
                let result = validate(&record);
                assert!(
                    !matches!(&result, Err(e) if e.contains(FieldPath::UniversityName)),
                    "universityName must not be validated for {level:?}"
                );
            }

            let record = ApplicationRecord {
                education_level: EducationLevel::BachelorsDegree,
                ..valid_base()
            };
            let errors = validate(&record).unwrap_err();
            assert_eq!(
                errors.get(FieldPath::UniversityName),
                Some("University name is required")
            );
        }
    }

    mod paths {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_display_renders_dotted_paths() {
            assert_eq!(FieldPath::FullName.to_string(), "fullName");
            assert_eq!(FieldPath::LanguageName(0).to_string(), "languages.0.name");
            assert_eq!(FieldPath::UniversityName.to_string(), "universityName");
        }

        #[test]
        fn test_field_error_display() {
            let err = FieldError {
                path: FieldPath::CompanyName,
                message: "Company name is required".to_string(),
            };
            assert_eq!(err.to_string(), "companyName: Company name is required");
        }
    }

    mod acceptance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_minimal_record_accepted_as_is() {
            let record = valid_base();
            let accepted = validate(&record).unwrap();
            assert_eq!(accepted, record);
        }
    }
}
