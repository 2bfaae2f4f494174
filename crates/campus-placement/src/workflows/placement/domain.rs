use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

/// Identifier of a company-posted drive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriveId(pub String);

/// Identifier of a student account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

macro_rules! display_inner {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

display_inner!(ApplicationId, DriveId, StudentId);

/// Academic snapshot of a student, read once per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub student_id: StudentId,
    pub name: String,
    pub cgpa: f64,
    pub branch: String,
    pub backlogs: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub graduation_year: u16,
}

impl CandidateProfile {
    /// Case-insensitive skill lookup.
    pub fn has_skill(&self, skill: &str) -> bool {
        let needle = skill.trim();
        self.skills
            .iter()
            .any(|owned| owned.trim().eq_ignore_ascii_case(needle))
    }
}

/// Thresholds and allow-lists a candidate must satisfy for a drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub min_cgpa: f64,
    pub max_backlogs: u32,
    #[serde(default)]
    pub allowed_branches: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Empty means any graduation year is accepted and the check is skipped.
    #[serde(default)]
    pub eligible_graduation_years: Vec<u16>,
}

/// Kind of opportunity a company posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveCategory {
    Internship,
    Job,
    Competition,
    Mentorship,
    #[serde(rename = "Mock Test", alias = "MockTest")]
    MockTest,
}

impl DriveCategory {
    pub const fn label(self) -> &'static str {
        match self {
            DriveCategory::Internship => "Internship",
            DriveCategory::Job => "Job",
            DriveCategory::Competition => "Competition",
            DriveCategory::Mentorship => "Mentorship",
            DriveCategory::MockTest => "Mock Test",
        }
    }

    /// Lenient parse used by catalog imports and query strings.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '-' && *ch != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "internship" => Some(Self::Internship),
            "job" => Some(Self::Job),
            "competition" => Some(Self::Competition),
            "mentorship" => Some(Self::Mentorship),
            "mocktest" => Some(Self::MockTest),
            _ => None,
        }
    }
}

impl fmt::Display for DriveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A company-posted opportunity with its eligibility criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub id: DriveId,
    pub company_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub role: String,
    pub category: DriveCategory,
    pub location: String,
    pub ctc: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub criteria: EligibilityCriteria,
}
