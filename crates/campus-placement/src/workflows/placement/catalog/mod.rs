//! Drive catalog: the seeded opportunities plus CSV import for bulk loading.

mod parser;

use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

use super::domain::{Drive, DriveCategory, DriveId, EligibilityCriteria};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: usize, reason: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read drive catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid drive catalog CSV: {}", err),
            CatalogImportError::InvalidRow { line, reason } => {
                write!(f, "invalid drive on data line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Ordered set of drives offered to students.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveCatalog {
    drives: Vec<Drive>,
}

impl DriveCatalog {
    pub fn new(drives: Vec<Drive>) -> Self {
        Self { drives }
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn get(&self, id: &DriveId) -> Option<&Drive> {
        self.drives.iter().find(|drive| &drive.id == id)
    }

    pub fn by_category(&self, category: DriveCategory) -> impl Iterator<Item = &Drive> {
        self.drives
            .iter()
            .filter(move |drive| drive.category == category)
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    /// The portal's seeded opportunities across every category.
    pub fn standard() -> Self {
        Self::new(vec![
            seeded(
                "d1",
                "TechCorp Solutions",
                (
                    "SDE Intern",
                    "Summer Internship for Full Stack Roles. Work on real-world projects.",
                ),
                "Software Developer",
                DriveCategory::Internship,
                ("Bangalore", "₹40,000/mo", (2024, 5, 30)),
                criteria(7.5, 0, &["CSE", "IT", "ECE"], &["React", "Node.js"], &[2024, 2025]),
            ),
            seeded(
                "d2",
                "DataMinds Analytics",
                (
                    "Data Science Intern",
                    "Analyze large datasets and build ML models.",
                ),
                "Data Analyst",
                DriveCategory::Internship,
                ("Remote", "₹35,000/mo", (2024, 6, 15)),
                criteria(
                    7.0,
                    1,
                    &["CSE", "IT", "Mathematics"],
                    &["Python", "SQL", "Pandas"],
                    &[2024, 2025],
                ),
            ),
            seeded(
                "d3",
                "CloudSystems Inc",
                (
                    "Graduate Engineer Trainee",
                    "Entry level position for cloud infrastructure.",
                ),
                "Cloud Engineer",
                DriveCategory::Job,
                ("Hyderabad", "8 LPA", (2024, 4, 20)),
                criteria(6.5, 0, &["CSE", "IT", "ECE"], &["AWS", "Linux"], &[2023, 2024]),
            ),
            seeded(
                "d4",
                "CodeMasters Global",
                (
                    "Hackathon 2024",
                    "48-hour coding marathon. Win prizes up to ₹1 Lakh.",
                ),
                "Participant",
                DriveCategory::Competition,
                ("Online", "₹1 Lakh Prize", (2024, 3, 10)),
                criteria(
                    0.0,
                    10,
                    &["All"],
                    &["Coding", "Problem Solving"],
                    &[2023, 2024, 2025, 2026],
                ),
            ),
            seeded(
                "d5",
                "Alumni Network",
                (
                    "Career Guidance Session",
                    "1-on-1 mentorship with industry experts from Google & Microsoft.",
                ),
                "Mentee",
                DriveCategory::Mentorship,
                ("Online", "Free", (2024, 3, 1)),
                criteria(0.0, 10, &["All"], &["Communication"], &[2024, 2025]),
            ),
            seeded(
                "d6",
                "PrepLeaf",
                (
                    "Aptitude Mock Series",
                    "Full length aptitude and technical mock tests for placement prep.",
                ),
                "Student",
                DriveCategory::MockTest,
                ("Online", "Free", (2024, 12, 31)),
                criteria(0.0, 10, &["All"], &["Aptitude"], &[2024, 2025]),
            ),
        ])
    }
}

fn seeded(
    id: &str,
    company_name: &str,
    (title, description): (&str, &str),
    role: &str,
    category: DriveCategory,
    (location, ctc, (year, month, day)): (&str, &str, (i32, u32, u32)),
    criteria: EligibilityCriteria,
) -> Drive {
    Drive {
        id: DriveId(id.to_string()),
        company_name: company_name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        role: role.to_string(),
        category,
        location: location.to_string(),
        ctc: ctc.to_string(),
        deadline: NaiveDate::from_ymd_opt(year, month, day),
        criteria,
    }
}

fn criteria(
    min_cgpa: f64,
    max_backlogs: u32,
    branches: &[&str],
    skills: &[&str],
    years: &[u16],
) -> EligibilityCriteria {
    EligibilityCriteria {
        min_cgpa,
        max_backlogs,
        allowed_branches: branches.iter().map(|value| value.to_string()).collect(),
        required_skills: skills.iter().map(|value| value.to_string()).collect(),
        eligible_graduation_years: years.to_vec(),
    }
}

pub struct DriveCatalogImporter;

impl DriveCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<DriveCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<DriveCatalog, CatalogImportError> {
        Ok(DriveCatalog::new(parser::parse_drives(reader)?))
    }
}
