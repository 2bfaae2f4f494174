//! "Top picks" for a student plus the advisory match probability shown next to each drive.

mod probability;

use serde::Serialize;

use super::applications::Application;
use super::domain::{CandidateProfile, Drive};
use super::eligibility::evaluate;

pub use probability::match_probability;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Drive selected for a student, with a display-only match probability (0..=98).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedDrive<'a> {
    pub drive: &'a Drive,
    pub match_probability: u8,
}

/// Filter-and-truncate ranker: eligible drives the student has not applied to, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRanker {
    limit: usize,
}

impl RecommendationRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn rank<'a>(
        &self,
        profile: &CandidateProfile,
        drives: &'a [Drive],
        applications: &[Application],
    ) -> Vec<RecommendedDrive<'a>> {
        drives
            .iter()
            .filter(|drive| {
                !applications
                    .iter()
                    .any(|application| application.matches(&drive.id, &profile.student_id))
            })
            .filter(|drive| evaluate(profile, &drive.criteria).is_eligible)
            .take(self.limit)
            .map(|drive| RecommendedDrive {
                drive,
                match_probability: match_probability(profile, drive),
            })
            .collect()
    }
}

impl Default for RecommendationRanker {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }
}

/// Rank with the default limit of three picks.
pub fn rank<'a>(
    profile: &CandidateProfile,
    drives: &'a [Drive],
    applications: &[Application],
) -> Vec<RecommendedDrive<'a>> {
    RecommendationRanker::default().rank(profile, drives, applications)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::placement::catalog::DriveCatalog;
    use crate::workflows::placement::domain::{ApplicationId, DriveId, StudentId};
    use chrono::{TimeZone, Utc};

    fn rahul() -> CandidateProfile {
        CandidateProfile {
            student_id: StudentId("s1".to_string()),
            name: "Rahul Sharma".to_string(),
            cgpa: 8.5,
            branch: "CSE".to_string(),
            backlogs: 0,
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "SQL".to_string(),
            ],
            graduation_year: 2024,
        }
    }

    fn applied(drive: &str, student: &str) -> Application {
        let now = Utc
            .with_ymd_and_hms(2024, 2, 1, 10, 0, 0)
            .single()
            .expect("valid timestamp");
        Application::submit(
            ApplicationId(format!("app-{drive}")),
            DriveId(drive.to_string()),
            StudentId(student.to_string()),
            std::iter::empty(),
            now,
        )
        .expect("fresh application")
    }

    fn ids(picks: &[RecommendedDrive<'_>]) -> Vec<String> {
        picks.iter().map(|pick| pick.drive.id.0.clone()).collect()
    }

    #[test]
    fn keeps_eligible_drives_in_input_order() {
        let catalog = DriveCatalog::standard();

        let picks = rank(&rahul(), catalog.drives(), &[]);

        assert_eq!(ids(&picks), vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn skips_drives_already_applied_to() {
        let catalog = DriveCatalog::standard();
        let applications = vec![applied("d1", "s1"), applied("d3", "s2")];

        let picks = rank(&rahul(), catalog.drives(), &applications);

        assert_eq!(ids(&picks), vec!["d2", "d3"]);
    }

    #[test]
    fn truncates_to_configured_limit() {
        let catalog = DriveCatalog::standard();

        let picks = RecommendationRanker::new(1).rank(&rahul(), catalog.drives(), &[]);

        assert_eq!(ids(&picks), vec!["d1"]);
    }

    #[test]
    fn ineligible_student_gets_no_picks() {
        let catalog = DriveCatalog::standard();
        let mut profile = rahul();
        profile.backlogs = 11;

        assert!(rank(&profile, catalog.drives(), &[]).is_empty());
    }

    #[test]
    fn picks_carry_match_probability() {
        let catalog = DriveCatalog::standard();

        let picks = rank(&rahul(), catalog.drives(), &[]);

        assert_eq!(picks[0].match_probability, 94);
        assert_eq!(picks[1].match_probability, 82);
    }
}
