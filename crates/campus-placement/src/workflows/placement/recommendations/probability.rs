use super::super::domain::{CandidateProfile, Drive};

const CGPA_WEIGHT: f64 = 30.0;
const CGPA_RATIO_CAP: f64 = 1.2;
const BACKLOG_BASE: f64 = 15.0;
const BACKLOG_PENALTY: f64 = 5.0;
const SKILL_WEIGHT: f64 = 35.0;
const BASELINE: f64 = 10.0;
const PROBABILITY_CAP: f64 = 98.0;

/// Advisory match estimate in percent. Deterministic; never consulted by the eligibility gate.
pub fn match_probability(profile: &CandidateProfile, drive: &Drive) -> u8 {
    let total = cgpa_points(profile, drive)
        + backlog_points(profile)
        + skill_points(profile, drive)
        + BASELINE
        + variation(profile, drive);

    total.round().clamp(0.0, PROBABILITY_CAP) as u8
}

fn cgpa_points(profile: &CandidateProfile, drive: &Drive) -> f64 {
    let min_cgpa = drive.criteria.min_cgpa;
    // Drives without a minimum treat every candidate as clearing it by the full margin.
    let ratio = if min_cgpa > 0.0 {
        (profile.cgpa / min_cgpa).min(CGPA_RATIO_CAP)
    } else {
        CGPA_RATIO_CAP
    };

    (ratio * CGPA_WEIGHT).clamp(0.0, CGPA_WEIGHT)
}

fn backlog_points(profile: &CandidateProfile) -> f64 {
    (BACKLOG_BASE - BACKLOG_PENALTY * f64::from(profile.backlogs)).max(0.0)
}

fn skill_points(profile: &CandidateProfile, drive: &Drive) -> f64 {
    let required = &drive.criteria.required_skills;
    if required.is_empty() {
        return 0.0;
    }

    let matched = required
        .iter()
        .filter(|skill| profile.has_skill(skill))
        .count();
    matched as f64 / required.len() as f64 * SKILL_WEIGHT
}

fn variation(profile: &CandidateProfile, drive: &Drive) -> f64 {
    let combined = profile.student_id.0.chars().count() + drive.id.0.chars().count();
    (combined % 10) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::placement::catalog::DriveCatalog;
    use crate::workflows::placement::domain::{DriveId, StudentId};

    fn profile(id: &str, cgpa: f64, backlogs: u32, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            student_id: StudentId(id.to_string()),
            name: "Student".to_string(),
            cgpa,
            branch: "CSE".to_string(),
            backlogs,
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            graduation_year: 2024,
        }
    }

    fn drive(id: &str) -> Drive {
        DriveCatalog::standard()
            .get(&DriveId(id.to_string()))
            .cloned()
            .expect("seeded drive")
    }

    #[test]
    fn reproduces_reference_estimate() {
        // 30 (cgpa) + 15 (no backlogs) + 35 (2/2 skills) + 10 + (2 + 2) % 10
        let student = profile("s1", 8.5, 0, &["react", "NODE.JS", "Python"]);
        assert_eq!(match_probability(&student, &drive("d1")), 94);
    }

    #[test]
    fn backlog_penalty_floors_at_zero() {
        assert_eq!(backlog_points(&profile("s", 8.0, 1, &[])), 10.0);
        assert_eq!(backlog_points(&profile("s", 8.0, 3, &[])), 0.0);
        assert_eq!(backlog_points(&profile("s", 8.0, 7, &[])), 0.0);
    }

    #[test]
    fn cgpa_contribution_is_capped() {
        let student = profile("s1", 9.9, 0, &[]);
        assert_eq!(cgpa_points(&student, &drive("d3")), 30.0);
        let open = drive("d4");
        assert_eq!(cgpa_points(&profile("s1", 4.0, 0, &[]), &open), 30.0);
    }

    #[test]
    fn meeting_the_minimum_earns_full_cgpa_points() {
        let d1 = drive("d1");
        assert_eq!(cgpa_points(&profile("s1", 7.5, 0, &[]), &d1), 30.0);
        assert!((cgpa_points(&profile("s1", 6.0, 0, &[]), &d1) - 24.0).abs() < 1e-9);
        assert_eq!(cgpa_points(&profile("s1", 0.0, 0, &[]), &d1), 0.0);
    }

    #[test]
    fn partial_skill_overlap_scales_linearly() {
        let student = profile("s1", 8.5, 0, &["python", "sql"]);
        let points = skill_points(&student, &drive("d2"));
        assert!((points - 35.0 * 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn variation_depends_only_on_identifier_lengths() {
        let short = profile("s1", 8.5, 0, &[]);
        let long = profile("student-000123", 8.5, 0, &[]);
        assert_eq!(variation(&short, &drive("d1")), 4.0);
        assert_eq!(variation(&long, &drive("d1")), 6.0);
    }

    #[test]
    fn total_never_exceeds_cap() {
        let mut strong = drive("d1");
        strong.id = DriveId("d123456".to_string());
        let student = profile("s1", 10.0, 0, &["React", "Node.js"]);
        assert_eq!(match_probability(&student, &strong), 98);
    }
}
