use super::super::domain::{CandidateProfile, EligibilityCriteria};
use super::{EligibilityCheck, EligibilityRule};

pub(super) fn cgpa(profile: &CandidateProfile, criteria: &EligibilityCriteria) -> EligibilityCheck {
    if profile.cgpa >= criteria.min_cgpa {
        EligibilityCheck {
            rule: EligibilityRule::Cgpa,
            passed: true,
            reason: format!(
                "Your CGPA {} meets the minimum requirement of {}.",
                profile.cgpa, criteria.min_cgpa
            ),
        }
    } else {
        EligibilityCheck {
            rule: EligibilityRule::Cgpa,
            passed: false,
            reason: format!(
                "Your CGPA of {} is below the required {}.",
                profile.cgpa, criteria.min_cgpa
            ),
        }
    }
}

pub(super) fn backlogs(
    profile: &CandidateProfile,
    criteria: &EligibilityCriteria,
) -> EligibilityCheck {
    if profile.backlogs <= criteria.max_backlogs {
        EligibilityCheck {
            rule: EligibilityRule::Backlogs,
            passed: true,
            reason: format!(
                "You have {} backlogs (Allowed: ≤{}).",
                profile.backlogs, criteria.max_backlogs
            ),
        }
    } else {
        EligibilityCheck {
            rule: EligibilityRule::Backlogs,
            passed: false,
            reason: format!(
                "You have {} backlogs, which exceeds the limit of {}.",
                profile.backlogs, criteria.max_backlogs
            ),
        }
    }
}

// Exact comparison against the stored values; no case folding.
pub(super) fn branch(profile: &CandidateProfile, criteria: &EligibilityCriteria) -> EligibilityCheck {
    if criteria
        .allowed_branches
        .iter()
        .any(|branch| branch == &profile.branch)
    {
        EligibilityCheck {
            rule: EligibilityRule::Branch,
            passed: true,
            reason: format!("Your branch ({}) is eligible.", profile.branch),
        }
    } else {
        EligibilityCheck {
            rule: EligibilityRule::Branch,
            passed: false,
            reason: format!(
                "Only [{}] branches are eligible. Your branch is {}.",
                criteria.allowed_branches.join(", "),
                profile.branch
            ),
        }
    }
}

pub(super) fn graduation_year(
    profile: &CandidateProfile,
    criteria: &EligibilityCriteria,
) -> Option<EligibilityCheck> {
    let years = &criteria.eligible_graduation_years;
    if years.is_empty() {
        return None;
    }

    let check = if years.contains(&profile.graduation_year) {
        EligibilityCheck {
            rule: EligibilityRule::GraduationYear,
            passed: true,
            reason: format!("Graduation Year {} is eligible.", profile.graduation_year),
        }
    } else {
        let batches: Vec<String> = years.iter().map(u16::to_string).collect();
        EligibilityCheck {
            rule: EligibilityRule::GraduationYear,
            passed: false,
            reason: format!(
                "Only {} batches are eligible. You graduate in {}.",
                batches.join(", "),
                profile.graduation_year
            ),
        }
    };

    Some(check)
}
