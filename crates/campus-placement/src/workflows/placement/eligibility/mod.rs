mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, EligibilityCriteria};

/// Rule that produced an [`EligibilityCheck`]; checks are always emitted in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityRule {
    Cgpa,
    Backlogs,
    Branch,
    GraduationYear,
}

/// Single rule outcome with a display-ready explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCheck {
    pub rule: EligibilityRule,
    pub passed: bool,
    pub reason: String,
}

/// Derived verdict for a (profile, criteria) pair. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub is_eligible: bool,
    pub checks: Vec<EligibilityCheck>,
}

impl EligibilityResult {
    pub fn failed_checks(&self) -> impl Iterator<Item = &EligibilityCheck> {
        self.checks.iter().filter(|check| !check.passed)
    }

    pub fn summary(&self) -> String {
        if self.is_eligible {
            return "eligible".to_string();
        }

        let reasons: Vec<&str> = self
            .failed_checks()
            .map(|check| check.reason.as_str())
            .collect();
        format!("not eligible: {}", reasons.join(" "))
    }
}

/// Evaluate a candidate against a drive's criteria.
///
/// Total and deterministic. Required skills are deliberately not part of the verdict; they only
/// feed the advisory match probability.
pub fn evaluate(profile: &CandidateProfile, criteria: &EligibilityCriteria) -> EligibilityResult {
    let mut checks = vec![
        rules::cgpa(profile, criteria),
        rules::backlogs(profile, criteria),
        rules::branch(profile, criteria),
    ];

    if let Some(check) = rules::graduation_year(profile, criteria) {
        checks.push(check);
    }

    let is_eligible = checks.iter().all(|check| check.passed);

    EligibilityResult {
        is_eligible,
        checks,
    }
}
