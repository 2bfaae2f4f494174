use super::{ResumeScoreReport, ResumeSignals, MIN_RESUME_INDICATORS};

const TECHNICAL_IMPROVEMENT_THRESHOLD: usize = 5;
const COMMUNICATION_IMPROVEMENT_THRESHOLD: usize = 3;
const DETAIL_IMPROVEMENT_LENGTH: usize = 1000;

pub(super) fn rejection_narrative(signals: &ResumeSignals) -> String {
    format!(
        "This document does not look like a resume: found {} of {} resume indicators (at least {} required). \
         Upload a resume that lists your education, experience, skills, and contact details.",
        signals.indicator_matches,
        super::keywords::RESUME_INDICATORS.len(),
        MIN_RESUME_INDICATORS,
    )
}

pub(super) fn scored_narrative(report: &ResumeScoreReport) -> String {
    let signals = &report.signals;
    let Some(performance) = report.performance.as_ref() else {
        return rejection_narrative(signals);
    };

    let mut lines = vec![
        format!("**ATS Score: {}/100**", report.ats_score),
        String::new(),
        "**Strengths**".to_string(),
        format!(
            "- Technical skills: {} keyword(s) matched (score {}).",
            signals.technical_matches, performance.technical
        ),
        format!(
            "- Communication and leadership: {} keyword(s) matched (score {}).",
            signals.communication_matches, performance.communication
        ),
        format!(
            "- Problem solving and aptitude: {} keyword(s) matched (score {}).",
            signals.aptitude_matches, performance.aptitude
        ),
        String::new(),
        "**Improvements**".to_string(),
    ];

    let mut improvements = Vec::new();
    if signals.technical_matches < TECHNICAL_IMPROVEMENT_THRESHOLD {
        improvements.push(
            "- List more of the languages, frameworks, and tools you have used in projects."
                .to_string(),
        );
    }
    if signals.communication_matches < COMMUNICATION_IMPROVEMENT_THRESHOLD {
        improvements.push(
            "- Highlight teamwork, leadership roles, and presentations you have delivered."
                .to_string(),
        );
    }
    if signals.character_count < DETAIL_IMPROVEMENT_LENGTH {
        improvements.push(
            "- Expand on your projects and achievements; the resume is too brief for ATS screening."
                .to_string(),
        );
    }
    if improvements.is_empty() {
        improvements.push("- No major gaps found for keyword based screening.".to_string());
    }

    lines.extend(improvements);
    lines.join("\n")
}
