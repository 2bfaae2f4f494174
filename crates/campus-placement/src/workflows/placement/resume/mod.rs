//! Keyword heuristic that scores extracted resume text.
//!
//! This is an independent local signal. It is never reconciled with any external AI analysis
//! of the same document.

mod keywords;
mod report;

use serde::{Deserialize, Serialize};

use keywords::{
    count_matches, MatchMode, APTITUDE_TERMS, COMMUNICATION_TERMS, RESUME_INDICATORS,
    TECHNICAL_TERMS,
};

/// Distinct resume indicators required before any scoring happens.
pub const MIN_RESUME_INDICATORS: usize = 3;

const LONG_RESUME_CHARS: usize = 5000;
const SHORT_RESUME_CHARS: usize = 500;
const LONG_RESUME_BONUS: u8 = 10;
const SHORT_RESUME_PENALTY: u8 = 15;

/// Sub-scores for the three keyword families, each within 50..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceBreakdown {
    pub technical: u8,
    pub communication: u8,
    pub aptitude: u8,
}

/// Raw counts behind a report, kept for audit and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSignals {
    pub indicator_matches: usize,
    pub technical_matches: usize,
    pub communication_matches: usize,
    pub aptitude_matches: usize,
    pub character_count: usize,
}

/// Outcome of the resume heuristic. `performance` is `None` when the text is not a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeScoreReport {
    pub is_resume: bool,
    pub ats_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceBreakdown>,
    pub signals: ResumeSignals,
    pub analysis: String,
}

/// Negative classification raised when a caller needs a scored resume.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "document is not a resume: matched {matched_indicators} resume indicator(s), {required} required",
    required = MIN_RESUME_INDICATORS
)]
pub struct NotAResume {
    pub matched_indicators: usize,
}

impl ResumeScoreReport {
    /// Convert the negative classification into an error for callers that require a resume.
    pub fn ensure_resume(&self) -> Result<&PerformanceBreakdown, NotAResume> {
        self.performance.as_ref().ok_or(NotAResume {
            matched_indicators: self.signals.indicator_matches,
        })
    }
}

/// Score extracted resume text. Pure; whitespace-only input is classified as not a resume.
pub fn score(text: &str) -> ResumeScoreReport {
    let lowered = text.to_lowercase();
    let character_count = text.chars().count();

    let mut signals = ResumeSignals {
        indicator_matches: count_matches(&lowered, RESUME_INDICATORS, MatchMode::Prefix),
        technical_matches: 0,
        communication_matches: 0,
        aptitude_matches: 0,
        character_count,
    };

    if signals.indicator_matches < MIN_RESUME_INDICATORS {
        return ResumeScoreReport {
            is_resume: false,
            ats_score: 0,
            performance: None,
            analysis: report::rejection_narrative(&signals),
            signals,
        };
    }

    signals.technical_matches = count_matches(&lowered, TECHNICAL_TERMS, MatchMode::Whole);
    signals.communication_matches = count_matches(&lowered, COMMUNICATION_TERMS, MatchMode::Whole);
    signals.aptitude_matches = count_matches(&lowered, APTITUDE_TERMS, MatchMode::Whole);

    let performance = PerformanceBreakdown {
        technical: sub_score(signals.technical_matches),
        communication: sub_score(signals.communication_matches),
        aptitude: sub_score(signals.aptitude_matches),
    };

    let mut report = ResumeScoreReport {
        is_resume: true,
        ats_score: composite_score(&performance, character_count),
        performance: Some(performance),
        signals,
        analysis: String::new(),
    };
    report.analysis = report::scored_narrative(&report);
    report
}

/// `min(100, 50 + 5 * matches)`.
pub fn sub_score(matches: usize) -> u8 {
    let raw = 50usize.saturating_add(matches.saturating_mul(5));
    raw.min(100) as u8
}

/// Rounded mean of the sub-scores, then +10 for long resumes or -15 for short ones, clamped to 0..=100.
pub fn composite_score(performance: &PerformanceBreakdown, character_count: usize) -> u8 {
    let total = u32::from(performance.technical)
        + u32::from(performance.communication)
        + u32::from(performance.aptitude);
    let mean = (f64::from(total) / 3.0).round() as u8;

    if character_count > LONG_RESUME_CHARS {
        mean.saturating_add(LONG_RESUME_BONUS).min(100)
    } else if character_count < SHORT_RESUME_CHARS {
        mean.saturating_sub(SHORT_RESUME_PENALTY)
    } else {
        mean
    }
}
