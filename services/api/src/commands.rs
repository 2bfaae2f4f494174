use campus_placement::error::AppError;
use campus_placement::workflows::placement::applications::ApplicationServiceError;
use campus_placement::workflows::placement::recommendations::DEFAULT_RECOMMENDATION_LIMIT;
use campus_placement::workflows::placement::{
    evaluate, score, CandidateProfile, DriveCatalog, DriveCatalogImporter, DriveId,
    EligibilityCriteria, EligibilityResult, RecommendationRanker, ResumeScoreReport,
};
use clap::Args;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Candidate profile as JSON
    #[arg(long)]
    pub(crate) profile: String,
    /// Eligibility criteria as JSON
    #[arg(long, conflicts_with = "drive", required_unless_present = "drive")]
    pub(crate) criteria: Option<String>,
    /// Catalog drive whose criteria should be used
    #[arg(long)]
    pub(crate) drive: Option<String>,
    /// Optional drive catalog CSV export used to resolve --drive
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ResumeScoreArgs {
    /// Plain-text resume file
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Candidate profile as JSON
    #[arg(long)]
    pub(crate) profile: String,
    /// Optional drive catalog CSV export (defaults to the standard catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Maximum number of drives to list
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    pub(crate) limit: usize,
}

/// Decode a JSON command-line argument; malformed input surfaces as `AppError::Json`.
pub(crate) fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    Ok(serde_json::from_str(raw.trim())?)
}

pub(crate) fn load_catalog(path: Option<PathBuf>) -> Result<DriveCatalog, AppError> {
    match path {
        Some(path) => Ok(DriveCatalogImporter::from_path(path)?),
        None => Ok(DriveCatalog::standard()),
    }
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let EligibilityArgs {
        profile,
        criteria,
        drive,
        catalog,
    } = args;

    let profile: CandidateProfile = parse_json(&profile)?;
    let criteria: EligibilityCriteria = match (criteria, drive) {
        (Some(criteria), _) => parse_json(&criteria)?,
        (None, drive) => {
            let drive_id = DriveId(drive.unwrap_or_default());
            let catalog = load_catalog(catalog)?;
            catalog
                .get(&drive_id)
                .map(|drive| drive.criteria.clone())
                .ok_or(ApplicationServiceError::UnknownDrive(drive_id))?
        }
    };

    render_eligibility(&profile, &evaluate(&profile, &criteria));
    Ok(())
}

pub(crate) fn run_resume_score(args: ResumeScoreArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.path)?;
    let report = score(&text);
    println!("Resume heuristic for {}", args.path.display());
    render_resume_report(&report);
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog,
        limit,
    } = args;

    let profile: CandidateProfile = parse_json(&profile)?;
    let catalog = load_catalog(catalog)?;
    let picks = RecommendationRanker::new(limit).rank(&profile, catalog.drives(), &[]);

    println!("Top picks for {} ({})", profile.name, profile.student_id);
    if picks.is_empty() {
        println!("  No eligible drives in the catalog.");
    }
    for pick in picks {
        println!(
            "  {} - {} at {} [{}] match {}%",
            pick.drive.id,
            pick.drive.title,
            pick.drive.company_name,
            pick.drive.category,
            pick.match_probability
        );
    }
    Ok(())
}

pub(crate) fn render_eligibility(profile: &CandidateProfile, result: &EligibilityResult) {
    println!("Eligibility for {} ({})", profile.name, profile.student_id);
    for check in &result.checks {
        let marker = if check.passed { "pass" } else { "FAIL" };
        println!("  [{marker}] {:?}: {}", check.rule, check.reason);
    }
    println!("  Result: {}", result.summary());
}

pub(crate) fn render_resume_report(report: &ResumeScoreReport) {
    match report.ensure_resume() {
        Ok(performance) => {
            println!("  ATS score: {}", report.ats_score);
            println!(
                "  Technical {} | Communication {} | Aptitude {}",
                performance.technical, performance.communication, performance.aptitude
            );
        }
        Err(rejection) => println!("  {rejection}"),
    }
    println!("  {}", report.analysis);
}
