use crate::commands::{parse_json, render_eligibility, render_resume_report};
use crate::infra::InMemoryApplicationRepository;
use campus_placement::config::PlacementConfig;
use campus_placement::error::AppError;
use campus_placement::workflows::placement::applications::{
    ApplicationServiceError, ApplicationStatus, PlacementApplicationService,
};
use campus_placement::workflows::placement::{
    score, CandidateProfile, DriveCatalog, DriveId, StudentId,
};
use clap::Args;
use std::sync::Arc;

const SAMPLE_RESUME: &str = "Rahul Sharma | rahul@example.com | phone +91 98765 43210 | github.com/rahul\n\
Objective: software engineering role building reliable web platforms.\n\
Education: B.Tech in Computer Science, CGPA 8.5.\n\
Skills: Python, JavaScript, React, Node, SQL, Git, Docker, Linux.\n\
Experience: summer internship building REST APIs; collaboration with a team of five.\n\
Projects: placement portal with algorithm-driven matching and query optimization.\n\
Leadership: coding club lead, mentoring juniors in competitive programming and problem solving.";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Candidate profile as JSON (defaults to a seeded CSE student)
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Drive to apply to during the walkthrough
    #[arg(long, default_value = "d1")]
    pub(crate) drive: String,
    /// Skip the resume scoring portion of the demo
    #[arg(long)]
    pub(crate) skip_resume: bool,
}

pub(crate) fn seeded_student() -> CandidateProfile {
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

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        drive,
        skip_resume,
    } = args;

    let profile = match profile {
        Some(raw) => parse_json::<CandidateProfile>(&raw)?,
        None => seeded_student(),
    };
    let drive_id = DriveId(drive);
    let service = PlacementApplicationService::new(
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(DriveCatalog::standard()),
        &PlacementConfig::default(),
    );

    println!("Campus placement demo");
    println!("Catalog: {} drives", service.catalog().len());

    let eligibility = service.eligibility(&profile, &drive_id)?;
    render_eligibility(&profile, &eligibility);

    match service.apply(&profile, &drive_id) {
        Ok(application) => {
            println!(
                "\nApplied: {} for drive {} ({})",
                application.id, application.drive_id, application.status
            );

            let shortlisted = service.update_status(&application.id, ApplicationStatus::Shortlisted)?;
            println!("Recruiter update: {}", shortlisted.status);

            match service.update_status(&application.id, ApplicationStatus::Selected) {
                Ok(_) => println!("Unexpected jump to Selected"),
                Err(err) => println!("Skipping interviews is rejected: {err}"),
            }

            match service.apply(&profile, &drive_id) {
                Ok(_) => println!("Unexpected duplicate accepted"),
                Err(err) => println!("Second application is rejected: {err}"),
            }
        }
        Err(ApplicationServiceError::Ineligible(result)) => {
            println!("\nApplication blocked: {}", result.summary());
        }
        Err(other) => return Err(other.into()),
    }

    println!("\nRecommendations");
    let picks = service.recommendations(&profile)?;
    if picks.is_empty() {
        println!("  No further eligible drives.");
    }
    for pick in &picks {
        println!(
            "  {} - {} at {} match {}%",
            pick.drive.id, pick.drive.title, pick.drive.company_name, pick.match_probability
        );
    }

    if !skip_resume {
        println!("\nResume heuristic (sample resume)");
        render_resume_report(&score(SAMPLE_RESUME));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_end_to_end_for_seeded_student() {
        run_demo(DemoArgs {
            profile: None,
            drive: "d1".to_string(),
            skip_resume: false,
        })
        .expect("demo completes");
    }

    #[test]
    fn demo_surfaces_unknown_drive() {
        let result = run_demo(DemoArgs {
            profile: None,
            drive: "d404".to_string(),
            skip_resume: true,
        });

        assert!(matches!(
            result,
            Err(AppError::Workflow(ApplicationServiceError::UnknownDrive(_)))
        ));
    }

    #[test]
    fn sample_resume_is_recognised() {
        let report = score(SAMPLE_RESUME);
        assert!(report.is_resume);
        assert!(report.ats_score > 0);
    }
}
