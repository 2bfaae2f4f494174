use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::super::catalog::DriveCatalog;
use super::super::domain::{ApplicationId, CandidateProfile, Drive, DriveId, StudentId};
use super::super::eligibility::{evaluate, EligibilityResult};
use super::super::recommendations::{RecommendationRanker, RecommendedDrive};
use super::lifecycle::{Application, ApplicationStatus, LifecycleError};
use super::repository::{ApplicationRepository, RepositoryError};
use crate::config::PlacementConfig;

/// Service composing the drive catalog, eligibility gate, lifecycle rules, and repository.
pub struct PlacementApplicationService<R> {
    repository: Arc<R>,
    catalog: Arc<DriveCatalog>,
    ranker: RecommendationRanker,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R> PlacementApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<DriveCatalog>, config: &PlacementConfig) -> Self {
        Self {
            repository,
            catalog,
            ranker: RecommendationRanker::new(config.recommendation_limit),
        }
    }

    pub fn catalog(&self) -> &DriveCatalog {
        &self.catalog
    }

    fn drive(&self, drive_id: &DriveId) -> Result<&Drive, ApplicationServiceError> {
        self.catalog
            .get(drive_id)
            .ok_or_else(|| ApplicationServiceError::UnknownDrive(drive_id.clone()))
    }

    /// Apply to a drive on behalf of a student. Duplicates are rejected before eligibility runs.
    pub fn apply(
        &self,
        profile: &CandidateProfile,
        drive_id: &DriveId,
    ) -> Result<Application, ApplicationServiceError> {
        let drive = self.drive(drive_id)?;
        let existing = self
            .repository
            .find_for_pair(&drive.id, &profile.student_id)?;

        let application = Application::submit(
            next_application_id(),
            drive.id.clone(),
            profile.student_id.clone(),
            existing.iter(),
            Utc::now(),
        )?;

        let eligibility = evaluate(profile, &drive.criteria);
        if !eligibility.is_eligible {
            info!(
                drive_id = %drive.id,
                student_id = %profile.student_id,
                failed = eligibility.failed_checks().count(),
                "application rejected by eligibility gate"
            );
            return Err(ApplicationServiceError::Ineligible(eligibility));
        }

        let stored = self
            .repository
            .insert(application)
            .map_err(|err| match err {
                RepositoryError::Conflict => {
                    ApplicationServiceError::Lifecycle(LifecycleError::DuplicateApplication {
                        drive_id: drive.id.clone(),
                        student_id: profile.student_id.clone(),
                    })
                }
                other => ApplicationServiceError::Repository(other),
            })?;

        info!(
            application_id = %stored.id,
            drive_id = %stored.drive_id,
            student_id = %stored.student_id,
            "application submitted"
        );
        Ok(stored)
    }

    /// Move an application along the status graph and persist it.
    pub fn update_status(
        &self,
        application_id: &ApplicationId,
        requested: ApplicationStatus,
    ) -> Result<Application, ApplicationServiceError> {
        let mut application = self.get(application_id)?;
        let previous = application.advance(requested, Utc::now())?;
        match self.repository.update(application.clone(), previous) {
            Ok(()) => {}
            Err(RepositoryError::Conflict) => {
                let current = self.get(application_id)?.status;
                warn!(
                    application_id = %application.id,
                    expected = %previous,
                    current = %current,
                    requested = %requested,
                    "status changed underneath update"
                );
                return Err(LifecycleError::InvalidTransition { current, requested }.into());
            }
            Err(other) => return Err(other.into()),
        }

        info!(
            application_id = %application.id,
            from = %previous,
            to = %application.status,
            "application status updated"
        );
        Ok(application)
    }

    /// Fetch an application for API responses.
    pub fn get(&self, application_id: &ApplicationId) -> Result<Application, ApplicationServiceError> {
        let application = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(application)
    }

    pub fn applications_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Application>, ApplicationServiceError> {
        Ok(self.repository.for_student(student_id)?)
    }

    pub fn applicants_for_drive(
        &self,
        drive_id: &DriveId,
    ) -> Result<Vec<Application>, ApplicationServiceError> {
        let drive = self.drive(drive_id)?;
        Ok(self.repository.for_drive(&drive.id)?)
    }

    /// Eligibility of a student for a catalog drive, without side effects.
    pub fn eligibility(
        &self,
        profile: &CandidateProfile,
        drive_id: &DriveId,
    ) -> Result<EligibilityResult, ApplicationServiceError> {
        let drive = self.drive(drive_id)?;
        Ok(evaluate(profile, &drive.criteria))
    }

    /// Top picks from the catalog that the student is eligible for and has not applied to.
    pub fn recommendations(
        &self,
        profile: &CandidateProfile,
    ) -> Result<Vec<RecommendedDrive<'_>>, ApplicationServiceError> {
        let applications = self.repository.for_student(&profile.student_id)?;
        let picks = self
            .ranker
            .rank(profile, self.catalog.drives(), &applications);
        debug!(
            student_id = %profile.student_id,
            picks = picks.len(),
            "recommendations computed"
        );
        Ok(picks)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("{}", .0.summary())]
    Ineligible(EligibilityResult),
    #[error("unknown drive {0}")]
    UnknownDrive(DriveId),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
