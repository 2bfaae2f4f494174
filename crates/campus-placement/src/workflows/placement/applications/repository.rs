use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{ApplicationId, DriveId, StudentId};
use super::lifecycle::{Application, ApplicationStatus};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// `insert` must enforce the one-application-per-(drive, student) rule atomically and answer
/// `Conflict` when it is violated; the service relies on it under concurrent submissions.
/// `update` is a compare-and-swap: it replaces the stored record only while its status is still
/// `expected`, and answers `Conflict` otherwise.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    fn update(
        &self,
        application: Application,
        expected: ApplicationStatus,
    ) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn find_for_pair(
        &self,
        drive_id: &DriveId,
        student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError>;
    fn for_student(&self, student_id: &StudentId) -> Result<Vec<Application>, RepositoryError>;
    fn for_drive(&self, drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub drive_id: DriveId,
    pub student_id: StudentId,
    pub status: &'static str,
    pub applied_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub next_statuses: Vec<&'static str>,
}

impl Application {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            drive_id: self.drive_id.clone(),
            student_id: self.student_id.clone(),
            status: self.status.label(),
            applied_at: self.applied_at,
            updated_at: self.updated_at,
            next_statuses: self
                .status
                .next_statuses()
                .iter()
                .map(|status| ApplicationStatus::label(*status))
                .collect(),
        }
    }
}
