use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicationId, DriveId, StudentId};

/// Status of an application as it moves through a drive's selection process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Interviewing,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Selected => "Selected",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Statuses reachable in one step.
    pub const fn next_statuses(self) -> &'static [ApplicationStatus] {
        match self {
            ApplicationStatus::Applied => {
                &[ApplicationStatus::Shortlisted, ApplicationStatus::Rejected]
            }
            ApplicationStatus::Shortlisted => &[ApplicationStatus::Interviewing],
            ApplicationStatus::Interviewing => {
                &[ApplicationStatus::Selected, ApplicationStatus::Rejected]
            }
            ApplicationStatus::Selected | ApplicationStatus::Rejected => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    pub fn can_transition_to(self, requested: ApplicationStatus) -> bool {
        self.next_statuses().contains(&requested)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejections raised by the application lifecycle. Neither leaves a record partially updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("cannot move application from {current} to {requested}")]
    InvalidTransition {
        current: ApplicationStatus,
        requested: ApplicationStatus,
    },
    #[error("student {student_id} has already applied to drive {drive_id}")]
    DuplicateApplication {
        drive_id: DriveId,
        student_id: StudentId,
    },
}

/// Validate a single step of the status graph.
pub fn transition(
    current: ApplicationStatus,
    requested: ApplicationStatus,
) -> Result<ApplicationStatus, LifecycleError> {
    if current.can_transition_to(requested) {
        Ok(requested)
    } else {
        Err(LifecycleError::InvalidTransition { current, requested })
    }
}

/// Application of one student to one drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub drive_id: DriveId,
    pub student_id: StudentId,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Application {
    /// Create an `Applied` record unless `existing` already holds one for the same pair, in any status.
    pub fn submit<'a, I>(
        id: ApplicationId,
        drive_id: DriveId,
        student_id: StudentId,
        existing: I,
        now: DateTime<Utc>,
    ) -> Result<Self, LifecycleError>
    where
        I: IntoIterator<Item = &'a Application>,
    {
        if existing
            .into_iter()
            .any(|application| application.matches(&drive_id, &student_id))
        {
            return Err(LifecycleError::DuplicateApplication {
                drive_id,
                student_id,
            });
        }

        Ok(Self {
            id,
            drive_id,
            student_id,
            status: ApplicationStatus::Applied,
            applied_at: now,
            updated_at: None,
        })
    }

    pub fn matches(&self, drive_id: &DriveId, student_id: &StudentId) -> bool {
        &self.drive_id == drive_id && &self.student_id == student_id
    }

    /// Move to `requested`, stamping `updated_at`. Returns the previous status.
    pub fn advance(
        &mut self,
        requested: ApplicationStatus,
        now: DateTime<Utc>,
    ) -> Result<ApplicationStatus, LifecycleError> {
        let next = transition(self.status, requested)?;
        let previous = self.status;
        self.status = next;
        self.updated_at = Some(now);
        Ok(previous)
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.applied_at)
    }
}
