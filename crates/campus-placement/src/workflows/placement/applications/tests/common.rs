use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::config::PlacementConfig;
use crate::workflows::placement::applications::lifecycle::{Application, ApplicationStatus};
use crate::workflows::placement::applications::repository::{
    ApplicationRepository, RepositoryError,
};
use crate::workflows::placement::applications::{
    application_router, PlacementApplicationService,
};
use crate::workflows::placement::catalog::DriveCatalog;
use crate::workflows::placement::domain::{
    ApplicationId, CandidateProfile, DriveId, StudentId,
};

pub(super) fn rahul() -> CandidateProfile {
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

pub(super) fn priya() -> CandidateProfile {
    CandidateProfile {
        student_id: StudentId("s2".to_string()),
        name: "Priya Patel".to_string(),
        cgpa: 7.2,
        branch: "ECE".to_string(),
        backlogs: 1,
        skills: vec![
            "C++".to_string(),
            "Embedded Systems".to_string(),
            "IoT".to_string(),
        ],
        graduation_year: 2024,
    }
}

pub(super) fn drive_id(id: &str) -> DriveId {
    DriveId(id.to_string())
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<ApplicationId, Application>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("poisoned").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut guard = self.records.lock().expect("poisoned");
        if guard.contains_key(&application.id)
            || guard
                .values()
                .any(|existing| existing.matches(&application.drive_id, &application.student_id))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update(
        &self,
        application: Application,
        expected: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("poisoned");
        match guard.get(&application.id).map(|stored| stored.status) {
            None => Err(RepositoryError::NotFound),
            Some(current) if current != expected => Err(RepositoryError::Conflict),
            Some(_) => {
                guard.insert(application.id.clone(), application);
                Ok(())
            }
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Ok(self.records.lock().expect("poisoned").get(id).cloned())
    }

    fn find_for_pair(
        &self,
        drive_id: &DriveId,
        student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("poisoned")
            .values()
            .find(|application| application.matches(drive_id, student_id))
            .cloned())
    }

    fn for_student(&self, student_id: &StudentId) -> Result<Vec<Application>, RepositoryError> {
        let mut applications: Vec<Application> = self
            .records
            .lock()
            .expect("poisoned")
            .values()
            .filter(|application| &application.student_id == student_id)
            .cloned()
            .collect();
        applications.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(applications)
    }

    fn for_drive(&self, drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError> {
        let mut applications: Vec<Application> = self
            .records
            .lock()
            .expect("poisoned")
            .values()
            .filter(|application| &application.drive_id == drive_id)
            .cloned()
            .collect();
        applications.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(applications)
    }
}

/// Repository whose pair lookup misses, so only the insert-time uniqueness check can catch a race.
pub(super) struct RacingRepository;

impl ApplicationRepository for RacingRepository {
    fn insert(&self, _application: Application) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(
        &self,
        _application: Application,
        _expected: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Ok(None)
    }

    fn find_for_pair(
        &self,
        _drive_id: &DriveId,
        _student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError> {
        Ok(None)
    }

    fn for_student(&self, _student_id: &StudentId) -> Result<Vec<Application>, RepositoryError> {
        Ok(Vec::new())
    }

    fn for_drive(&self, _drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _application: Application) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(
        &self,
        _application: Application,
        _expected: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_for_pair(
        &self,
        _drive_id: &DriveId,
        _student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_student(&self, _student_id: &StudentId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_drive(&self, _drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Memory repository whose first two `fetch` calls wait for each other, so two status updates
/// both read the same stored status before either writes.
pub(super) struct LockstepRepository {
    inner: MemoryRepository,
    barrier: Barrier,
    fetches: AtomicUsize,
}

impl LockstepRepository {
    pub(super) fn new() -> Self {
        Self {
            inner: MemoryRepository::default(),
            barrier: Barrier::new(2),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl ApplicationRepository for LockstepRepository {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        self.inner.insert(application)
    }

    fn update(
        &self,
        application: Application,
        expected: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        self.inner.update(application, expected)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let fetched = self.inner.fetch(id);
        if self.fetches.fetch_add(1, Ordering::SeqCst) < 2 {
            self.barrier.wait();
        }
        fetched
    }

    fn find_for_pair(
        &self,
        drive_id: &DriveId,
        student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError> {
        self.inner.find_for_pair(drive_id, student_id)
    }

    fn for_student(&self, student_id: &StudentId) -> Result<Vec<Application>, RepositoryError> {
        self.inner.for_student(student_id)
    }

    fn for_drive(&self, drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError> {
        self.inner.for_drive(drive_id)
    }
}

pub(super) fn service_with<R>(repository: Arc<R>) -> PlacementApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    PlacementApplicationService::new(
        repository,
        Arc::new(DriveCatalog::standard()),
        &PlacementConfig::default(),
    )
}

pub(super) fn build_service() -> (
    Arc<PlacementApplicationService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(service_with(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<PlacementApplicationService<MemoryRepository>>,
) -> axum::Router {
    application_router(service)
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
