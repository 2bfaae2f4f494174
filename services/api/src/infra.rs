use campus_placement::workflows::placement::applications::{
    Application, ApplicationRepository, ApplicationStatus, RepositoryError,
};
use campus_placement::workflows::placement::{ApplicationId, DriveId, StudentId};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local application store. The (drive, student) uniqueness check and the insert
/// happen under one lock.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ApplicationId, Application>>, RepositoryError> {
        self.records.lock().map_err(|_| {
            RepositoryError::Unavailable("application store lock poisoned".to_string())
        })
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut guard = self.records()?;
        let duplicate = guard.contains_key(&application.id)
            || guard
                .values()
                .any(|existing| existing.matches(&application.drive_id, &application.student_id));
        if duplicate {
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
        let mut guard = self.records()?;
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
        Ok(self.records()?.get(id).cloned())
    }

    fn find_for_pair(
        &self,
        drive_id: &DriveId,
        student_id: &StudentId,
    ) -> Result<Option<Application>, RepositoryError> {
        Ok(self
            .records()?
            .values()
            .find(|application| application.matches(drive_id, student_id))
            .cloned())
    }

    fn for_student(&self, student_id: &StudentId) -> Result<Vec<Application>, RepositoryError> {
        let mut applications: Vec<Application> = self
            .records()?
            .values()
            .filter(|application| &application.student_id == student_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(applications)
    }

    fn for_drive(&self, drive_id: &DriveId) -> Result<Vec<Application>, RepositoryError> {
        let mut applications: Vec<Application> = self
            .records()?
            .values()
            .filter(|application| &application.drive_id == drive_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(applications)
    }
}
