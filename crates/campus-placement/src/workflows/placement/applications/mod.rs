//! Application intake and the status lifecycle for placement drives.

pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use lifecycle::{transition, Application, ApplicationStatus, LifecycleError};
pub use repository::{ApplicationRepository, ApplicationStatusView, RepositoryError};
pub use router::application_router;
pub use service::{ApplicationServiceError, PlacementApplicationService};
