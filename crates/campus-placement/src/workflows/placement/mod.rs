//! Campus placement workflow: drive eligibility, resume heuristics, application lifecycle, and
//! recommendations.
//!
//! Every engine here is a pure computation over caller supplied records. Persistence and
//! identity live behind the [`applications::ApplicationRepository`] port and the HTTP router.

pub mod applications;
pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod recommendations;
pub mod resume;

pub use catalog::{CatalogImportError, DriveCatalog, DriveCatalogImporter};
pub use domain::{
    ApplicationId, CandidateProfile, Drive, DriveCategory, DriveId, EligibilityCriteria, StudentId,
};
pub use eligibility::{evaluate, EligibilityCheck, EligibilityResult, EligibilityRule};
pub use recommendations::{match_probability, rank, RecommendationRanker, RecommendedDrive};
pub use resume::{score, NotAResume, PerformanceBreakdown, ResumeScoreReport};
