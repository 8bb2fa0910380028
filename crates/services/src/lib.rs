#![forbid(unsafe_code)]

pub mod app_services;
pub mod directory_service;
pub mod enrollment_service;
pub mod error;

pub use portal_core::Clock;

pub use app_services::PortalServices;
pub use directory_service::{DirectoryService, normalize_query};
pub use enrollment_service::{CourseDetail, EnrollOutcome, EnrolledCourse, EnrollmentService};
pub use error::{DirectoryServiceError, EnrollmentServiceError, PortalServicesError};
