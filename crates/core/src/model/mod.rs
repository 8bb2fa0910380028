mod catalog;
pub mod credentials;
mod directory;
mod enrollment;
mod ids;
mod progress;
mod resource;

pub use catalog::CatalogCourse;
pub use credentials::{Credentials, LoginErrors};
pub use directory::{StudentProfile, Tutor};
pub use enrollment::{EnrollmentRecord, EnrollmentRegistry};
pub use ids::{CourseId, ParseIdError, ResourceId, TutorId};
pub use progress::{Progress, ProgressError};
pub use resource::{CourseProgressTracker, CourseResource};
