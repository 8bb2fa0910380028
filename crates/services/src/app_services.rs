use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::directory_service::DirectoryService;
use crate::enrollment_service::EnrollmentService;
use crate::error::PortalServicesError;

/// The session object handed to the UI: one shared enrollment state plus
/// read-only directory access.
#[derive(Clone)]
pub struct PortalServices {
    clock: Clock,
    enrollments: Arc<EnrollmentService>,
    directory: Arc<DirectoryService>,
}

impl PortalServices {
    /// Build services over `storage`.
    ///
    /// # Errors
    ///
    /// Returns `PortalServicesError` if the seed enrollments cannot be read.
    pub fn new(storage: &Storage, clock: Clock) -> Result<Self, PortalServicesError> {
        let enrollments = Arc::new(EnrollmentService::from_storage(storage)?);
        let directory = Arc::new(DirectoryService::new(clock, storage));
        Ok(Self {
            clock,
            enrollments,
            directory,
        })
    }

    /// Services over the bundled fixtures.
    ///
    /// # Errors
    ///
    /// Returns `PortalServicesError` if the fixtures cannot be parsed.
    pub fn bundled(clock: Clock) -> Result<Self, PortalServicesError> {
        let storage = Storage::bundled()?;
        Self::new(&storage, clock)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn enrollments(&self) -> Arc<EnrollmentService> {
        Arc::clone(&self.enrollments)
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::CourseId;
    use portal_core::time::fixed_clock;

    #[test]
    fn clones_share_one_enrollment_state() {
        let services = PortalServices::bundled(fixed_clock()).unwrap();
        let other_view = services.clone();
        let course = services
            .directory()
            .search_catalog("Física Cuántica")
            .unwrap()
            .remove(0);
        services.enrollments().enroll(course.enrollment_candidate());
        assert!(other_view.enrollments().is_enrolled(CourseId::new(11)));
    }

    #[test]
    fn empty_storage_starts_with_no_enrollments() {
        let services = PortalServices::new(&Storage::empty(), fixed_clock()).unwrap();
        assert!(services.enrollments().records().is_empty());
    }
}
