use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use portal_core::model::{
    CourseId, CourseProgressTracker, CourseResource, EnrollmentRecord, EnrollmentRegistry,
    Progress, ResourceId,
};
use storage::Storage;
use storage::repository::CourseContentProvider;

use crate::error::EnrollmentServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

impl EnrollOutcome {
    #[must_use]
    pub fn is_enrolled(self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

/// An enrolled course with its current progress.
///
/// `progress` reads through to the course's tracker once the course has been
/// opened; before that it is the value stored at enrollment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub id: CourseId,
    pub name: String,
    pub group: String,
    pub progress: Progress,
}

/// Everything the course-detail view needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetail {
    pub id: CourseId,
    pub name: String,
    pub group: String,
    pub progress: Progress,
    pub resources: Vec<CourseResource>,
}

#[derive(Debug, Default)]
struct SessionState {
    registry: EnrollmentRegistry,
    trackers: HashMap<CourseId, CourseProgressTracker>,
}

impl SessionState {
    fn progress_of(&self, record: &EnrollmentRecord) -> Progress {
        self.trackers
            .get(&record.id())
            .map_or(record.progress(), CourseProgressTracker::progress)
    }

    fn detail(&self, record: &EnrollmentRecord, tracker: &CourseProgressTracker) -> CourseDetail {
        CourseDetail {
            id: record.id(),
            name: record.name().to_owned(),
            group: record.group().to_owned(),
            progress: tracker.progress(),
            resources: tracker.resources().to_vec(),
        }
    }
}

/// Session-scoped enrollment state shared by every view.
///
/// Owns the registry and one progress tracker per opened course. Created at
/// session start and dropped with the session.
pub struct EnrollmentService {
    state: Mutex<SessionState>,
    content: Arc<dyn CourseContentProvider>,
}

impl EnrollmentService {
    #[must_use]
    pub fn new(
        seed: impl IntoIterator<Item = EnrollmentRecord>,
        content: Arc<dyn CourseContentProvider>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState {
                registry: EnrollmentRegistry::seeded(seed),
                trackers: HashMap::new(),
            }),
            content,
        }
    }

    /// Build a service seeded from `storage`.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentServiceError::Storage` if the seed enrollments cannot be read.
    pub fn from_storage(storage: &Storage) -> Result<Self, EnrollmentServiceError> {
        let seed = storage.seeds.seed_enrollments()?;
        tracing::debug!(seeded = seed.len(), "starting enrollment session");
        Ok(Self::new(seed, Arc::clone(&storage.content)))
    }

    // Every mutation is a single step on the registry or one tracker, so a
    // poisoned lock still guards consistent data.
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enroll in a course. Already-enrolled ids are left untouched.
    pub fn enroll(&self, candidate: EnrollmentRecord) -> EnrollOutcome {
        let id = candidate.id();
        let name = candidate.name().to_owned();
        if self.state().registry.enroll(candidate) {
            tracing::info!(course_id = %id, course = %name, "enrolled");
            EnrollOutcome::Enrolled
        } else {
            tracing::debug!(course_id = %id, "already enrolled");
            EnrollOutcome::AlreadyEnrolled
        }
    }

    #[must_use]
    pub fn is_enrolled(&self, id: CourseId) -> bool {
        self.state().registry.is_enrolled(id)
    }

    /// Registry records exactly as stored, in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<EnrollmentRecord> {
        self.state().registry.list().to_vec()
    }

    /// Enrolled courses with read-through progress, in insertion order.
    #[must_use]
    pub fn enrolled_courses(&self) -> Vec<EnrolledCourse> {
        let state = self.state();
        state
            .registry
            .list()
            .iter()
            .map(|record| EnrolledCourse {
                id: record.id(),
                name: record.name().to_owned(),
                group: record.group().to_owned(),
                progress: state.progress_of(record),
            })
            .collect()
    }

    /// Open a course for the detail view.
    ///
    /// Returns `Ok(None)` when the course is not enrolled; callers redirect.
    /// The first open loads the course's resources and starts its tracker.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentServiceError::Storage` if the resources cannot be loaded.
    pub fn open_course(&self, id: CourseId) -> Result<Option<CourseDetail>, EnrollmentServiceError> {
        let mut state = self.state();
        let Some(record) = state.registry.get(id).cloned() else {
            tracing::debug!(course_id = %id, "course not enrolled");
            return Ok(None);
        };

        if !state.trackers.contains_key(&id) {
            let resources = self.content.resources_for(id)?;
            tracing::debug!(course_id = %id, resources = resources.len(), "loaded course content");
            state.trackers.insert(id, CourseProgressTracker::new(resources));
        }

        Ok(state
            .trackers
            .get(&id)
            .map(|tracker| state.detail(&record, tracker)))
    }

    /// Flip one resource's completion flag and return the course's new progress.
    ///
    /// Returns `None` when the course has not been opened. An unknown
    /// resource id leaves progress unchanged.
    pub fn toggle_resource(&self, course_id: CourseId, resource_id: ResourceId) -> Option<Progress> {
        let mut state = self.state();
        let tracker = state.trackers.get_mut(&course_id)?;
        if !tracker.toggle_completion(resource_id) {
            tracing::debug!(%course_id, %resource_id, "toggle for unknown resource ignored");
        }
        Some(tracker.progress())
    }

    /// Current progress for an enrolled course, read through its tracker.
    #[must_use]
    pub fn progress(&self, id: CourseId) -> Option<Progress> {
        let state = self.state();
        state.registry.get(id).map(|record| state.progress_of(record))
    }
}
