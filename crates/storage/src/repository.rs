use std::collections::HashMap;
use std::sync::Arc;

use portal_core::calendar::CalendarEvent;
use portal_core::model::{
    CatalogCourse, CourseId, CourseResource, EnrollmentRecord, StudentProfile, Tutor,
};
use thiserror::Error;

use crate::fixtures;

/// Errors surfaced by data providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("bundled fixture is malformed: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the resource list for a course.
///
/// Stands in for a future fetch from a course-content service.
pub trait CourseContentProvider: Send + Sync {
    /// Resources for `course_id`, in display order. Unknown courses yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn resources_for(&self, course_id: CourseId) -> Result<Vec<CourseResource>, StorageError>;
}

pub trait CatalogRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn list_courses(&self) -> Result<Vec<CatalogCourse>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn get_course(&self, id: CourseId) -> Result<Option<CatalogCourse>, StorageError>;
}

/// Enrollments a fresh session starts with.
pub trait SeedRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn seed_enrollments(&self) -> Result<Vec<EnrollmentRecord>, StorageError>;
}

pub trait TutorDirectory: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn list_tutors(&self) -> Result<Vec<Tutor>, StorageError>;
}

pub trait CalendarRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn events(&self) -> Result<Vec<CalendarEvent>, StorageError>;
}

pub trait ProfileRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    fn profile(&self) -> Result<Option<StudentProfile>, StorageError>;
}

/// Read-only in-memory data set backing every provider trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    enrollments: Vec<EnrollmentRecord>,
    catalog: Vec<CatalogCourse>,
    content: HashMap<CourseId, Vec<CourseResource>>,
    tutors: Vec<Tutor>,
    events: Vec<CalendarEvent>,
    profile: Option<StudentProfile>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the data set compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Fixture` if the embedded JSON does not parse.
    pub fn bundled() -> Result<Self, StorageError> {
        fixtures::load_bundled()
    }

    #[must_use]
    pub fn with_enrollment(mut self, record: EnrollmentRecord) -> Self {
        self.enrollments.push(record);
        self
    }

    #[must_use]
    pub fn with_course(mut self, course: CatalogCourse) -> Self {
        self.catalog.push(course);
        self
    }

    #[must_use]
    pub fn with_content(mut self, course_id: CourseId, resources: Vec<CourseResource>) -> Self {
        self.content.insert(course_id, resources);
        self
    }

    #[must_use]
    pub fn with_tutor(mut self, tutor: Tutor) -> Self {
        self.tutors.push(tutor);
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: CalendarEvent) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: StudentProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Same data without the seed enrollments.
    #[must_use]
    pub fn without_enrollments(mut self) -> Self {
        self.enrollments.clear();
        self
    }
}

impl CourseContentProvider for InMemoryRepository {
    fn resources_for(&self, course_id: CourseId) -> Result<Vec<CourseResource>, StorageError> {
        Ok(self.content.get(&course_id).cloned().unwrap_or_default())
    }
}

impl CatalogRepository for InMemoryRepository {
    fn list_courses(&self) -> Result<Vec<CatalogCourse>, StorageError> {
        Ok(self.catalog.clone())
    }

    fn get_course(&self, id: CourseId) -> Result<Option<CatalogCourse>, StorageError> {
        Ok(self.catalog.iter().find(|course| course.id() == id).cloned())
    }
}

impl SeedRepository for InMemoryRepository {
    fn seed_enrollments(&self) -> Result<Vec<EnrollmentRecord>, StorageError> {
        Ok(self.enrollments.clone())
    }
}

impl TutorDirectory for InMemoryRepository {
    fn list_tutors(&self) -> Result<Vec<Tutor>, StorageError> {
        Ok(self.tutors.clone())
    }
}

impl CalendarRepository for InMemoryRepository {
    fn events(&self) -> Result<Vec<CalendarEvent>, StorageError> {
        Ok(self.events.clone())
    }
}

impl ProfileRepository for InMemoryRepository {
    fn profile(&self) -> Result<Option<StudentProfile>, StorageError> {
        Ok(self.profile.clone())
    }
}

/// Aggregates the provider traits behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub content: Arc<dyn CourseContentProvider>,
    pub seeds: Arc<dyn SeedRepository>,
    pub tutors: Arc<dyn TutorDirectory>,
    pub calendar: Arc<dyn CalendarRepository>,
    pub profile: Arc<dyn ProfileRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        let repo = Arc::new(repo);
        Self {
            catalog: repo.clone(),
            content: repo.clone(),
            seeds: repo.clone(),
            tutors: repo.clone(),
            calendar: repo.clone(),
            profile: repo,
        }
    }

    /// Storage over the bundled fixtures.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Fixture` if the embedded JSON does not parse.
    pub fn bundled() -> Result<Self, StorageError> {
        Ok(Self::in_memory(InMemoryRepository::bundled()?))
    }

    /// Storage with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::in_memory(InMemoryRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::{Progress, ResourceId};

    #[test]
    fn unknown_course_has_no_resources() {
        let repo = InMemoryRepository::new();
        assert!(repo.resources_for(CourseId::new(404)).unwrap().is_empty());
    }

    #[test]
    fn builder_content_is_served_per_course() {
        let resources = vec![CourseResource::new(
            ResourceId::new(1),
            "Intro",
            "Welcome video",
            false,
        )];
        let repo = InMemoryRepository::new().with_content(CourseId::new(3), resources.clone());
        assert_eq!(repo.resources_for(CourseId::new(3)).unwrap(), resources);
        assert!(repo.resources_for(CourseId::new(4)).unwrap().is_empty());
    }

    #[test]
    fn get_course_finds_by_id() {
        let repo = InMemoryRepository::new()
            .with_course(CatalogCourse::new(CourseId::new(9), "Matemáticas Avanzadas", "A4", "📐"));
        let found = repo.get_course(CourseId::new(9)).unwrap().unwrap();
        assert_eq!(found.name(), "Matemáticas Avanzadas");
        assert!(repo.get_course(CourseId::new(1)).unwrap().is_none());
    }

    #[test]
    fn storage_handles_share_one_data_set() {
        let repo = InMemoryRepository::new().with_enrollment(EnrollmentRecord::new(
            CourseId::new(1),
            "Matemáticas I",
            "A1",
            Progress::ZERO,
        ));
        let storage = Storage::in_memory(repo);
        assert_eq!(storage.seeds.seed_enrollments().unwrap().len(), 1);
        assert!(storage.catalog.list_courses().unwrap().is_empty());
        assert!(storage.profile.profile().unwrap().is_none());
    }

    #[test]
    fn without_enrollments_clears_only_seeds() {
        let repo = InMemoryRepository::new()
            .with_enrollment(EnrollmentRecord::new(CourseId::new(1), "A", "B", Progress::ZERO))
            .with_course(CatalogCourse::new(CourseId::new(1), "A", "B", ""))
            .without_enrollments();
        assert!(repo.seed_enrollments().unwrap().is_empty());
        assert_eq!(repo.list_courses().unwrap().len(), 1);
    }
}
