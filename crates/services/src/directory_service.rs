use std::sync::Arc;

use portal_core::Clock;
use portal_core::calendar::{CalendarEvent, CalendarMonth, MonthGrid};
use portal_core::model::{CatalogCourse, CourseId, StudentProfile, Tutor};
use storage::Storage;
use storage::repository::{
    CalendarRepository, CatalogRepository, ProfileRepository, TutorDirectory,
};

use crate::error::DirectoryServiceError;

/// Trim and lowercase a search box value.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Read-only access to the catalog, tutors, calendar and profile.
#[derive(Clone)]
pub struct DirectoryService {
    clock: Clock,
    catalog: Arc<dyn CatalogRepository>,
    tutors: Arc<dyn TutorDirectory>,
    calendar: Arc<dyn CalendarRepository>,
    profile: Arc<dyn ProfileRepository>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        Self {
            clock,
            catalog: Arc::clone(&storage.catalog),
            tutors: Arc::clone(&storage.tutors),
            calendar: Arc::clone(&storage.calendar),
            profile: Arc::clone(&storage.profile),
        }
    }

    /// Catalog courses whose name contains `query` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the catalog cannot be read.
    pub fn search_catalog(&self, query: &str) -> Result<Vec<CatalogCourse>, DirectoryServiceError> {
        let query = normalize_query(query);
        let courses = self.catalog.list_courses()?;
        Ok(courses
            .into_iter()
            .filter(|course| query.is_empty() || course.name().to_lowercase().contains(&query))
            .collect())
    }

    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the catalog cannot be read.
    pub fn catalog_course(&self, id: CourseId) -> Result<Option<CatalogCourse>, DirectoryServiceError> {
        Ok(self.catalog.get_course(id)?)
    }

    /// Tutors whose name or subjects contain `query` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the directory cannot be read.
    pub fn search_tutors(&self, query: &str) -> Result<Vec<Tutor>, DirectoryServiceError> {
        let query = normalize_query(query);
        let tutors = self.tutors.list_tutors()?;
        Ok(tutors
            .into_iter()
            .filter(|tutor| tutor.matches_query(&query))
            .collect())
    }

    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the calendar cannot be read.
    pub fn events(&self) -> Result<Vec<CalendarEvent>, DirectoryServiceError> {
        Ok(self.calendar.events()?)
    }

    /// The month containing today, per the service clock.
    #[must_use]
    pub fn current_month(&self) -> CalendarMonth {
        CalendarMonth::containing(self.clock.today())
    }

    /// Lay out `month` with calendar events and today's marker.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the calendar cannot be read.
    pub fn month_grid(&self, month: CalendarMonth) -> Result<MonthGrid, DirectoryServiceError> {
        let events = self.calendar.events()?;
        Ok(MonthGrid::build(month, &events, self.clock.today()))
    }

    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if the profile cannot be read.
    pub fn profile(&self) -> Result<Option<StudentProfile>, DirectoryServiceError> {
        Ok(self.profile.profile()?)
    }
}
