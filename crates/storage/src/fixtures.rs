//! JSON fixtures compiled into the crate.

use portal_core::calendar::CalendarEvent;
use portal_core::model::{
    CatalogCourse, CourseId, CourseResource, EnrollmentRecord, StudentProfile, Tutor,
};
use serde::Deserialize;

use crate::repository::{InMemoryRepository, StorageError};

const BUNDLED_JSON: &str = include_str!("../data/portal.json");

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    enrollments: Vec<EnrollmentRecord>,
    #[serde(default)]
    catalog: Vec<CatalogCourse>,
    #[serde(default)]
    content: Vec<CourseContent>,
    #[serde(default)]
    tutors: Vec<Tutor>,
    #[serde(default)]
    calendar: Vec<CalendarEvent>,
    profile: Option<StudentProfile>,
}

#[derive(Debug, Deserialize)]
struct CourseContent {
    course_id: CourseId,
    resources: Vec<CourseResource>,
}

/// Parse a fixture document into a repository.
///
/// # Errors
///
/// Returns `StorageError::Fixture` if `json` does not match the fixture schema.
pub fn parse(json: &str) -> Result<InMemoryRepository, StorageError> {
    let file: FixtureFile = serde_json::from_str(json)?;
    tracing::debug!(
        enrollments = file.enrollments.len(),
        catalog = file.catalog.len(),
        tutors = file.tutors.len(),
        events = file.calendar.len(),
        "parsed portal fixtures"
    );

    let mut repo = InMemoryRepository::new();
    for record in file.enrollments {
        repo = repo.with_enrollment(record);
    }
    for course in file.catalog {
        repo = repo.with_course(course);
    }
    for entry in file.content {
        repo = repo.with_content(entry.course_id, entry.resources);
    }
    for tutor in file.tutors {
        repo = repo.with_tutor(tutor);
    }
    for event in file.calendar {
        repo = repo.with_event(event);
    }
    if let Some(profile) = file.profile {
        repo = repo.with_profile(profile);
    }
    Ok(repo)
}

pub(crate) fn load_bundled() -> Result<InMemoryRepository, StorageError> {
    parse(BUNDLED_JSON)
}
