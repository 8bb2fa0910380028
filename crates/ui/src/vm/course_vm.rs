use portal_core::model::{CatalogCourse, CourseId, CourseResource, ResourceId};
use services::{CourseDetail, EnrollOutcome, EnrolledCourse, normalize_query};

fn group_label(group: &str) -> String {
    format!("Group {group}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrolledCourseCardVm {
    pub id: CourseId,
    pub name: String,
    pub group_label: String,
    pub progress: u8,
}

impl From<&EnrolledCourse> for EnrolledCourseCardVm {
    fn from(course: &EnrolledCourse) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            group_label: group_label(&course.group),
            progress: course.progress.percent(),
        }
    }
}

/// Cards for the home list, filtered by name.
#[must_use]
pub fn map_enrolled_cards(courses: &[EnrolledCourse], query: &str) -> Vec<EnrolledCourseCardVm> {
    let query = normalize_query(query);
    courses
        .iter()
        .filter(|course| query.is_empty() || course.name.to_lowercase().contains(&query))
        .map(EnrolledCourseCardVm::from)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogCourseCardVm {
    pub id: CourseId,
    pub name: String,
    pub group_label: String,
    pub icon: String,
    pub enrolled: bool,
}

impl CatalogCourseCardVm {
    #[must_use]
    pub fn new(course: &CatalogCourse, enrolled: bool) -> Self {
        Self {
            id: course.id(),
            name: course.name().to_owned(),
            group_label: group_label(course.group()),
            icon: course.icon().to_owned(),
            enrolled,
        }
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.enrolled { "Enrolled" } else { "Enroll" }
    }
}

/// Catalog cards with their enrollment state resolved by `is_enrolled`.
#[must_use]
pub fn map_catalog_cards(
    courses: &[CatalogCourse],
    is_enrolled: impl Fn(CourseId) -> bool,
) -> Vec<CatalogCourseCardVm> {
    courses
        .iter()
        .map(|course| CatalogCourseCardVm::new(course, is_enrolled(course.id())))
        .collect()
}

#[must_use]
pub fn enroll_notice(course_name: &str, outcome: EnrollOutcome) -> String {
    match outcome {
        EnrollOutcome::Enrolled => format!("You are now enrolled in {course_name}"),
        EnrollOutcome::AlreadyEnrolled => format!("You are already enrolled in {course_name}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceItemVm {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl From<&CourseResource> for ResourceItemVm {
    fn from(resource: &CourseResource) -> Self {
        Self {
            id: resource.id(),
            name: resource.name().to_owned(),
            description: resource.description().to_owned(),
            completed: resource.is_completed(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub id: CourseId,
    pub name: String,
    pub group_label: String,
    pub progress: u8,
    pub resources: Vec<ResourceItemVm>,
}

impl CourseDetailVm {
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.resources.iter().filter(|r| r.completed).count()
    }

    /// e.g. "3 of 4 resources completed".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} of {} resources completed",
            self.completed_count(),
            self.resources.len()
        )
    }
}

impl From<&CourseDetail> for CourseDetailVm {
    fn from(detail: &CourseDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            group_label: group_label(&detail.group),
            progress: detail.progress.percent(),
            resources: detail.resources.iter().map(ResourceItemVm::from).collect(),
        }
    }
}
