use serde::{Deserialize, Serialize};

use crate::model::enrollment::EnrollmentRecord;
use crate::model::ids::CourseId;
use crate::model::progress::Progress;

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCourse {
    id: CourseId,
    name: String,
    group: String,
    #[serde(default)]
    icon: String,
}

impl CatalogCourse {
    #[must_use]
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        group: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            group: group.into(),
            icon: icon.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Candidate record for enrolling in this course.
    #[must_use]
    pub fn enrollment_candidate(&self) -> EnrollmentRecord {
        EnrollmentRecord::new(self.id, self.name.clone(), self.group.clone(), Progress::ZERO)
    }
}
