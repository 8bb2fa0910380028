use serde::{Deserialize, Serialize};

use crate::model::ids::CourseId;
use crate::model::progress::Progress;

/// A course the current session is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    id: CourseId,
    name: String,
    group: String,
    progress: Progress,
}

impl EnrollmentRecord {
    #[must_use]
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        group: impl Into<String>,
        progress: Progress,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            group: group.into(),
            progress,
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

    /// Progress as recorded at enrollment (or seed) time.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    fn reset_progress(self) -> Self {
        Self {
            progress: Progress::ZERO,
            ..self
        }
    }
}

/// Ordered set of enrollment records keyed by course id.
///
/// Records are only ever appended. A second `enroll` for an id already
/// present is rejected without touching the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentRegistry {
    records: Vec<EnrollmentRecord>,
}

impl EnrollmentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed records, keeping their progress as given.
    ///
    /// Later duplicates of an id are dropped so the registry starts unique.
    #[must_use]
    pub fn seeded(records: impl IntoIterator<Item = EnrollmentRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            if !registry.is_enrolled(record.id()) {
                registry.records.push(record);
            }
        }
        registry
    }

    /// Enroll in a course. Returns `false` when the id is already enrolled.
    ///
    /// The stored record always starts at zero progress, whatever the
    /// candidate carried.
    pub fn enroll(&mut self, candidate: EnrollmentRecord) -> bool {
        if self.is_enrolled(candidate.id()) {
            return false;
        }
        self.records.push(candidate.reset_progress());
        true
    }

    #[must_use]
    pub fn is_enrolled(&self, id: CourseId) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&EnrollmentRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Records in insertion order: seed order first, then enrollment order.
    #[must_use]
    pub fn list(&self) -> &[EnrollmentRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
