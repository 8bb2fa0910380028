use serde::{Deserialize, Serialize};

use crate::model::ids::ResourceId;
use crate::model::progress::Progress;

/// One piece of course content (video, guide, exercise set) with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResource {
    id: ResourceId,
    name: String,
    description: String,
    #[serde(default)]
    completed: bool,
}

impl CourseResource {
    #[must_use]
    pub fn new(
        id: ResourceId,
        name: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            completed,
        }
    }

    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Completion state for one course's resources.
///
/// The resource list is fixed at construction; only the `completed` flag of
/// each entry changes. Progress is derived on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseProgressTracker {
    resources: Vec<CourseResource>,
}

impl CourseProgressTracker {
    #[must_use]
    pub fn new(resources: Vec<CourseResource>) -> Self {
        Self { resources }
    }

    /// Flip the completion flag of the matching resource.
    ///
    /// Returns `false` (and changes nothing) when no resource has that id.
    pub fn toggle_completion(&mut self, resource_id: ResourceId) -> bool {
        match self
            .resources
            .iter_mut()
            .find(|resource| resource.id == resource_id)
        {
            Some(resource) => {
                resource.completed = !resource.completed;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_ratio(self.completed_count(), self.resources.len())
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.resources.iter().filter(|r| r.completed).count()
    }

    #[must_use]
    pub fn resources(&self) -> &[CourseResource] {
        &self.resources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
