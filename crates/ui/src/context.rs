use std::sync::Arc;

use services::{DirectoryService, EnrollmentService};

pub trait UiApp: Send + Sync {
    fn enrollments(&self) -> Arc<EnrollmentService>;
    fn directory(&self) -> Arc<DirectoryService>;
}

/// Session services shared by every view.
#[derive(Clone)]
pub struct AppContext {
    enrollments: Arc<EnrollmentService>,
    directory: Arc<DirectoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            enrollments: app.enrollments(),
            directory: app.directory(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
