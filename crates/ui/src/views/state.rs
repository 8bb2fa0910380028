#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Ready(T),
    Error(ViewError),
}

/// Collapse a service result into something a view can match on.
///
/// The underlying error is logged; views only show a generic message.
#[must_use]
pub fn view_state_from_result<T, E: std::fmt::Display>(result: Result<T, E>) -> ViewState<T> {
    match result {
        Ok(data) => ViewState::Ready(data),
        Err(err) => {
            tracing::warn!(error = %err, "view data unavailable");
            ViewState::Error(ViewError::Unknown)
        }
    }
}
