mod calendar;
mod catalog;
mod chat;
mod components;
mod course_detail;
mod home;
mod login;
mod not_found;
mod profile;
mod state;
mod tutors;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use calendar::CalendarView;
pub use catalog::CatalogView;
pub use chat::ChatView;
pub use components::{BooksIcon, Notice, ProgressBar, SearchBar};
pub use course_detail::CourseDetailView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use profile::ProfileView;
pub use state::{ViewError, ViewState, view_state_from_result};
pub use tutors::TutorsView;
