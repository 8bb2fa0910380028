mod calendar_vm;
mod course_vm;
mod login_vm;
mod profile_vm;
mod tutor_vm;

pub use calendar_vm::{CalendarCellVm, CalendarEventVm, CalendarLegendVm, CalendarVm, LEGEND};
pub use course_vm::{
    CatalogCourseCardVm, CourseDetailVm, EnrolledCourseCardVm, ResourceItemVm, enroll_notice,
    map_catalog_cards, map_enrolled_cards,
};
pub use login_vm::LoginFormVm;
pub use profile_vm::ProfileVm;
pub use tutor_vm::{TutorCardVm, map_tutor_cards, schedule_notice};
