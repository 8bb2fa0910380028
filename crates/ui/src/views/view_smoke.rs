use portal_core::model::{CourseId, ResourceId};
use storage::{InMemoryRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn login_view_smoke_renders_form() {
    let html = render(ViewKind::Login);
    assert!(html.contains("Sign in"), "missing heading in {html}");
    assert!(html.contains("Log in"), "missing submit in {html}");
    assert!(!html.contains("Enter a valid email"), "errors shown too early in {html}");
}

#[test]
fn home_view_smoke_lists_enrolled_courses() {
    let html = render(ViewKind::Home);
    assert!(html.contains("Matemáticas I"), "missing course in {html}");
    assert!(html.contains("Group A1"), "missing group in {html}");
    assert!(html.contains("75%"), "missing progress in {html}");
    assert!(!html.contains("Física Cuántica"), "catalog-only course listed in {html}");
}

#[test]
fn home_view_smoke_reads_tracker_progress() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let enrollments = harness.services.enrollments();
    enrollments.open_course(CourseId::new(1)).unwrap();
    enrollments.toggle_resource(CourseId::new(1), ResourceId::new(4));

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("100%"), "missing updated progress in {html}");
}

#[test]
fn home_view_smoke_renders_empty_state() {
    let storage = Storage::in_memory(InMemoryRepository::bundled().unwrap().without_enrollments());
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, &storage);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("You are not enrolled in any course yet."),
        "missing empty state in {html}"
    );
}

#[test]
fn catalog_view_smoke_marks_enrolled_courses() {
    let html = render(ViewKind::Catalog);
    assert!(html.contains("Física Cuántica"), "missing catalog course in {html}");
    assert_eq!(html.matches("Enrolled").count(), 8, "seeded courses in {html}");
    assert_eq!(html.matches("Enroll").count(), 12, "every card has an action in {html}");
}

#[test]
fn catalog_view_smoke_reflects_new_enrollment() {
    let mut harness = setup_view_harness(ViewKind::Catalog);
    let quantum = harness
        .services
        .directory()
        .catalog_course(CourseId::new(11))
        .unwrap()
        .unwrap();
    harness.services.enrollments().enroll(quantum.enrollment_candidate());

    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("Enrolled").count(), 9, "new enrollment missing in {html}");
}

#[test]
fn course_detail_smoke_renders_resources() {
    let html = render(ViewKind::CourseDetail(1));
    assert!(html.contains("Ecuaciones Lineales"), "missing resource in {html}");
    assert!(html.contains("Derivadas"), "missing resource in {html}");
    assert!(html.contains("3 of 4 resources completed"), "missing summary in {html}");
    assert!(html.contains("75%"), "missing progress in {html}");
}

#[test]
fn course_detail_smoke_guards_unenrolled_course() {
    let html = render(ViewKind::CourseDetail(10));
    assert!(
        html.contains("Course not found or you are not enrolled."),
        "missing fallback in {html}"
    );
}

#[test]
fn tutors_view_smoke_lists_directory() {
    let html = render(ViewKind::Tutors);
    assert!(html.contains("Dra. María González"), "missing tutor in {html}");
    assert!(html.contains("Schedule"), "missing action in {html}");
}

#[test]
fn calendar_view_smoke_renders_current_month() {
    let html = render(ViewKind::Calendar);
    assert!(html.contains("November 2025"), "missing month title in {html}");
    assert!(html.contains("Examen Matemáticas"), "missing event in {html}");
    assert!(html.contains("calendar-day today"), "missing today marker in {html}");
    assert!(!html.contains("Navidad"), "December event leaked into {html}");
}

#[test]
fn profile_view_smoke_renders_student() {
    let html = render(ViewKind::Profile);
    assert!(html.contains("Juan Pérez García"), "missing name in {html}");
    assert!(html.contains("15 March 1995"), "missing birth date in {html}");
}

#[test]
fn profile_view_smoke_renders_missing_profile() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Profile, &Storage::empty());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No profile information available."),
        "missing fallback in {html}"
    );
}

#[test]
fn chat_and_not_found_smoke() {
    assert!(render(ViewKind::Chat).contains("coming soon"));
    let html = render(ViewKind::NotFound);
    assert!(html.contains("Page not found"), "missing heading in {html}");
    assert!(html.contains("/missing/page"), "missing path in {html}");
}
