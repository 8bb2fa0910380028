use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BooksIcon, ProgressBar, SearchBar};
use crate::vm::{EnrolledCourseCardVm, map_enrolled_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut search = use_signal(String::new);

    let courses = ctx.enrollments().enrolled_courses();
    let query = search.read().clone();
    let cards = map_enrolled_cards(&courses, &query);

    rsx! {
        div { class: "page",
            h2 { "My courses" }
            SearchBar {
                placeholder: "Search my courses",
                value: query,
                on_search_change: move |value| search.set(value),
            }
            if courses.is_empty() {
                p { class: "empty", "You are not enrolled in any course yet." }
            } else if cards.is_empty() {
                p { class: "empty", "No courses match your search." }
            } else {
                div { class: "card-grid",
                    for card in cards {
                        EnrolledCourseCard { card }
                    }
                }
            }
        }
    }
}

#[component]
fn EnrolledCourseCard(card: EnrolledCourseCardVm) -> Element {
    rsx! {
        Link {
            class: "course-card",
            to: Route::CourseDetail { id: card.id.value() },
            BooksIcon { size: 32 }
            h3 { "{card.name}" }
            p { class: "muted", "{card.group_label}" }
            ProgressBar { progress: card.progress }
        }
    }
}
