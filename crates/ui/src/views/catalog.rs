use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{Notice, SearchBar, ViewState, view_state_from_result};
use crate::vm::{CatalogCourseCardVm, enroll_notice, map_catalog_cards};

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let enrollments = ctx.enrollments();
    let mut search = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let query = search.read().clone();
    let notice_message = notice();
    let state = view_state_from_result(
        ctx.directory()
            .search_catalog(&query)
            .map(|courses| map_catalog_cards(&courses, |id| enrollments.is_enrolled(id))),
    );

    rsx! {
        div { class: "page",
            h2 { "Course catalog" }
            SearchBar {
                placeholder: "Search courses",
                value: query,
                on_search_change: move |value| search.set(value),
            }
            {notice_message.map(|message| rsx! {
                Notice { message, on_dismiss: move |_| notice.set(None) }
            })}
            match state {
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty", "No courses match your search." }
                    } else {
                        div { class: "card-grid",
                            for card in cards {
                                CatalogCourseCard {
                                    card,
                                    on_notice: move |message| notice.set(Some(message)),
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CatalogCourseCard(card: CatalogCourseCardVm, on_notice: EventHandler<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let enrollments = ctx.enrollments();
    let directory = ctx.directory();
    let course_id = card.id;
    let course_name = card.name.clone();
    let button_class = if card.enrolled { "secondary" } else { "primary" };

    rsx! {
        div { class: "course-card catalog",
            span { class: "course-icon", "{card.icon}" }
            h3 { "{card.name}" }
            p { class: "muted", "{card.group_label}" }
            button {
                class: button_class,
                r#type: "button",
                disabled: card.enrolled,
                onclick: move |_| {
                    match directory.catalog_course(course_id) {
                        Ok(Some(course)) => {
                            let outcome = enrollments.enroll(course.enrollment_candidate());
                            on_notice.call(enroll_notice(&course_name, outcome));
                        }
                        Ok(None) => tracing::debug!(%course_id, "catalog entry disappeared"),
                        Err(err) => tracing::warn!(error = %err, "catalog unavailable"),
                    }
                },
                "{card.action_label()}"
            }
        }
    }
}
