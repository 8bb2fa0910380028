use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{Notice, SearchBar, ViewState, view_state_from_result};
use crate::vm::{TutorCardVm, map_tutor_cards, schedule_notice};

#[component]
pub fn TutorsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut search = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let query = search.read().clone();
    let notice_message = notice();
    let state = view_state_from_result(
        ctx.directory()
            .search_tutors(&query)
            .map(|tutors| map_tutor_cards(&tutors)),
    );

    rsx! {
        div { class: "page",
            h2 { "Tutors" }
            SearchBar {
                placeholder: "Search by name or subject",
                value: query,
                on_search_change: move |value| search.set(value),
            }
            {notice_message.map(|message| rsx! {
                Notice { message, on_dismiss: move |_| notice.set(None) }
            })}
            match state {
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty", "No tutors match your search." }
                    } else {
                        div { class: "card-grid",
                            for card in cards {
                                TutorCard {
                                    card,
                                    on_schedule: move |name: String| {
                                        notice.set(Some(schedule_notice(&name)));
                                    },
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
fn TutorCard(card: TutorCardVm, on_schedule: EventHandler<String>) -> Element {
    let name = card.name.clone();

    rsx! {
        div { class: "tutor-card",
            h3 { "{card.name}" }
            p { class: "subjects", "{card.subjects}" }
            p { "{card.description}" }
            p { class: "muted", "Available: {card.availability}" }
            button {
                class: "primary",
                r#type: "button",
                onclick: move |_| on_schedule.call(name.clone()),
                "Schedule"
            }
        }
    }
}
