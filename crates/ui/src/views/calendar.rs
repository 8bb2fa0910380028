use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_result};
use crate::vm::{CalendarCellVm, CalendarVm, LEGEND};

#[component]
pub fn CalendarView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let initial = directory.current_month();
    let mut month = use_signal(move || initial);

    let shown = month();
    let state = view_state_from_result(
        directory
            .events()
            .and_then(|events| {
                directory
                    .month_grid(shown)
                    .map(|grid| CalendarVm::new(&grid, &events))
            }),
    );

    rsx! {
        div { class: "page calendar",
            h2 { "Academic calendar" }
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "calendar-nav",
                        button {
                            r#type: "button",
                            aria_label: "Previous month",
                            onclick: move |_| month.set(shown.previous()),
                            "‹"
                        }
                        h3 { "{vm.title}" }
                        button {
                            r#type: "button",
                            aria_label: "Next month",
                            onclick: move |_| month.set(shown.next()),
                            "›"
                        }
                    }
                    div { class: "calendar-grid",
                        for weekday in vm.weekdays {
                            div { class: "calendar-weekday", "{weekday}" }
                        }
                        for cell in vm.cells.iter().cloned() {
                            match cell {
                                CalendarCellVm::Blank => rsx! {
                                    div { class: "calendar-day blank" }
                                },
                                CalendarCellVm::Day { day, class, title } => rsx! {
                                    div { class, title: title.unwrap_or_default(), "{day}" }
                                },
                            }
                        }
                    }
                    div { class: "calendar-legend",
                        for entry in LEGEND {
                            span { class: "legend-item",
                                span { class: "legend-dot {entry.class}" }
                                "{entry.label}"
                            }
                        }
                    }
                    if !vm.events.is_empty() {
                        ul { class: "calendar-events",
                            for event in vm.events.iter() {
                                li { class: event.class,
                                    span { class: "event-date", "{event.date_label}" }
                                    " {event.label}"
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
