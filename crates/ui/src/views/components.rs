use dioxus::prelude::*;

#[component]
pub fn BooksIcon(size: u32) -> Element {
    rsx! {
        svg {
            class: "books-icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M4 19.5A2.5 2.5 0 0 1 6.5 17H20", stroke_linecap: "round" }
            path {
                d: "M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn ProgressBar(progress: u8) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress}%" }
            }
            span { class: "progress-label", "{progress}%" }
        }
    }
}

#[component]
pub fn SearchBar(
    #[props(into)] placeholder: String,
    value: String,
    on_search_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "search",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_search_change.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn Notice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice",
            span { "{message}" }
            button {
                class: "notice-close",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
