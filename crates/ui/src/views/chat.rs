use dioxus::prelude::*;

#[component]
pub fn ChatView() -> Element {
    rsx! {
        div { class: "page chat",
            h2 { "Chat" }
            p { class: "muted", "Messaging with tutors and classmates is coming soon." }
        }
    }
}
