use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_result};
use crate::vm::ProfileVm;

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(ctx.directory().profile());

    rsx! {
        div { class: "page profile",
            h2 { "Profile" }
            match state {
                ViewState::Ready(Some(profile)) => {
                    let vm = ProfileVm::from(&profile);
                    rsx! {
                        div { class: "profile-card",
                            div { class: "avatar", "{vm.initials}" }
                            dl {
                                dt { "Name" }
                                dd { "{vm.name}" }
                                dt { "Email" }
                                dd { "{vm.email}" }
                                dt { "Date of birth" }
                                dd { "{vm.birth_date}" }
                            }
                        }
                    }
                }
                ViewState::Ready(None) => rsx! {
                    p { class: "empty", "No profile information available." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}
