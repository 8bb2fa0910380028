use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::credentials::MIN_PASSWORD_CHARS;

use crate::routes::Route;
use crate::views::BooksIcon;
use crate::vm::LoginFormVm;

#[component]
pub fn LoginView() -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(LoginFormVm::default);

    let current = form.read().clone();

    rsx! {
        div { class: "page login",
            form {
                class: "login-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let accepted = form.write().submit();
                    match accepted {
                        Some(credentials) => {
                            tracing::info!(email = %credentials.email(), "login accepted");
                            navigator.push(Route::Home {});
                        }
                        None => tracing::debug!("login rejected by local validation"),
                    }
                },
                BooksIcon { size: 48 }
                h2 { "Sign in" }
                label { class: "field",
                    span { "Email" }
                    input {
                        class: current.email_class(),
                        r#type: "text",
                        placeholder: "name@example.com",
                        value: "{current.email}",
                        oninput: move |evt| form.write().set_email(evt.value()),
                    }
                    if current.errors.email {
                        span { class: "field-error", "Enter a valid email address." }
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        class: current.password_class(),
                        r#type: "password",
                        value: "{current.password}",
                        oninput: move |evt| form.write().set_password(evt.value()),
                    }
                    if current.errors.password {
                        span { class: "field-error",
                            "Password must be at least {MIN_PASSWORD_CHARS} characters."
                        }
                    }
                }
                button { class: "primary", r#type: "submit", "Log in" }
            }
        }
    }
}
