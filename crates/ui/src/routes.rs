use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::views::{
    BooksIcon, CalendarView, CatalogView, ChatView, CourseDetailView, HomeView, LoginView,
    NotFoundView, ProfileView, TutorsView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuestLayout)]
        #[route("/", LoginView)] Login {},
    #[end_layout]
    #[layout(PortalLayout)]
        #[route("/home", HomeView)] Home {},
        #[route("/courses", CatalogView)] Catalog {},
        #[route("/courses/:id", CourseDetailView)] CourseDetail { id: u64 },
        #[route("/tutors", TutorsView)] Tutors {},
        #[route("/calendar", CalendarView)] Calendar {},
        #[route("/profile", ProfileView)] Profile {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn GuestLayout() -> Element {
    rsx! {
        div { class: "app guest",
            Header { show_menu: false }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn PortalLayout() -> Element {
    rsx! {
        div { class: "app",
            Header { show_menu: true }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header(show_menu: bool) -> Element {
    let navigator = use_navigator();

    rsx! {
        header { class: "header",
            div { class: "brand",
                BooksIcon { size: 28 }
                span { class: "brand-name", "Student Portal" }
            }
            if show_menu {
                nav { class: "menu",
                    Link { class: "menu-item", to: Route::Home {}, "Home" }
                    Link { class: "menu-item", to: Route::Catalog {}, "Courses" }
                    Link { class: "menu-item", to: Route::Tutors {}, "Tutors" }
                    Link { class: "menu-item", to: Route::Calendar {}, "Calendar" }
                    Link { class: "menu-item", to: Route::Chat {}, "Chat" }
                    Link { class: "menu-item", to: Route::Profile {}, "Profile" }
                }
                button {
                    class: "logout",
                    r#type: "button",
                    onclick: move |_| {
                        tracing::info!("logged out");
                        navigator.push(Route::Login {});
                    },
                    "Log out"
                }
            }
        }
    }
}
