use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use portal_core::model::{CourseId, ResourceId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BooksIcon, ProgressBar, ViewState, view_state_from_result};
use crate::vm::{CourseDetailVm, ResourceItemVm};

#[component]
pub fn CourseDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let enrollments = ctx.enrollments();
    let course_id = CourseId::new(id);
    let mut revision = use_signal(|| 0_u64);

    // re-read after every toggle
    let _ = revision();
    let state = view_state_from_result(enrollments.open_course(course_id));
    let enrolled = !matches!(state, ViewState::Ready(None));

    use_effect(move || {
        if !enrolled {
            tracing::debug!(%course_id, "detail guard redirecting home");
            navigator.replace(Route::Home {});
        }
    });

    let toggles = ctx.enrollments();
    let on_toggle = use_callback(move |resource_id: ResourceId| {
        if toggles.toggle_resource(course_id, resource_id).is_some() {
            revision += 1;
        }
    });

    rsx! {
        div { class: "page course-detail",
            match state {
                ViewState::Ready(Some(detail)) => {
                    let vm = CourseDetailVm::from(&detail);
                    let summary = vm.summary();
                    rsx! {
                        Link { class: "back", to: Route::Home {}, "← Back to my courses" }
                        div { class: "detail-header",
                            BooksIcon { size: 40 }
                            div {
                                h2 { "{vm.name}" }
                                p { class: "muted", "{vm.group_label}" }
                            }
                        }
                        section { class: "detail-progress",
                            ProgressBar { progress: vm.progress }
                            p { class: "muted", "{summary}" }
                        }
                        section { class: "resources",
                            h3 { "Resources" }
                            if vm.resources.is_empty() {
                                p { class: "empty", "This course has no resources yet." }
                            } else {
                                ul {
                                    for resource in vm.resources.iter().cloned() {
                                        ResourceItem {
                                            resource,
                                            on_toggle,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                ViewState::Ready(None) => rsx! {
                    p { class: "empty", "Course not found or you are not enrolled." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ResourceItem(resource: ResourceItemVm, on_toggle: EventHandler<ResourceId>) -> Element {
    let resource_id = resource.id;
    let item_class = if resource.completed {
        "resource completed"
    } else {
        "resource"
    };

    rsx! {
        li { class: item_class,
            label {
                input {
                    r#type: "checkbox",
                    checked: resource.completed,
                    onchange: move |_| on_toggle.call(resource_id),
                }
                div {
                    span { class: "resource-name", "{resource.name}" }
                    p { class: "muted", "{resource.description}" }
                }
            }
        }
    }
}
