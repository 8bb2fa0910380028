use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use portal_core::time::fixed_clock;
use services::{DirectoryService, EnrollmentService, PortalServices};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    CalendarView, CatalogView, ChatView, CourseDetailView, HomeView, LoginView, NotFoundView,
    ProfileView, TutorsView,
};

#[derive(Clone)]
struct TestApp {
    services: PortalServices,
}

impl UiApp for TestApp {
    fn enrollments(&self) -> Arc<EnrollmentService> {
        self.services.enrollments()
    }

    fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Home,
    Catalog,
    CourseDetail(u64),
    Tutors,
    Calendar,
    Profile,
    Chat,
    NotFound,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Catalog => rsx! { CatalogView {} },
        ViewKind::CourseDetail(id) => rsx! { CourseDetailView { id } },
        ViewKind::Tutors => rsx! { TutorsView {} },
        ViewKind::Calendar => rsx! { CalendarView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::NotFound => rsx! {
            NotFoundView { segments: vec!["missing".to_owned(), "page".to_owned()] }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: PortalServices,
}

impl ViewHarness {
    /// Render once. Effects are queued but not run, so guards do not navigate.
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::bundled().expect("bundled fixtures");
    setup_view_harness_with_storage(view, &storage)
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = PortalServices::new(storage, fixed_clock()).expect("services");
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
