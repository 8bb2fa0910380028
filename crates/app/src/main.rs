use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, DirectoryService, EnrollmentService, PortalServices};
use storage::{InMemoryRepository, Storage, StorageError};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Parser)]
#[command(name = "student-portal")]
#[command(about = "Desktop student portal: courses, tutors and the academic calendar", long_about = None)]
struct Args {
    /// Pin today's date (YYYY-MM-DD) for the calendar
    #[arg(long, env = "PORTAL_TODAY")]
    today: Option<NaiveDate>,

    /// Start the session without any enrolled courses
    #[arg(long, env = "PORTAL_NO_SEED")]
    no_seed: bool,

    /// Tracing filter directive, e.g. `info` or `services=debug`
    #[arg(long, env = "PORTAL_LOG", default_value = "info")]
    log: String,

    /// Window title
    #[arg(long, default_value = "Student Portal")]
    title: String,
}

impl Args {
    fn clock(&self) -> Clock {
        self.today.map_or_else(Clock::default_clock, Clock::fixed_on)
    }
}

struct DesktopApp {
    services: PortalServices,
}

impl UiApp for DesktopApp {
    fn enrollments(&self) -> Arc<EnrollmentService> {
        self.services.enrollments()
    }

    fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }
}

fn init_logging(directive: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn build_storage(no_seed: bool) -> Result<Storage, StorageError> {
    let repo = InMemoryRepository::bundled()?;
    let repo = if no_seed {
        repo.without_enrollments()
    } else {
        repo
    };
    Ok(Storage::in_memory(repo))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log)?;

    let clock = args.clock();
    let storage = build_storage(args.no_seed)?;
    let services = PortalServices::new(&storage, clock)?;
    tracing::info!(
        today = %clock.today(),
        fixed_clock = clock.is_fixed(),
        enrolled = services.enrollments().records().len(),
        "starting student portal"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
