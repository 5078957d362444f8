//! Cycle Hunter application
//!
//! Runs the settings lifecycle the desktop shell performs around a session:
//! load the saved settings (or defaults), apply the user's changes, show the
//! enabled selections, and save once on the way out.
//!
//! Usage:
//!   cargo run -p cyclehunter_app -- --enable-body G.Sun --enable-multiple 5

mod cli;

use std::process::ExitCode;

use cyclehunter_core::config::{JsonFileBackend, LoadStatus, SettingsLocation, SettingsStore};
use cyclehunter_core::logging::{init_tracing, LogLevel};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use cli::{Change, Options};

fn main() -> ExitCode {
    let options = match cli::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("cycle-hunter: {}\n\n{}", message, cli::USAGE);
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let location = SettingsLocation::from_env();
    let _guard = init_logging(&location, options.log_level);

    tracing::info!("Cycle Hunter {} starting", cyclehunter_core::version());
    if location.is_degraded() {
        tracing::warn!(
            "Using fallback settings root {}; settings may not be durable",
            location.root().display()
        );
    }

    run(&location, &options)
}

fn run(location: &SettingsLocation, options: &Options) -> ExitCode {
    let (mut store, status) = SettingsStore::load(JsonFileBackend::at(location), options.revision);

    match &status {
        LoadStatus::Loaded => {}
        LoadStatus::Missing => {
            tracing::info!("Using default settings ({} catalog)", store.revision())
        }
        LoadStatus::Corrupt(err) => tracing::warn!(
            "Previous settings could not be read ({}). Continuing with defaults; \
             the settings file will be overwritten on exit.",
            err
        ),
    }

    for change in &options.changes {
        apply(&mut store, change);
    }

    print_summary(&store, options.list_all);

    match store.save() {
        Ok(()) => {
            tracing::info!("Exiting.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Settings were not saved: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn apply(store: &mut SettingsStore, change: &Change) {
    let (kind, name, matched) = match change {
        Change::Body { name, enabled } => ("body", name, store.set_body_enabled(name, *enabled)),
        Change::Custom { name, enabled } => (
            "custom multiple",
            name,
            store.set_custom_multiple_enabled(name, *enabled),
        ),
        Change::Fixed { name, enabled } => (
            "fixed multiple",
            name,
            store.set_fixed_multiple_enabled(name, *enabled),
        ),
        Change::LastFile(path) => {
            store.set_last_opened_file_path(path.as_str());
            return;
        }
        Change::Reset => {
            tracing::info!("Resetting settings to defaults");
            store.initialize_with_defaults();
            return;
        }
    };

    if !matched {
        tracing::warn!("No {} named '{}'", kind, name);
    }
}

fn print_summary(store: &SettingsStore, list_all: bool) {
    let mark = |enabled: bool| if enabled { "[x]" } else { "[ ]" };

    println!("Last opened file: {}", store.last_opened_file_path());

    println!("Bodies:");
    if list_all {
        for ps in store.body_selections() {
            println!("  {} {}", mark(ps.is_enabled()), ps.display_name());
        }
    } else {
        for ps in store.enabled_body_selections() {
            println!("  {}", ps.display_name());
        }
    }

    for (title, all, enabled) in [
        ("Custom multiples:", store.custom_multiples(), store.enabled_custom_multiples()),
        ("Fixed multiples:", store.fixed_multiples(), store.enabled_fixed_multiples()),
    ] {
        println!("{}", title);
        if list_all {
            for lm in all {
                println!("  {} {}", mark(lm.is_enabled()), lm);
            }
        } else {
            for lm in enabled {
                println!("  {}", lm);
            }
        }
    }
}

/// Log to stderr and to a daily file under the settings directory.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging(location: &SettingsLocation, level: LogLevel) -> Option<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cycle-hunter")
        .filename_suffix("log")
        .build(location.logs_dir());

    match file_appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            init_tracing(level, Some(writer));
            Some(guard)
        }
        Err(err) => {
            init_tracing::<NonBlocking>(level, None);
            tracing::warn!("File logging disabled: {}", err);
            None
        }
    }
}
