//! dexpage binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use dexpage::{app, args, config, state::PageState};

struct DexpageTimer;

impl tracing_subscriber::fmt::time::FormatTime for DexpageTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/dexpage/logs/dexpage.log`.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = config::logs_dir();
    log_path.push("dexpage.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DexpageTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(DexpageTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// What: Fetch one page and print it, for `--print`.
///
/// Output:
/// - Success on a fetched page; failure with the error on stderr otherwise.
async fn print_mode(settings: &config::Settings, page_index: u64) -> ExitCode {
    let source = match app::runtime::build_source(settings) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let page = PageState::at(page_index);
    match args::print_page(page, &settings.list_config(), &source).await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::error!(error = %message, page = page_index, "print failed");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args.effective_settings();
    let start_page = args.start_page_index();
    tracing::info!(
        endpoint = %settings.endpoint,
        page_size = settings.page_size,
        page = start_page,
        print = args.print,
        "dexpage starting"
    );

    let code = if args.print {
        print_mode(&settings, start_page).await
    } else if let Err(err) = app::run(settings, start_page).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("Error: {err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    tracing::info!("dexpage exited");
    code
}
