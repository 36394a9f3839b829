//! Command-line argument definition and settings overrides.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Settings, load_settings_from, settings};

/// dexpage - browse a GraphQL species listing page by page with localized names
#[derive(Parser, Debug)]
#[command(name = "dexpage")]
#[command(version)]
#[command(about = "Browse a GraphQL species listing page by page with localized names", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/dexpage/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint (overrides `endpoint` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Entities per page (overrides `page_size` in settings.conf)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Page to open on, starting at 1
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Print one page to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,
}

impl Args {
    /// What: Settings for this session: the settings file with command-line overrides applied.
    ///
    /// Output:
    /// - Effective `Settings`.
    ///
    /// Details:
    /// - `--config` replaces the default settings path.
    #[must_use]
    pub fn effective_settings(&self) -> Settings {
        let base = self
            .config
            .as_deref()
            .map_or_else(settings, load_settings_from);
        self.apply_overrides(base)
    }

    /// What: Apply command-line overrides on top of `settings`.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from file
    ///
    /// Output:
    /// - Settings with `--endpoint` and `--page-size` applied when given.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint.clone_from(endpoint);
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        settings
    }

    /// Zero-based index of the page to open on.
    #[must_use]
    pub const fn start_page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}
