//! Configuration for dexpage: directories, `settings.conf` parsing and defaults.
//!
//! Settings are read once at start-up. The listing constants they produce
//! (page size, language ids) stay fixed for the whole session.

/// Line-level parsing helpers for `.conf` files.
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings type, parser and loader.
mod settings;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    SKELETON_SETTINGS_CONTENT, Settings, load_settings_from, parse_settings, settings,
};
