use std::fs;
use std::path::Path;
use std::time::Duration;

use super::parsing::split_key_value;
use crate::logic::{
    DEFAULT_PAGE_SIZE, DEFAULT_PRIMARY_LANGUAGE_ID, DEFAULT_SECONDARY_LANGUAGE_ID, ListConfig,
};
use crate::sources::DEFAULT_ENDPOINT;

/// Commented skeleton written when no settings file exists yet.
pub const SKELETON_SETTINGS_CONTENT: &str = "# dexpage settings
#
# Lines are `key = value`. Comments start with `#` or `//`.

# Species fetched per page. A full page enables the Next control.
page_size = 50

# Language ids shown per row (1 = Japanese, 9 = English in PokeAPI).
primary_language_id = 1
secondary_language_id = 9

# GraphQL endpoint queried for species pages.
endpoint = https://beta.pokeapi.co/graphql/v1beta

# Whole-request timeout in seconds.
request_timeout_secs = 15

# Pages kept in memory; 0 disables the cache.
cache_capacity = 32
";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Entities per page; always positive.
    pub page_size: u32,
    /// Language id for the primary (bold) label.
    pub primary_language_id: i64,
    /// Language id for the secondary label.
    pub secondary_language_id: i64,
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Pages kept in the result cache; 0 disables it.
    pub cache_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            primary_language_id: DEFAULT_PRIMARY_LANGUAGE_ID,
            secondary_language_id: DEFAULT_SECONDARY_LANGUAGE_ID,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 15,
            cache_capacity: 32,
        }
    }
}

impl Settings {
    /// Listing constants for the controller.
    #[must_use]
    pub const fn list_config(&self) -> ListConfig {
        ListConfig {
            page_size: self.page_size,
            primary_language_id: self.primary_language_id,
            secondary_language_id: self.secondary_language_id,
        }
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Details:
/// - Unknown keys and unparsable values are ignored so the previous value stays.
/// - `page_size = 0` and `request_timeout_secs = 0` are rejected.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "page_size" | "limit" => match val.parse::<u32>() {
                Ok(v) if v > 0 => settings.page_size = v,
                _ => tracing::warn!(value = val, "ignoring invalid page_size"),
            },
            "primary_language_id" | "primary_language" => {
                if let Ok(v) = val.parse::<i64>() {
                    settings.primary_language_id = v;
                }
            }
            "secondary_language_id" | "secondary_language" => {
                if let Ok(v) = val.parse::<i64>() {
                    settings.secondary_language_id = v;
                }
            }
            "endpoint" | "graphql_endpoint" => {
                if !val.is_empty() {
                    settings.endpoint = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => tracing::warn!(value = val, "ignoring invalid request_timeout_secs"),
            },
            "cache_capacity" | "cache_pages" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.cache_capacity = v;
                }
            }
            other => tracing::debug!(key = other, "unknown settings key"),
        }
    }
    if settings.primary_language_id == settings.secondary_language_id {
        tracing::warn!(
            language_id = settings.primary_language_id,
            "primary and secondary language ids are equal; both labels will match"
        );
    }
}

/// What: Load settings from `path`, writing a skeleton first when the file is missing.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    if !path.is_file() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SKELETON_SETTINGS_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default settings"),
        }
        return out;
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not read settings; using defaults"),
    }
    out
}

/// Load settings from the default location under the config directory.
pub fn settings() -> Settings {
    load_settings_from(&super::paths::settings_path())
}
