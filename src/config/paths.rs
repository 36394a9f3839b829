use std::env;
use std::fs;
use std::path::PathBuf;

/// Name of the per-user directory below the config base.
const APP_DIR: &str = "dexpage";

/// Non-empty environment variable as a path.
fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// What: Config directory for dexpage, created on demand.
///
/// Output:
/// - `$HOME/.config/dexpage`, else `$XDG_CONFIG_HOME/dexpage`, else `./dexpage`.
///
/// Details:
/// - A candidate is skipped when its directory cannot be created.
pub fn config_dir() -> PathBuf {
    let candidates = [
        env_path("HOME").map(|home| home.join(".config")),
        env_path("XDG_CONFIG_HOME"),
    ];
    for base in candidates.into_iter().flatten() {
        let dir = base.join(APP_DIR);
        if fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = PathBuf::from(".").join(APP_DIR);
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/dexpage/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Default settings file: "$HOME/.config/dexpage/settings.conf"
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
