//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "voltdesk";
const APPLICATION: &str = "voltdesk";

/// Archived logs kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/voltdesk` or `~/.config/voltdesk`
/// - macOS: `~/Library/Application Support/dev.voltdesk.voltdesk`
/// - Windows: `C:\Users\<User>\AppData\Roaming\voltdesk\voltdesk\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, which also holds the logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamped name and prune the
/// archive. Runs before the logger opens a fresh `latest.log`.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache);
    }
}

fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    match fs::rename(&latest, cache.join(format!("{stamp}.log"))) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            eprintln!("Could not archive {}: {e}", latest.display());
        }
        _ => {}
    }
    cleanup_old_logs(cache);
}

/// Delete archived logs beyond the newest [`MAX_OLD_LOGS`].
fn cleanup_old_logs(cache: &Path) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut archived: Vec<(Option<SystemTime>, PathBuf)> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_archived_log(path))
        .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
        .collect();

    // newest first
    archived.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in archived.into_iter().skip(MAX_OLD_LOGS) {
        let _ = fs::remove_file(path);
    }
}

fn is_archived_log(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "log")
        && path.file_name().is_some_and(|name| name != LATEST_LOG)
}
