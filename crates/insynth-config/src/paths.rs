//! Platform-specific paths for user suites.
//!
//! - **User suites**: `~/.config/insynth/suites/` (Linux),
//!   `~/Library/Application Support/insynth/suites/` (macOS),
//!   `%APPDATA%\insynth\suites\` (Windows)
//!
//! # Example
//!
//! ```rust,no_run
//! use insynth_config::paths;
//!
//! if let Some(path) = paths::find_suite("nightly") {
//!     println!("Found suite at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "insynth";

/// Subdirectory name for suites.
const SUITES_SUBDIR: &str = "suites";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific suites directory.
pub fn user_suites_dir() -> PathBuf {
    user_config_dir().join(SUITES_SUBDIR)
}

/// Find a suite file by path or name.
///
/// An existing file path wins; otherwise `name` (with or without `.toml`)
/// is looked up in the user suites directory.
pub fn find_suite(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = user_suites_dir().join(filename);
    user_path.is_file().then_some(user_path)
}

/// Ensure the user suites directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_suites_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_suites_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all suite files in the user suites directory.
pub fn list_user_suites() -> Vec<PathBuf> {
    list_suites_in_dir(&user_suites_dir())
}

/// List `.toml` files in `dir`, sorted. Missing directories yield nothing.
pub fn list_suites_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut suites: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    suites.sort();
    suites
}

/// Get the suite name (file stem) from a file path.
///
/// ```rust
/// use insynth_config::paths::suite_name_from_path;
/// use std::path::Path;
///
/// assert_eq!(suite_name_from_path(Path::new("/x/nightly.toml")), Some("nightly".to_string()));
/// ```
pub fn suite_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
