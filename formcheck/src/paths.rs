//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formcheck";
const APPLICATION: &str = "formcheck";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/formcheck` or `~/.config/formcheck`
/// - macOS: `~/Library/Application Support/dev.formcheck.formcheck`
/// - Windows: `C:\Users\<User>\AppData\Roaming\formcheck\formcheck\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/formcheck` or `~/.cache/formcheck`
/// - macOS: `~/Library/Caches/dev.formcheck.formcheck`
/// - Windows: `C:\Users\<User>\AppData\Local\formcheck\formcheck\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the validation policy file.
pub fn policy_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("policy.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
