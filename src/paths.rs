//! The store only ever receives a fully resolved path; these builders are how
//! callers embedded in a game server runtime produce one. They are pure
//! functions of the directories the host hands out and never touch the
//! filesystem themselves.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Path to a config file kept inside a specific world save:
/// `<run_dir>/saves/<save_name>/<folder>/<filename>`
pub fn save_config_path(run_dir: &Path, save_name: &str, folder: &str, filename: &str) -> PathBuf {
	run_dir
		.join("saves")
		.join(save_name)
		.join(folder)
		.join(filename)
}

/// Path to a config file kept next to the server itself:
/// `<run_dir>/<folder>/<filename>`
pub fn server_config_path(run_dir: &Path, folder: &str, filename: &str) -> PathBuf {
	run_dir.join(folder).join(filename)
}

/// Path to a mod's config file under the host's config directory. Passing a
/// `mod_name` puts the file in a per-mod subdirectory.
pub fn mod_config_path(config_dir: &Path, mod_name: Option<&str>, filename: &str) -> PathBuf {
	match mod_name {
		Some(name) => config_dir.join(name).join(filename),
		None => config_dir.join(filename),
	}
}

/// Per-user config directory for `mod_name`, for callers running outside a
/// host runtime that would otherwise supply one
pub fn fallback_config_dir(mod_name: &str) -> Option<PathBuf> {
	ProjectDirs::from("", "", mod_name).map(|dirs| dirs.config_dir().to_owned())
}
