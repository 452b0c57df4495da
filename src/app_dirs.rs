//! Resolve configuration and data directories for `checksift`.
//!
//! Environment overrides win; otherwise the platform locations provided by
//! the `directories` crate are used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "checksift";

pub const CONFIG_DIR_ENV: &str = "CHECKSIFT_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "CHECKSIFT_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for checksift"))
}

/// An empty override counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

fn dir_from_env(name: &str) -> Option<PathBuf> {
	non_empty(env::var_os(name))
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_overrides_are_ignored() {
		assert_eq!(non_empty(None), None);
		assert_eq!(non_empty(Some(OsString::new())), None);
		assert_eq!(
			non_empty(Some(OsString::from("/tmp/checksift"))),
			Some(PathBuf::from("/tmp/checksift"))
		);
	}
}
