use std::env;
use std::path::PathBuf;

use anyhow::Result;
use checksift::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "CHECKSIFT";

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: [&str; 2] = ["prompt.default", "prompt.require"];

/// File names looked up in the working directory, lowest precedence first.
const LOCAL_CONFIG_NAMES: [&str; 2] = [".checksift.toml", "checksift.toml"];

/// Layer default files, explicit `--config` files and `CHECKSIFT__*`
/// variables, later sources winning.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.clone()).required(true));

	let builder = optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file));

	Ok(builder.add_source(environment_source()).build()?)
}

/// `CHECKSIFT__PROMPT__PAGE_SIZE=4` sets `prompt.page_size`.
fn environment_source() -> Environment {
	LIST_KEYS.into_iter().fold(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
		Environment::with_list_parse_key,
	)
}

pub(super) fn default_config_files() -> Vec<PathBuf> {
	let global = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir().ok().into_iter().flat_map(|dir| {
		LOCAL_CONFIG_NAMES
			.into_iter()
			.map(move |name| dir.join(name))
	});

	global.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".checksift.toml")));
		assert!(files.iter().any(|path| path.ends_with("checksift.toml")));
	}

	#[test]
	fn environment_splits_list_keys_only() {
		let vars: HashMap<String, String> = [
			("CHECKSIFT__PROMPT__REQUIRE", "red,blue"),
			("CHECKSIFT__PROMPT__MESSAGE", "Pick, then submit"),
			("CHECKSIFT__PROMPT__PAGE_SIZE", "4"),
		]
		.into_iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();
		let config = Config::builder()
			.add_source(environment_source().source(Some(vars)))
			.build()
			.expect("config");

		assert_eq!(
			config.get::<Vec<String>>("prompt.require").expect("require"),
			["red", "blue"]
		);
		assert_eq!(
			config.get_string("prompt.message").expect("message"),
			"Pick, then submit"
		);
		assert_eq!(config.get_int("prompt.page_size").expect("page size"), 4);
	}
}
