use std::path::PathBuf;

use checksift::{Bound, DefaultEntry};
use clap::Parser;
use config::{Config, File, FileFormat};

use super::RawConfig;
use crate::cli::CliArgs;
use crate::workflow::{ChoiceInput, InputFormat};

fn from_toml(source: &str) -> RawConfig {
	Config::builder()
		.add_source(File::from_str(source, FileFormat::Toml))
		.build()
		.expect("config")
		.try_deserialize()
		.expect("raw config")
}

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["checksift", "--search", "--highlight"]);
	cli.message = Some("Pick".into());
	cli.page_size = Some(10);
	cli.default = Some(vec!["a".into()]);
	cli.min = Some(1);
	cli.max = Some(4);
	cli.max_message = Some("four max".into());
	cli.require = Some(vec!["red".into()]);
	cli.theme = Some("light".into());
	cli.input = Some(PathBuf::from("choices.txt"));

	let mut config = from_toml(
		r#"
[prompt]
message = "From file"
page_size = 3
minimum_choices = [2, "two please"]

[input]
walk = "/srv"
"#,
	);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.prompt.message, cli.message);
	assert_eq!(config.prompt.searchable, Some(true));
	assert_eq!(config.prompt.highlight, Some(true));
	assert_eq!(config.prompt.page_size, Some(10));
	assert_eq!(config.prompt.default, Some(vec![DefaultEntry::value("a")]));
	assert_eq!(
		config.prompt.minimum_choices,
		Some(Bound::with_message(1, "two please"))
	);
	assert_eq!(
		config.prompt.maximum_choices,
		Some(Bound::with_message(4, "four max"))
	);
	assert_eq!(config.prompt.require, cli.require);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.input.path, cli.input);
	assert_eq!(config.input.walk, None);
}

#[test]
fn bounds_parse_from_counts_and_pairs() {
	let config = from_toml(
		r#"
[prompt]
minimum_choices = 1
maximum_choices = [4, "No more than four"]
"#,
	);
	assert_eq!(config.prompt.minimum_choices, Some(Bound::new(1)));
	assert_eq!(
		config.prompt.maximum_choices,
		Some(Bound::with_message(4, "No more than four"))
	);
}

#[test]
fn empty_config_resolves_to_defaults() {
	let cli = CliArgs::parse_from(["checksift"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.prompt, checksift::PromptOptions::default());
	assert!(resolved.require.is_empty());
	assert_eq!(resolved.input, ChoiceInput::Stdin(InputFormat::Lines));
	assert_eq!(resolved.theme, "dark");
}

#[test]
fn unknown_theme_is_rejected() {
	let cli = CliArgs::parse_from(["checksift", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).expect_err("unknown theme");
	assert!(err.to_string().contains("neon"));
}

#[test]
fn inverted_bounds_name_the_offending_flag() {
	let cli = CliArgs::parse_from(["checksift", "--min", "3", "--max", "2"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).expect_err("min above max").to_string();
	assert!(message.contains("prompt.minimum_choices"));
	assert!(message.contains("CLI flag `--min`"));
}
