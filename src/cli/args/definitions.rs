use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{InputFormatArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `checksift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "checksift",
	version,
	long_version = long_version(),
	about = "Pick several items from a list in the terminal, with optional fuzzy search",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "Read choices from FILE, one per line; `-` reads stdin (default: stdin)"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		short = 'f',
		long = "format",
		value_enum,
		help = "How to parse the choice input (default: lines)"
	)]
	pub(crate) format: Option<InputFormatArg>,
	#[arg(
		short = 'w',
		long = "walk",
		value_name = "DIR",
		conflicts_with = "input",
		help = "Offer the files under DIR as choices, honouring ignore files (default: disabled)"
	)]
	pub(crate) walk: Option<PathBuf>,
	#[arg(
		long = "hidden",
		help = "Include hidden files when walking (default: disabled)"
	)]
	pub(crate) hidden: bool,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth when walking (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		short = 'c',
		long = "config",
		value_name = "FILE",
		env = "CHECKSIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long,
		value_name = "TEXT",
		help = "Question shown above the list (default: \"Select choices\")"
	)]
	pub(crate) message: Option<String>,
	#[arg(
		short = 's',
		long = "search",
		help = "Filter the list by typing (default: disabled)"
	)]
	pub(crate) search: bool,
	#[arg(
		long = "highlight",
		help = "Emphasise the row under the pointer (default: disabled)"
	)]
	pub(crate) highlight: bool,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Rows shown before the list scrolls (default: 7)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "default",
		value_name = "VALUE",
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Comma-separated values checked initially (default: none)"
	)]
	pub(crate) default: Option<Vec<String>>,
	#[arg(
		long = "min",
		value_name = "NUM",
		help = "Minimum number of checked choices (default: unbounded)"
	)]
	pub(crate) min: Option<usize>,
	#[arg(
		long = "min-message",
		value_name = "TEXT",
		help = "Message shown when too few choices are checked (default: generated)"
	)]
	pub(crate) min_message: Option<String>,
	#[arg(
		long = "max",
		value_name = "NUM",
		help = "Maximum number of checked choices (default: unbounded)"
	)]
	pub(crate) max: Option<usize>,
	#[arg(
		long = "max-message",
		value_name = "TEXT",
		help = "Message shown when too many choices are checked (default: generated)"
	)]
	pub(crate) max_message: Option<String>,
	#[arg(
		long = "require",
		value_name = "VALUE",
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Comma-separated values that must be part of the answer (default: none)"
	)]
	pub(crate) require: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the answer"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Log more detail to the log file; repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: checksift.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
