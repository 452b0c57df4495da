use clap::ValueEnum;

/// Input encodings accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputFormatArg {
	Lines,
	Json,
}

impl InputFormatArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			InputFormatArg::Lines => "lines",
			InputFormatArg::Json => "json",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
