use checksift::Bound;

use super::ResolvedConfig;
use crate::workflow::ChoiceInput;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let prompt = &config.prompt;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Message: {}", prompt.message),
		format!("  Search: {}", bool_to_word(prompt.searchable)),
		format!("  Highlight: {}", bool_to_word(prompt.highlight)),
		format!("  Page size: {}", prompt.page_size),
		format!("  Minimum choices: {}", describe_bound(prompt.minimum_choices.as_ref())),
		format!("  Maximum choices: {}", describe_bound(prompt.maximum_choices.as_ref())),
	];
	if let Some(defaults) = &prompt.default {
		lines.push(format!("  Defaults: {} entries", defaults.len()));
	}
	if !config.require.is_empty() {
		lines.push(format!("  Required values: {}", config.require.join(", ")));
	}
	lines.push(match &config.input {
		ChoiceInput::Stdin(format) => format!("  Input: stdin ({format})"),
		ChoiceInput::File { path, format } => {
			format!("  Input: {} ({format})", path.display())
		}
		ChoiceInput::Walk(walk) => format!(
			"  Input: files under {} (hidden: {}, max depth: {})",
			walk.root.display(),
			bool_to_word(walk.include_hidden),
			walk.max_depth
				.map(|depth| depth.to_string())
				.unwrap_or_else(|| "unlimited".to_string())
		),
	});
	lines.push(format!("  UI theme: {}", config.theme));
	lines
}

fn describe_bound(bound: Option<&Bound>) -> String {
	match bound {
		Some(Bound {
			count,
			message: Some(message),
		}) => format!("{count} ({message})"),
		Some(bound) => bound.count.to_string(),
		None => "unbounded".to_string(),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use checksift::PromptOptions;

	use super::*;
	use crate::workflow::InputFormat;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_describes_bounds_and_input() {
		let config = ResolvedConfig {
			prompt: PromptOptions {
				maximum_choices: Some(Bound::with_message(4, "four max")),
				..PromptOptions::default()
			},
			require: vec!["red".into()],
			input: ChoiceInput::File {
				path: "colours.json".into(),
				format: InputFormat::Json,
			},
			theme: "dark".into(),
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Minimum choices: unbounded".to_string()));
		assert!(lines.contains(&"  Maximum choices: 4 (four max)".to_string()));
		assert!(lines.contains(&"  Required values: red".to_string()));
		assert!(lines.contains(&"  Input: colours.json (json)".to_string()));
	}
}
