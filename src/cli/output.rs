use anyhow::Result;
use checksift::Answer;
use serde_json::{Value, json};

/// Print one checked value per line; strings are printed without quotes.
pub(crate) fn print_plain(answer: &Answer) {
	for line in plain_lines(answer) {
		println!("{line}");
	}
}

fn plain_lines(answer: &Answer) -> Vec<String> {
	answer
		.values
		.iter()
		.map(|value| match value {
			Value::String(text) => text.clone(),
			other => other.to_string(),
		})
		.collect()
}

/// Format the answer as a JSON document.
pub(crate) fn format_answer_json(answer: &Answer) -> Result<String> {
	let payload = json!({
		"values": answer.values,
		"shorts": answer.shorts,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the answer.
pub(crate) fn print_json(answer: &Answer) -> Result<()> {
	println!("{}", format_answer_json(answer)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn answer() -> Answer {
		Answer {
			values: vec![json!("red"), json!({ "id": 7 })],
			shorts: vec!["R".into(), "seven".into()],
		}
	}

	#[test]
	fn plain_output_unquotes_strings() {
		assert_eq!(plain_lines(&answer()), ["red", r#"{"id":7}"#]);
	}

	#[test]
	fn json_format_includes_values_and_shorts() {
		let json = format_answer_json(&answer()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["values"][0], "red");
		assert_eq!(value["values"][1]["id"], 7);
		assert_eq!(value["shorts"][1], "seven");
	}
}
