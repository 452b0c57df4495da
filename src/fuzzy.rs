//! Fuzzy filtering of a fixed choice list, for building searchable sources.

use frizbee::{Config, match_list};

use crate::choice::ChoiceItem;

/// Lists at least this long get frizbee's prefilter and a typo budget.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Matching options for `query` over `dataset_len` haystacks.
pub fn config_for_query(query: &str, dataset_len: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}
	config.sort = false;

	config
}

/// Choices from `items` whose names match `query`, best match first.
///
/// An empty or missing query returns the list untouched, separators included.
/// Otherwise separators are dropped since their grouping no longer applies.
pub fn filter(items: &[ChoiceItem], query: Option<&str>) -> Vec<ChoiceItem> {
	let query = query.map(str::trim).unwrap_or_default();
	if query.is_empty() {
		return items.to_vec();
	}

	let choices: Vec<&ChoiceItem> = items
		.iter()
		.filter(|item| item.as_choice().is_some())
		.collect();
	let haystacks: Vec<&str> = choices
		.iter()
		.filter_map(|item| item.as_choice())
		.map(|choice| choice.name.as_str())
		.collect();

	let config = config_for_query(query, haystacks.len());
	let mut ranked: Vec<(u16, usize)> = match_list(query, &haystacks, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.score, entry.index as usize))
		.collect();
	ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

	ranked
		.into_iter()
		.map(|(_, index)| choices[index].clone())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(items: &[ChoiceItem]) -> Vec<&str> {
		items
			.iter()
			.filter_map(ChoiceItem::as_choice)
			.map(|choice| choice.name.as_str())
			.collect()
	}

	#[test]
	fn empty_query_keeps_everything() {
		let items = vec![
			ChoiceItem::from("apple"),
			ChoiceItem::separator(),
			ChoiceItem::from("banana"),
		];
		assert_eq!(filter(&items, None), items);
		assert_eq!(filter(&items, Some("  ")), items);
	}

	#[test]
	fn matching_drops_separators_and_ranks_prefix_hits_first() {
		let items = vec![
			ChoiceItem::from("banana"),
			ChoiceItem::separator(),
			ChoiceItem::from("apple"),
			ChoiceItem::from("apricot"),
		];
		let filtered = filter(&items, Some("ap"));
		assert!(filtered.iter().all(|item| item.as_choice().is_some()));
		let mut best = names(&filtered)[..2].to_vec();
		best.sort_unstable();
		assert_eq!(best, ["apple", "apricot"]);
	}

	#[test]
	fn short_queries_allow_no_typos_on_large_lists() {
		let config = config_for_query("a", PREFILTER_ENABLE_THRESHOLD);
		assert!(config.prefilter);
		assert_eq!(config.max_typos, Some(0));
		assert!(!config_for_query("a", 10).prefilter);
	}
}
