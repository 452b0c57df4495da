use std::path::PathBuf;

use anyhow::Result;
use checksift::{Theme, app_dirs, logging};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

/// Version banner listing where checksift reads config and writes its log.
pub(super) fn long_version() -> &'static str {
	let locations: [(&str, Result<PathBuf>); 2] = [
		("config directory", app_dirs::get_config_dir()),
		(
			"log file",
			app_dirs::get_data_dir().map(|dir| dir.join(logging::LOG_FILE_NAME)),
		),
	];

	let mut lines = vec![format!("checksift {}", env!("CARGO_PKG_VERSION")), String::new()];
	lines.extend(locations.into_iter().map(|(label, path)| match path {
		Ok(path) => format!("{label}: {}", path.display()),
		Err(err) => format!("{label}: unavailable ({err})"),
	}));
	lines.push(format!("themes: {}", Theme::names().join(", ")));

	Box::leak(lines.join("\n").into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	let accent = AnsiColor::Magenta.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(accent)
		.usage(accent)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
