//! Structured logging through `tracing`.
//!
//! The terminal belongs to the prompt while it runs, so records go to a file
//! (by default `checksift.log` in the data directory) instead of stderr.
//! `CHECKSIFT_LOG` takes an `EnvFilter` directive and overrides the level
//! chosen from the command line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "CHECKSIFT_LOG";
pub const LOG_FILE_NAME: &str = "checksift.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
	pub level: Level,
	/// Where records are appended. `None` disables logging entirely.
	pub log_file: Option<PathBuf>,
	pub with_target: bool,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: Level::WARN,
			log_file: None,
			with_target: true,
		}
	}
}

impl LogConfig {
	/// `0` keeps warnings only; each `-v` adds a level.
	#[must_use]
	pub fn from_verbosity(verbosity: u8) -> Self {
		let level = match verbosity {
			0 => Level::WARN,
			1 => Level::INFO,
			2 => Level::DEBUG,
			_ => Level::TRACE,
		};
		Self {
			level,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
		self.log_file = path;
		self
	}
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn initialize(config: &LogConfig) -> io::Result<()> {
	let Some(path) = &config.log_file else {
		return Ok(());
	};
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	let file = OpenOptions::new().create(true).append(true).open(path)?;

	let layer = fmt::layer()
		.with_writer(SharedFileWriter::new(file))
		.with_ansi(false)
		.with_target(config.with_target);
	let _ = tracing_subscriber::registry()
		.with(build_env_filter(config.level))
		.with(layer)
		.try_init();
	Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| filter_for(level))
}

fn filter_for(level: Level) -> EnvFilter {
	let level = level.as_str().to_lowercase();
	EnvFilter::new(format!("warn,checksift={level}"))
}

#[derive(Clone)]
struct SharedFileWriter {
	file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
	fn new(file: File) -> Self {
		Self {
			file: Arc::new(Mutex::new(file)),
		}
	}
}

struct SharedFileGuard {
	file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.flush()
	}
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
	type Writer = SharedFileGuard;

	fn make_writer(&'a self) -> Self::Writer {
		SharedFileGuard {
			file: Arc::clone(&self.file),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_level() {
		assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
		assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
		assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
	}

	#[test]
	fn default_filter_admits_the_chosen_level() {
		assert_eq!(
			filter_for(Level::DEBUG).max_level_hint(),
			Some(tracing::level_filters::LevelFilter::DEBUG)
		);
	}

	#[test]
	fn no_log_file_means_no_subscriber() {
		assert!(initialize(&LogConfig::default()).is_ok());
	}
}
