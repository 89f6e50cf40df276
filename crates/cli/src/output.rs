//! CLI output formatting utilities.
//!
//! The text summary is a green check line followed by an aligned block of
//! labelled values; `--format json` prints the summary struct instead.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
}

/// Render a build duration: milliseconds below a second, tenths of a second
/// below a minute, then minutes with padded seconds.
pub fn format_duration(duration: Duration) -> String {
  let millis = duration.as_millis();
  match millis {
    0..1_000 => format!("{millis}ms"),
    1_000..60_000 => format!("{:.1}s", duration.as_secs_f64()),
    _ => {
      let secs = duration.as_secs();
      format!("{}m {:02}s", secs / 60, secs % 60)
    }
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

/// Width of the label column in the build summary.
const LABEL_WIDTH: usize = 9;

/// Print one line of the build summary with its label padded into a column.
pub fn print_stat(label: &str, value: &str) {
  let label = format!("{label}:");
  println!(
    "  {} {}",
    format!("{label:<LABEL_WIDTH$}").if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
