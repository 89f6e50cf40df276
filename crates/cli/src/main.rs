use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// Build libbeacon and its libhsk dependency
#[derive(Parser)]
#[command(name = "beacon-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to Clang binaries (the directory containing `bin/clang`)
  #[arg(long, value_name = "DIR")]
  clang_base_dir: Option<PathBuf>,

  /// Path to library output
  #[arg(long, value_name = "PATH")]
  output: PathBuf,

  /// Path to write depfile
  #[arg(long, value_name = "PATH")]
  depfile: Option<PathBuf>,

  /// Directory containing the Go core sources
  #[arg(long, value_name = "DIR", env = "BEACON_CORE_DIR", default_value = ".")]
  core_dir: PathBuf,

  /// Summary format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  cmd::cmd_build(
    cmd::BuildArgs {
      core_dir: cli.core_dir,
      output: cli.output,
      depfile: cli.depfile,
      clang_base_dir: cli.clang_base_dir,
    },
    cli.format,
  )
}
