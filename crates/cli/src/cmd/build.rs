//! Implementation of the build command.
//!
//! Runs the whole build for the host platform and prints a summary of what
//! was done.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use beacon_build_lib::build::DependencyStatus;
use beacon_build_lib::execute::SystemRunner;
use beacon_build_lib::platform::Os;
use beacon_build_lib::{BuildOptions, BuildSummary, Orchestrator};

use crate::output::{OutputFormat, format_duration, print_json, print_stat, print_success};

/// Paths supplied on the command line.
pub struct BuildArgs {
  pub core_dir: PathBuf,
  pub output: PathBuf,
  pub depfile: Option<PathBuf>,
  pub clang_base_dir: Option<PathBuf>,
}

/// Execute the build.
///
/// - Checks that the upstream source trees exist
/// - Builds libhsk unless its install prefix already has a `lib` directory
/// - Builds the shared library
/// - Writes the depfile, when one was requested
pub fn cmd_build(args: BuildArgs, format: OutputFormat) -> Result<()> {
  let os = Os::current();
  let options = BuildOptions {
    core_dir: args.core_dir,
    output: args.output,
    depfile: args.depfile,
    clang_base_dir: args.clang_base_dir,
  };

  debug!(?options, %os, "parsed build options");

  let summary = Orchestrator::new(SystemRunner::new(os), os)
    .run(&options)
    .context("Build failed")?;

  if format.is_json() {
    return print_json(&summary);
  }

  print_summary(&summary);
  Ok(())
}

fn print_summary(summary: &BuildSummary) {
  print_success(&format!("Built {}", summary.artifact.display()));
  print_stat("Platform", summary.platform.as_str());
  print_stat(
    "libhsk",
    match summary.dependency {
      DependencyStatus::Built => "built",
      DependencyStatus::Skipped => "already installed",
    },
  );
  if let Some(depfile) = &summary.depfile {
    print_stat("Depfile", &format!("{} ({} sources)", depfile.display(), summary.sources));
  }
  print_stat("Elapsed", &format_duration(summary.elapsed));
}
