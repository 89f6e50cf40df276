//! Sequencing of a complete build.
//!
//! A run validates the source layout, constructs the environment, makes sure
//! `libhsk` is installed, builds `libbeacon`, and finally writes the depfile
//! when one was requested. Steps run one after another and the first failure
//! ends the run; nothing after it executes.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::build::{DependencyStatus, build_artifact, ensure_dependency_built};
use crate::depfile::write_manifest;
use crate::env::build_environment;
use crate::error::BuildError;
use crate::execute::CommandRunner;
use crate::paths::PathSet;
use crate::platform::Os;

/// Inputs of a build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
  /// Directory holding the Go sources; the upstream trees are found relative to it.
  pub core_dir: PathBuf,
  /// Where the shared library is written.
  pub output: PathBuf,
  /// Where the depfile is written, if wanted.
  pub depfile: Option<PathBuf>,
  /// Root of a clang toolchain to build with instead of the ambient one.
  pub clang_base_dir: Option<PathBuf>,
}

/// What a successful run did.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
  pub platform: Os,
  pub dependency: DependencyStatus,
  pub artifact: PathBuf,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub depfile: Option<PathBuf>,
  /// Go sources listed in the depfile (zero when none was written).
  pub sources: usize,
  #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
  pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_u64(duration.as_millis() as u64)
}

/// Drives a build through a [`CommandRunner`].
#[derive(Debug)]
pub struct Orchestrator<R> {
  runner: R,
  os: Os,
}

impl<R: CommandRunner> Orchestrator<R> {
  pub fn new(runner: R, os: Os) -> Self {
    Self { runner, os }
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Run every stage of the build.
  ///
  /// Relative `output` and `depfile` paths are resolved against the current
  /// directory up front, since the build steps run elsewhere. The depfile
  /// target keeps the spelling of `options.output` so it matches the name the
  /// build graph uses for the library.
  pub fn run(&self, options: &BuildOptions) -> Result<BuildSummary, BuildError> {
    let started = Instant::now();

    let output = absolute(&options.output)?;
    let depfile = options.depfile.as_deref().map(absolute).transpose()?;
    let paths = PathSet::resolve(&options.core_dir, output, depfile)?;
    paths.validate()?;

    info!(platform = %self.os, core = %paths.core_dir.display(), "starting build");

    let env = build_environment(options.clang_base_dir.as_deref(), self.os);

    let dependency = ensure_dependency_built(&self.runner, &paths.hnsd_src, &paths.dependency_out, &env, self.os)?;

    build_artifact(&self.runner, &paths.core_dir, &paths.output, &env, self.os)?;

    let sources = match &paths.depfile {
      Some(depfile) => write_manifest(depfile, &options.output, &paths.core_dir)?,
      None => 0,
    };

    let summary = BuildSummary {
      platform: self.os,
      dependency,
      artifact: paths.output,
      depfile: paths.depfile,
      sources,
      elapsed: started.elapsed(),
    };
    info!(artifact = %summary.artifact.display(), "build complete");
    Ok(summary)
  }
}

fn absolute(path: &Path) -> Result<PathBuf, BuildError> {
  std::path::absolute(path).map_err(|e| BuildError::io(path, e))
}
