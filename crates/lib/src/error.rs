//! Error taxonomy for a build run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a build run.
///
/// Every variant is terminal; nothing is retried.
#[derive(Debug, Error)]
pub enum BuildError {
  /// A required source tree is missing. Raised before any step runs.
  #[error("path {} doesn't exist", .path.display())]
  MissingPath { path: PathBuf },

  /// A command exited non-zero (or was killed by a signal).
  #[error("command failed with exit code {code:?}: {command}\n{output}")]
  CommandFailed {
    command: String,
    code: Option<i32>,
    output: String,
  },

  /// A command could not be started at all.
  #[error("failed to run {command}: {source}")]
  Spawn {
    command: String,
    #[source]
    source: io::Error,
  },

  /// Traversing the source tree for the depfile failed.
  #[error("failed to walk {}: {source}", .root.display())]
  Walk {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// Filesystem access failed.
  #[error("io error at {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl BuildError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
