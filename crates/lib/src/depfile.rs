//! Make/Ninja depfile generation.
//!
//! The depfile names the built library as its single target and every Go
//! source under the core directory as a prerequisite, so the incremental
//! build reruns the orchestrator whenever one of them changes:
//!
//! ```text
//! out/libbeacon.so: /src/core/cgo.go /src/core/internal/factory.go
//! ```
//!
//! Paths are escaped for Make: spaces and `#` get a backslash, `$` is doubled.
//!
//! Sources are listed in directory traversal order, which is whatever the
//! filesystem returns. The set is complete but the byte content can differ
//! between machines; the consuming build only compares the set.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::consts::GO_SOURCE_EXT;
use crate::error::BuildError;

/// Collect every Go source file under `root`, in traversal order.
pub fn go_sources(root: &Path) -> Result<Vec<PathBuf>, BuildError> {
  let mut sources = Vec::new();
  for entry in WalkDir::new(root) {
    let entry = entry.map_err(|source| BuildError::Walk {
      root: root.to_path_buf(),
      source,
    })?;
    // Links are not followed, so a link to a directory shows up as a symlink.
    if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
      continue;
    }
    if entry.file_name().to_string_lossy().ends_with(GO_SOURCE_EXT) {
      sources.push(entry.into_path());
    }
  }
  Ok(sources)
}

/// Escape a path for use as a word in a depfile.
fn escape(path: &str) -> String {
  let mut escaped = String::with_capacity(path.len());
  for c in path.chars() {
    match c {
      '$' => escaped.push_str("$$"),
      '#' | ' ' => {
        escaped.push('\\');
        escaped.push(c);
      }
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Render the single depfile line for `output` depending on `sources`.
pub fn render(output: &Path, sources: &[PathBuf]) -> String {
  let mut line = format!("{}:", escape(&output.to_string_lossy()));
  for source in sources {
    line.push(' ');
    line.push_str(&escape(&source.to_string_lossy()));
  }
  line.push('\n');
  line
}

/// Write a depfile declaring that `output` depends on every Go source under
/// `source_root`.
///
/// The file is rewritten from scratch on every call. Returns the number of
/// sources listed.
pub fn write_manifest(manifest_path: &Path, output: &Path, source_root: &Path) -> Result<usize, BuildError> {
  let sources = go_sources(source_root)?;
  debug!(root = %source_root.display(), count = sources.len(), "collected go sources");

  fs::write(manifest_path, render(output, &sources)).map_err(|e| BuildError::io(manifest_path, e))?;

  info!(depfile = %manifest_path.display(), sources = sources.len(), "wrote depfile");
  Ok(sources.len())
}
