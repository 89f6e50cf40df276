//! Filesystem layout of a build.
//!
//! The Go core lives two levels below the beacon source root, and both
//! upstream trees sit under that root's `third_party` directory:
//!
//! ```text
//! <beacon>/components/core            core_dir (Go sources)
//! <beacon>/third_party/hnsd           libhsk C sources
//! <beacon>/third_party/hnsquery       hnsquery sources
//! <beacon>/third_party/hnsquery/build libhsk install prefix
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BuildError;

/// Every path a build reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
  /// Directory holding the Go sources of the library.
  pub core_dir: PathBuf,
  /// `hnsd` source tree, built into `libhsk`.
  pub hnsd_src: PathBuf,
  /// `hnsquery` source tree.
  pub hnsquery_src: PathBuf,
  /// Install prefix of the `libhsk` build.
  pub dependency_out: PathBuf,
  /// Shared library produced by the build.
  pub output: PathBuf,
  /// Depfile to write, if requested.
  pub depfile: Option<PathBuf>,
}

impl PathSet {
  /// Lay out the fixed source tree around `core_dir`.
  ///
  /// `output` and `depfile` are used as given; callers resolve relative paths
  /// before handing them over.
  pub fn new(core_dir: impl Into<PathBuf>, output: impl Into<PathBuf>, depfile: Option<PathBuf>) -> Self {
    let core_dir = core_dir.into();
    // Two levels up, stopping at the filesystem root.
    let beacon_dir = core_dir
      .ancestors()
      .skip(1)
      .take(2)
      .last()
      .map(Path::to_path_buf)
      .unwrap_or_else(|| core_dir.clone());
    let third_party = beacon_dir.join("third_party");
    let hnsquery_src = third_party.join("hnsquery");

    Self {
      hnsd_src: third_party.join("hnsd"),
      dependency_out: hnsquery_src.join("build"),
      hnsquery_src,
      core_dir,
      output: output.into(),
      depfile,
    }
  }

  /// Like [`PathSet::new`], but canonicalizes `core_dir` first so the layout
  /// is computed from its real location.
  pub fn resolve(core_dir: &Path, output: impl Into<PathBuf>, depfile: Option<PathBuf>) -> Result<Self, BuildError> {
    let core_dir = dunce::canonicalize(core_dir).map_err(|e| match e.kind() {
      io::ErrorKind::NotFound => BuildError::MissingPath {
        path: core_dir.to_path_buf(),
      },
      _ => BuildError::io(core_dir, e),
    })?;
    Ok(Self::new(core_dir, output, depfile))
  }

  /// Check that both upstream source trees exist.
  pub fn validate(&self) -> Result<(), BuildError> {
    must_exist(&self.hnsquery_src)?;
    must_exist(&self.hnsd_src)?;
    Ok(())
  }
}

/// Fail with [`BuildError::MissingPath`] unless `path` exists.
pub fn must_exist(path: &Path) -> Result<(), BuildError> {
  if path.exists() {
    debug!(path = %path.display(), "found");
    Ok(())
  } else {
    Err(BuildError::MissingPath {
      path: path.to_path_buf(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn beacon_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let core = temp.path().join("components").join("core");
    std::fs::create_dir_all(&core).unwrap();
    (temp, core)
  }

  #[test]
  fn layout_is_relative_to_core_dir() {
    let core = PathBuf::from("/src/beacon/components/core");
    let paths = PathSet::new(&core, "/out/libbeacon.so", None);

    assert_eq!(paths.hnsd_src, PathBuf::from("/src/beacon/third_party/hnsd"));
    assert_eq!(paths.hnsquery_src, PathBuf::from("/src/beacon/third_party/hnsquery"));
    assert_eq!(paths.dependency_out, PathBuf::from("/src/beacon/third_party/hnsquery/build"));
    assert_eq!(paths.core_dir, core);
  }

  #[test]
  #[cfg(unix)]
  fn shallow_core_dir_stops_at_root() {
    let paths = PathSet::new("/core", "/out/libbeacon.so", None);
    assert_eq!(paths.hnsd_src, PathBuf::from("/third_party/hnsd"));

    let paths = PathSet::new("/", "/out/libbeacon.so", None);
    assert_eq!(paths.hnsquery_src, PathBuf::from("/third_party/hnsquery"));
  }

  #[test]
  fn missing_hnsquery_fails_first() {
    let (_temp, core) = beacon_tree();
    let paths = PathSet::resolve(&core, "libbeacon.so", None).unwrap();

    let err = paths.validate().unwrap_err();

    match err {
      BuildError::MissingPath { path } => assert!(path.ends_with("third_party/hnsquery")),
      other => panic!("expected MissingPath, got {other:?}"),
    }
  }

  #[test]
  fn missing_hnsd_fails() {
    let (temp, core) = beacon_tree();
    std::fs::create_dir_all(temp.path().join("third_party").join("hnsquery")).unwrap();
    let paths = PathSet::resolve(&core, "libbeacon.so", None).unwrap();

    let err = paths.validate().unwrap_err();

    assert!(matches!(err, BuildError::MissingPath { path } if path.ends_with("third_party/hnsd")));
  }

  #[test]
  fn complete_tree_validates() {
    let (temp, core) = beacon_tree();
    std::fs::create_dir_all(temp.path().join("third_party").join("hnsquery")).unwrap();
    std::fs::create_dir_all(temp.path().join("third_party").join("hnsd")).unwrap();

    let paths = PathSet::resolve(&core, "libbeacon.so", None).unwrap();

    assert!(paths.validate().is_ok());
  }

  #[test]
  fn nonexistent_core_dir_is_a_missing_path() {
    let temp = TempDir::new().unwrap();
    let err = PathSet::resolve(&temp.path().join("nope"), "libbeacon.so", None).unwrap_err();
    assert!(matches!(err, BuildError::MissingPath { .. }));
  }

  #[test]
  #[cfg(unix)]
  fn core_dir_below_a_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("core.go");
    std::fs::write(&file, "package core\n").unwrap();

    let err = PathSet::resolve(&file.join("core"), "libbeacon.so", None).unwrap_err();

    assert!(matches!(err, BuildError::Io { .. }), "got {err:?}");
  }
}
