//! Building `libhsk` from the `hnsd` sources.
//!
//! The dependency is configured and installed into a fixed prefix. A later
//! run skips the whole build when `<prefix>/lib` exists. Only presence is
//! checked: a stale or half-installed `lib` directory counts as built, and
//! deleting the prefix is the way to force a rebuild.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::consts::{DEPENDENCY_LIB_DIR, MACOS_MIN_VERSION};
use crate::env::BuildEnvironment;
use crate::error::BuildError;
use crate::execute::{BuildStep, CommandRunner};
use crate::platform::{Os, to_msys_path};

/// What [`ensure_dependency_built`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
  /// The configure/make chain ran and installed into the prefix.
  Built,
  /// `<prefix>/lib` already existed; nothing ran.
  Skipped,
}

/// `CFLAGS` passed to the dependency's `make`, if any.
fn make_cflags(os: Os) -> Option<String> {
  match os {
    Os::MacOs => Some(format!("CFLAGS=-mmacosx-version-min={MACOS_MIN_VERSION}")),
    Os::Linux => Some("CFLAGS=-fPIC".to_string()),
    Os::Windows | Os::Other => None,
  }
}

/// Build and install `libhsk` into `out_dir` unless it is already there.
///
/// Runs in `src_dir`, in order: `make clean` (best effort), `./autogen.sh`,
/// `./configure --without-daemon --prefix <out_dir>`, a parallel `make` with
/// platform `CFLAGS`, and `make install`. On macOS the installed dylibs are
/// then removed so the Go link picks the static archive.
pub fn ensure_dependency_built(
  runner: &impl CommandRunner,
  src_dir: &Path,
  out_dir: &Path,
  env: &BuildEnvironment,
  os: Os,
) -> Result<DependencyStatus, BuildError> {
  let lib_dir = out_dir.join(DEPENDENCY_LIB_DIR);
  if lib_dir.exists() {
    info!(lib_dir = %lib_dir.display(), "libhsk already installed, skipping dependency build");
    return Ok(DependencyStatus::Skipped);
  }

  info!(src = %src_dir.display(), prefix = %out_dir.display(), "building libhsk");

  let step = |program: &str| BuildStep::new(program, src_dir, env);

  // A tree that was never configured has no Makefile, so clean is allowed to fail.
  if let Err(e) = runner.run(&step("make").arg("clean")) {
    debug!(error = %e, "make clean failed, continuing");
  }

  runner.run(&step("./autogen.sh"))?;

  let prefix = match os {
    Os::Windows => to_msys_path(&out_dir.to_string_lossy()),
    Os::Linux | Os::MacOs | Os::Other => out_dir.to_string_lossy().into_owned(),
  };
  runner.run(&step("./configure").args(["--without-daemon", "--prefix"]).arg(prefix))?;

  let mut make = step("make");
  if let Some(cflags) = make_cflags(os) {
    make = make.arg(cflags);
  }
  runner.run(&make.arg("-j"))?;

  runner.run(&step("make").arg("install"))?;

  match os {
    Os::MacOs => remove_dylibs(&lib_dir)?,
    Os::Linux | Os::Windows | Os::Other => {}
  }

  Ok(DependencyStatus::Built)
}

/// Delete every `*.dylib` directly inside `dir`.
fn remove_dylibs(dir: &Path) -> Result<(), BuildError> {
  let entries = fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))?;
  for entry in entries {
    let path = entry.map_err(|e| BuildError::io(dir, e))?.path();
    if path.extension().is_some_and(|ext| ext == "dylib") {
      debug!(path = %path.display(), "removing dylib");
      fs::remove_file(&path).map_err(|e| BuildError::io(&path, e))?;
    }
  }
  Ok(())
}
