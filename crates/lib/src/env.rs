//! Build environment construction.
//!
//! Every command of a build runs under one `BuildEnvironment`: a copy of the
//! ambient process environment with the toolchain overrides applied. The
//! process's own environment is never modified.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::platform::Os;

/// Environment variables handed to every child process of a build.
///
/// Child processes see exactly these variables: the inherited environment is
/// cleared before they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
  vars: BTreeMap<OsString, OsString>,
}

impl BuildEnvironment {
  /// Snapshot the current process environment.
  pub fn ambient() -> Self {
    Self::from_vars(std::env::vars_os())
  }

  pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<OsString>,
    V: Into<OsString>,
  {
    Self {
      vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }

  pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
    self.vars.get(key.as_ref()).map(OsString::as_os_str)
  }

  pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
    self.vars.insert(key.into(), value.into());
  }

  /// Return a copy with `key` set to `value`.
  pub fn with(&self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
    let mut env = self.clone();
    env.set(key, value);
    env
  }

  pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
    self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
  }

  pub(crate) fn len(&self) -> usize {
    self.vars.len()
  }
}

/// Build the environment for a run from the ambient process environment.
///
/// See [`with_toolchain`] for how `toolchain_dir` is applied.
pub fn build_environment(toolchain_dir: Option<&Path>, os: Os) -> BuildEnvironment {
  with_toolchain(BuildEnvironment::ambient(), toolchain_dir, os)
}

/// Point `base` at the clang toolchain under `toolchain_dir`.
///
/// `<toolchain_dir>/bin` is prepended to `PATH` and `CC` is set to the clang
/// inside it. Without a toolchain directory, or on Windows where the native
/// tooling locates its own compiler, `base` is returned untouched.
pub fn with_toolchain(mut base: BuildEnvironment, toolchain_dir: Option<&Path>, os: Os) -> BuildEnvironment {
  let Some(toolchain_dir) = toolchain_dir else {
    return base;
  };

  match os {
    Os::Windows => return base,
    Os::Linux | Os::MacOs | Os::Other => {}
  }

  let bin_dir = toolchain_dir.join("bin");

  let path = match base.get("PATH") {
    Some(existing) => {
      let mut joined = bin_dir.clone().into_os_string();
      joined.push(os.path_list_separator().to_string());
      joined.push(existing);
      joined
    }
    None => bin_dir.clone().into_os_string(),
  };

  let cc = bin_dir.join("clang");
  debug!(path = ?path, cc = %cc.display(), "using clang toolchain");

  base.set("PATH", path);
  base.set("CC", cc);
  base
}
