//! Building the cgo shared library.

use std::path::Path;

use tracing::info;

use crate::consts::{LOADER_PATH_ID, MACOS_MIN_VERSION, WINDOWS_GO_BIN};
use crate::env::BuildEnvironment;
use crate::error::BuildError;
use crate::execute::{BuildStep, CommandRunner};
use crate::platform::{Os, to_msys_path};

/// Build the C-compatible shared library from the Go sources in `core_dir`.
///
/// Runs `go build -trimpath -buildmode=c-shared -o <output>`. On macOS the
/// cgo flags pin the minimum OS version and the resulting dylib gets a
/// loader-relative install name. On Windows the Go binary is addressed by its
/// MSYS path, since the step runs inside the MSYS shell.
pub fn build_artifact(
  runner: &impl CommandRunner,
  core_dir: &Path,
  output: &Path,
  env: &BuildEnvironment,
  os: Os,
) -> Result<(), BuildError> {
  let (go, out, env) = match os {
    Os::Windows => (WINDOWS_GO_BIN, to_msys_path(&output.to_string_lossy()), env.clone()),
    Os::MacOs => (
      "go",
      output.to_string_lossy().into_owned(),
      env
        .with("CGO_CFLAGS", format!("-mmacosx-version-min={MACOS_MIN_VERSION}"))
        .with("CGO_LDFLAGS", format!("-mmacos-version-min={MACOS_MIN_VERSION}")),
    ),
    Os::Linux | Os::Other => ("go", output.to_string_lossy().into_owned(), env.clone()),
  };

  info!(output = %output.display(), "building libbeacon");

  let build = BuildStep::new(go, core_dir, &env)
    .args(["build", "-trimpath", "-buildmode=c-shared", "-o"])
    .arg(out.as_str());
  runner.run(&build)?;

  match os {
    Os::MacOs => {
      // Lets the app bundle load the dylib from its Libraries directory.
      let fixup = BuildStep::new("install_name_tool", core_dir, &env)
        .args(["-id", LOADER_PATH_ID])
        .arg(out);
      runner.run(&fixup)?;
    }
    Os::Linux | Os::Windows | Os::Other => {}
  }

  Ok(())
}
