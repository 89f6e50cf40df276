use std::process::Command;

use tracing::{debug, info};

use crate::consts::{MSYS_BASH, MSYSTEM};
use crate::error::BuildError;
use crate::platform::{Os, to_msys_path};

use super::{BuildStep, CommandRunner, shell_quote};

/// Runs steps as child processes of the current process.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner {
  os: Os,
}

impl SystemRunner {
  pub fn new(os: Os) -> Self {
    Self { os }
  }
}

impl Default for SystemRunner {
  fn default() -> Self {
    Self::new(Os::current())
  }
}

/// Rewrite `step` into the form that is actually spawned on `os`.
///
/// On Windows cgo needs a Unix-like toolchain, so the step is wrapped in an
/// MSYS login shell that first changes into the step's directory. Other
/// platforms run the step as-is.
pub fn host_step(step: &BuildStep, os: Os) -> BuildStep {
  match os {
    Os::Windows => {
      let cwd = to_msys_path(&step.cwd().to_string_lossy());
      let script = format!("cd {} && {}", shell_quote(&cwd), step.command_line());
      let env = step.env().with("MSYSTEM", MSYSTEM);
      BuildStep::new(MSYS_BASH, step.cwd(), &env).args(["-l", "-c"]).arg(script)
    }
    Os::Linux | Os::MacOs | Os::Other => step.clone(),
  }
}

impl CommandRunner for SystemRunner {
  fn run(&self, step: &BuildStep) -> Result<(), BuildError> {
    let step = host_step(step, self.os);
    let command_line = step.command_line();

    info!(cmd = %command_line, "executing command");
    debug!(working_dir = ?step.cwd(), vars = step.env().len(), "spawning process");

    let output = Command::new(step.program())
      .args(step.arguments())
      .current_dir(step.cwd())
      .env_clear()
      .envs(step.env().iter())
      .output()
      .map_err(|source| BuildError::Spawn {
        command: command_line.clone(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let captured = [stdout.trim(), stderr.trim()]
      .into_iter()
      .filter(|s| !s.is_empty())
      .collect::<Vec<_>>()
      .join("\n");

    if !output.status.success() {
      return Err(BuildError::CommandFailed {
        command: command_line,
        code: output.status.code(),
        output: captured,
      });
    }

    if !captured.is_empty() {
      debug!(output = %captured, "command output");
    }

    Ok(())
  }
}
