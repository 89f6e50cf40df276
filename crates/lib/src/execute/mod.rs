//! Command execution for build steps.
//!
//! Steps carry their own working directory and environment, so running one
//! never touches the orchestrator's process state. Execution goes through the
//! [`CommandRunner`] trait: [`SystemRunner`] spawns real processes and tests
//! substitute a recorder.

mod step;
mod system;

pub use step::{BuildStep, shell_join, shell_quote};
pub use system::{SystemRunner, host_step};

use crate::error::BuildError;

/// Runs build steps to completion, one at a time.
pub trait CommandRunner {
  /// Run `step` and wait for it to exit.
  ///
  /// A non-zero exit must be reported as [`BuildError::CommandFailed`]
  /// carrying the captured output.
  fn run(&self, step: &BuildStep) -> Result<(), BuildError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
  fn run(&self, step: &BuildStep) -> Result<(), BuildError> {
    (**self).run(step)
  }
}
