//! Test utilities for beacon-build-lib.
//!
//! Cross-platform shell helpers for tests that spawn real processes, and a
//! [`RecordingRunner`] for tests that must not.

use std::cell::RefCell;

use crate::error::BuildError;
use crate::execute::{BuildStep, CommandRunner};

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}

/// Returns the command and args to create a marker file in the current directory.
#[cfg(unix)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  ("/usr/bin/touch", vec![filename.to_string()])
}

#[cfg(windows)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  (
    "powershell.exe",
    vec![
      "-NoProfile".to_string(),
      "-Command".to_string(),
      format!("New-Item -ItemType File -Path '{}' -Force | Out-Null", filename),
    ],
  )
}

type Effect = Box<dyn Fn(&BuildStep)>;

/// Records every step instead of running it.
///
/// Steps whose command line starts with a registered prefix fail with exit
/// code 1; effects registered with [`RecordingRunner::on`] run when a matching
/// step succeeds, standing in for the files a real tool would produce.
#[derive(Default)]
pub struct RecordingRunner {
  steps: RefCell<Vec<BuildStep>>,
  failing: Vec<String>,
  effects: Vec<(String, Effect)>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing_on(mut self, prefix: &str) -> Self {
    self.failing.push(prefix.to_string());
    self
  }

  pub fn on(mut self, prefix: &str, effect: impl Fn(&BuildStep) + 'static) -> Self {
    self.effects.push((prefix.to_string(), Box::new(effect)));
    self
  }

  pub fn steps(&self) -> Vec<BuildStep> {
    self.steps.borrow().clone()
  }

  pub fn command_lines(&self) -> Vec<String> {
    self.steps.borrow().iter().map(BuildStep::command_line).collect()
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&self, step: &BuildStep) -> Result<(), BuildError> {
    self.steps.borrow_mut().push(step.clone());
    let command_line = step.command_line();

    if self.failing.iter().any(|prefix| command_line.starts_with(prefix.as_str())) {
      return Err(BuildError::CommandFailed {
        command: command_line,
        code: Some(1),
        output: "simulated failure".to_string(),
      });
    }

    for (prefix, effect) in &self.effects {
      if command_line.starts_with(prefix.as_str()) {
        effect(step);
      }
    }

    Ok(())
  }
}
