use std::fmt;
use std::path::{Path, PathBuf};

use crate::env::BuildEnvironment;

/// One command of a build: what to run, where, and under which environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
  program: String,
  args: Vec<String>,
  cwd: PathBuf,
  env: BuildEnvironment,
}

impl BuildStep {
  pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>, env: &BuildEnvironment) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: cwd.into(),
      env: env.clone(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  pub fn arguments(&self) -> &[String] {
    &self.args
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn env(&self) -> &BuildEnvironment {
    &self.env
  }

  /// The step rendered as a single shell command line.
  pub fn command_line(&self) -> String {
    shell_join(std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str)))
  }
}

impl fmt::Display for BuildStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.command_line())
  }
}

/// Quote `word` for a POSIX shell if it contains anything but plain characters.
pub fn shell_quote(word: &str) -> String {
  let plain = |c: char| c.is_ascii_alphanumeric() || "-_./=:@,+%".contains(c);
  if !word.is_empty() && word.chars().all(plain) {
    word.to_string()
  } else {
    format!("'{}'", word.replace('\'', r"'\''"))
  }
}

/// Join words into one POSIX shell command line.
pub fn shell_join<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
  words.into_iter().map(shell_quote).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_words_are_not_quoted() {
    assert_eq!(shell_quote("CFLAGS=-fPIC"), "CFLAGS=-fPIC");
    assert_eq!(shell_quote("/c/out/libbeacon.dll"), "/c/out/libbeacon.dll");
  }

  #[test]
  fn words_with_spaces_are_single_quoted() {
    assert_eq!(
      shell_quote("/c/Program Files/Go/bin/go.exe"),
      "'/c/Program Files/Go/bin/go.exe'"
    );
  }

  #[test]
  fn embedded_single_quotes_are_escaped() {
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
  }

  #[test]
  fn empty_word_is_quoted() {
    assert_eq!(shell_quote(""), "''");
  }

  #[test]
  fn command_line_joins_program_and_args() {
    let step = BuildStep::new("make", "/src/hnsd", &BuildEnvironment::default()).args(["CFLAGS=-fPIC", "-j"]);
    assert_eq!(step.command_line(), "make CFLAGS=-fPIC -j");
    assert_eq!(step.to_string(), "make CFLAGS=-fPIC -j");
  }
}
