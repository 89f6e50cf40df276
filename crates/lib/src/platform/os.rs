use std::fmt;

use serde::Serialize;

/// Operating systems the build distinguishes between.
///
/// Every platform-specific decision matches on this exhaustively, so adding a
/// variant surfaces each place that needs a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  Other,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    Self::from_name(std::env::consts::OS)
  }

  /// Map a `std::env::consts::OS` style name onto a variant
  pub fn from_name(name: &str) -> Self {
    match name {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::Other,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
      Self::Other => "other",
    }
  }

  /// Separator used when joining entries of `PATH`.
  pub fn path_list_separator(&self) -> char {
    match self {
      Self::Windows => ';',
      Self::Linux | Self::MacOs | Self::Other => ':',
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_names_fall_back_to_other() {
    assert_eq!(Os::from_name("freebsd"), Os::Other);
    assert_eq!(Os::from_name("ios"), Os::Other);
  }

  #[test]
  fn known_names_map_to_variants() {
    assert_eq!(Os::from_name("linux"), Os::Linux);
    assert_eq!(Os::from_name("macos"), Os::MacOs);
    assert_eq!(Os::from_name("windows"), Os::Windows);
  }

  #[test]
  fn macos_uses_darwin_identifier() {
    assert_eq!(Os::MacOs.as_str(), "darwin");
  }

  #[test]
  fn current_matches_compile_target() {
    #[cfg(target_os = "linux")]
    assert_eq!(Os::current(), Os::Linux);
    #[cfg(target_os = "macos")]
    assert_eq!(Os::current(), Os::MacOs);
    #[cfg(windows)]
    assert_eq!(Os::current(), Os::Windows);
  }
}
