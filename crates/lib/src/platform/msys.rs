//! Translation of Windows paths into the MSYS shell's mount convention.

/// Rewrite a Windows path so the MSYS shell can use it.
///
/// A leading drive letter `X:` becomes `/x` and every backslash becomes a
/// forward slash, so `C:\x\y` turns into `/c/x/y`. Paths without a drive
/// prefix only get their separators flipped.
pub fn to_msys_path(path: &str) -> String {
  let mut chars = path.chars();
  let translated = match (chars.next(), chars.next()) {
    (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => {
      format!("/{}{}", drive.to_ascii_lowercase(), chars.as_str())
    }
    _ => path.to_string(),
  };
  translated.replace('\\', "/")
}
