/// Minimum macOS version targeted by every compiled object.
///
/// Must match the deployment target of the browser that loads the library.
pub const MACOS_MIN_VERSION: &str = "10.11.0";

/// Install name written into the dylib so the app bundle finds it next to its `Libraries` directory.
pub const LOADER_PATH_ID: &str = "@loader_path/Libraries/libbeacon.dylib";

/// MSYS2 bash used to host every build command on Windows.
pub const MSYS_BASH: &str = r"C:\msys64\usr\bin\bash";

/// MSYS2 environment flavour selected for Windows builds.
pub const MSYSTEM: &str = "MINGW64";

/// Go toolchain binary as seen from inside the MSYS shell.
pub const WINDOWS_GO_BIN: &str = "/c/Program Files/Go/bin/go.exe";

/// File extension of sources tracked by the depfile.
pub const GO_SOURCE_EXT: &str = ".go";

/// Directory whose presence under the dependency prefix marks `hnsd` as built.
pub const DEPENDENCY_LIB_DIR: &str = "lib";
