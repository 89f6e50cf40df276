//! Host platform detection and path conventions.

pub mod msys;
pub mod os;

pub use msys::to_msys_path;
pub use os::Os;
