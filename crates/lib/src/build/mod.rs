//! The two compile stages of a beacon build.
//!
//! - [`dependency`] - the `hnsd` C library (`libhsk`), built once per prefix
//! - [`artifact`] - the cgo shared library linking against it

pub mod artifact;
pub mod dependency;

pub use artifact::build_artifact;
pub use dependency::{DependencyStatus, ensure_dependency_built};
