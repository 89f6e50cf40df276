//! beacon-build-lib: build orchestration for the native beacon library
//!
//! This crate holds the decisions behind a `libbeacon` build:
//! - `env`: the compiler environment every step runs under
//! - `build`: the `hnsd` C dependency and the cgo shared-library artifact
//! - `depfile`: the Make/Ninja manifest tying the artifact to its Go sources
//! - `orchestrate`: the sequence tying those together

pub mod build;
pub mod consts;
pub mod depfile;
pub mod env;
pub mod error;
pub mod execute;
pub mod orchestrate;
pub mod paths;
pub mod platform;
pub mod util;

pub use error::BuildError;
pub use orchestrate::{BuildOptions, BuildSummary, Orchestrator};
