//! Shared utilities.
//!
//! Test helpers for running and recording build steps.

#[cfg(test)]
pub mod testutil;
