//! Core utilities for the appwire manifest generator.
//!
//! This crate provides the string-casing helpers every naming rule builds
//! on, plus the small filesystem plumbing shared by the generator.

mod file;
mod utils;

// File operations
pub use file::{copy_file, write_file, WriteResult};
// String utilities
pub use utils::{camelize, camelize_str};
