//! Manifest document generation.
//!
//! This crate turns an ordered list of discovered file paths into the
//! generated manifest document, in two explicit phases:
//!
//! 1. **Planning** ([`build_plan`]) is pure: every file is classified and
//!    resolved exactly once, producing a [`Plan`] that records the one
//!    registration action per file. No filesystem is touched, which is what
//!    makes the naming rules testable in isolation.
//! 2. **Execution** ([`Generator`]) relocates the file bytes under the
//!    output root and writes the rendered document.

mod generator;
mod plan;
mod sections;
pub mod snippets;

pub use appwire_classify::Category;
pub use generator::{GenerateResult, Generator};
pub use plan::{build_plan, Plan, PlanOptions, PlannedFile, Registration, SkipReason};
pub use sections::OutputSections;
