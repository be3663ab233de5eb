//! Build-time expander for `#[derive(FluentBuilder)]` records.
//!
//! This crate scans your source files for structs deriving `FluentBuilder` and
//! writes each generated builder unit to its own formatted file, which makes the
//! state types easy to read and review. It also reports every misused derive in one
//! pass, with file, line and column.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     let report = fluent_builder_build::expand_builders()
//!         .scan_path("src/")
//!         .output_dir("target/fluent-builder")
//!         .run()
//!         .expect("Failed to expand builders");
//!
//!     for failure in &report.failures {
//!         println!("cargo:warning={failure}");
//!     }
//!     println!("cargo:rerun-if-changed=src/");
//! }
//! ```
//!
//! The files are review copies of what the derive already emits next to each
//! record. Keep them out of the module tree: including one would define the
//! builder twice.

mod generator;
mod scanner;

pub use generator::{BatchError, BuilderGenerator, EmissionFailure, GeneratedUnit, GenerationReport};
pub use scanner::DiscoveredRecord;

/// Create a new batch expander with default settings.
///
/// # Example
///
/// ```ignore
/// let report = fluent_builder_build::expand_builders()
///     .scan_path("src/")
///     .run()
///     .expect("Failed to expand builders");
/// assert!(report.is_success());
/// ```
pub fn expand_builders() -> BuilderGenerator {
    BuilderGenerator::new()
}
