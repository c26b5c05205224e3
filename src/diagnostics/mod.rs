//! Diagnostics module.
//!
//! A single located error value with a typed cause from a closed set of kinds,
//! a stable code catalog, and rendering helpers for CLI output.

pub mod diagnostic;
pub mod error_codes;
pub mod format;
pub mod position;

pub use diagnostic::{Diagnostic, ErrorKind};
pub use error_codes::*;
pub use format::format_message;
pub use position::SourceLocation;

/// Result alias used by every stage of the pipeline.
pub type DiagnosticResult<T> = Result<T, Box<Diagnostic>>;

#[cfg(test)]
mod diagnostics_test;
