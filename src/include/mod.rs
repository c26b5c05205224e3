//! Cross-file inclusion.
//!
//! `(include "path")` is replaced in place by the statements of the named
//! file. Lookup tries the including file's directory first, then each root in
//! order. Traversal keeps an explicit stack of frames, so include depth is
//! bounded by memory rather than the call stack.

mod loader;
mod resolver;

pub use loader::{FsLoader, MemoryLoader, SourceLoader, lexical_normalize};
pub use resolver::{IncludeResolver, normalize_roots};

#[cfg(test)]
mod include_test;
