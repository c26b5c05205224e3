//! Front-end for the type-domain DSL.
//!
//! Reads textual definitions of algebraic type domains, splices `include`d
//! files, replays `permute_domain` edits, and hands back a [`TypeUniverse`] of
//! concrete domains for code generators.
//!
//! ```
//! use typedomain::{CompileOptions, parse_universe};
//!
//! let source = r#"
//!     (define v1 (domain (product point x::int y::int) (unit origin)))
//!     (define v2 (permute_domain v1 (exclude origin)))
//! "#;
//! let universe = parse_universe("<inline>", source, &CompileOptions::default())?;
//! assert_eq!(universe.domain("v2").map(|d| d.type_tags()), Some(vec!["point"]));
//! # Ok::<(), Box<typedomain::Diagnostic>>(())
//! ```

pub mod compute;
pub mod diagnostics;
pub mod domain;
pub mod include;
pub mod options;
pub mod syntax;
pub mod universe;
pub mod writer;

pub use diagnostics::{Diagnostic, DiagnosticResult, ErrorKind, SourceLocation};
pub use domain::{TypeDomain, UserType};
pub use include::{FsLoader, MemoryLoader, SourceLoader};
pub use options::CompileOptions;
pub use universe::{TypeUniverse, load_universe, parse_universe, parse_universe_with_loader};
