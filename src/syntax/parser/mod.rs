//! Turns syntax nodes into top-level statements.
//!
//! The parser is purely structural: it checks the shape of every form and the
//! well-formedness of each type definition, but never looks across statements.
//! Include directives are returned as-is for the include resolver.

mod helpers;
mod statement;
mod types;

use std::sync::Arc;

use crate::diagnostics::DiagnosticResult;

use super::{node::Node, reader::read_nodes, statement::Statement};

/// Parses top-level nodes in order. The first malformed form aborts.
pub fn parse_nodes(nodes: &[Node]) -> DiagnosticResult<Vec<Statement>> {
    nodes.iter().map(statement::parse_statement).collect()
}

/// Reads and parses one source text.
pub fn parse_source(source: &str, file: impl Into<Arc<str>>) -> DiagnosticResult<Vec<Statement>> {
    let nodes = read_nodes(source, file)?;
    parse_nodes(&nodes)
}
