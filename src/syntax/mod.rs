//! Source text to statements: lexing, reading located nodes, and parsing
//! top-level forms.

pub mod lexer;
pub mod node;
pub mod parser;
pub mod reader;
pub mod statement;
pub mod token;
pub mod token_type;

pub use node::{Node, NodeKind};
pub use parser::{parse_nodes, parse_source};
pub use reader::read_nodes;
pub use statement::{EditDirective, IncludeDirective, Permutation, Statement};
