use std::fmt;

use crate::diagnostics::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    List(Vec<Node>),
    Symbol(String),
    String(String),
    Int(i64),
}

/// A located syntax node. `annotations` holds the `a::b::` prefix chain in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub annotations: Vec<String>,
    pub location: SourceLocation,
}

impl Node {
    pub fn new(kind: NodeKind, location: SourceLocation) -> Self {
        Self {
            kind,
            annotations: Vec::new(),
            location,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Symbol(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match &self.kind {
            NodeKind::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The leading symbol of a list form, e.g. `define` for `(define ...)`.
    pub fn head(&self) -> Option<&str> {
        self.as_list()?.first()?.as_symbol()
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            NodeKind::List(_) => match self.head() {
                Some(head) => format!("`({} ...)`", head),
                None => "a list".to_string(),
            },
            NodeKind::Symbol(text) => format!("symbol `{}`", text),
            NodeKind::String(text) => format!("string {:?}", text),
            NodeKind::Int(value) => format!("integer `{}`", value),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{}::", annotation)?;
        }
        match &self.kind {
            NodeKind::List(items) => {
                f.write_str("(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
            NodeKind::Symbol(text) => f.write_str(text),
            NodeKind::String(text) => write!(f, "{:?}", text),
            NodeKind::Int(value) => write!(f, "{}", value),
        }
    }
}
