use crate::{
    diagnostics::{Diagnostic, SourceLocation},
    syntax::node::Node,
};

pub(super) fn malformed(reason: impl Into<String>, node: &Node) -> Box<Diagnostic> {
    Box::new(Diagnostic::malformed(reason, node.location.clone()))
}

fn is_arity_marker(ch: char) -> bool {
    ch == '?' || ch == '*'
}

/// Cursor over the items of a list form, after its leading symbol.
pub(super) struct Form<'a> {
    node: &'a Node,
    head: &'a str,
    items: &'a [Node],
    index: usize,
}

impl<'a> Form<'a> {
    /// `what` describes the expected form for error messages, e.g. "a type".
    pub(super) fn open(node: &'a Node, what: &str) -> Result<Self, Box<Diagnostic>> {
        let Some(items) = node.as_list() else {
            return Err(malformed(
                format!("expected {}, found {}", what, node.describe()),
                node,
            ));
        };
        let Some(head) = items.first().and_then(Node::as_symbol) else {
            return Err(malformed(
                format!("expected {} to start with a keyword symbol", what),
                node,
            ));
        };
        Ok(Self {
            node,
            head,
            items,
            index: 1,
        })
    }

    pub(super) fn head(&self) -> &'a str {
        self.head
    }

    pub(super) fn head_node(&self) -> &'a Node {
        &self.items[0]
    }

    pub(super) fn node(&self) -> &'a Node {
        self.node
    }

    pub(super) fn location(&self) -> &'a SourceLocation {
        &self.node.location
    }

    fn describe(&self) -> String {
        format!("`({} ...)`", self.head)
    }

    pub(super) fn next_node(&mut self, what: &str) -> Result<&'a Node, Box<Diagnostic>> {
        let Some(node) = self.items.get(self.index) else {
            return Err(malformed(
                format!("missing {} in {}", what, self.describe()),
                self.node,
            ));
        };
        self.index += 1;
        Ok(node)
    }

    /// Next item as a plain name: an unannotated symbol without arity markers.
    pub(super) fn next_name(&mut self, what: &str) -> Result<&'a str, Box<Diagnostic>> {
        let node = self.next_node(what)?;
        expect_name(node, what)
    }

    pub(super) fn next_int(&mut self, what: &str) -> Result<(i64, &'a Node), Box<Diagnostic>> {
        let node = self.next_node(what)?;
        match node.as_int() {
            Some(value) if node.annotations.is_empty() => Ok((value, node)),
            _ => Err(malformed(
                format!("expected {} to be an integer, found {}", what, node.describe()),
                node,
            )),
        }
    }

    pub(super) fn next_string(&mut self, what: &str) -> Result<&'a str, Box<Diagnostic>> {
        let node = self.next_node(what)?;
        match node.as_string() {
            Some(text) if node.annotations.is_empty() => Ok(text),
            _ => Err(malformed(
                format!("expected {} to be a string, found {}", what, node.describe()),
                node,
            )),
        }
    }

    /// Consumes and returns every item not read yet.
    pub(super) fn rest(&mut self) -> &'a [Node] {
        let rest = self.items.get(self.index..).unwrap_or_default();
        self.index = self.items.len();
        rest
    }

    pub(super) fn finish(&self) -> Result<(), Box<Diagnostic>> {
        match self.items.get(self.index) {
            Some(extra) => Err(malformed(
                format!("unexpected {} in {}", extra.describe(), self.describe()),
                extra,
            )),
            None => Ok(()),
        }
    }
}

pub(super) fn expect_name<'a>(node: &'a Node, what: &str) -> Result<&'a str, Box<Diagnostic>> {
    let Some(name) = node.as_symbol() else {
        return Err(malformed(
            format!("expected {} to be a symbol, found {}", what, node.describe()),
            node,
        ));
    };
    if let Some(annotation) = node.annotations.first() {
        return Err(malformed(
            format!("unexpected annotation `{}::` on {} `{}`", annotation, what, name),
            node,
        ));
    }
    if name.contains(is_arity_marker) {
        return Err(malformed(
            format!("{} `{}` cannot carry an arity marker", what, name),
            node,
        ));
    }
    Ok(name)
}

pub(super) fn reject_annotations(node: &Node, what: &str) -> Result<(), Box<Diagnostic>> {
    match node.annotations.first() {
        Some(annotation) => Err(malformed(
            format!("{} cannot be annotated (found `{}::`)", what, annotation),
            node,
        )),
        None => Ok(()),
    }
}
