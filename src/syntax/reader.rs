//! Builds located syntax nodes from the token stream.

use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticResult, SourceLocation};

use super::{
    lexer::{Lexer, parse_int_literal},
    node::{Node, NodeKind},
    token::Token,
    token_type::TokenType,
};

/// Deepest list nesting accepted. Reading recurses once per level.
pub const MAX_NESTING: usize = 256;

pub struct Reader {
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    depth: usize,
}

impl Reader {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            current_token,
            peek_token,
            depth: 0,
        }
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn is_current_token(&self, token_type: TokenType) -> bool {
        self.current_token.token_type == token_type
    }

    /// Reads every top-level node until EOF.
    pub fn read_all(&mut self) -> DiagnosticResult<Vec<Node>> {
        let mut nodes = Vec::new();
        while !self.is_current_token(TokenType::Eof) {
            nodes.push(self.read_node()?);
        }
        Ok(nodes)
    }

    fn read_node(&mut self) -> DiagnosticResult<Node> {
        let location = self.current_token.location.clone();

        let mut annotations = Vec::new();
        while self.is_current_token(TokenType::Symbol)
            && self.peek_token.token_type == TokenType::DoubleColon
        {
            annotations.push(self.current_token.literal.clone());
            self.next_token();
            self.next_token();
        }

        let kind = match self.current_token.token_type {
            TokenType::LParen => return self.read_list(location, annotations),
            TokenType::Symbol => NodeKind::Symbol(self.current_token.literal.clone()),
            TokenType::String => NodeKind::String(self.current_token.literal.clone()),
            TokenType::Int => {
                let value = parse_int_literal(&self.current_token.literal).ok_or_else(|| {
                    Diagnostic::syntax(
                        format!("integer literal `{}` is out of range", self.current_token.literal),
                        self.current_token.location.clone(),
                    )
                })?;
                NodeKind::Int(value)
            }
            TokenType::Eof => {
                return Err(match annotations.last() {
                    Some(annotation) => Diagnostic::syntax(
                        format!("expected a value after annotation `{}::`", annotation),
                        self.current_token.location.clone(),
                    ),
                    None => Diagnostic::syntax(
                        "unexpected end of input",
                        self.current_token.location.clone(),
                    ),
                }
                .into());
            }
            _ => return Err(self.token_error().into()),
        };

        self.next_token();
        let mut node = Node::new(kind, location);
        node.annotations = annotations;
        Ok(node)
    }

    /// Entry: current token is `(`. Leaves the token after `)` current.
    /// `location` is the first annotation when annotated, else the `(`.
    fn read_list(
        &mut self,
        location: SourceLocation,
        annotations: Vec<String>,
    ) -> DiagnosticResult<Node> {
        let open = self.current_token.location.clone();
        if self.depth == MAX_NESTING {
            return Err(Diagnostic::syntax(
                format!("lists nested deeper than {} levels", MAX_NESTING),
                open,
            )
            .into());
        }
        self.depth += 1;
        self.next_token();

        let mut items = Vec::new();
        while !self.is_current_token(TokenType::RParen) {
            if self.is_current_token(TokenType::Eof) {
                return Err(Diagnostic::syntax("unterminated list", open).into());
            }
            items.push(self.read_node()?);
        }
        self.next_token();
        self.depth -= 1;

        let mut node = Node::new(NodeKind::List(items), location);
        node.annotations = annotations;
        Ok(node)
    }

    fn token_error(&self) -> Diagnostic {
        let token = &self.current_token;
        let location = token.location.clone();
        match token.token_type {
            TokenType::RParen => Diagnostic::syntax("unexpected `)`", location),
            TokenType::DoubleColon => {
                Diagnostic::syntax("`::` must follow an annotation symbol", location)
            }
            TokenType::UnterminatedString => Diagnostic::syntax("unterminated string", location),
            TokenType::UnterminatedBlockComment => {
                Diagnostic::syntax("unterminated block comment", location)
            }
            TokenType::InvalidEscape => Diagnostic::syntax(
                format!("invalid escape sequence `{}`", token.literal),
                location,
            ),
            _ => Diagnostic::syntax(format!("invalid token `{}`", token.literal), location),
        }
    }
}

/// Reads `source` into its top-level syntax nodes.
pub fn read_nodes(source: &str, file: impl Into<Arc<str>>) -> DiagnosticResult<Vec<Node>> {
    Reader::new(Lexer::new(source, file)).read_all()
}
