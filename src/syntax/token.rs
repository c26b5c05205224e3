use std::fmt;

use crate::diagnostics::SourceLocation;

use super::token_type::TokenType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Raw text for symbols and numbers, unescaped content for strings and
    /// quoted symbols.
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            token_type,
            literal: literal.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {}:{})",
            self.token_type, self.literal, self.location.line, self.location.column
        )
    }
}
