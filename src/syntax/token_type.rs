use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Special
    Illegal,
    Eof,

    // Atoms
    Symbol,
    Int,
    String,

    // Delimiters
    LParen,
    RParen,
    DoubleColon,

    // Lexical errors surfaced to the reader
    UnterminatedString,
    UnterminatedBlockComment,
    InvalidEscape,
}

impl TokenType {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenType::Illegal
                | TokenType::UnterminatedString
                | TokenType::UnterminatedBlockComment
                | TokenType::InvalidEscape
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenType::Illegal => "ILLEGAL",
            TokenType::Eof => "EOF",
            TokenType::Symbol => "SYMBOL",
            TokenType::Int => "INT",
            TokenType::String => "STRING",
            TokenType::LParen => "(",
            TokenType::RParen => ")",
            TokenType::DoubleColon => "::",
            TokenType::UnterminatedString => "UNTERMINATED_STRING",
            TokenType::UnterminatedBlockComment => "UNTERMINATED_BLOCK_COMMENT",
            TokenType::InvalidEscape => "INVALID_ESCAPE",
        };
        f.write_str(text)
    }
}
