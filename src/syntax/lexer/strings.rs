//! String literals and quoted symbols

use crate::diagnostics::SourceLocation;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::{Lexer, atoms::is_arity_marker};

impl Lexer {
    pub(super) fn read_string(&mut self, location: SourceLocation) -> Token {
        self.read_delimited('"', TokenType::String, location)
    }

    /// `'any text'`, optionally followed by arity markers like a bare symbol.
    pub(super) fn read_quoted_symbol(&mut self, location: SourceLocation) -> Token {
        let mut token = self.read_delimited('\'', TokenType::Symbol, location);
        if token.token_type == TokenType::Symbol {
            while let Some(marker) = self.current_char.filter(|ch| is_arity_marker(*ch)) {
                token.literal.push(marker);
                self.read_char();
            }
        }
        token
    }

    /// Reads up to the closing `quote`, unescaping as it goes. A raw newline
    /// or EOF before the closing quote yields `UnterminatedString`.
    fn read_delimited(
        &mut self,
        quote: char,
        token_type: TokenType,
        location: SourceLocation,
    ) -> Token {
        self.read_char(); // opening quote
        let mut content = String::new();

        loop {
            match self.current_char {
                None | Some('\n') => {
                    return Token::new(TokenType::UnterminatedString, content, location);
                }
                Some(ch) if ch == quote => {
                    self.read_char();
                    return Token::new(token_type, content, location);
                }
                Some('\\') => {
                    let escape_location = self.location();
                    self.read_char();
                    match self.current_char.and_then(unescape) {
                        Some(ch) => {
                            content.push(ch);
                            self.read_char();
                        }
                        None => {
                            let text = match self.current_char {
                                Some(ch) => format!("\\{}", ch),
                                None => "\\".to_string(),
                            };
                            return Token::new(TokenType::InvalidEscape, text, escape_location);
                        }
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.read_char();
                }
            }
        }
    }
}

fn unescape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        _ => None,
    }
}
