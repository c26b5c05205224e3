//! Symbols and integer literals
//!
//! Symbols may end in a run of `?`/`*` arity markers, which stay part of the
//! symbol text; the parser decides whether they are legal where they appear.

use crate::diagnostics::SourceLocation;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::Lexer;

pub(super) fn is_symbol_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_symbol_continue(ch: char) -> bool {
    is_symbol_start(ch) || ch.is_ascii_digit() || ch == '.'
}

pub(super) fn is_arity_marker(ch: char) -> bool {
    ch == '?' || ch == '*'
}

pub(super) fn is_digit_start(ch: char, next: Option<char>) -> bool {
    ch.is_ascii_digit() || (ch == '-' && next.is_some_and(|n| n.is_ascii_digit()))
}

impl Lexer {
    pub(super) fn read_symbol(&mut self, location: SourceLocation) -> Token {
        let start = self.position;
        while self.current_char.is_some_and(is_symbol_continue) {
            self.read_char();
        }
        while self.current_char.is_some_and(is_arity_marker) {
            self.read_char();
        }
        Token::new(TokenType::Symbol, self.slice(start), location)
    }

    /// Decimal (`-12`, `1_000`) or hexadecimal (`0x1F`) integers. A number that
    /// runs straight into symbol characters (`12ab`) or a bare `0x` is `Illegal`.
    pub(super) fn read_number(&mut self, location: SourceLocation) -> Token {
        let start = self.position;
        if self.current_char == Some('-') {
            self.read_char();
        }

        if self.current_char == Some('0') && matches!(self.peek_char(), Some('x' | 'X')) {
            self.read_char();
            self.read_char();
            let digits_start = self.position;
            while self
                .current_char
                .is_some_and(|ch| ch == '_' || ch.is_ascii_hexdigit())
            {
                self.read_char();
            }
            if !self.input[digits_start..self.position.min(self.input.len())]
                .iter()
                .any(char::is_ascii_hexdigit)
            {
                while self.current_char.is_some_and(is_symbol_continue) {
                    self.read_char();
                }
                return Token::new(TokenType::Illegal, self.slice(start), location);
            }
        } else {
            while self
                .current_char
                .is_some_and(|ch| ch == '_' || ch.is_ascii_digit())
            {
                self.read_char();
            }
        }

        if self.current_char.is_some_and(is_symbol_continue) {
            while self.current_char.is_some_and(is_symbol_continue) {
                self.read_char();
            }
            return Token::new(TokenType::Illegal, self.slice(start), location);
        }

        Token::new(TokenType::Int, self.slice(start), location)
    }
}

/// Parses the text of an `Int` token.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let cleaned: String = digits.chars().filter(|ch| *ch != '_').collect();

    let magnitude = if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        if hex.is_empty() {
            return None;
        }
        i128::from_str_radix(hex, 16).ok()?
    } else {
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<i128>().ok()?
    };

    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
