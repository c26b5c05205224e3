//! Tokenizer for the type-domain notation.
//!
//! The lexer never fails: lexical problems come back as error tokens
//! (`Illegal`, `UnterminatedString`, ...) and the reader turns the first one it
//! meets into a syntax error.

mod atoms;
mod comments;
mod strings;

use std::sync::Arc;

use crate::diagnostics::SourceLocation;

use super::token::Token;
use super::token_type::TokenType;

pub use atoms::parse_int_literal;

use atoms::{is_digit_start, is_symbol_start};

#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    current_char: Option<char>,
    line: usize,
    column: usize,
    file: Arc<str>,
    /// Where an unterminated `/*` started.
    unterminated_block_comment_at: Option<(usize, usize)>,
}

impl Lexer {
    pub fn new(input: &str, file: impl Into<Arc<str>>) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            current_char: None,
            line: 1,
            column: 1,
            file: file.into(),
            unterminated_block_comment_at: None,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_ignorable();

        if let Some((line, column)) = self.unterminated_block_comment_at.take() {
            return Token::new(
                TokenType::UnterminatedBlockComment,
                "/*",
                self.location_at(line, column),
            );
        }

        let location = self.location();

        let token = match self.current_char {
            Some('(') => Token::new(TokenType::LParen, "(", location),
            Some(')') => Token::new(TokenType::RParen, ")", location),
            Some(':') if self.peek_char() == Some(':') => {
                self.read_char();
                Token::new(TokenType::DoubleColon, "::", location)
            }
            Some('"') => return self.read_string(location),
            Some('\'') => return self.read_quoted_symbol(location),
            None => Token::new(TokenType::Eof, "", location),
            Some(ch) if is_symbol_start(ch) => return self.read_symbol(location),
            Some(ch) if is_digit_start(ch, self.peek_char()) => return self.read_number(location),
            Some(ch) => Token::new(TokenType::Illegal, ch.to_string(), location),
        };

        self.read_char();
        token
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn location(&self) -> SourceLocation {
        self.location_at(self.line, self.column)
    }

    fn location_at(&self, line: usize, column: usize) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.file), line, column)
    }

    fn read_char(&mut self) {
        // Column tracks the position of current_char, so advance it before moving on.
        if self.current_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else if self.current_char.is_some() {
            self.column += 1;
        }

        self.current_char = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.position.min(self.input.len())]
            .iter()
            .collect()
    }
}
