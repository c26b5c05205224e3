//! Whitespace and comment skipping

use super::Lexer;

impl Lexer {
    pub(super) fn skip_ignorable(&mut self) {
        loop {
            while matches!(self.current_char, Some(' ' | '\t' | '\r' | '\n')) {
                self.read_char();
            }

            if self.current_char == Some('/') && self.peek_char() == Some('/') {
                while self.current_char.is_some() && self.current_char != Some('\n') {
                    self.read_char();
                }
                continue;
            }

            if self.current_char == Some('/') && self.peek_char() == Some('*') {
                let start = (self.line, self.column);
                if !self.skip_block_comment() {
                    self.unterminated_block_comment_at = Some(start);
                    break;
                }
                continue;
            }

            break;
        }
    }

    /// Skip a `/* ... */` comment. Block comments do not nest.
    /// Returns false if EOF was reached before the closing `*/`.
    fn skip_block_comment(&mut self) -> bool {
        self.read_char(); // '/'
        self.read_char(); // '*'

        while self.current_char.is_some() {
            if self.current_char == Some('*') && self.peek_char() == Some('/') {
                self.read_char();
                self.read_char();
                return true;
            }
            self.read_char();
        }

        false
    }
}
