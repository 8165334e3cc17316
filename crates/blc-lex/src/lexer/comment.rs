//! Comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a `//` comment up to (but not including) the newline, so the
    /// line break still becomes a `Newline` token.
    pub(crate) fn skip_line_comment(&mut self) {
        // Consume the two slashes.
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment. Not nesting; an unterminated comment
    /// consumes the rest of the input. Embedded newlines advance the line
    /// counter but produce no tokens.
    pub(crate) fn skip_block_comment(&mut self) {
        // Consume `/*`.
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            if self.cursor.current() == b'*' && self.cursor.peek() == b'/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }
}
