use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::token::{Token, TokenKind, keyword_kind};

/// Pulls tokens out of the source one at a time.
///
/// `next_token` keeps returning `EndOfInput` once the input is exhausted. The
/// `Iterator` impl stops after the first `EndOfInput`.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Scan arbitrary bytes. Non-ASCII bytes come out as `Illegal` one at a time.
    pub fn from_bytes(source: &'src [u8]) -> Self {
        trace!(len = source.len(), "scanner created");
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let Some(ch) = self.cursor.current() else {
            return Token::end_of_input();
        };

        let token = if let Some(kind) = TokenKind::from_symbol(ch) {
            self.cursor.advance();
            Token::from_bytes(kind, self.cursor.slice_from(start))
        } else if is_letter(ch) {
            self.cursor.eat_while(is_letter);
            let text = self.cursor.slice_from(start);
            let kind = keyword_kind(text).unwrap_or(TokenKind::Identifier);
            Token::from_bytes(kind, text)
        } else if ch.is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            Token::from_bytes(TokenKind::Integer, self.cursor.slice_from(start))
        } else {
            debug!(offset = start, byte = ch, "illegal byte");
            self.cursor.advance();
            Token::from_bytes(TokenKind::Illegal, self.cursor.slice_from(start))
        };

        trace!(offset = start, kind = %token.kind(), "token");
        token
    }

    /// Byte offset of the cursor.
    pub(crate) fn offset(&self) -> usize {
        self.cursor.position()
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| matches!(c, b' ' | b'\t' | b'\r' | b'\n'));
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end_of_input();
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
