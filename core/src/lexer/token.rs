use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A single token: its kind and the exact source bytes that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    kind: TokenKind,
    #[serde(serialize_with = "serialize_literal")]
    literal: &'src [u8],
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, literal: &'src str) -> Self {
        Self::from_bytes(kind, literal.as_bytes())
    }

    pub fn from_bytes(kind: TokenKind, literal: &'src [u8]) -> Self {
        Self { kind, literal }
    }

    pub fn end_of_input() -> Self {
        Self::from_bytes(TokenKind::EndOfInput, b"")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw lexeme bytes.
    pub fn literal(&self) -> &'src [u8] {
        self.literal
    }

    /// The lexeme as text. `None` only for an `Illegal` token holding a
    /// single byte of a multi-byte UTF-8 sequence.
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.literal).ok()
    }

    /// The lexeme as text, replacing invalid bytes with U+FFFD.
    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.literal)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text())
    }
}

fn serialize_literal<S: Serializer>(literal: &&[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(literal))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Special
    Illegal,
    EndOfInput,

    // Identifiers and literals
    Identifier,
    Integer,

    // Operators
    Assign,
    Plus,

    // Punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
}

impl TokenKind {
    /// Canonical spelling of the kind in the language's token table.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }

    /// Kind of a fixed single-character symbol.
    pub fn from_symbol(c: u8) -> Option<TokenKind> {
        Some(match c {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword kind for an exact, case-sensitive spelling.
pub fn keyword_kind(text: &[u8]) -> Option<TokenKind> {
    match text {
        b"fn" => Some(TokenKind::Function),
        b"let" => Some(TokenKind::Let),
        _ => None,
    }
}

/// Resolve an identifier-shaped lexeme to its keyword kind, or `Identifier`.
pub fn resolve_identifier_kind(text: &str) -> TokenKind {
    keyword_kind(text.as_bytes()).unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve_exactly() {
        assert_eq!(resolve_identifier_kind("fn"), TokenKind::Function);
        assert_eq!(resolve_identifier_kind("let"), TokenKind::Let);
    }

    #[test]
    fn near_keywords_are_identifiers() {
        for text in ["Let", "LET", "FN", "fun", "lets", "le", "f", "_let"] {
            assert_eq!(resolve_identifier_kind(text), TokenKind::Identifier, "{text}");
        }
    }

    #[test]
    fn only_keywords_report_is_keyword() {
        assert!(TokenKind::Let.is_keyword());
        assert!(TokenKind::Function.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn symbol_spelling_matches_kind() {
        for c in *b"=+,;(){}" {
            let kind = TokenKind::from_symbol(c).expect("fixed symbol");
            assert_eq!(kind.as_str().as_bytes(), &[c]);
        }
        assert_eq!(TokenKind::from_symbol(b'-'), None);
    }

    #[test]
    fn display_uses_table_spelling() {
        assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
        assert_eq!(Token::new(TokenKind::Let, "let").to_string(), "Let(\"let\")");
    }
}
