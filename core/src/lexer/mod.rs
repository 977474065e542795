pub mod cursor;
pub mod scanner;
pub mod token;

use crate::errors::SyntaxError;
use scanner::Scanner;
use token::{Token, TokenKind};

pub use token::resolve_identifier_kind;

/// Tokenize source code into a list of tokens ending with `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

/// Tokenize source code, rejecting the first unrecognized character.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = scanner.next() {
        if token.kind() == TokenKind::Illegal {
            let start = scanner.offset() - token.literal().len();
            return Err(SyntaxError::new(
                format!("unexpected character '{}'", token.text()),
                start,
                token.literal().len(),
            ));
        }
        tokens.push(token);
    }

    Ok(tokens)
}
