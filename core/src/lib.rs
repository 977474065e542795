//! Lexical scanner for the monkey language.
//!
//! ```
//! use monkey::lexer::{scanner::Scanner, token::TokenKind};
//!
//! let kinds: Vec<TokenKind> = Scanner::new("let x = 5;").map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Integer,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

pub mod errors;
pub mod lexer;

pub use errors::SyntaxError;
pub use lexer::scanner::Scanner;
pub use lexer::token::{Token, TokenKind};
pub use lexer::{lex, tokenize};
