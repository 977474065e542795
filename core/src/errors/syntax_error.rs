use miette::Diagnostic;
use thiserror::Error;

/// An unrecognized character rejected by [`crate::lexer::lex`].
#[derive(Debug, Error, Diagnostic)]
#[error("SyntaxError: {message}")]
#[diagnostic(
    code(monkey::lexer::illegal),
    help("expected an identifier, an integer, or one of `= + , ; ( ) {{ }}`")
)]
pub struct SyntaxError {
    pub message: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            span: (offset, length).into(),
        }
    }

    /// Byte offset of the rejected character.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
