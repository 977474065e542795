mod syntax_error;

pub use syntax_error::SyntaxError;
