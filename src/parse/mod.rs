pub mod ast;
mod lexer;
mod validate;

pub use lexer::{tokenize, TokenKind};
pub use validate::validate;

use crate::common::NonEmpty;
use crate::error::Result;

/// Tokenizes and validates `s`, producing resolved nodes in source order.
pub(crate) fn parse(s: &str) -> Result<NonEmpty<ast::Node>> {
    validate(&tokenize(s)?)
}
