use super::ast::Token;
use crate::common::NonEmpty;
use crate::error::{ParseError, Result, SyntaxErrorKind};
use logos::Logos;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum Lexeme {
    #[regex(r"[0-9]*[dD]([0-9]+|%)")]
    Dice,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[+-]")]
    Arithmetic,

    #[regex(r"\s+", logos::skip)]
    #[error]
    Error,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Dice,
    Integer,
    Arithmetic,
}

impl TokenKind {
    pub const VALUES: &'static [Self] = &[Self::Dice, Self::Integer];

    pub fn is_value(&self) -> bool {
        Self::VALUES.contains(self)
    }
}

/// Splits `input` into positioned tokens, dropping whitespace.
///
/// Token text is lowercased so that `D6` and `d6` compile identically.
pub fn tokenize(input: &str) -> Result<NonEmpty<Token>> {
    let mut lexer = Lexeme::lexer(input);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let kind = match lexeme {
            Lexeme::Dice => TokenKind::Dice,
            Lexeme::Integer => TokenKind::Integer,
            Lexeme::Arithmetic => TokenKind::Arithmetic,
            Lexeme::Error => {
                let remainder = input.get(span.start..).unwrap_or_default();
                return Err(ParseError::invalid_token(span.start, remainder));
            }
        };
        tokens.push(Token::new(kind, span, lexer.slice().to_ascii_lowercase()));
    }

    NonEmpty::try_from_vec(tokens)
        .map_err(|_| ParseError::syntax(input.len(), SyntaxErrorKind::NoTokens))
}
