use super::lexer::TokenKind;
use crate::common::*;
use crate::dice::DieSpec;
use logos::Span;

/// A classified slice of the source text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, value: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
        }
    }

    pub fn is_value(&self) -> bool {
        self.kind.is_value()
    }
}

/// A token whose text has been resolved into the value it stands for.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Dice(DieSpec),
    Integer(Int),
    Operator(ArithmeticOperator),
}
