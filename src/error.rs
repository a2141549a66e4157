use crate::dice::ParseDiceError;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a dice expression could not be compiled.
///
/// Both variants carry the byte offset into the source string where the
/// problem was found.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unrecognized token at position {position}: {remainder:?}")]
    InvalidToken { position: usize, remainder: String },
    #[error("syntax error at position {position}: {kind}")]
    SyntaxError {
        position: usize,
        kind: SyntaxErrorKind,
    },
}

impl ParseError {
    pub(crate) fn invalid_token(position: usize, remainder: impl Into<String>) -> Self {
        Self::InvalidToken {
            position,
            remainder: remainder.into(),
        }
    }

    pub(crate) fn syntax(position: usize, kind: SyntaxErrorKind) -> Self {
        Self::SyntaxError { position, kind }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::InvalidToken { position, .. } | Self::SyntaxError { position, .. } => *position,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    #[error("no valid tokens found in expression")]
    NoTokens,
    #[error("arithmetic token expected")]
    ArithmeticExpected,
    #[error("invalid arithmetic token '{0}'")]
    InvalidArithmetic(char),
    #[error("{0}")]
    InvalidDice(ParseDiceError),
    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::invalid_token(4, "x").to_string(),
            "unrecognized token at position 4: \"x\""
        );
        assert_eq!(
            ParseError::syntax(3, SyntaxErrorKind::InvalidArithmetic('+')).to_string(),
            "syntax error at position 3: invalid arithmetic token '+'"
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(ParseError::syntax(7, SyntaxErrorKind::NoTokens).position(), 7);
        assert_eq!(ParseError::invalid_token(2, "?").position(), 2);
    }
}
