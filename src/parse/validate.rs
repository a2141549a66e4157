use super::ast::{Node, NodeKind, Token};
use super::lexer::TokenKind;
use crate::common::*;
use crate::dice::DieSpec;
use crate::error::{ParseError, Result, SyntaxErrorKind};

/// Checks that values and operators alternate and resolves each token's text.
///
/// A leading operator is allowed so that `-3` and `+d6` parse; every operator
/// must be followed by a value, and no value may directly follow another.
pub fn validate(tokens: &NonEmpty<Token>) -> Result<NonEmpty<Node>> {
    let mut nodes = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        let peek = iter.peek();
        let kind = match token.kind {
            TokenKind::Dice | TokenKind::Integer => {
                let kind = resolve_value(token)?;
                if peek.map_or(false, |next| next.is_value()) {
                    return Err(ParseError::syntax(
                        token.span.end,
                        SyntaxErrorKind::ArithmeticExpected,
                    ));
                }
                kind
            }
            TokenKind::Arithmetic => {
                let op = token
                    .value
                    .chars()
                    .next()
                    .and_then(ArithmeticOperator::from_char);
                match (op, peek) {
                    (Some(op), Some(next)) if next.is_value() => NodeKind::Operator(op),
                    _ => {
                        let c = token.value.chars().next().unwrap_or('?');
                        return Err(ParseError::syntax(
                            token.span.start,
                            SyntaxErrorKind::InvalidArithmetic(c),
                        ));
                    }
                }
            }
        };
        nodes.push(Node::new(kind, token.span.clone()));
    }

    NonEmpty::try_from_vec(nodes).map_err(|_| ParseError::syntax(0, SyntaxErrorKind::NoTokens))
}

fn resolve_value(token: &Token) -> Result<NodeKind> {
    let position = token.span.start;
    match token.kind {
        TokenKind::Dice => token
            .value
            .parse::<DieSpec>()
            .map(NodeKind::Dice)
            .map_err(|e| ParseError::syntax(position, SyntaxErrorKind::InvalidDice(e))),
        _ => token
            .value
            .parse::<Int>()
            .map(NodeKind::Integer)
            .map_err(|_| ParseError::syntax(position, SyntaxErrorKind::IntegerOutOfRange)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lexer::tokenize;

    fn check(s: &str) -> Result<NonEmpty<Node>> {
        validate(&tokenize(s)?)
    }

    fn kinds(s: &str) -> Vec<NodeKind> {
        check(s).unwrap().iter().map(|n| n.kind).collect()
    }

    fn dice(count: UInt, sides: Sides) -> NodeKind {
        NodeKind::Dice(DieSpec::new(NonZeroUInt::new(count).unwrap(), sides))
    }

    fn poly(sides: UInt) -> Sides {
        Sides::Poly(NonZeroUInt::new(sides).unwrap())
    }

    #[test]
    fn test_resolve() {
        use ArithmeticOperator::*;

        assert_eq!(
            kinds("2d6 - d% + 45"),
            vec![
                dice(2, poly(6)),
                NodeKind::Operator(Sub),
                dice(1, Sides::Percentile),
                NodeKind::Operator(Add),
                NodeKind::Integer(45),
            ]
        );
        assert_eq!(
            kinds("-3"),
            vec![NodeKind::Operator(Sub), NodeKind::Integer(3)]
        );
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            check("2d5 +"),
            Err(ParseError::syntax(
                4,
                SyntaxErrorKind::InvalidArithmetic('+')
            ))
        );
        assert_eq!(
            check("2d5 -"),
            Err(ParseError::syntax(
                4,
                SyntaxErrorKind::InvalidArithmetic('-')
            ))
        );
        assert_eq!(
            check("1 + - 2"),
            Err(ParseError::syntax(
                2,
                SyntaxErrorKind::InvalidArithmetic('+')
            ))
        );
    }

    #[test]
    fn test_adjacent_values() {
        assert_eq!(
            check("3d6 2d6"),
            Err(ParseError::syntax(3, SyntaxErrorKind::ArithmeticExpected))
        );
        assert_eq!(
            check("1 2"),
            Err(ParseError::syntax(1, SyntaxErrorKind::ArithmeticExpected))
        );
    }

    #[test]
    fn test_bad_literals() {
        assert!(matches!(
            check("0d6"),
            Err(ParseError::SyntaxError {
                position: 0,
                kind: SyntaxErrorKind::InvalidDice(_)
            })
        ));
        assert!(matches!(
            check("1 + 2d0"),
            Err(ParseError::SyntaxError {
                position: 4,
                kind: SyntaxErrorKind::InvalidDice(_)
            })
        ));
        assert_eq!(
            check("99999999999999999999"),
            Err(ParseError::syntax(0, SyntaxErrorKind::IntegerOutOfRange))
        );
    }
}
