//! Parse and roll compact dice expressions such as `2d6 + 3 - d%`.
//!
//! An expression is a flat chain of dice (`[count]d<sides>`, with `d%` as a
//! hundred-sided die) and integers joined by `+` and `-`, evaluated left to
//! right. Letters are case-insensitive and whitespace between tokens is ignored.
//!
//! ```
//! # use dice_expr::{roll, DiceExpression};
//! let attack = DiceExpression::new("1d20 + 5")?;
//! assert_eq!(attack.min(), 6);
//! assert_eq!(attack.max(), 25);
//!
//! dice_expr::reseed(1);
//! let breakdown = attack.roll_breakdown();
//! assert_eq!(breakdown.dice.len(), 2);
//! assert_eq!(breakdown.roll, breakdown.dice[0] + 5);
//!
//! assert!((2..=12).contains(&roll("2d6")?));
//! # Ok::<(), dice_expr::ParseError>(())
//! ```

mod common;
mod dice;
mod error;
mod eval;
mod expr;
pub mod parse;
pub mod roll;

pub use common::{ArithmeticOperator, Int, NonZeroUInt, Sides, UInt};
pub use dice::{DieSpec, ParseDiceError};
pub use error::{ParseError, Result, SyntaxErrorKind};
pub use eval::{Breakdown, Evaluation};
pub use expr::DiceExpression;
pub use roll::{enable_testing_mode, reseed};

/// Compiles `expression` and rolls it once with the shared generator.
pub fn roll(expression: &str) -> Result<Int> {
    DiceExpression::new(expression).map(|e| e.roll())
}

/// Compiles `expression` and returns its lowest possible total.
pub fn min(expression: &str) -> Result<Int> {
    DiceExpression::new(expression).map(|e| e.min())
}

/// Compiles `expression` and returns its highest possible total.
pub fn max(expression: &str) -> Result<Int> {
    DiceExpression::new(expression).map(|e| e.max())
}
