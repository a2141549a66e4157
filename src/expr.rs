use crate::common::*;
use crate::error::Result;
use crate::eval::{self, Breakdown, Evaluation};
use crate::parse::{self, ast::Node};
use crate::roll::{Maximum, Minimum, Random, RollStrategy, Roller};
use std::fmt;

/// A compiled dice expression such as `2d6 + 3 - d%`.
///
/// Parsing happens once, in [`DiceExpression::new`]. The compiled expression
/// never changes afterwards and can be evaluated any number of times, with
/// random rolls or with every die pinned to its lowest or highest face.
///
/// # Examples
/// ```
/// # use dice_expr::DiceExpression;
/// let expr = DiceExpression::new("2d6 + 3").unwrap();
/// assert_eq!(expr.min(), 5);
/// assert_eq!(expr.max(), 15);
///
/// let rolled = expr.roll();
/// assert!((5..=15).contains(&rolled));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiceExpression {
    source: String,
    nodes: NonEmpty<Node>,
}

impl DiceExpression {
    pub fn new(source: &str) -> Result<Self> {
        let nodes = parse::parse(source)?;
        Ok(Self {
            source: source.to_owned(),
            nodes,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Rolls with the current thread's shared generator.
    pub fn roll(&self) -> Int {
        self.evaluate(&mut Random::shared(), false).total()
    }

    pub fn roll_breakdown(&self) -> Breakdown {
        self.breakdown_with(&mut Random::shared())
    }

    pub fn roll_with<R: Roller>(&self, roller: R) -> Int {
        self.evaluate(&mut Random::new(roller), false).total()
    }

    pub fn roll_breakdown_with<R: Roller>(&self, roller: R) -> Breakdown {
        self.breakdown_with(&mut Random::new(roller))
    }

    /// The total when every die shows 1.
    pub fn min(&self) -> Int {
        self.evaluate(&mut Minimum, false).total()
    }

    pub fn min_breakdown(&self) -> Breakdown {
        self.breakdown_with(&mut Minimum)
    }

    /// The total when every die shows its highest face.
    pub fn max(&self) -> Int {
        self.evaluate(&mut Maximum, false).total()
    }

    pub fn max_breakdown(&self) -> Breakdown {
        self.breakdown_with(&mut Maximum)
    }

    pub fn evaluate<S: RollStrategy + ?Sized>(
        &self,
        strategy: &mut S,
        include_breakdown: bool,
    ) -> Evaluation {
        eval::evaluate(&self.nodes, strategy, include_breakdown)
    }

    fn breakdown_with<S: RollStrategy + ?Sized>(&self, strategy: &mut S) -> Breakdown {
        let (postfix, dice) = eval::to_postfix(&self.nodes, strategy, true);
        Breakdown {
            roll: eval::eval_postfix(&postfix),
            dice: dice.unwrap_or_default(),
        }
    }
}

impl std::str::FromStr for DiceExpression {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
