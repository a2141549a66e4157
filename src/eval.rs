use crate::common::*;
use crate::parse::ast::{Node, NodeKind};
use crate::roll::RollStrategy;

/// One entry of an expression in postfix order, with dice already rolled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Postfix {
    Value(Int),
    Operator(ArithmeticOperator),
}

/// The outcome of a roll together with every value that went into it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Breakdown {
    /// Final total.
    pub roll: Int,
    /// Each die face and each integer literal, in source order.
    pub dice: Vec<Int>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Evaluation {
    Total(Int),
    Breakdown(Breakdown),
}

impl Evaluation {
    pub fn total(&self) -> Int {
        match self {
            Self::Total(x) => *x,
            Self::Breakdown(b) => b.roll,
        }
    }

    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            Self::Total(_) => None,
            Self::Breakdown(b) => Some(b),
        }
    }
}

/// Rolls every dice node with `strategy` and reorders the expression into
/// postfix form.
///
/// Only `+` and `-` exist and they share a precedence level, so buffered
/// operators are flushed whenever the next operator arrives and once more at
/// the end. With `include_breakdown` the second return value lists every die
/// face and literal in the order they appear; without it dice are only
/// summed and no faces are kept.
pub fn to_postfix<S: RollStrategy + ?Sized>(
    nodes: &[Node],
    strategy: &mut S,
    include_breakdown: bool,
) -> (Vec<Postfix>, Option<Vec<Int>>) {
    let mut output = Vec::with_capacity(nodes.len());
    let mut operators: Vec<ArithmeticOperator> = Vec::new();
    let mut rolls = include_breakdown.then(Vec::new);

    for node in nodes {
        match node.kind {
            NodeKind::Dice(dice) => match rolls.as_mut() {
                Some(rolls) => {
                    let result = strategy.roll(&dice);
                    output.push(Postfix::Value(result.total()));
                    rolls.extend(result.into_values().into_iter().map(Int::from));
                }
                None => output.push(Postfix::Value(strategy.total(&dice))),
            },
            NodeKind::Integer(x) => {
                output.push(Postfix::Value(x));
                if let Some(rolls) = rolls.as_mut() {
                    rolls.push(x);
                }
            }
            NodeKind::Operator(op) => {
                output.extend(operators.drain(..).map(Postfix::Operator));
                operators.push(op);
            }
        }
    }
    output.extend(operators.drain(..).map(Postfix::Operator));

    (output, rolls)
}

/// Folds a postfix sequence into a single value.
///
/// An operator with only one operand available treats the missing left-hand
/// side as zero, which is how a leading `-3` or `+3` evaluates.
pub fn eval_postfix(postfix: &[Postfix]) -> Int {
    let mut stack: Vec<Int> = Vec::with_capacity(postfix.len());

    for item in postfix {
        match *item {
            Postfix::Value(x) => stack.push(x),
            Postfix::Operator(op) => {
                let a = stack.pop().unwrap_or(0);
                let b = stack.pop().unwrap_or(0);
                // `a` was pushed last, so it is the right-hand operand.
                stack.push(op.apply(b, a));
            }
        }
    }

    debug_assert!(stack.len() <= 1, "unbalanced postfix sequence");
    stack.pop().unwrap_or(0)
}

pub fn evaluate<S: RollStrategy + ?Sized>(
    nodes: &[Node],
    strategy: &mut S,
    include_breakdown: bool,
) -> Evaluation {
    let (postfix, dice) = to_postfix(nodes, strategy, include_breakdown);
    let roll = eval_postfix(&postfix);
    match dice {
        Some(dice) => Evaluation::Breakdown(Breakdown { roll, dice }),
        None => Evaluation::Total(roll),
    }
}
