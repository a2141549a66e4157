use std::fmt::{self, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The number of faces on a die. `%` is shorthand for a hundred-sided die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sides {
    Poly(NonZeroUInt),
    Percentile,
}

impl Sides {
    pub const PERCENTILE_FACES: NonZeroUInt = match NonZeroUInt::new(100) {
        Some(x) => x,
        None => unreachable!(),
    };

    pub fn get(self) -> NonZeroUInt {
        match self {
            Self::Poly(x) => x,
            Self::Percentile => Self::PERCENTILE_FACES,
        }
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly(x) => fmt::Display::fmt(x, f),
            Self::Percentile => f.write_char('%'),
        }
    }
}

impl From<NonZeroUInt> for Sides {
    fn from(x: NonZeroUInt) -> Self {
        Self::Poly(x)
    }
}

impl FromStr for Sides {
    type Err = <NonZeroUInt as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "%" {
            Ok(Self::Percentile)
        } else {
            s.parse().map(Self::Poly)
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Sub,
}

impl ArithmeticOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Applies the operator to `left` and `right` in textual order, so
    /// `Sub.apply(5, 3)` is `2`.
    pub fn apply(self, left: Int, right: Int) -> Int {
        match self {
            Self::Add => left.saturating_add(right),
            Self::Sub => left.saturating_sub(right),
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
