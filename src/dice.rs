use crate::common::*;
use std::fmt;

/// A group of identical dice, e.g. `2d6` or `d%`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DieSpec {
    count: NonZeroUInt,
    sides: Sides,
}

impl DieSpec {
    pub const fn new(count: NonZeroUInt, sides: Sides) -> Self {
        Self { count, sides }
    }

    pub fn count(&self) -> NonZeroUInt {
        self.count
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }

    /// The number of faces on each die, with `%` resolved to 100.
    pub fn faces(&self) -> NonZeroUInt {
        self.sides.get()
    }

    pub fn min_total(&self) -> Int {
        Int::from(self.count.get())
    }

    pub fn max_total(&self) -> Int {
        Int::from(self.count.get()).saturating_mul(Int::from(self.faces().get()))
    }
}

impl fmt::Display for DieSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl std::str::FromStr for DieSpec {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, sides) = s
            .split_once(|c: char| c == 'd' || c == 'D')
            .ok_or(ParseDiceError::NoDelimiter)?;
        let count = if count.is_empty() {
            NonZeroUInt::MIN
        } else {
            count.parse().map_err(ParseDiceError::InvalidCount)?
        };
        let sides = sides.parse().map_err(ParseDiceError::InvalidSides)?;
        Ok(Self::new(count, sides))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid dice count: {0}")]
    InvalidCount(std::num::ParseIntError),
    #[error("invalid dice sides: {0}")]
    InvalidSides(std::num::ParseIntError),
}
