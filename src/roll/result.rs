use crate::common::{Int, UInt};

/// The faces shown by one group of dice, in roll order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollResult {
    total: Int,
    values: Vec<UInt>,
}

impl RollResult {
    pub fn new(values: Vec<UInt>) -> Self {
        let total = values
            .iter()
            .fold(0 as Int, |acc, &x| acc.saturating_add(Int::from(x)));
        Self { total, values }
    }

    pub fn total(&self) -> Int {
        self.total
    }

    pub fn values(&self) -> &[UInt] {
        &self.values
    }

    pub fn into_values(self) -> Vec<UInt> {
        self.values
    }
}
