use super::{result::RollResult, rng::SharedRng, roller::Roller};
use crate::common::{Int, UInt};
use crate::dice::DieSpec;

/// Decides what each die in a [`DieSpec`] shows.
#[enum_dispatch::enum_dispatch]
pub trait RollStrategy {
    fn roll(&mut self, dice: &DieSpec) -> RollResult;

    /// The sum of a roll, for callers that never look at the faces.
    fn total(&mut self, dice: &DieSpec) -> Int {
        self.roll(dice).total()
    }
}

/// Draws every die uniformly from `1..=sides`.
#[derive(Debug, Default, Clone)]
pub struct Random<R = SharedRng> {
    roller: R,
}

impl Random {
    /// Rolls with the current thread's shared generator.
    pub fn shared() -> Self {
        Self { roller: SharedRng }
    }
}

impl<R: Roller> Random<R> {
    pub fn new(roller: R) -> Self {
        Self { roller }
    }
}

impl<R: Roller> RollStrategy for Random<R> {
    fn roll(&mut self, dice: &DieSpec) -> RollResult {
        RollResult::new(self.roller.faces(dice).collect())
    }

    fn total(&mut self, dice: &DieSpec) -> Int {
        self.roller.sum(dice)
    }
}

/// Every die shows 1.
#[derive(Debug, Default, Copy, Clone)]
pub struct Minimum;

impl RollStrategy for Minimum {
    fn roll(&mut self, dice: &DieSpec) -> RollResult {
        fixed(dice, 1)
    }

    fn total(&mut self, dice: &DieSpec) -> Int {
        dice.min_total()
    }
}

/// Every die shows its highest face.
#[derive(Debug, Default, Copy, Clone)]
pub struct Maximum;

impl RollStrategy for Maximum {
    fn roll(&mut self, dice: &DieSpec) -> RollResult {
        fixed(dice, dice.faces().get())
    }

    fn total(&mut self, dice: &DieSpec) -> Int {
        dice.max_total()
    }
}

fn fixed(dice: &DieSpec, face: UInt) -> RollResult {
    RollResult::new(vec![face; dice.count().get() as usize])
}

#[enum_dispatch::enum_dispatch(RollStrategy)]
#[derive(Debug, Clone)]
pub enum Strategy {
    Random(Random),
    Minimum(Minimum),
    Maximum(Maximum),
}

impl Default for Strategy {
    fn default() -> Self {
        Random::shared().into()
    }
}
