mod result;
mod rng;
mod roller;
mod strategy;

pub use result::RollResult;
pub use rng::{enable_testing_mode, reseed, SharedRng, TESTING_SEED};
pub use roller::{Faces, Roller};
pub use strategy::{Maximum, Minimum, Random, RollStrategy, Strategy};

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;
