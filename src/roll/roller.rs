use crate::common::{Int, NonZeroUInt, UInt};
use crate::dice::DieSpec;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A source of die faces.
pub trait Roller {
    /// A single face in `1..=sides`.
    fn face(&mut self, sides: NonZeroUInt) -> UInt;

    /// Every face shown by `dice`, in roll order.
    fn faces(&mut self, dice: &DieSpec) -> Faces<'_, Self> {
        Faces {
            roller: self,
            remaining: dice.count().get(),
            sides: dice.faces(),
        }
    }

    /// Sums the faces of `dice` without collecting them.
    fn sum(&mut self, dice: &DieSpec) -> Int {
        self.faces(dice)
            .fold(0, |acc: Int, x| acc.saturating_add(Int::from(x)))
    }
}

impl<R: Rng> Roller for R {
    fn face(&mut self, sides: NonZeroUInt) -> UInt {
        Uniform::new_inclusive(1, sides.get()).sample(self)
    }
}

pub struct Faces<'a, R: ?Sized> {
    roller: &'a mut R,
    remaining: UInt,
    sides: NonZeroUInt,
}

impl<R: Roller + ?Sized> Iterator for Faces<'_, R> {
    type Item = UInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.roller.face(self.sides))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;

#[cfg(test)]
mod scripted {
    use super::*;

    /// Replays a fixed list of faces, cycling when it runs out. A scripted
    /// face larger than the die wraps around, so `7` on a d6 shows `1`.
    pub(crate) struct ScriptedRoller {
        script: Vec<UInt>,
        next: usize,
    }

    impl ScriptedRoller {
        pub fn new(script: &[UInt]) -> Self {
            assert!(!script.is_empty() && !script.contains(&0));
            Self {
                script: script.to_vec(),
                next: 0,
            }
        }
    }

    impl Roller for ScriptedRoller {
        fn face(&mut self, sides: NonZeroUInt) -> UInt {
            let scripted = self.script[self.next % self.script.len()];
            self.next += 1;
            (scripted - 1) % sides.get() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dice(s: &str) -> DieSpec {
        s.parse().unwrap()
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(rng.faces(&dice("500d6")).all(|x| (1..=6).contains(&x)));
        assert_eq!(rng.faces(&dice("12d%")).count(), 12);
        assert!(rng.faces(&dice("50d%")).all(|x| (1..=100).contains(&x)));
    }

    #[test]
    fn test_faces_match_seeded_stream() {
        let mut rng = ChaCha8Rng::seed_from_u64(7777);
        let faces: Vec<_> = rng.faces(&dice("3d6")).collect();
        assert_eq!(faces, vec![3, 3, 2]);
    }

    #[test]
    fn test_sum_draws_same_faces() {
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        let collected: Int = a.faces(&dice("40d12")).map(Int::from).sum();
        assert_eq!(b.sum(&dice("40d12")), collected);
    }

    #[test]
    fn test_one_sided() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(rng.face(NonZeroUInt::MIN), 1);
    }

    #[test]
    fn test_scripted_roller() {
        let mut roller = ScriptedRoller::new(&[5, 6, 7]);
        assert_eq!(roller.faces(&dice("4d6")).collect::<Vec<_>>(), vec![5, 6, 1, 5]);
        assert_eq!(roller.faces(&dice("d4")).size_hint(), (1, Some(1)));
    }
}
