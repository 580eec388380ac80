use crate::common::{Float, NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniform floats in `[0, 1)`, the only non-determinism in a roll.
pub trait Roller {
    fn random(&mut self) -> Float;

    /// Rolls one die: `floor(r * sides) + 1`. Values outside `[0, 1)` are
    /// clamped onto the die.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        face(self.random(), sides)
    }
}

impl<R: Rng> Roller for R {
    fn random(&mut self) -> Float {
        self.gen()
    }
}

pub(crate) fn face(r: Float, sides: NonZeroUInt) -> UInt {
    let sides = sides.get();
    // Float-to-int casts saturate, and NaN becomes 0.
    ((r * Float::from(sides)).floor() as UInt).min(sides - 1) + 1
}

/// Adapts a closure such as `|| 0.5` into a [`Roller`].
#[derive(Debug, Clone)]
pub struct FnRoller<F>(pub F);

impl<F: FnMut() -> Float> Roller for FnRoller<F> {
    fn random(&mut self) -> Float {
        (self.0)()
    }
}

/// Replays a recorded sequence of floats, wrapping around when it runs out,
/// and counts how often it was asked.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRoller {
    values: Vec<Float>,
    calls: usize,
}

impl SequenceRoller {
    pub fn new(values: impl Into<Vec<Float>>) -> Self {
        Self {
            values: values.into(),
            calls: 0,
        }
    }

    /// A sequence that lands on each `(face, sides)` pair in turn.
    pub fn faces(faces: &[(UInt, UInt)]) -> Self {
        Self::new(
            faces
                .iter()
                .map(|&(face, sides)| (Float::from(face) - 0.5) / Float::from(sides))
                .collect::<Vec<_>>(),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Roller for SequenceRoller {
    fn random(&mut self) -> Float {
        let value = match self.values.len() {
            0 => 0.0,
            len => self.values[self.calls % len],
        };
        self.calls += 1;
        value
    }
}
