mod ctx;
mod preflight;
mod result;
mod roller;
mod stringify;

use crate::error::InvalidRoll;

type RResult<T> = Result<T, InvalidRoll>;

pub use ctx::{DefaultRoller, RollContext};
pub use result::{Contribution, DiePart, ModPart, Part, RollResult};
pub use roller::{FnRoller, Roller, SequenceRoller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
