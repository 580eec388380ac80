use std::fmt::{self, Write};
use std::num::NonZeroU32;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// The number of dice in a dice term.
pub type Num = NonZeroUInt;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The sign written in front of a term. The first term of an expression is
/// always `Pos`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Sign {
    #[default]
    Pos,
    Neg,
}

impl Sign {
    pub const fn apply(self, x: Int) -> Int {
        match self {
            Self::Pos => x,
            Self::Neg => -x,
        }
    }

    pub const fn is_neg(self) -> bool {
        matches!(self, Self::Neg)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}
