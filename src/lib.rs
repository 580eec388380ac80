//! Tabletop dice notation: `2d6+3`, `d20`, `1d8+DEX`.
//!
//! An expression is parsed into signed terms, checked, then rolled against an
//! injectable [`Roller`]. The [`RollResult`] carries the total, the canonical
//! expression and one part per die or modifier.
//!
//! ```
//! use tabletop_dice::{roll_with, SequenceRoller};
//!
//! let result = roll_with("2d6+3", SequenceRoller::faces(&[(2, 6), (4, 6)]), None).unwrap();
//! assert_eq!(result.total(), 9);
//! assert_eq!(result.expr_norm(), "2d6+3");
//! ```

pub mod ability;
pub mod actor;
pub mod command;
pub mod common;
pub mod config;
pub mod error;
pub mod parse;
pub mod roll;

pub use ability::AbilityCode;
pub use actor::{ActorContext, ActorLookup};
pub use config::RollConfig;
pub use error::{ErrorDetails, InvalidRoll, RollError};
pub use parse::parse;
pub use roll::{
    MarkdownStringifier, Part, RollContext, RollResult, Roller, SequenceRoller,
    SimpleStringifier,
};

/// Rolls `expr` with the thread-local generator.
pub fn roll(expr: &str, actor: Option<&ActorContext>) -> Result<RollResult, InvalidRoll> {
    roll_with(expr, rand::thread_rng(), actor)
}

/// Rolls `expr` drawing every die from `roller`, once per die.
pub fn roll_with<R: Roller>(
    expr: &str,
    roller: R,
    actor: Option<&ActorContext>,
) -> Result<RollResult, InvalidRoll> {
    let mut ctx = RollContext::new(RollConfig::default(), roller);
    ctx.set_actor(actor);
    ctx.roll(expr)
}

/// Resolves `actor_id` through `lookup` and rolls on that actor's behalf.
pub fn roll_for_actor<L, R>(
    expr: &str,
    actor_id: &str,
    lookup: &L,
    roller: R,
) -> Result<RollResult, RollError>
where
    L: ActorLookup + ?Sized,
    R: Roller,
{
    let actor = lookup
        .actor(actor_id)
        .ok_or_else(|| RollError::ActorNotFound(actor_id.to_string()))?;
    Ok(roll_with(expr, roller, Some(&actor))?)
}
