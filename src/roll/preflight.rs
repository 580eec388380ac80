use super::RResult;
use crate::ability::AbilityCode;
use crate::actor::ActorContext;
use crate::common::*;
use crate::config::RollConfig;
use crate::error::InvalidRoll;
use crate::parse::{
    ast,
    visit::{Accept, AstVisitor},
};

/// Everything that could fail a roll is checked here, before the random
/// source is touched: the dice limit, ability lookups, and the largest total
/// the expression could produce.
pub(crate) fn check(
    expr: &ast::Expression,
    actor: Option<&ActorContext>,
    config: &RollConfig,
) -> RResult<()> {
    let requested = expr.dice_count();
    if requested > u64::from(config.max_dice) {
        return Err(InvalidRoll::TooManyDice {
            requested,
            max: config.max_dice,
        });
    }

    let mut bound = Bound { actor, max: 0 };
    for term in expr.terms.iter() {
        term.accept(&mut bound)?;
    }
    if bound.max > i128::from(Int::MAX) {
        return Err(InvalidRoll::Overflow);
    }
    Ok(())
}

struct Bound<'c> {
    actor: Option<&'c ActorContext>,
    max: i128,
}

impl Bound<'_> {
    fn add(&mut self, magnitude: u128) {
        let magnitude = i128::try_from(magnitude).unwrap_or(i128::MAX);
        self.max = self.max.saturating_add(magnitude);
    }
}

impl AstVisitor for Bound<'_> {
    type Output = RResult<()>;

    fn visit_dice(&mut self, _: Sign, dice: &ast::Dice) -> Self::Output {
        self.add(u128::from(dice.num.get()) * u128::from(dice.sides.get()));
        Ok(())
    }

    fn visit_number(&mut self, _: Sign, x: Int) -> Self::Output {
        self.add(u128::from(x.unsigned_abs()));
        Ok(())
    }

    fn visit_ability(&mut self, _: Sign, code: AbilityCode) -> Self::Output {
        let actor = self.actor.ok_or(InvalidRoll::MissingActor(code))?;
        let modifier = actor.modifier(code)?;
        self.add(u128::from(modifier.unsigned_abs()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn check_str(s: &str, actor: Option<&ActorContext>, max_dice: u32) -> RResult<()> {
        let expr = parse(s).unwrap();
        check(&expr, actor, &RollConfig::default().with_max_dice(max_dice))
    }

    #[test]
    fn test_dice_limit() {
        assert_eq!(check_str("10d6+10d6", None, 20), Ok(()));
        assert_eq!(
            check_str("10d6+11d6", None, 20),
            Err(InvalidRoll::TooManyDice {
                requested: 21,
                max: 20
            })
        );
    }

    #[test]
    fn test_abilities_resolved() {
        let actor = ActorContext::new(2).with_score(AbilityCode::Dex, 14);
        assert_eq!(check_str("1d20+DEX", Some(&actor), 10), Ok(()));
        assert_eq!(
            check_str("1d20+DEX", None, 10),
            Err(InvalidRoll::MissingActor(AbilityCode::Dex))
        );
        assert_eq!(
            check_str("1d20+WIS", Some(&actor), 10),
            Err(InvalidRoll::MissingAbility(AbilityCode::Wis))
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(check_str("9223372036854775807", None, 10), Ok(()));
        assert_eq!(
            check_str("9223372036854775807+1", None, 10),
            Err(InvalidRoll::Overflow)
        );
        assert_eq!(
            check_str("9223372036854775807-1d4", None, 10),
            Err(InvalidRoll::Overflow)
        );
    }
}
