use super::{
    preflight,
    result::{DiePart, ModPart, Part, RollResult},
    roller::Roller,
    RResult,
};
use crate::ability::AbilityCode;
use crate::actor::ActorContext;
use crate::common::*;
use crate::config::RollConfig;
use crate::error::InvalidRoll;
use crate::parse::{
    self, ast,
    visit::{Accept, AstVisitor},
};
use tracing::{debug, trace};

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Rolls expressions against one random source and, optionally, one actor.
pub struct RollContext<'c, R = DefaultRoller> {
    config: RollConfig,
    actor: Option<&'c ActorContext>,
    roller: R,
}

impl<'c, R: Roller> RollContext<'c, R> {
    pub fn new(config: RollConfig, roller: R) -> Self {
        Self {
            config,
            actor: None,
            roller,
        }
    }

    pub fn with_actor(mut self, actor: &'c ActorContext) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn set_actor(&mut self, actor: Option<&'c ActorContext>) {
        self.actor = actor;
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn roller(&self) -> &R {
        &self.roller
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    pub fn roll(&mut self, input: &str) -> RResult<RollResult> {
        let expr = parse::parse(input).map_err(|e| {
            debug!(input, error = %e, "rejected roll expression");
            InvalidRoll::from(e)
        })?;
        self.eval(expr)
    }

    pub fn eval(&mut self, expr: ast::Expression) -> RResult<RollResult> {
        if let Err(e) = preflight::check(&expr, self.actor, &self.config) {
            debug!(expr = %expr, error = %e, "rejected roll expression");
            return Err(e);
        }

        let mut parts = Vec::with_capacity(expr.terms.len());
        for term in expr.terms.iter() {
            parts.extend(term.accept(self)?);
        }

        let result = RollResult::new(expr, parts);
        debug!(
            expr = result.expr_norm(),
            total = result.total(),
            dice = result.dice().count(),
            "rolled"
        );
        Ok(result)
    }
}

impl Default for RollContext<'_> {
    fn default() -> Self {
        Self::new(RollConfig::default(), rand::thread_rng())
    }
}

impl<R: Roller> AstVisitor for RollContext<'_, R> {
    type Output = RResult<Vec<Part>>;

    fn visit_dice(&mut self, sign: Sign, dice: &ast::Dice) -> Self::Output {
        let sides = dice.sides;
        Ok((0..dice.num.get())
            .map(|_| {
                let value = self.roller.roll(sides);
                trace!(value, sides = sides.get(), "rolled die");
                DiePart::new(value, sides.get(), sign.is_neg()).into()
            })
            .collect())
    }

    fn visit_number(&mut self, sign: Sign, x: Int) -> Self::Output {
        Ok(vec![ModPart::new(sign.apply(x)).into()])
    }

    fn visit_ability(&mut self, sign: Sign, code: AbilityCode) -> Self::Output {
        let actor = self.actor.ok_or(InvalidRoll::MissingActor(code))?;
        let modifier = actor.modifier(code)?;
        Ok(vec![ModPart::new(sign.apply(modifier)).into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::result::Contribution;
    use crate::roll::roller::SequenceRoller;

    fn fighter() -> ActorContext {
        ActorContext::new(2)
            .with_score(AbilityCode::Str, 16)
            .with_score(AbilityCode::Dex, 16)
            .with_score(AbilityCode::Int, 9)
    }

    fn ctx<'c>(faces: &[(UInt, UInt)]) -> RollContext<'c, SequenceRoller> {
        RollContext::new(RollConfig::default(), SequenceRoller::faces(faces))
    }

    fn die(value: UInt, sides: UInt) -> Part {
        DiePart::new(value, sides, false).into()
    }

    fn neg_die(value: UInt, sides: UInt) -> Part {
        DiePart::new(value, sides, true).into()
    }

    fn modifier(value: Int) -> Part {
        ModPart::new(value).into()
    }

    fn check(s: &str, faces: &[(UInt, UInt)], total: Int, parts: Vec<Part>) {
        let actor = fighter();
        let mut ctx = ctx(faces).with_actor(&actor);
        let result = ctx.roll(s).unwrap();
        assert_eq!(result.total(), total, "rolling {:?}", s);
        assert_eq!(result.parts(), parts.as_slice(), "rolling {:?}", s);
        assert_eq!(ctx.roller().calls(), result.dice().count());
    }

    fn check_err(s: &str, actor: Option<&ActorContext>, expected: InvalidRoll) {
        let mut ctx = ctx(&[(3, 6)]);
        ctx.set_actor(actor);
        assert_eq!(ctx.roll(s), Err(expected));
        assert_eq!(ctx.roller().calls(), 0, "rolling {:?}", s);
    }

    #[test]
    fn test_roll_static() {
        check(
            "2d6+3",
            &[(2, 6), (4, 6)],
            9,
            vec![die(2, 6), die(4, 6), modifier(3)],
        );
        check("5", &[], 5, vec![modifier(5)]);
        check("1d20 - 2", &[(11, 20)], 9, vec![die(11, 20), modifier(-2)]);
    }

    #[test]
    fn test_roll_ability() {
        check(
            "1d8+DEX",
            &[(4, 8)],
            7,
            vec![die(4, 8), modifier(3)],
        );
        check("1d20+int", &[(10, 20)], 9, vec![die(10, 20), modifier(-1)]);
        check("d4-STR", &[(4, 4)], 1, vec![die(4, 4), modifier(-3)]);
    }

    #[test]
    fn test_roll_mixed_sign() {
        check(
            "2d6-1d4",
            &[(5, 6), (6, 6), (3, 4)],
            8,
            vec![die(5, 6), die(6, 6), neg_die(3, 4)],
        );
    }

    #[test]
    fn test_per_die_parts() {
        let mut ctx = ctx(&[(1, 6), (2, 6), (3, 6), (4, 6), (5, 6), (6, 6), (1, 10)]);
        let result = ctx.roll("6d6+1d10").unwrap();
        assert_eq!(result.parts().len(), 7);
        assert_eq!(ctx.roller().calls(), 7);
        let sum: Int = result.parts().iter().map(Contribution::contribution).sum();
        assert_eq!(sum, result.total());
        assert_eq!(result.total(), 1 + 2 + 3 + 4 + 5 + 6 + 1);
    }

    #[test]
    fn test_expr_norm() {
        let actor = fighter();
        let mut ctx = ctx(&[(1, 20)]).with_actor(&actor);
        assert_eq!(ctx.roll(" d20 +  dex-1 ").unwrap().expr_norm(), "1d20+DEX-1");
    }

    #[test]
    fn test_missing_actor() {
        check_err(
            "1d8+DEX",
            None,
            InvalidRoll::MissingActor(AbilityCode::Dex),
        );
    }

    #[test]
    fn test_missing_ability() {
        let actor = fighter();
        check_err(
            "1d8+CHA",
            Some(&actor),
            InvalidRoll::MissingAbility(AbilityCode::Cha),
        );
    }

    #[test]
    fn test_too_many_dice() {
        check_err(
            "600d6+401d6",
            None,
            InvalidRoll::TooManyDice {
                requested: 1001,
                max: 1000,
            },
        );
        let mut small = RollContext::new(
            RollConfig::default().with_max_dice(2),
            SequenceRoller::new(vec![0.5]),
        );
        assert!(small.roll("2d6").is_ok());
        assert!(small.roll("3d6").is_err());
    }

    #[test]
    fn test_malformed_never_rolls() {
        for s in ["", "   ", "3x6", "d0", "-1d6", "0d6", "1d20+", "1d20 ** 2"] {
            let mut ctx = ctx(&[(3, 6)]);
            assert!(ctx.roll(s).is_err(), "rolling {:?}", s);
            assert_eq!(ctx.roller().calls(), 0, "rolling {:?}", s);
        }
    }

    #[test]
    fn test_default_context() {
        let mut ctx: RollContext = RollContext::default();
        let result = ctx.roll("10d20").unwrap();
        assert!(result.dice().all(|d| (1..=20).contains(&d.value)));
    }
}
