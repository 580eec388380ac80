use super::result::{Contribution, Part, RollResult};
use crate::ability::AbilityCode;
use crate::common::{Int, Sign, UInt};
use crate::parse::ast::Dice;
use crate::parse::visit::{Accept, AstVisitor};
use std::slice;

/// Renders a roll for people: each term followed by what it resolved to, then
/// the total.
pub trait Stringify {
    fn str_roll(&mut self, roll: &RollResult) -> String {
        let mut out = String::new();
        let mut terms = TermWriter {
            style: &mut *self,
            parts: roll.parts().iter(),
        };
        for (i, term) in roll.expression().terms.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(&term.sign.to_string());
                out.push(' ');
            } else if term.sign.is_neg() {
                out.push_str(&term.sign.to_string());
            }
            out.push_str(&terms.visit(term));
        }
        self.str_total(out, roll.total())
    }

    fn str_total(&mut self, body: String, total: Int) -> String {
        format!("{} = {}", body, total)
    }

    fn str_dice(&mut self, dice: &Dice, faces: &[UInt]) -> String {
        let sides = dice.sides.get();
        let faces = faces
            .iter()
            .map(|&face| self.str_die(face, sides))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} ({})", dice, faces)
    }

    fn str_die(&mut self, face: UInt, _sides: UInt) -> String {
        face.to_string()
    }

    fn str_number(&mut self, x: Int) -> String {
        x.to_string()
    }

    fn str_ability(&mut self, code: AbilityCode, modifier: Int) -> String {
        format!("{} ({})", code, modifier)
    }
}

/// Pairs each term with the parts it produced, in order.
struct TermWriter<'r, S: ?Sized> {
    style: &'r mut S,
    parts: slice::Iter<'r, Part>,
}

impl<S: Stringify + ?Sized> AstVisitor for TermWriter<'_, S> {
    type Output = String;

    fn visit_dice(&mut self, _: Sign, dice: &Dice) -> Self::Output {
        let faces: Vec<UInt> = self
            .parts
            .by_ref()
            .take(dice.num.get() as usize)
            .filter_map(Part::face)
            .collect();
        self.style.str_dice(dice, &faces)
    }

    fn visit_number(&mut self, _: Sign, x: Int) -> Self::Output {
        self.parts.next();
        self.style.str_number(x)
    }

    fn visit_ability(&mut self, sign: Sign, code: AbilityCode) -> Self::Output {
        // Parts carry the signed value; show the modifier itself.
        let modifier = self
            .parts
            .next()
            .map_or(0, |part| sign.apply(part.contribution()));
        self.style.str_ability(code, modifier)
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify(&mut self, roll: &RollResult) -> String {
        self.str_roll(roll)
    }
}

impl Stringify for SimpleStringifier {}

/// Chat flavour: natural minimums and maximums in bold, total in a code span.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify(&mut self, roll: &RollResult) -> String {
        self.str_roll(roll)
    }
}

impl Stringify for MarkdownStringifier {
    fn str_total(&mut self, body: String, total: Int) -> String {
        format!("{} = `{}`", body, total)
    }

    fn str_die(&mut self, face: UInt, sides: UInt) -> String {
        if face == 1 || face == sides {
            format!("**{}**", face)
        } else {
            face.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorContext;
    use crate::config::RollConfig;
    use crate::roll::{RollContext, SequenceRoller};

    macro_rules! check {
        ($cls:ident, $input:expr, $faces:expr, $expected:expr) => {
            let actor = ActorContext::new(2)
                .with_score(AbilityCode::Dex, 16)
                .with_score(AbilityCode::Str, 8);
            let mut ctx = RollContext::new(RollConfig::default(), SequenceRoller::faces($faces))
                .with_actor(&actor);
            let roll = ctx.roll($input).unwrap();
            let actual = $cls::new().stringify(&roll);
            assert_eq!(&actual, $expected);
        };
    }

    #[test]
    fn test_simple_stringify() {
        check!(SimpleStringifier, "2 + 3", &[], "2 + 3 = 5");
        check!(SimpleStringifier, "2d6+3", &[(2, 6), (4, 6)], "2d6 (2, 4) + 3 = 9");
        check!(SimpleStringifier, "d8 + dex", &[(4, 8)], "1d8 (4) + DEX (3) = 7");
        check!(SimpleStringifier, "1d20-STR", &[(12, 20)], "1d20 (12) - STR (-1) = 13");
        check!(
            SimpleStringifier,
            "2d6 - 1d4 - 1",
            &[(3, 6), (5, 6), (2, 4)],
            "2d6 (3, 5) - 1d4 (2) - 1 = 5"
        );
    }

    #[test]
    fn test_markdown_stringify() {
        check!(MarkdownStringifier, "2 + 3", &[], "2 + 3 = `5`");
        check!(MarkdownStringifier, "1d20+DEX", &[(20, 20)], "1d20 (**20**) + DEX (3) = `23`");
        check!(
            MarkdownStringifier,
            "3d6",
            &[(1, 6), (3, 6), (6, 6)],
            "3d6 (**1**, 3, **6**) = `10`"
        );
    }

    #[test]
    fn test_display() {
        let mut ctx = RollContext::new(RollConfig::default(), SequenceRoller::faces(&[(7, 10)]));
        let roll = ctx.roll("1d10+2").unwrap();
        assert_eq!(roll.to_string(), "1d10 (7) + 2 = 9");
    }
}
