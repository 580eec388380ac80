use crate::ability::AbilityCode;
use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_dice(&mut self, sign: Sign, dice: &ast::Dice) -> Self::Output;

    fn visit_number(&mut self, sign: Sign, x: Int) -> Self::Output;

    fn visit_ability(&mut self, sign: Sign, code: AbilityCode) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::SignedTerm {
    fn accept(&self, v: &mut V) -> V::Output {
        match &self.term {
            ast::Term::Dice(dice) => v.visit_dice(self.sign, dice),
            ast::Term::Number(x) => v.visit_number(self.sign, *x),
            ast::Term::Ability(code) => v.visit_ability(self.sign, *code),
        }
    }
}
