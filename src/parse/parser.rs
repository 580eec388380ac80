use super::{ast::*, lexer::*};
use crate::ability::AbilityCode;
use crate::common::*;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => fmt::Display::fmt(&self.kind, f),
            _ => write!(
                f,
                "{} at position {} ({:?})",
                self.kind, self.span.start, self.slice
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    UnexpectedInput,
    LeadingSign,
    MissingTerm,
    MissingSign,
    BadDiceCount,
    BadDiceSides,
    UnknownAbility,
    IntegerOutOfRange,
}

impl ParseErrorKind {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::UnexpectedInput => "unexpected_input",
            Self::LeadingSign => "leading_sign",
            Self::MissingTerm => "missing_term",
            Self::MissingSign => "missing_sign",
            Self::BadDiceCount => "bad_dice_count",
            Self::BadDiceSides => "bad_dice_sides",
            Self::UnknownAbility => "unknown_ability",
            Self::IntegerOutOfRange => "integer_out_of_range",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "roll expression is empty",
            Self::UnexpectedInput => "unexpected input",
            Self::LeadingSign => "expression cannot start with a sign",
            Self::MissingTerm => "expected a dice term, integer or ability code",
            Self::MissingSign => "expected '+' or '-' between terms",
            Self::BadDiceCount => "dice count must be a positive integer",
            Self::BadDiceSides => "dice must have at least 2 sides",
            Self::UnknownAbility => "unknown ability code; expected one of STR, DEX, CON, INT, WIS, CHA",
            Self::IntegerOutOfRange => "integer is out of range",
        };
        f.write_str(msg)
    }
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    last: Range<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
            last: 0..0,
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        self.parse_expression()
    }

    fn advance(&mut self) -> Option<TokenKind> {
        let next = self.lexer.next();
        if next.is_some() {
            self.last = self.lexer.span();
        }
        next
    }

    fn peek(&mut self) -> Option<TokenKind> {
        self.lexer.peek().copied()
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.peek().map_or(false, |peeked| options.contains(&peeked))
    }

    fn error<T>(&self, kind: ParseErrorKind) -> PResult<T> {
        self.error_at(kind, self.last.clone())
    }

    fn error_at<T>(&self, kind: ParseErrorKind, span: Range<usize>) -> PResult<T> {
        let slice = self.source.get(span.clone()).unwrap_or_default().to_string();
        Err(ParseError { kind, span, slice })
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        if self.source.trim().is_empty() {
            return self.error_at(ParseErrorKind::Empty, 0..self.source.len());
        }
        if self.matches_any(TokenKind::SIGNS) {
            return self.parse_leading_sign();
        }

        let mut terms = vec1![self.parse_term(Sign::Pos)?];
        loop {
            let sign = match self.peek() {
                None => break,
                Some(TokenKind::Plus) => Sign::Pos,
                Some(TokenKind::Minus) => Sign::Neg,
                Some(TokenKind::Error) => {
                    self.advance();
                    return self.error(ParseErrorKind::UnexpectedInput);
                }
                Some(TokenKind::Atom) => {
                    self.advance();
                    return self.error(ParseErrorKind::MissingSign);
                }
            };
            self.advance();
            terms.push(self.parse_term(sign)?);
        }

        Ok(Expression::new(terms))
    }

    // `-1d6` is a dice group with a negative count rather than a subtraction
    // with nothing on its left, and is reported as such.
    fn parse_leading_sign(&mut self) -> PResult<Expression> {
        let sign = self.advance();
        let sign_span = self.last.clone();

        if sign == Some(TokenKind::Minus) && self.peek() == Some(TokenKind::Atom) {
            self.advance();
            if let Ok(Term::Dice(_)) = classify(&self.source[self.last.clone()]) {
                return self.error_at(ParseErrorKind::BadDiceCount, sign_span.start..self.last.end);
            }
        }

        self.error_at(ParseErrorKind::LeadingSign, sign_span)
    }

    fn parse_term(&mut self, sign: Sign) -> PResult<SignedTerm> {
        match self.advance() {
            Some(TokenKind::Atom) => match classify(&self.source[self.last.clone()]) {
                Ok(term) => Ok(SignedTerm::new(sign, term)),
                Err(kind) => self.error(kind),
            },
            Some(TokenKind::Error) => self.error(ParseErrorKind::UnexpectedInput),
            // Either a doubled sign or a trailing one; both point at the
            // token where a term was expected, or at the dangling sign.
            Some(TokenKind::Plus | TokenKind::Minus) | None => {
                self.error(ParseErrorKind::MissingTerm)
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Decides what an alphanumeric run means: an integer literal, an ability
/// code, or a dice term.
fn classify(s: &str) -> Result<Term, ParseErrorKind> {
    if is_digits(s) {
        return s
            .parse()
            .map(Term::Number)
            .map_err(|_| ParseErrorKind::IntegerOutOfRange);
    }
    if let Ok(code) = s.parse::<AbilityCode>() {
        return Ok(Term::Ability(code));
    }
    if let Some((num, sides)) = s.split_once(|c: char| c == 'd' || c == 'D') {
        if is_digits(num) && is_digits(sides) {
            return parse_dice(num, sides).map(Term::Dice);
        }
    }

    if s.bytes().all(|b| b.is_ascii_alphabetic()) {
        Err(ParseErrorKind::UnknownAbility)
    } else {
        Err(ParseErrorKind::UnexpectedInput)
    }
}

fn parse_dice(num: &str, sides: &str) -> Result<Dice, ParseErrorKind> {
    let num = if num.is_empty() { "1" } else { num };
    let num: Num = num.parse().map_err(|_| ParseErrorKind::BadDiceCount)?;
    let sides: NonZeroUInt = sides.parse().map_err(|_| ParseErrorKind::BadDiceSides)?;
    if sides.get() < 2 {
        return Err(ParseErrorKind::BadDiceSides);
    }
    Ok(Dice::new(num, sides))
}
