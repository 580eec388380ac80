pub mod ast;
mod lexer;
mod parser;
pub mod visit;

pub use parser::{ParseError, ParseErrorKind};

/// Parses a roll expression into its signed terms without rolling anything.
/// The [`Display`](std::fmt::Display) form of the result is the canonical
/// expression.
///
/// # Examples
/// ```
/// let expr = tabletop_dice::parse("d20 + dex").unwrap();
/// assert_eq!(expr.to_string(), "1d20+DEX");
/// ```
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse()
}
