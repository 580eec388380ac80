use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    // Any run of letters and digits. Integers, dice and ability codes are
    // told apart by the parser so that malformed runs like `3x6` surface as a
    // single fragment.
    #[regex(r"[0-9A-Za-z]+")]
    Atom,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const SIGNS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Atom => "<term>",
            Plus => "'+'",
            Minus => "'-'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<(TokenKind, &str)> {
        let mut lex = TokenKind::lexer(s);
        let mut out = Vec::new();
        while let Some(kind) = lex.next() {
            out.push((kind, lex.slice()));
        }
        out
    }

    #[test]
    fn test_lex_terms() {
        use TokenKind::*;

        assert_eq!(
            kinds("2d6 + 3"),
            vec![(Atom, "2d6"), (Plus, "+"), (Atom, "3")]
        );
        assert_eq!(
            kinds("d20-dex"),
            vec![(Atom, "d20"), (Minus, "-"), (Atom, "dex")]
        );
        assert_eq!(kinds("3x6"), vec![(Atom, "3x6")]);
        assert_eq!(kinds("2 d6"), vec![(Atom, "2"), (Atom, "d6")]);
    }

    #[test]
    fn test_lex_error() {
        use TokenKind::*;

        assert_eq!(
            kinds("1d20*2"),
            vec![(Atom, "1d20"), (Error, "*"), (Atom, "2")]
        );
    }
}
