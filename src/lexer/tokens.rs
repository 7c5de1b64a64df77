use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    PlusMinus,    // + -
    MultDiv,      // * /
    Raised,       // ^
    Function,     // sin, cos, ...
    OpenBracket,  // (
    CloseBracket, // )
    Number,
    Variable,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Character offset just past the end of this token.
    pub fn end_position(&self) -> Position {
        Position(self.position.0 + self.text.chars().count())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.text, self.position.0)
    }
}
