use colored::Color;
use std::fmt;

/// Syntactic role of a piece of ShExC, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Keyword,
    ShapeId,
    Predicate,
    Value,
    Reference,
    Comment,
}

impl Token {
    fn color(self) -> Color {
        match self {
            Self::Keyword => Color::Red,
            Self::ShapeId => Color::Blue,
            Self::Predicate => Color::Green,
            Self::Value => Color::Magenta,
            Self::Reference => Color::Cyan,
            Self::Comment => Color::BrightBlack,
        }
    }
}

/// Displays a value, wrapped in the ANSI sequences of its token color if styling is enabled.
///
/// The sequences are written unconditionally: the formatter configuration decides, not the terminal.
pub(crate) struct Styled<T> {
    token: Token,
    value: T,
    enabled: bool,
}

impl<T: fmt::Display> fmt::Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(
                f,
                "\x1b[{}m{}\x1b[0m",
                self.token.color().to_fg_str(),
                self.value
            )
        } else {
            self.value.fmt(f)
        }
    }
}

/// Builds [`Styled`] values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Painter {
    enabled: bool,
}

impl Painter {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn paint<T: fmt::Display>(self, token: Token, value: T) -> Styled<T> {
        Styled {
            token,
            value,
            enabled: self.enabled,
        }
    }
}
