//! Contains the ANSI escape code wrappers used to style console output.

use std::fmt::Display;

/// Represents a text attribute that can be applied to a displayable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

/// Represents a foreground color that can be applied to a displayable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

/// Is a type that maps to an ANSI select-graphic-rendition code.
pub trait Escape: Copy {
    /// Gets the escape sequence that turns the attribute on.
    fn code(self) -> &'static str;

    /// Wraps the given displayable object with this attribute.
    fn with<T>(self, display: T) -> Styled<Self, T> {
        Styled {
            escape: self,
            display,
        }
    }
}

impl Escape for Style {
    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

impl Escape for Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that prints a displayable object wrapped in an escape
/// sequence and a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<E, T> {
    /// The attribute applied to the displayable object.
    pub escape: E,

    /// The displayable object.
    pub display: T,
}

impl<E: Escape, T: Display> Display for Styled<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.escape.code(), self.display)
    }
}
