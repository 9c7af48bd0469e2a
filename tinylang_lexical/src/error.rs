//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use tinylang_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{SourceElement, Span},
};

/// The source code contains a `(*` comment that is never closed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedComment {
    /// The span of the `(*` that starts the comment.
    pub span: Span,
}

impl Display for UnterminatedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unclosed `(*` comment"),
            SourceCodeDisplay::new(
                &self.span,
                Some("every `(*`, including nested ones, needs a matching `*)`")
            )
        )
    }
}

/// A string literal is not closed before the end of its line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span of the opening quote.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("string literals must be closed on the line they start")
            )
        )
    }
}

/// Is the reason a run of characters starting with a digit is not an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MalformedReason {
    /// The literal uses the hexadecimal digits `A`-`F` but has no `H` suffix.
    HexDigitWithoutSuffix,

    /// The literal contains a character that is not a digit of any radix.
    InvalidCharacter(char),
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HexDigitWithoutSuffix => {
                f.write_str("hexadecimal literals must end with the `H` suffix")
            }
            Self::InvalidCharacter(character) => {
                write!(f, "`{}` is not a valid digit", character.escape_default())
            }
        }
    }
}

/// A numeric literal contains characters that do not form a decimal or hexadecimal integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MalformedNumericLiteral {
    /// The span of the whole malformed literal.
    pub span: Span,

    /// Why the literal is malformed.
    pub reason: MalformedReason,
}

impl Display for MalformedNumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found a malformed numeric literal"),
            SourceCodeDisplay::new(&self.span, Some(self.reason))
        )
    }
}

/// The source code contains a character that starts no token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnrecognizedCharacter {
    /// The span of the character.
    pub span: Span,

    /// The unrecognized character.
    pub character: char,
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!(
                    "found an unrecognized character `{}`",
                    self.character.escape_default()
                )
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedComment(UnterminatedComment),
    UnterminatedString(UnterminatedString),
    MalformedNumericLiteral(MalformedNumericLiteral),
    UnrecognizedCharacter(UnrecognizedCharacter),
}

impl Error {
    /// Gets the span the error is reported at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnterminatedComment(err) => &err.span,
            Self::UnterminatedString(err) => &err.span,
            Self::MalformedNumericLiteral(err) => &err.span,
            Self::UnrecognizedCharacter(err) => &err.span,
        }
    }

    /// Gets the severity of the error; every lexical error is [`Severity::Error`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn severity(&self) -> Severity { Severity::Error }
}

impl SourceElement for Error {
    fn span(&self) -> Span { Self::span(self).clone() }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::MalformedNumericLiteral(err) => write!(f, "{err}"),
            Self::UnrecognizedCharacter(err) => write!(f, "{err}"),
        }
    }
}
