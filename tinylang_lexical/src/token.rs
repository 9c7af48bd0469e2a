//! Is a module containing the [`Token`] type and all of its related types.

use std::sync::Arc;

use getset::CopyGetters;
use strum_macros::{EnumIter, IntoStaticStr};
use tinylang_base::source_file::{ByteIndex, SourceFile, Span};

/// Is an enumeration of every kind of token in the tinylang programming language.
///
/// Keywords and punctuators are plain variants of the same closed set, so a parser can match on
/// the kind exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum TokenKind {
    Unknown,
    Eof,
    Identifier,
    IntegerLiteral,
    StringLiteral,

    Plus,
    Minus,
    Star,
    Slash,
    ColonEqual,
    Period,
    Comma,
    Semi,
    Colon,
    Equal,
    Hash,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    LParen,
    RParen,
    LSquare,
    RSquare,
    Caret,

    KwAnd,
    KwBegin,
    KwConst,
    KwDiv,
    KwDo,
    KwElse,
    KwEnd,
    KwFrom,
    KwIf,
    KwImport,
    KwMod,
    KwModule,
    KwNot,
    KwOr,
    KwProcedure,
    KwReturn,
    KwThen,
    KwType,
    KwVar,
    KwWhile,
}

impl TokenKind {
    /// Gets the name of the kind, e.g. `integer_literal` or `kw_begin`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// Gets the spelling of the kind if it is a punctuator.
    #[must_use]
    pub fn punctuator_spelling(self) -> Option<&'static str> {
        let spelling = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::ColonEqual => ":=",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Semi => ";",
            Self::Colon => ":",
            Self::Equal => "=",
            Self::Hash => "#",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LSquare => "[",
            Self::RSquare => "]",
            Self::Caret => "^",
            _ => return None,
        };

        Some(spelling)
    }

    /// Gets the reserved spelling of the kind if it is a keyword.
    #[must_use]
    pub fn keyword_spelling(self) -> Option<&'static str> {
        let spelling = match self {
            Self::KwAnd => "AND",
            Self::KwBegin => "BEGIN",
            Self::KwConst => "CONST",
            Self::KwDiv => "DIV",
            Self::KwDo => "DO",
            Self::KwElse => "ELSE",
            Self::KwEnd => "END",
            Self::KwFrom => "FROM",
            Self::KwIf => "IF",
            Self::KwImport => "IMPORT",
            Self::KwMod => "MOD",
            Self::KwModule => "MODULE",
            Self::KwNot => "NOT",
            Self::KwOr => "OR",
            Self::KwProcedure => "PROCEDURE",
            Self::KwReturn => "RETURN",
            Self::KwThen => "THEN",
            Self::KwType => "TYPE",
            Self::KwVar => "VAR",
            Self::KwWhile => "WHILE",
            _ => return None,
        };

        Some(spelling)
    }

    /// Checks if the kind is a reserved keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool { self.keyword_spelling().is_some() }

    /// Checks if the kind is a punctuator.
    #[must_use]
    pub fn is_punctuator(self) -> bool { self.punctuator_spelling().is_some() }

    /// Checks if tokens of this kind keep a view of their source text.
    #[must_use]
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::IntegerLiteral | Self::StringLiteral
        )
    }
}

/// Represents a single classified lexeme of the source code.
///
/// The token borrows its text from the [`SourceFile`] it was scanned from instead of copying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters)]
pub struct Token<'a> {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the byte offset of the first character of the token.
    #[get_copy = "pub"]
    location: ByteIndex,

    /// Gets the number of bytes the token covers.
    #[get_copy = "pub"]
    length: usize,

    text: Option<&'a str>,
}

impl<'a> Token<'a> {
    /// Creates a token of the given kind covering `lexeme`, which starts at `location`.
    ///
    /// The lexeme is only kept for identifiers and literals.
    #[must_use]
    pub(crate) fn new(kind: TokenKind, location: ByteIndex, lexeme: &'a str) -> Self {
        Self {
            kind,
            location,
            length: lexeme.len(),
            text: kind.carries_text().then_some(lexeme),
        }
    }

    /// Gets the byte offset just past the last character of the token.
    #[must_use]
    pub fn end(&self) -> ByteIndex { self.location + self.length }

    /// Checks if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }

    /// Checks if this token is not of the given kind.
    #[must_use]
    pub fn is_not(&self, kind: TokenKind) -> bool { self.kind != kind }

    /// Checks if this token is of any of the given kinds.
    #[must_use]
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool { kinds.contains(&self.kind) }

    /// Gets the name of the token's kind.
    #[must_use]
    pub fn name(&self) -> &'static str { self.kind.name() }

    /// Gets the spelling of the identifier if this token is an identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Identifier => self.text,
            _ => None,
        }
    }

    /// Gets the raw literal text if this token is an integer or string literal.
    ///
    /// String literal data includes the enclosing quotes.
    #[must_use]
    pub fn literal_data(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::IntegerLiteral | TokenKind::StringLiteral => self.text,
            _ => None,
        }
    }

    /// Resolves the token into a [`Span`] of the source file it was scanned from.
    #[must_use]
    pub fn span(&self, source_file: &Arc<SourceFile>) -> Option<Span> {
        Span::new(source_file.clone(), self.location, self.end())
    }
}

#[cfg(test)]
mod tests;
