//! Contains the [`Scanner`], the state machine that splits the source text into [`Token`]s.

use std::{fmt::Debug, iter::FusedIterator, sync::Arc};

use tinylang_base::{
    diagnostic::Handler,
    source_file::{ByteIndex, Cursor, SourceFile, Span},
};

use crate::{
    error::{
        Error, MalformedNumericLiteral, MalformedReason, UnrecognizedCharacter,
        UnterminatedComment, UnterminatedString,
    },
    keyword::KeywordTable,
    token::{Token, TokenKind},
};

/// Produces the tokens of a single source file on demand.
///
/// The scanner walks the source text once, front to back, and never re-reads a character. Lexical
/// errors are reported to the handler and replaced by [`TokenKind::Unknown`] tokens, so every call
/// to [`Scanner::next_token`] succeeds and moves forward until the end of input is reached.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    handler: &'a dyn Handler<Error>,
    keywords: KeywordTable,
}

impl<'a> Debug for Scanner<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("cursor", &self.cursor)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn is_line_terminator(character: char) -> bool { matches!(character, '\n' | '\r') }

fn is_identifier_body(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

fn is_hex_digit(character: char) -> bool {
    character.is_ascii_digit() || ('A'..='F').contains(&character)
}

/// Checks that a run of identifier characters starting with a digit is a decimal literal or a
/// hexadecimal literal with the `H` suffix.
fn validate_integer(lexeme: &str) -> Result<(), MalformedReason> {
    if lexeme.chars().all(|character| character.is_ascii_digit()) {
        return Ok(());
    }

    if let Some(digits) = lexeme.strip_suffix('H') {
        if digits.chars().all(is_hex_digit) {
            return Ok(());
        }
    }

    lexeme
        .chars()
        .find(|character| !is_hex_digit(*character))
        .map_or(Err(MalformedReason::HexDigitWithoutSuffix), |character| {
            Err(MalformedReason::InvalidCharacter(character))
        })
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the given source file.
    ///
    /// Every lexical error found while scanning is reported to `handler`.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>, handler: &'a dyn Handler<Error>) -> Self {
        Self {
            cursor: source_file.cursor(),
            handler,
            keywords: KeywordTable::new(),
        }
    }

    /// Gets the whole source text being scanned.
    #[must_use]
    pub fn buffer(&self) -> &'a str { self.source_file().content() }

    /// Gets the source file being scanned.
    #[must_use]
    pub fn source_file(&self) -> &'a Arc<SourceFile> { self.cursor.source_file() }

    /// Gets the handler that lexical errors are reported to.
    #[must_use]
    pub fn handler(&self) -> &'a dyn Handler<Error> { self.handler }

    /// Scans the next token.
    ///
    /// Whitespace and comments before the token are skipped. Once the end of input is reached,
    /// every further call returns a [`TokenKind::Eof`] token located at the end of the buffer.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            self.cursor.eat_while(is_whitespace);

            let Some((start, character)) = self.cursor.next() else {
                let end_of_input = self.buffer().len();
                return self.form_token(end_of_input, TokenKind::Eof);
            };

            let kind = match character {
                'A'..='Z' | 'a'..='z' | '_' => return self.identifier(start),
                '0'..='9' => return self.number(start),
                '"' | '\'' => return self.string(start, character),

                '(' => {
                    if self.cursor.eat('*') {
                        self.skip_comment(start);
                        continue;
                    }

                    TokenKind::LParen
                }
                ':' => self.one_or_two(TokenKind::Colon, '=', TokenKind::ColonEqual),
                '<' => self.one_or_two(TokenKind::Less, '=', TokenKind::LessEqual),
                '>' => self.one_or_two(TokenKind::Greater, '=', TokenKind::GreaterEqual),
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '.' => TokenKind::Period,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semi,
                '=' => TokenKind::Equal,
                '#' => TokenKind::Hash,
                ')' => TokenKind::RParen,
                '[' => TokenKind::LSquare,
                ']' => TokenKind::RSquare,
                '^' => TokenKind::Caret,

                _ => {
                    self.report(UnrecognizedCharacter {
                        span: self.span(start, start + character.len_utf8()),
                        character,
                    });
                    TokenKind::Unknown
                }
            };

            return self.form_token(start, kind);
        }
    }

    /// Picks the two character punctuator if the next character is `second`.
    fn one_or_two(&mut self, single: TokenKind, second: char, double: TokenKind) -> TokenKind {
        if self.cursor.eat(second) {
            double
        } else {
            single
        }
    }

    /// Skips a comment whose `(*` opener at `start` has already been consumed.
    fn skip_comment(&mut self, start: ByteIndex) {
        let mut depth = 1_usize;

        while depth > 0 {
            let Some((_, character)) = self.cursor.next() else {
                self.report(UnterminatedComment {
                    span: self.span(start, start + 2),
                });
                return;
            };

            if character == '(' && self.cursor.eat('*') {
                depth += 1;
            } else if character == '*' && self.cursor.eat(')') {
                depth -= 1;
            }
        }
    }

    fn identifier(&mut self, start: ByteIndex) -> Token<'a> {
        self.cursor.eat_while(is_identifier_body);

        let end = self.cursor.position();
        let kind = self
            .keywords
            .lookup(&self.buffer()[start..end], TokenKind::Identifier);

        self.form_token(start, kind)
    }

    fn number(&mut self, start: ByteIndex) -> Token<'a> {
        // the whole run is consumed even when malformed, so scanning resumes after it
        self.cursor.eat_while(is_identifier_body);

        let end = self.cursor.position();
        let kind = match validate_integer(&self.buffer()[start..end]) {
            Ok(()) => TokenKind::IntegerLiteral,
            Err(reason) => {
                self.report(MalformedNumericLiteral {
                    span: self.span(start, end),
                    reason,
                });
                TokenKind::Unknown
            }
        };

        self.form_token(start, kind)
    }

    fn string(&mut self, start: ByteIndex, quote: char) -> Token<'a> {
        self.cursor
            .eat_while(|character| character != quote && !is_line_terminator(character));

        if self.cursor.eat(quote) {
            return self.form_token(start, TokenKind::StringLiteral);
        }

        // the line terminator is left for the next call
        self.report(UnterminatedString {
            span: self.span(start, start + quote.len_utf8()),
        });
        self.form_token(start, TokenKind::Unknown)
    }

    /// Creates a token of `kind` from `start` up to the current cursor position.
    fn form_token(&mut self, start: ByteIndex, kind: TokenKind) -> Token<'a> {
        let end = self.cursor.position();
        Token::new(kind, start, &self.buffer()[start..end])
    }

    fn span(&self, start: ByteIndex, end: ByteIndex) -> Span {
        // the cursor only stops on character boundaries
        Span::new(self.source_file().clone(), start, end)
            .unwrap_or_else(|| Span::at_end(self.source_file().clone()))
    }

    fn report(&self, error: impl Into<Error>) { self.handler.receive(error.into()); }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields every token before the end of input.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        token.is_not(TokenKind::Eof).then_some(token)
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
