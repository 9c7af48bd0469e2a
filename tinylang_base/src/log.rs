//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Escape, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    fn header(self) -> Header {
        match self {
            Self::Error => Color::Red.with("[error]:"),
            Self::Warning => Color::Yellow.with("[warning]:"),
            Self::Info => Color::Green.with("[info]:"),
        }
    }
}

type Header = formatting::Styled<Color, &'static str>;

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            Style::Bold.with(self.severity.header()),
            Style::Bold.with(&self.display)
        )
    }
}

fn digit_count(mut number: usize) -> usize {
    let mut digits = 1;

    while number >= 10 {
        number /= 10;
        digits += 1;
    }

    digits
}

/// Structure implementing [`Display`] that prints the line of source code a span starts on, with
/// the span underlined.
///
/// ```text
///   --> main.mod:3:5
///   |
/// 3 | x := "abc
///   |      ^^^^ help: the string is not closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let Some(start) = self.span.start_location() else {
            return Ok(());
        };

        let gutter = digit_count(start.line);
        let pipe = Style::Bold.with(Color::Cyan.with("|"));

        writeln!(
            f,
            "{:gutter$}{} {}:{start}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        let line = source_file
            .get_line(start.line)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r']);

        writeln!(
            f,
            "{} {pipe} {line}",
            Style::Bold.with(Color::Cyan.with(start.line)),
        )?;

        // keeps tabs so the underline lines up with the printed line
        let padding = line
            .chars()
            .take(start.column - 1)
            .map(|character| if character == '\t' { '\t' } else { ' ' })
            .collect::<String>();

        // only the part of the span on its first line is underlined
        let width = self
            .span
            .str()
            .lines()
            .next()
            .map_or(0, |first_line| first_line.chars().count())
            .max(1);

        write!(
            f,
            "{:gutter$} {pipe} {padding}{}",
            "",
            Style::Bold.with(Color::Red.with("^".repeat(width)))
        )?;

        if let Some(help_display) = &self.help_display {
            write!(f, " {}: {help_display}", Style::Bold.with("help"))?;
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{digit_count, SourceCodeDisplay};
    use crate::source_file::{SourceFile, Span};

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(12345), 5);
    }

    #[test]
    fn test_source_code_display() {
        let source_file = SourceFile::temp("VAR x;\nx := \"abc\n").unwrap();
        let span = Span::new(source_file.clone(), 12, 16).unwrap();

        let rendered = SourceCodeDisplay::new(&span, Some("the string is not closed")).to_string();

        assert!(rendered.contains(":2:6"));
        assert!(rendered.contains("x := \"abc"));
        assert!(rendered.contains("^^^^"));
        assert!(rendered.contains("the string is not closed"));
    }
}
