use std::{cell::Cell, fmt::Display, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use tinylang_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use tinylang_lexical::scanner::Scanner;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "tinylang",
    about = "Lexical front end of the tinylang compiler.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The source file to scan.
    pub file: PathBuf,

    /// Prints out every token of the source file.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<usize>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(0),
        }
    }

    fn printed(&self) -> usize { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(self.printed.get() + 1);
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let source_file = match SourceFile::open(&argument.file) {
        Ok(source_file) => source_file,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::new();
    let mut token_count = 0;

    for token in Scanner::new(&source_file, &printer) {
        token_count += 1;

        if argument.dump_tokens {
            let location = source_file
                .get_location(token.location())
                .unwrap_or_default();

            match token.identifier().or_else(|| token.literal_data()) {
                Some(text) => println!("{location} {} {text}", token.name()),
                None => println!("{location} {}", token.name()),
            }
        }
    }

    if argument.dump_tokens {
        let msg = Message::new(
            Severity::Info,
            format!(
                "{}: {token_count} tokens, {} errors",
                argument.file.display(),
                printer.printed()
            ),
        );

        println!("{msg}");
    }

    // an error was reported
    if printer.printed() > 0 {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
