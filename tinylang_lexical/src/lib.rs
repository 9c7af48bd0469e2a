//! This crate implements the lexical analysis phase of the tinylang compiler. This phase is
//! responsible for turning the source text into classified, positioned tokens.
//!
//! The parser pulls tokens one at a time from a [`scanner::Scanner`]; malformed input is reported
//! through a [`tinylang_base::diagnostic::Handler`] and never stops the scanner.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod keyword;
pub mod scanner;
pub mod token;
