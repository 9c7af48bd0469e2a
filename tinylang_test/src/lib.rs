//! Contains the shared support code for the property-based tests of the tinylang crates.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]
#![allow(clippy::missing_errors_doc)]

pub mod input;
