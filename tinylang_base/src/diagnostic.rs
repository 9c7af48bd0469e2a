//! A module for receiving diagnostics reported by the compiler phases.

use std::cell::RefCell;

/// Represents a sink that diagnostics of type `T` are reported into.
///
/// Reporting is fire-and-forget: the reporter never learns what the handler did with the value.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a [`Handler`] that keeps every received diagnostic in the order it was reported.
#[derive(Debug)]
pub struct Storage<T> {
    diagnostics: RefCell<Vec<T>>,
}

impl<T> Storage<T> {
    /// Creates a new empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Returns the number of diagnostics received so far.
    #[must_use]
    pub fn len(&self) -> usize { self.diagnostics.borrow().len() }

    /// Checks whether no diagnostic has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.diagnostics.borrow().is_empty() }

    /// Consumes the [`Storage`] and returns the received diagnostics.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner() }
}

impl<T> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.diagnostics.borrow_mut().push(diagnostic.into()); }
}

/// Is a [`Handler`] that discards everything it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _diagnostic: T) {}
}
