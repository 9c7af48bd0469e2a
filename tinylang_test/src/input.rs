//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing.

use proptest::test_runner::{TestCaseError, TestCaseResult};

/// Represents a generated input that knows what the compiler should produce from it.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<T, U> Input<Option<T>> for Option<U>
where
    U: Input<T>,
{
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(_), None) => Err(TestCaseError::fail("expected an output, found none")),
            (None, Some(_)) => Err(TestCaseError::fail("expected no output, found one")),
        }
    }
}
