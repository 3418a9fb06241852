//! Failure containment policy for collaborator calls.
//!
//! Transliteration runs fail-open by default: a broken collaborator degrades
//! to echoing the input. Fail-closed hands the collaborator's error to the
//! caller untouched, which is how translation always behaves.

use std::fmt::Display;

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Substitute the original input for the failed output.
    FailOpen,
    /// Surface the failure to the caller.
    FailClosed,
}

impl FailurePolicy {
    /// Resolve a collaborator outcome under this policy.
    ///
    /// `fallback` is only evaluated when the policy is fail-open and the
    /// outcome is an error.
    pub fn resolve<T, E, F>(
        self,
        operation: &str,
        outcome: Result<T, E>,
        fallback: F,
    ) -> Result<T, E>
    where
        E: Display,
        F: FnOnce() -> T,
    {
        match (self, outcome) {
            (_, Ok(value)) => Ok(value),
            (FailurePolicy::FailOpen, Err(e)) => {
                warn!("{} failed, falling back to passthrough: {}", operation, e);
                Ok(fallback())
            }
            (FailurePolicy::FailClosed, Err(e)) => Err(e),
        }
    }
}
