use std::borrow::Cow;
use thiserror::Error;

/// Maximum number of upcoming symbols quoted in a failure message
pub const SNIPPET_LEN: usize = 20;

/// The one error every parser reports: a rendered, human-readable description
/// of why the input did not match.
///
/// Failures carry no cursor. A combinator that recovers from one always
/// resumes from the cursor it was given, so nothing consumed by the failed
/// attempt can leak through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: Cow<'static, str>,
}

impl Failure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A literal was not a prefix of the input
    pub fn expected_prefix(literal: &str, found: &str) -> Self {
        Self::new(format!("expected prefix `{literal}` but found `{found}`"))
    }

    /// A single-symbol predicate rejected the input (or the input was empty)
    pub fn predicate_failed(found: &str) -> Self {
        Self::new(format!("predicate failed, found `{found}`"))
    }

    /// A bounded repetition stopped short of its requested count
    pub fn count_mismatch(
        requested: usize,
        achieved: usize,
        partial: &str,
        remainder: &str,
    ) -> Self {
        Self::new(format!(
            "did not consume `{requested}` items, consumed `{achieved}`: `{partial}`, `{remainder}`"
        ))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
