//! The universal response envelope.
//!
//! Every portal endpoint answers with the same JSON wrapper:
//!
//! ```json
//! { "error": null, "result": "pathfinder42" }
//! { "error": "user does not exist", "result": null }
//! ```
//!
//! Exactly one of the two fields is meaningful at a time, and `error` wins:
//! a non-empty `error` string marks the response as an application-level
//! failure **regardless** of what `result` contains. The portal serialises
//! with `omitempty` semantics, so either field may be absent entirely —
//! absent, `null`, and (for `error`) the empty string all mean "not set".
//!
//! Callers never inspect the raw fields; they decode through
//! [`Envelope::into_result`] (payload required) or [`Envelope::acknowledge`]
//! (payload ignorable), which turn the duck-typed wrapper into an explicit
//! `Result` at the wire boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to extract a payload from an [`Envelope`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The portal processed the request and reported a failure.
    /// Carries the server's message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// No error was reported, but the promised payload is missing.
    #[error("response envelope carries no result")]
    MissingResult,
}

/// The `{error, result}` wrapper around every portal response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Failure message. `None` and `""` both mean "no error".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Payload of a successful response. Its meaning (and whether it is
    /// present at all) is endpoint-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// A successful envelope wrapping `result`.
    pub fn success(result: T) -> Self {
        Self {
            error: None,
            result: Some(result),
        }
    }

    /// A failed envelope carrying `message` and no result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            result: None,
        }
    }

    /// The failure message, if this envelope carries one.
    ///
    /// An empty `error` string does not count as a failure.
    pub fn rejection(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Decode the envelope, requiring a payload.
    ///
    /// A non-empty `error` takes precedence over any `result`; a clean
    /// envelope without a `result` is [`EnvelopeError::MissingResult`].
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if let Some(message) = self.rejection() {
            return Err(EnvelopeError::Rejected(message.to_owned()));
        }
        self.result.ok_or(EnvelopeError::MissingResult)
    }

    /// Decode the envelope, discarding any payload.
    ///
    /// For endpoints whose `result` is ignorable on success — only the
    /// error field matters.
    pub fn acknowledge(self) -> Result<(), EnvelopeError> {
        match self.rejection() {
            Some(message) => Err(EnvelopeError::Rejected(message.to_owned())),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
