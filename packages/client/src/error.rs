//! Client-side failure taxonomy.
//!
//! Every way a portal operation can fail collapses into [`ClientError`],
//! and the `Display` text of each variant is exactly what ends up in the
//! user-facing alert. Rejections quote the server; the session-expiry
//! message is fixed product copy and never varies.

use astropost_api::EnvelopeError;
use thiserror::Error;

/// Message shown whenever the portal no longer recognises the session.
pub const SESSION_EXPIRED_MESSAGE: &str =
    "Your session has expired. Please log in again to resolve this issue.";

/// A failed portal operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The portal answered and reported a failure. Carries the server's
    /// message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The session probe came back negative; the stored identity (if any)
    /// is stale and the user must authenticate again.
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    /// The request never produced a usable response: connection refused,
    /// TLS failure, or a body that is not valid JSON.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The portal answered 2xx-clean but the payload breaks the contract.
    #[error("malformed portal response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// True when the portal itself rejected the request, as opposed to the
    /// request failing in transit or the session being stale.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<EnvelopeError> for ClientError {
    fn from(error: EnvelopeError) -> Self {
        match error {
            EnvelopeError::Rejected(message) => Self::Rejected(message),
            EnvelopeError::MissingResult => {
                Self::Malformed("response envelope carries no result".into())
            }
        }
    }
}
