//! Failure taxonomy for the remote scheduling service.
//!
//! Every gateway call resolves to exactly one of these variants; nothing in
//! the client retries on its own, so callers decide whether to resubmit.

use thiserror::Error;

/// A failed interaction with the scheduling service.
///
/// `Display` output is user-facing: the session store records it verbatim
/// in its `error` field and pages render it next to forms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, malformed body).
    #[error("could not reach the server: {0}")]
    Network(String),

    /// The login endpoint rejected the submitted credentials.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A registration endpoint rejected the submitted fields.
    #[error("{0}")]
    Validation(String),

    /// No token is stored; detected client-side without a request.
    #[error("not signed in")]
    Unauthenticated,

    /// The service rejected the stored token on an authenticated request.
    #[error("your session has expired, please sign in again")]
    InvalidSession,
}
