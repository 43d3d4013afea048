//! Failure modes of a chat round trip.
//!
//! None of these reach the user verbatim; the search state collapses every
//! variant into one fixed message. `Display` exists for console logs.

/// Errors produced by [`super::api::post_chat`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (connection refused, DNS, CORS).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("chat endpoint returned status {0}")]
    Status(u16),

    /// The response body could not be decoded as a chat result.
    #[error("chat response decode failed: {0}")]
    Decode(String),

    /// Requests are only issued from the browser build.
    #[error("chat requests are not available on the server")]
    Unavailable,
}
