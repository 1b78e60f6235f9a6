//! Error Taxonomy
//!
//! Every failure a user action can surface. Network and server failures come
//! out of the API layer; validation and gating failures are raised before a
//! request is ever sent.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Request never reached the server or produced no response.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("server responded with status {0}")]
    Server(u16),

    /// A required field is missing or empty; caught before submit.
    #[error("{0}")]
    Validation(String),

    /// A proof photo for today already exists; caught before any request.
    #[error("today's image is already uploaded")]
    AlreadyUploadedToday,
}
