//! Error types for remote API interactions.
//!
//! A non-2xx status from the remote API is never fatal for a whole run:
//! the enumerator logs it and treats the folder as childless, and the
//! aggregator records it per-entry. `MissingToken` is the one startup-time
//! fatal condition.

use thiserror::Error;

use crate::traits::HttpError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ACCESS_TOKEN is not set; provide it via the environment or a .env file")]
    MissingToken,

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response ({context})")]
    MalformedResponse { context: String },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
}

impl ApiError {
    /// Build a `Status` error from a response body, truncating oversized
    /// bodies so log lines stay readable.
    pub fn from_status(status: u16, body: String) -> Self {
        const MAX_BODY: usize = 512;
        let body = if body.len() > MAX_BODY {
            let mut end = MAX_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}…", &body[..end])
        } else {
            body
        };
        ApiError::Status { status, body }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
