use thiserror::Error;

use super::ApiResult;

/// Errors raised by authenticated backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-2xx status
    #[error("{}", request_message(*status, detail))]
    Request {
        /// HTTP status code
        status: u16,
        /// `detail`, else `error`, else the status reason, else empty
        detail: String,
        /// Response body as received
        payload: ApiResult,
    },
    /// The request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// An endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// HTTP status for [`ClientError::Request`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) | Self::InvalidUrl(_) => None,
        }
    }
}

/// `"<status> <detail>"`, or the bare status when there is no detail.
fn request_message(status: u16, detail: &str) -> String {
    if detail.is_empty() { status.to_string() } else { format!("{status} {detail}") }
}
