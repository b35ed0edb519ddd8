//! Long-running operation polling errors.

use std::time::Duration;

use thiserror::Error;

use crate::clients::HttpError;

/// Errors raised while waiting for a long-running operation.
#[derive(Debug, Error)]
pub enum PollerError {
    /// The operation reached the `Failed` state.
    #[error("the long-running operation failed: {message}")]
    Failed {
        /// The ARM error carried by the final status, if any.
        message: String,
    },

    /// The operation reached the `Canceled` state.
    #[error("the long-running operation was cancelled: {message}")]
    Cancelled {
        /// The ARM error carried by the final status, if any.
        message: String,
    },

    /// Too many consecutive polls failed without a response.
    #[error("exceeded the number of dropped connections allowed ({allowed}): {source}")]
    DroppedConnection {
        /// The configured budget.
        allowed: u8,
        /// The last transport error.
        #[source]
        source: HttpError,
    },

    /// The operation did not finish within the caller's deadline.
    #[error("timed out after {timeout:?} waiting for the long-running operation")]
    TimedOut {
        /// The deadline that elapsed.
        timeout: Duration,
    },

    /// A `202 Accepted` response gave nothing to poll.
    #[error("no Azure-AsyncOperation or Location header was returned with status {code}")]
    MissingPollingUrl {
        /// The status code of the initial response.
        code: u16,
    },

    /// An operation status body had no `status` field.
    #[error("the operation status returned from {url} had no `status` field")]
    MissingStatus {
        /// The polling URL.
        url: String,
    },

    /// An HTTP-level failure while polling.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl PollerError {
    /// Returns `true` for transport failures that count as a dropped connection.
    #[must_use]
    pub const fn is_dropped_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_dropped_connection())
    }
}
