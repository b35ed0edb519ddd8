//! The generic polling loop.

use std::time::Duration;

use crate::clients::HttpResponse;
use crate::pollers::PollerError;

/// Consecutive dropped connections tolerated before polling gives up.
pub const DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW: u8 = 3;

/// State of a long-running operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PollingStatus {
    /// Still running; poll again.
    InProgress,
    /// Completed successfully.
    Succeeded,
    /// Completed with an error.
    Failed,
    /// Cancelled before completion.
    Cancelled,
}

impl PollingStatus {
    /// Maps an ARM status string (`status` or `provisioningState`) to a state.
    ///
    /// Matching is case-insensitive. Anything that is not a terminal state
    /// (`Accepted`, `Creating`, `Running`, `ResolvingDNS`, ...) is in progress.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "canceled" | "cancelled" => Self::Cancelled,
            _ => Self::InProgress,
        }
    }

    /// Returns `true` for `Succeeded`, `Failed` and `Cancelled`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The outcome of a single poll.
#[derive(Clone, Debug)]
pub struct PollResult {
    /// The operation state.
    pub status: PollingStatus,
    /// How long to wait before the next poll.
    pub poll_interval: Duration,
    /// The response that produced this result, when there was one.
    pub http_response: Option<HttpResponse>,
}

impl PollResult {
    /// Builds a result from a polling response, preferring its `Retry-After`.
    #[must_use]
    pub fn from_response(
        status: PollingStatus,
        response: HttpResponse,
        default_interval: Duration,
    ) -> Self {
        Self {
            status,
            poll_interval: response.retry_after().unwrap_or(default_interval),
            http_response: Some(response),
        }
    }

    fn failure_message(&self) -> String {
        self.http_response
            .as_ref()
            .and_then(HttpResponse::arm_error)
            .map_or_else(|| "no error details were returned".to_string(), |e| e.summary())
    }
}

/// A strategy for checking a long-running operation once.
#[allow(async_fn_in_trait)]
pub trait PollerType {
    /// Checks the operation once.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError`] when the check itself fails. Transport
    /// failures count toward the dropped connection budget.
    async fn poll(&mut self) -> Result<PollResult, PollerError>;
}

/// Drives a [`PollerType`] until the operation reaches a terminal state.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use azure_arm::pollers::{Poller, DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW};
///
/// let mut poller = Poller::new(
///     my_poller_type,
///     Duration::from_secs(10),
///     DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW,
/// );
/// let result = poller.poll_until_done().await?;
/// ```
#[derive(Debug)]
pub struct Poller<P> {
    poller_type: P,
    initial_delay: Duration,
    dropped_connections_allowed: u8,
    latest_response: Option<HttpResponse>,
}

impl<P: PollerType> Poller<P> {
    /// Creates a poller that waits `initial_delay` before the first check.
    #[must_use]
    pub const fn new(poller_type: P, initial_delay: Duration, dropped_connections_allowed: u8) -> Self {
        Self {
            poller_type,
            initial_delay,
            dropped_connections_allowed,
            latest_response: None,
        }
    }

    /// Returns the most recent polling response.
    #[must_use]
    pub const fn latest_response(&self) -> Option<&HttpResponse> {
        self.latest_response.as_ref()
    }

    /// Polls until the operation succeeds, fails or is cancelled.
    ///
    /// The dropped connection counter resets after every successful check.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError::Failed`] or [`PollerError::Cancelled`] for the
    /// matching terminal states, [`PollerError::DroppedConnection`] when the
    /// budget is exceeded, and any other error from the poller type as-is.
    pub async fn poll_until_done(&mut self) -> Result<PollResult, PollerError> {
        tokio::time::sleep(self.initial_delay).await;

        let mut dropped_connections: u8 = 0;
        let mut interval = self.initial_delay;

        loop {
            match self.poller_type.poll().await {
                Ok(result) => {
                    dropped_connections = 0;
                    interval = result.poll_interval;
                    self.latest_response.clone_from(&result.http_response);

                    match result.status {
                        PollingStatus::Succeeded => return Ok(result),
                        PollingStatus::Failed => {
                            return Err(PollerError::Failed {
                                message: result.failure_message(),
                            })
                        }
                        PollingStatus::Cancelled => {
                            return Err(PollerError::Cancelled {
                                message: result.failure_message(),
                            })
                        }
                        PollingStatus::InProgress => {
                            tracing::debug!(
                                interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
                                "long-running operation still in progress"
                            );
                        }
                    }
                }
                Err(PollerError::Http(source)) if source.is_dropped_connection() => {
                    dropped_connections = dropped_connections.saturating_add(1);
                    if dropped_connections > self.dropped_connections_allowed {
                        return Err(PollerError::DroppedConnection {
                            allowed: self.dropped_connections_allowed,
                            source,
                        });
                    }
                    tracing::warn!(
                        dropped_connections,
                        allowed = self.dropped_connections_allowed,
                        error = %source,
                        "dropped connection while polling, retrying"
                    );
                }
                Err(e) => return Err(e),
            }

            tokio::time::sleep(interval).await;
        }
    }

    /// Like [`poll_until_done`](Self::poll_until_done) but gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError::TimedOut`] when the deadline elapses first.
    pub async fn poll_until_done_with_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<PollResult, PollerError> {
        tokio::time::timeout(timeout, self.poll_until_done())
            .await
            .map_err(|_| PollerError::TimedOut { timeout })?
    }
}
