//! Polling a resource until it disappears.

use std::time::Duration;

use crate::clients::{RequestOptions, ResourceManagerClient};
use crate::pollers::{PollResult, PollerError, PollerType, PollingStatus};

/// Re-reads a resource after a DELETE until the service answers 404.
#[derive(Debug)]
pub struct DeletePoller<'a> {
    client: &'a ResourceManagerClient,
    path: String,
    default_interval: Duration,
}

impl<'a> DeletePoller<'a> {
    /// Creates a poller that GETs `path`.
    #[must_use]
    pub fn new(client: &'a ResourceManagerClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            default_interval: client.poll_interval(),
        }
    }

    /// Returns the resource path being polled.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl PollerType for DeletePoller<'_> {
    async fn poll(&mut self) -> Result<PollResult, PollerError> {
        match self.client.get(&self.path, &RequestOptions::new()).await {
            Ok(response) => Ok(PollResult::from_response(
                PollingStatus::InProgress,
                response,
                self.default_interval,
            )),
            Err(e) if e.is_not_found() => Ok(PollResult {
                status: PollingStatus::Succeeded,
                poll_interval: self.default_interval,
                http_response: None,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
