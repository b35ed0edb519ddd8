//! Polling a resource's `properties.provisioningState`.

use std::time::Duration;

use crate::clients::{HttpResponse, RequestOptions, ResourceManagerClient};
use crate::pollers::{PollResult, PollerError, PollerType, PollingStatus};

/// Reads `properties.provisioningState` from a resource body.
#[must_use]
pub fn provisioning_state(body: &serde_json::Value) -> Option<&str> {
    body.get("properties")
        .and_then(|properties| properties.get("provisioningState"))
        .and_then(serde_json::Value::as_str)
}

/// Re-reads a resource until its provisioning state is terminal.
///
/// Used for PUT and PATCH operations that answer `200`/`201` with a
/// provisioning state such as `Creating` and no polling header.
#[derive(Debug)]
pub struct ProvisioningStatePoller<'a> {
    client: &'a ResourceManagerClient,
    path: String,
    default_interval: Duration,
}

impl<'a> ProvisioningStatePoller<'a> {
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

    fn result(&self, response: HttpResponse) -> PollResult {
        // A resource without a provisioning state is as done as it gets.
        let status = provisioning_state(&response.body)
            .map_or(PollingStatus::Succeeded, PollingStatus::from_status);
        PollResult::from_response(status, response, self.default_interval)
    }
}

impl PollerType for ProvisioningStatePoller<'_> {
    async fn poll(&mut self) -> Result<PollResult, PollerError> {
        let response = self.client.get(&self.path, &RequestOptions::new()).await?;
        Ok(self.result(response))
    }
}
