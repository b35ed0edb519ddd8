//! Polling through the `Azure-AsyncOperation` and `Location` headers.

use std::time::Duration;

use serde::Deserialize;

use crate::clients::{ArmErrorDetail, HttpError, HttpResponse, RequestOptions, ResourceManagerClient};
use crate::pollers::{PollResult, PollerError, PollerType, PollingStatus};

/// Which header the polling URL came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongRunningOperationKind {
    /// `Azure-AsyncOperation`: the body carries a `status` field.
    AsyncOperation,
    /// `Location`: `202` means running, any other success means done.
    Location,
}

#[derive(Debug, Deserialize)]
struct OperationStatus {
    status: Option<String>,
    #[serde(default)]
    error: Option<ArmErrorDetail>,
}

/// Polls the URL a Resource Manager returned for a long-running operation.
#[derive(Debug)]
pub struct LongRunningOperationPoller<'a> {
    client: &'a ResourceManagerClient,
    url: String,
    kind: LongRunningOperationKind,
    default_interval: Duration,
}

impl<'a> LongRunningOperationPoller<'a> {
    /// Builds a poller from the initial response.
    ///
    /// `Azure-AsyncOperation` wins over `Location`. Returns `None` when the
    /// response carries neither.
    #[must_use]
    pub fn from_response(client: &'a ResourceManagerClient, response: &HttpResponse) -> Option<Self> {
        let (url, kind) = if let Some(url) = response.azure_async_operation() {
            (url, LongRunningOperationKind::AsyncOperation)
        } else {
            (response.location()?, LongRunningOperationKind::Location)
        };

        Some(Self {
            client,
            url: url.to_string(),
            kind,
            default_interval: client.poll_interval(),
        })
    }

    /// Returns the polling URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns which header the URL came from.
    #[must_use]
    pub const fn kind(&self) -> LongRunningOperationKind {
        self.kind
    }

    fn async_operation_result(&self, response: HttpResponse) -> Result<PollResult, PollerError> {
        let status: OperationStatus = serde_json::from_value(response.body.clone()).map_err(|_| {
            PollerError::MissingStatus {
                url: self.url.clone(),
            }
        })?;
        let Some(state) = status.status else {
            return Err(PollerError::MissingStatus {
                url: self.url.clone(),
            });
        };

        let polling_status = PollingStatus::from_status(&state);
        if let (PollingStatus::Failed | PollingStatus::Cancelled, Some(error)) =
            (polling_status, status.error.as_ref())
        {
            tracing::debug!(code = %error.code, "long-running operation reported an error");
        }

        Ok(PollResult::from_response(
            polling_status,
            response,
            self.default_interval,
        ))
    }

    fn location_result(&self, response: HttpResponse) -> PollResult {
        let status = if response.code == 202 {
            PollingStatus::InProgress
        } else {
            PollingStatus::Succeeded
        };
        PollResult::from_response(status, response, self.default_interval)
    }
}

impl PollerType for LongRunningOperationPoller<'_> {
    async fn poll(&mut self) -> Result<PollResult, PollerError> {
        let response = match self.client.get(&self.url, &RequestOptions::new()).await {
            Ok(response) => response,
            // A Location URL answers with the final error once the operation fails.
            Err(HttpError::Response(e)) if self.kind == LongRunningOperationKind::Location => {
                return Err(PollerError::Failed { message: e.message });
            }
            Err(e) => return Err(e.into()),
        };

        match self.kind {
            LongRunningOperationKind::AsyncOperation => self.async_operation_result(response),
            LongRunningOperationKind::Location => Ok(self.location_result(response)),
        }
    }
}
