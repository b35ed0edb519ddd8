//! Choosing a polling strategy for a Resource Manager response.

use crate::clients::{HttpMethod, HttpResponse, ResourceManagerClient};
use crate::pollers::provisioning_state::provisioning_state;
use crate::pollers::{
    DeletePoller, LongRunningOperationPoller, PollResult, PollerError, PollerType,
    PollingStatus, ProvisioningStatePoller,
};

/// The polling strategy picked for a long-running Resource Manager operation.
#[derive(Debug)]
pub enum ResourceManagerPoller<'a> {
    /// Follow `Azure-AsyncOperation` or `Location`.
    LongRunningOperation(LongRunningOperationPoller<'a>),
    /// Re-read the resource until `provisioningState` is terminal.
    ProvisioningState(ProvisioningStatePoller<'a>),
    /// Re-read the resource until it is gone.
    Delete(DeletePoller<'a>),
}

impl<'a> ResourceManagerPoller<'a> {
    /// Picks a strategy for the response of a `method` request to `path`.
    ///
    /// In order of preference:
    ///
    /// 1. a polling header (`Azure-AsyncOperation`, then `Location`)
    /// 2. a PUT or PATCH body whose `provisioningState` is not terminal
    /// 3. a DELETE answered with `202 Accepted`
    ///
    /// Returns `Ok(None)` when the operation has already completed.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError::MissingPollingUrl`] for any other
    /// `202 Accepted` response.
    pub fn from_response(
        client: &'a ResourceManagerClient,
        response: &HttpResponse,
        method: HttpMethod,
        path: &str,
    ) -> Result<Option<Self>, PollerError> {
        if let Some(poller) = LongRunningOperationPoller::from_response(client, response) {
            return Ok(Some(Self::LongRunningOperation(poller)));
        }

        if matches!(method, HttpMethod::Put | HttpMethod::Patch) {
            if let Some(state) = provisioning_state(&response.body) {
                if !PollingStatus::from_status(state).is_terminal() {
                    return Ok(Some(Self::ProvisioningState(ProvisioningStatePoller::new(
                        client,
                        strip_query(path),
                    ))));
                }
            }
        }

        if response.code == 202 {
            if method == HttpMethod::Delete {
                return Ok(Some(Self::Delete(DeletePoller::new(client, strip_query(path)))));
            }
            return Err(PollerError::MissingPollingUrl {
                code: response.code,
            });
        }

        Ok(None)
    }
}

impl PollerType for ResourceManagerPoller<'_> {
    async fn poll(&mut self) -> Result<PollResult, PollerError> {
        match self {
            Self::LongRunningOperation(poller) => poller.poll().await,
            Self::ProvisioningState(poller) => poller.poll().await,
            Self::Delete(poller) => poller.poll().await,
        }
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, Credential};
    use crate::config::{ApiVersion, ArmConfig};
    use serde_json::json;
    use std::collections::HashMap;

    fn client() -> ResourceManagerClient {
        let config = ArmConfig::builder()
            .credential(Credential::Static(AccessToken::new("token")))
            .build()
            .unwrap();
        ResourceManagerClient::new(&config, ApiVersion::from_static("2023-01-01"))
    }

    fn response(code: u16, headers: &[(&str, &str)], body: serde_json::Value) -> HttpResponse {
        let headers: HashMap<String, Vec<String>> = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        HttpResponse::new(code, headers, body)
    }

    const PATH: &str = "/subscriptions/1/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa";

    #[test]
    fn test_async_operation_header_wins() {
        let client = client();
        let response = response(
            201,
            &[
                ("azure-asyncoperation", "https://management.azure.com/op/1"),
                ("location", "https://management.azure.com/loc/1"),
            ],
            json!(null),
        );

        match ResourceManagerPoller::from_response(&client, &response, HttpMethod::Put, PATH) {
            Ok(Some(ResourceManagerPoller::LongRunningOperation(poller))) => {
                assert_eq!(poller.url(), "https://management.azure.com/op/1");
            }
            other => panic!("expected a long-running operation poller, got {other:?}"),
        }
    }

    #[test]
    fn test_put_with_pending_provisioning_state() {
        let client = client();
        let response = response(
            201,
            &[],
            json!({"properties": {"provisioningState": "Creating"}}),
        );

        match ResourceManagerPoller::from_response(&client, &response, HttpMethod::Put, PATH) {
            Ok(Some(ResourceManagerPoller::ProvisioningState(poller))) => {
                assert_eq!(poller.path(), PATH);
            }
            other => panic!("expected a provisioning state poller, got {other:?}"),
        }
    }

    #[test]
    fn test_completed_operation_needs_no_poller() {
        let client = client();
        let succeeded = response(
            200,
            &[],
            json!({"properties": {"provisioningState": "Succeeded"}}),
        );
        assert!(matches!(
            ResourceManagerPoller::from_response(&client, &succeeded, HttpMethod::Put, PATH),
            Ok(None)
        ));

        let deleted = response(200, &[], json!(null));
        assert!(matches!(
            ResourceManagerPoller::from_response(&client, &deleted, HttpMethod::Delete, PATH),
            Ok(None)
        ));
    }

    #[test]
    fn test_accepted_delete_without_headers_polls_the_resource() {
        let client = client();
        let accepted = response(202, &[], json!(null));

        assert!(matches!(
            ResourceManagerPoller::from_response(&client, &accepted, HttpMethod::Delete, PATH),
            Ok(Some(ResourceManagerPoller::Delete(_)))
        ));
    }

    #[test]
    fn test_accepted_without_polling_url_is_an_error() {
        let client = client();
        let accepted = response(202, &[], json!(null));

        assert!(matches!(
            ResourceManagerPoller::from_response(&client, &accepted, HttpMethod::Post, PATH),
            Err(PollerError::MissingPollingUrl { code: 202 })
        ));
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/a/b?api-version=1"), "/a/b");
        assert_eq!(strip_query("/a/b"), "/a/b");
    }
}
