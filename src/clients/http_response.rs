//! HTTP response types for the Azure Resource Manager SDK.
//!
//! This module provides the [`HttpResponse`] type and the ARM error envelope
//! [`ArmErrorDetail`].

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest delay a `Retry-After` header is honoured for.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(3600);

/// The ARM error envelope body: `{"error": {"code": ..., "message": ...}}`.
///
/// Long-running operation status bodies use the same shape under `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmErrorDetail {
    /// Machine-readable error code, e.g. `StorageAccountAlreadyTaken`.
    #[serde(default)]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// The property or resource the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Nested errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ArmErrorDetail>,
}

impl ArmErrorDetail {
    /// Renders `code: message`, falling back to whichever part is present.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.code.is_empty(), self.message.is_empty()) {
            (false, false) => format!("{}: {}", self.code, self.message),
            (false, true) => self.code.clone(),
            _ => self.message.clone(),
        }
    }
}

/// A parsed response from Resource Manager.
///
/// Header names are lower-cased; each header maps to all of its values.
///
/// # Example
///
/// ```rust
/// use azure_arm::clients::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "azure-asyncoperation".to_string(),
///     vec!["https://management.azure.com/operations/1".to_string()],
/// );
/// headers.insert("retry-after".to_string(), vec!["15".to_string()]);
///
/// let response = HttpResponse::new(202, headers, json!(null));
/// assert!(response.is_ok());
/// assert_eq!(response.azure_async_operation(), Some("https://management.azure.com/operations/1"));
/// assert_eq!(response.retry_after().map(|d| d.as_secs()), Some(15));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body; `Null` for empty bodies.
    pub body: serde_json::Value,
    /// Seconds from the `Retry-After` header, if it held a number.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Retry-After` delay, capped at [`MAX_RETRY_AFTER`].
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_request_after.map(|seconds| {
            Duration::try_from_secs_f64(seconds)
                .map_or(MAX_RETRY_AFTER, |delay| delay.min(MAX_RETRY_AFTER))
        })
    }

    /// Returns the `Azure-AsyncOperation` polling URL, if present.
    #[must_use]
    pub fn azure_async_operation(&self) -> Option<&str> {
        self.header("azure-asyncoperation").filter(|url| !url.is_empty())
    }

    /// Returns the `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location").filter(|url| !url.is_empty())
    }

    /// Returns the `x-ms-request-id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ms-request-id")
    }

    /// Returns the `x-ms-correlation-request-id` header value, if present.
    #[must_use]
    pub fn correlation_request_id(&self) -> Option<&str> {
        self.header("x-ms-correlation-request-id")
    }

    /// Returns the remaining subscription-scoped read quota, if reported.
    #[must_use]
    pub fn ratelimit_remaining_reads(&self) -> Option<u32> {
        self.header("x-ms-ratelimit-remaining-subscription-reads")
            .and_then(|value| value.parse().ok())
    }

    /// Returns the remaining subscription-scoped write quota, if reported.
    #[must_use]
    pub fn ratelimit_remaining_writes(&self) -> Option<u32> {
        self.header("x-ms-ratelimit-remaining-subscription-writes")
            .and_then(|value| value.parse().ok())
    }

    /// Parses the ARM error envelope from the body, if present.
    #[must_use]
    pub fn arm_error(&self) -> Option<ArmErrorDetail> {
        self.body
            .get("error")
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }

    /// Builds a human-readable error message for a failed response.
    #[must_use]
    pub fn error_message(&self) -> String {
        if let Some(detail) = self.arm_error() {
            return detail.summary();
        }
        if let Some(raw) = self.body.get("raw_body").and_then(|v| v.as_str()) {
            return raw.to_string();
        }
        if let Some(message) = self.body.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
        if self.body.is_null() {
            return format!("status {} with an empty body", self.code);
        }
        self.body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 202, 204] {
            let response = HttpResponse::new(code, HashMap::new(), json!(null));
            assert!(response.is_ok(), "Expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 409, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!(null));
            assert!(!response.is_ok(), "Expected !is_ok() for code {code}");
        }
    }

    #[test]
    fn test_parses_retry_after_seconds() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2.5")]), json!(null));
        assert_eq!(response.retry_after(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_oversized_retry_after_is_capped() {
        for value in ["1e20", "1e300", "86400"] {
            let response = HttpResponse::new(429, headers(&[("retry-after", value)]), json!(null));
            assert_eq!(response.retry_after(), Some(MAX_RETRY_AFTER), "Retry-After: {value}");
        }
    }

    #[test]
    fn test_ignores_non_numeric_retry_after() {
        let response = HttpResponse::new(
            503,
            headers(&[("retry-after", "Wed, 21 Oct 2015 07:28:00 GMT")]),
            json!(null),
        );
        assert!(response.retry_after().is_none());
    }

    #[test]
    fn test_polling_and_tracing_headers() {
        let response = HttpResponse::new(
            202,
            headers(&[
                ("location", "https://management.azure.com/op/1"),
                ("x-ms-request-id", "req"),
                ("x-ms-correlation-request-id", "corr"),
                ("x-ms-ratelimit-remaining-subscription-writes", "1199"),
            ]),
            json!(null),
        );

        assert_eq!(response.location(), Some("https://management.azure.com/op/1"));
        assert!(response.azure_async_operation().is_none());
        assert_eq!(response.request_id(), Some("req"));
        assert_eq!(response.correlation_request_id(), Some("corr"));
        assert_eq!(response.ratelimit_remaining_writes(), Some(1199));
        assert_eq!(response.header("X-MS-Request-Id"), Some("req"));
    }

    #[test]
    fn test_arm_error_envelope() {
        let response = HttpResponse::new(
            409,
            HashMap::new(),
            json!({
                "error": {
                    "code": "StorageAccountAlreadyTaken",
                    "message": "The storage account named foo is already taken.",
                    "details": [{"code": "Inner", "message": "nested"}]
                }
            }),
        );

        let detail = response.arm_error().unwrap();
        assert_eq!(detail.code, "StorageAccountAlreadyTaken");
        assert_eq!(detail.details.len(), 1);
        assert_eq!(
            response.error_message(),
            "StorageAccountAlreadyTaken: The storage account named foo is already taken."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        let response = HttpResponse::new(502, HashMap::new(), json!({"raw_body": "Bad Gateway"}));
        assert_eq!(response.error_message(), "Bad Gateway");

        let empty = HttpResponse::new(500, HashMap::new(), json!(null));
        assert_eq!(empty.error_message(), "status 500 with an empty body");
    }
}
