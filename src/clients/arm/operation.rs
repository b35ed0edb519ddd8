//! Operation descriptors and per-request options.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::arm::ArmError;
use crate::clients::HttpMethod;

/// Extra query parameters and headers for a single operation.
///
/// Service packages convert their typed `*OperationOptions` into this.
///
/// # Example
///
/// ```rust
/// use azure_arm::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query_param("$top", "50")
///     .optional_query_param("$filter", None::<String>)
///     .header("If-Match", "*");
///
/// assert_eq!(options.query.get("$top").map(String::as_str), Some("50"));
/// assert!(!options.query.contains_key("$filter"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Query parameters added to the request URL.
    pub query: HashMap<String, String>,
    /// Headers added to the request.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a query parameter when `value` is present.
    #[must_use]
    pub fn optional_query_param(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query_param(key, value.to_string()),
            None => self,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds a header when `value` is present.
    #[must_use]
    pub fn optional_header(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.header(key, value.to_string()),
            None => self,
        }
    }
}

/// A single Resource Manager operation: method, path, accepted status codes
/// and optional body.
///
/// # Example
///
/// ```rust
/// use azure_arm::clients::{HttpMethod, Operation};
///
/// let operation = Operation::new(
///     HttpMethod::Put,
///     "/subscriptions/1/resourceGroups/rg/providers/Microsoft.EventGrid/topics/t",
///     "Topic",
/// )
/// .expected(&[201])
/// .body(&serde_json::json!({"location": "westeurope"}))
/// .unwrap();
///
/// assert_eq!(operation.expected_status_codes(), &[201]);
/// ```
#[derive(Clone, Debug)]
pub struct Operation {
    method: HttpMethod,
    path: String,
    resource: &'static str,
    expected_status_codes: &'static [u16],
    body: Option<serde_json::Value>,
    options: RequestOptions,
}

impl Operation {
    /// Creates an operation expecting `200 OK`.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>, resource: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            resource,
            expected_status_codes: &[200],
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// Sets the status codes treated as success.
    #[must_use]
    pub const fn expected(mut self, codes: &'static [u16]) -> Self {
        self.expected_status_codes = codes;
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Serialize`] if `body` cannot be represented as JSON.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ArmError> {
        let value = serde_json::to_value(body).map_err(|source| ArmError::Serialize {
            resource: self.resource,
            source,
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Sets the per-request options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the request path or absolute URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the resource type name used in errors.
    #[must_use]
    pub const fn resource(&self) -> &'static str {
        self.resource
    }

    /// Returns the accepted status codes.
    #[must_use]
    pub const fn expected_status_codes(&self) -> &'static [u16] {
        self.expected_status_codes
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn request_body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Returns the request options.
    #[must_use]
    pub const fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    pub(crate) fn into_parts(self) -> (HttpMethod, String, Option<serde_json::Value>, RequestOptions) {
        (self.method, self.path, self.body, self.options)
    }
}
