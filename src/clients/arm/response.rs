//! Typed operation responses.

use std::ops::Deref;

use serde::de::DeserializeOwned;

use crate::clients::arm::ArmError;
use crate::clients::HttpResponse;

/// The result of a single service operation.
///
/// `model` is `None` when the response carried no body, e.g. a `202
/// Accepted` for a long-running operation or a `204 No Content` delete.
#[derive(Clone, Debug)]
pub struct OperationResponse<T> {
    /// The raw response, for headers and status.
    pub http_response: HttpResponse,
    /// The decoded body.
    pub model: Option<T>,
}

impl<T: DeserializeOwned> OperationResponse<T> {
    /// Decodes the body of `http_response` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Deserialize`] if a non-empty body does not match `T`.
    pub fn from_http_response(
        http_response: HttpResponse,
        resource: &'static str,
    ) -> Result<Self, ArmError> {
        let model = if http_response.body.is_null() {
            None
        } else {
            Some(
                serde_json::from_value(http_response.body.clone())
                    .map_err(|source| ArmError::Deserialize { resource, source })?,
            )
        };
        Ok(Self {
            http_response,
            model,
        })
    }
}

impl<T> OperationResponse<T> {
    /// Wraps a response that has no model.
    #[must_use]
    pub const fn without_model(http_response: HttpResponse) -> Self {
        Self {
            http_response,
            model: None,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.http_response.code
    }

    /// Consumes the response and returns the model.
    #[must_use]
    pub fn into_model(self) -> Option<T> {
        self.model
    }
}

impl<T> Deref for OperationResponse<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.model
    }
}
