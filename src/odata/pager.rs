//! Following `nextLink` through a list operation.

use std::marker::PhantomData;
use std::ops::Deref;

use serde::de::DeserializeOwned;

use crate::clients::{ArmError, HttpMethod, HttpResponse, Operation, ResourceManagerClient};
use crate::odata::{Page, Predicate};

/// Every item collected from a list operation.
#[derive(Clone, Debug)]
pub struct ListResult<T> {
    /// The collected items, in page order.
    pub items: Vec<T>,
    /// The response of the last page fetched.
    pub latest_http_response: Option<HttpResponse>,
}

impl<T> ListResult<T> {
    /// Consumes the result, returning the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ListResult<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Walks the pages of a list operation.
///
/// The first request is the operation itself; later requests GET the
/// `nextLink` verbatim. Paging stops when the link is absent or empty, or
/// when the service hands back the link that was just fetched.
///
/// # Example
///
/// ```rust,ignore
/// let mut pager = client.list::<serde_json::Value>(Operation::new(
///     HttpMethod::Get,
///     "/subscriptions/1234/providers/Microsoft.Storage/storageAccounts",
///     "Storage Account",
/// ));
///
/// while let Some(page) = pager.next_page().await? {
///     for account in page {
///         println!("{}", account["name"]);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Pager<'a, T> {
    client: &'a ResourceManagerClient,
    first_operation: Option<Operation>,
    resource: &'static str,
    next_link: Option<String>,
    current_link: Option<String>,
    latest_http_response: Option<HttpResponse>,
    finished: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pager<'a, T> {
    /// Creates a pager that starts with `operation`.
    #[must_use]
    pub fn new(client: &'a ResourceManagerClient, operation: Operation) -> Self {
        Self {
            client,
            resource: operation.resource(),
            first_operation: Some(operation),
            next_link: None,
            current_link: None,
            latest_http_response: None,
            finished: false,
            _marker: PhantomData,
        }
    }

    /// Returns the response of the last page fetched.
    #[must_use]
    pub const fn latest_http_response(&self) -> Option<&HttpResponse> {
        self.latest_http_response.as_ref()
    }

    /// Fetches the next page, or `None` once every page has been read.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] when a request fails or a page does not decode.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, ArmError> {
        if self.finished {
            return Ok(None);
        }

        let operation = if let Some(operation) = self.first_operation.take() {
            operation
        } else if let Some(link) = self.next_link.take() {
            self.current_link = Some(link.clone());
            Operation::new(HttpMethod::Get, link, self.resource)
        } else {
            self.finished = true;
            return Ok(None);
        };

        let response = self.client.execute_raw(operation).await?;
        let page = self.decode(&response)?;

        self.next_link = match page.next_link() {
            Some(link) if self.current_link.as_deref() == Some(link) => {
                tracing::warn!(
                    resource = self.resource,
                    next_link = link,
                    "list operation returned the page it was asked for as its next link, stopping"
                );
                None
            }
            link => link.map(String::from),
        };
        if self.next_link.is_none() {
            self.finished = true;
        }

        self.latest_http_response = Some(response);
        Ok(Some(page.value))
    }

    /// Reads every page.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArmError`] encountered.
    pub async fn collect_all(self) -> Result<ListResult<T>, ArmError> {
        self.collect_matching(|_: &T| true).await
    }

    /// Reads every page, keeping the items `predicate` accepts.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArmError`] encountered.
    pub async fn collect_matching<P: Predicate<T>>(
        mut self,
        predicate: P,
    ) -> Result<ListResult<T>, ArmError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.into_iter().filter(|item| predicate.matches(item)));
        }

        tracing::debug!(
            resource = self.resource,
            count = items.len(),
            "collected list operation results"
        );

        Ok(ListResult {
            items,
            latest_http_response: self.latest_http_response,
        })
    }

    fn decode(&self, response: &HttpResponse) -> Result<Page<T>, ArmError> {
        if response.body.is_null() {
            return Ok(Page {
                value: Vec::new(),
                next_link: None,
            });
        }
        serde_json::from_value(response.body.clone()).map_err(|source| ArmError::Deserialize {
            resource: self.resource,
            source,
        })
    }
}
