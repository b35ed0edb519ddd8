use serde::Deserialize;

/// One page of a list response.
///
/// Resource Manager list endpoints return `{"value": [...], "nextLink": "..."}`;
/// a few services use `@odata.nextLink` instead.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// The URL of the next page, absent on the last page.
    #[serde(default, rename = "nextLink", alias = "@odata.nextLink")]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Returns the next link, treating an empty string as absent.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.trim().is_empty())
    }
}
