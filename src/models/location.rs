//! Azure location names.
//!
//! The API accepts `West Europe` and `westeurope` alike but returns the
//! latter, so values are normalised before comparison.

/// Lower-cases `location` and strips its spaces.
///
/// ```rust
/// assert_eq!(azure_arm::models::location::normalize("West Europe"), "westeurope");
/// ```
#[must_use]
pub fn normalize(location: &str) -> String {
    location
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// [`normalize`] for optional values.
#[must_use]
pub fn normalize_optional(location: Option<&str>) -> Option<String> {
    location.map(normalize)
}

/// Returns `true` when two locations name the same region.
#[must_use]
pub fn equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
