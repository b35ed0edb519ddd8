//! Azure Resource Manager API version definitions.
//!
//! Every ARM resource provider publishes its own dated API versions, so
//! [`ApiVersion`] is a validated string rather than a closed enum. Each
//! service package pins the version it was generated against.

use crate::error::ConfigError;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Suffixes accepted after the `YYYY-MM-DD` date.
const PRE_RELEASE_SUFFIXES: [&str; 3] = ["-preview", "-privatepreview", "-beta"];

/// An ARM `api-version` query value such as `2023-01-01` or `2021-06-01-preview`.
///
/// Versions are ordered by date; for the same date a stable version sorts
/// after its preview.
///
/// # Example
///
/// ```rust
/// use azure_arm::ApiVersion;
///
/// let stable: ApiVersion = "2023-01-01".parse().unwrap();
/// let preview: ApiVersion = "2023-01-01-preview".parse().unwrap();
///
/// assert!(stable.is_stable());
/// let older = ApiVersion::new("2022-12-01").unwrap();
/// assert!(preview > older);
/// assert!(stable > preview);
/// assert_eq!(format!("{}", stable), "2023-01-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(Cow<'static, str>);

impl ApiVersion {
    /// Creates a validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] when the value is not a
    /// `YYYY-MM-DD` date optionally followed by a pre-release suffix.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if !Self::is_valid_version_format(&version) {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(Cow::Owned(version)))
    }

    /// Wraps a version literal pinned by a service package.
    ///
    /// The value is not validated; use [`ApiVersion::new`] for user input.
    #[must_use]
    pub const fn from_static(version: &'static str) -> Self {
        Self(Cow::Borrowed(version))
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `YYYY-MM-DD` portion of the version.
    #[must_use]
    pub fn date(&self) -> &str {
        self.0.get(..10).unwrap_or(self.0.as_ref())
    }

    /// Returns `true` when the version carries no pre-release suffix.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.0.len() == 10
    }

    /// Returns `true` for `-preview`, `-privatepreview` and `-beta` versions.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        !self.is_stable()
    }

    fn is_valid_version_format(s: &str) -> bool {
        if s.len() < 10 || !s.is_char_boundary(10) {
            return false;
        }
        let (date, suffix) = s.split_at(10);
        if !suffix.is_empty() && !PRE_RELEASE_SUFFIXES.contains(&suffix) {
            return false;
        }

        let parts: Vec<&str> = date.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return false;
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return false;
        }
        let (Ok(year), Ok(month), Ok(day)) =
            (year.parse::<u16>(), month.parse::<u8>(), day.parse::<u8>())
        else {
            return false;
        };
        year >= 2014 && (1..=12).contains(&month) && (1..=31).contains(&day)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date()
            .cmp(other.date())
            .then_with(|| self.is_stable().cmp(&other.is_stable()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
