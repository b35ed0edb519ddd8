//! String-backed enums for Resource Manager constants.
//!
//! Azure adds values to its enums without bumping API versions, so every
//! constant type produced by [`string_enum!`](crate::string_enum) keeps an
//! `Unknown(String)` variant. Parsing never fails: known values are matched
//! case-insensitively and normalised, anything else is kept verbatim and
//! round-trips unchanged.
//!
//! # Example
//!
//! ```rust
//! azure_arm::string_enum! {
//!     /// The tier of a SKU.
//!     pub enum SkuTier {
//!         /// Premium storage.
//!         Premium => "Premium",
//!         /// Standard storage.
//!         Standard => "Standard",
//!     }
//! }
//!
//! let tier: SkuTier = "premium".parse().unwrap();
//! assert_eq!(tier, SkuTier::Premium);
//! assert_eq!(tier.as_str(), "Premium");
//!
//! let future: SkuTier = "Ultra".parse().unwrap();
//! assert_eq!(future, SkuTier::Unknown("Ultra".to_string()));
//! assert_eq!(serde_json::to_string(&future).unwrap(), "\"Ultra\"");
//! assert_eq!(SkuTier::possible_values(), &["Premium", "Standard"]);
//! ```

/// Declares a string-backed enum with an `Unknown(String)` fallback.
///
/// Generates `as_str`, `possible_values`, `is_known`, `Display`, an
/// infallible `FromStr`, `From<&str>`, `From<String>` and string serde.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value this version of the crate does not know about.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every known wire value.
            #[must_use]
            pub const fn possible_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            /// Returns `false` for [`Unknown`](Self::Unknown) values.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($value) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Unknown(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value.parse() {
                    Ok(parsed) => parsed,
                    Err(never) => match never {},
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}
