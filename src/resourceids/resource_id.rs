//! The [`ResourceId`] trait and the macros that implement it.

use crate::resourceids::{ParseResult, Parser, ResourceIdError, Segment};

/// A typed Resource ID.
///
/// Implementors describe their template through [`segments`](Self::segments)
/// and build themselves from a [`ParseResult`]; parsing, validation and the
/// `Display` form are provided.
///
/// # Example
///
/// ```rust
/// use azure_arm::commonids::StorageAccountId;
/// use azure_arm::resourceids::ResourceId;
///
/// let id = StorageAccountId::parse_insensitively(
///     "/subscriptions/1234/RESOURCEGROUPS/rg/providers/Microsoft.Storage/storageAccounts/sa",
/// )
/// .unwrap();
///
/// assert_eq!(
///     id.id(),
///     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa"
/// );
/// assert!(StorageAccountId::validate("/subscriptions/1234").len() == 1);
/// ```
pub trait ResourceId: Sized {
    /// Human-readable type name, e.g. `Storage Account`.
    const DISPLAY_NAME: &'static str;

    /// The template this ID is parsed against.
    fn segments() -> &'static [Segment];

    /// Builds the ID from parsed values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::MissingValue`] when a required value is absent.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError>;

    /// Formats the ID in its canonical form.
    fn id(&self) -> String;

    /// `Label: "value"` pairs used by the `Display` form.
    fn components(&self) -> Vec<String>;

    /// Parses `input`, matching literal segments exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] when `input` does not match the template.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let result = Parser::new(Self::segments())
            .with_name(Self::DISPLAY_NAME)
            .parse(input, false)?;
        Self::from_parse_result(&result)
    }

    /// Parses `input`, matching literal and constant segments regardless of case.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] when `input` does not match the template.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        let result = Parser::new(Self::segments())
            .with_name(Self::DISPLAY_NAME)
            .parse(input, true)?;
        Self::from_parse_result(&result)
    }

    /// Checks `input`, returning every problem found (none when valid).
    #[must_use]
    fn validate(input: &str) -> Vec<ResourceIdError> {
        Self::parse(input).err().into_iter().collect()
    }

    /// Renders `Display Name (Label: "value"\n...)`.
    fn display_string(&self) -> String {
        format!("{} ({})", Self::DISPLAY_NAME, self.components().join("\n"))
    }
}

/// Validates `input` as a `T`, returning messages prefixed with `key`.
///
/// # Example
///
/// ```rust
/// use azure_arm::commonids::ResourceGroupId;
/// use azure_arm::resourceids::validate_resource_id;
///
/// assert!(validate_resource_id::<ResourceGroupId>("/subscriptions/1/resourceGroups/rg", "id").is_empty());
/// assert!(validate_resource_id::<ResourceGroupId>("rg", "id")[0].starts_with("id: "));
/// ```
#[must_use]
pub fn validate_resource_id<T: ResourceId>(input: &str, key: &str) -> Vec<String> {
    T::validate(input)
        .into_iter()
        .map(|error| format!("{key}: {error}"))
        .collect()
}

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` through
/// [`ResourceId`].
macro_rules! impl_resource_id_traits {
    ($name:ident) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::resourceids::ResourceId::display_string(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::resourceids::ResourceIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::resourceids::ResourceId>::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::resourceids::ResourceId::id(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::resourceids::ResourceId>::parse_insensitively(&value)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declares an ID for a resource directly under a resource group:
/// `/subscriptions/{}/resourceGroups/{}/providers/{provider}/{type}/{name}`.
macro_rules! resource_group_resource_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            display_name: $display:literal,
            provider: $provider:literal,
            resource_type: $resource_type:literal,
            name_field: $field:ident,
            name_segment: $segment:literal,
            name_label: $label:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            /// The subscription the resource lives in.
            pub subscription_id: String,
            /// The resource group the resource lives in.
            pub resource_group_name: String,
            #[doc = concat!("The ", $label, ".")]
            pub $field: String,
        }

        impl $name {
            #[doc = concat!("Creates a ", $display, " ID.")]
            #[must_use]
            pub fn new(
                subscription_id: impl Into<String>,
                resource_group_name: impl Into<String>,
                $field: impl Into<String>,
            ) -> Self {
                Self {
                    subscription_id: subscription_id.into(),
                    resource_group_name: resource_group_name.into(),
                    $field: $field.into(),
                }
            }
        }

        impl $crate::resourceids::ResourceId for $name {
            const DISPLAY_NAME: &'static str = $display;

            fn segments() -> &'static [$crate::resourceids::Segment] {
                use $crate::resourceids::Segment;
                const SEGMENTS: &[Segment] = &[
                    Segment::static_value("staticSubscriptions", "subscriptions"),
                    Segment::subscription_id("subscriptionId"),
                    Segment::static_value("staticResourceGroups", "resourceGroups"),
                    Segment::resource_group("resourceGroupName"),
                    Segment::static_value("staticProviders", "providers"),
                    Segment::resource_provider("staticResourceProvider", $provider),
                    Segment::static_value("staticResourceType", $resource_type),
                    Segment::user_specified($segment, $segment),
                ];
                SEGMENTS
            }

            fn from_parse_result(
                result: &$crate::resourceids::ParseResult,
            ) -> Result<Self, $crate::resourceids::ResourceIdError> {
                Ok(Self {
                    subscription_id: result.require("subscriptionId")?,
                    resource_group_name: result.require("resourceGroupName")?,
                    $field: result.require($segment)?,
                })
            }

            fn id(&self) -> String {
                format!(
                    concat!("/subscriptions/{}/resourceGroups/{}/providers/", $provider, "/", $resource_type, "/{}"),
                    self.subscription_id, self.resource_group_name, self.$field
                )
            }

            fn components(&self) -> Vec<String> {
                vec![
                    format!("Subscription: {:?}", self.subscription_id),
                    format!("Resource Group Name: {:?}", self.resource_group_name),
                    format!(concat!($label, ": {:?}"), self.$field),
                ]
            }
        }

        $crate::resourceids::impl_resource_id_traits!($name);
    };
}

pub(crate) use impl_resource_id_traits;
pub(crate) use resource_group_resource_id;
