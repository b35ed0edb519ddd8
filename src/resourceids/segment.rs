//! Resource ID template segments.

/// The role a segment plays in a Resource ID template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// A literal such as `subscriptions` or `storageAccounts`.
    Static {
        /// The canonical value.
        value: &'static str,
    },
    /// A resource provider namespace such as `Microsoft.Storage`.
    ResourceProvider {
        /// The canonical value.
        value: &'static str,
    },
    /// A user-chosen name.
    UserSpecified,
    /// A subscription ID.
    SubscriptionId,
    /// A resource group name.
    ResourceGroup,
    /// Another Resource ID, spanning one or more components.
    Scope,
    /// One of a fixed set of values.
    Constant {
        /// The accepted values, in canonical casing.
        possible_values: &'static [&'static str],
    },
}

/// One segment of a Resource ID template.
///
/// # Example
///
/// ```rust
/// use azure_arm::resourceids::Segment;
///
/// const SEGMENTS: &[Segment] = &[
///     Segment::static_value("staticSubscriptions", "subscriptions"),
///     Segment::subscription_id("subscriptionId"),
/// ];
/// assert_eq!(SEGMENTS[1].name, "subscriptionId");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// The segment kind.
    pub kind: SegmentKind,
    /// The key this segment is stored under in a parse result.
    pub name: &'static str,
    /// A value used to build example IDs in error messages.
    pub example_value: &'static str,
}

/// Example subscription used in error messages.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example resource group used in error messages.
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";

/// Example scope used in error messages.
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/some-resource-group";

impl Segment {
    /// A literal segment.
    #[must_use]
    pub const fn static_value(name: &'static str, value: &'static str) -> Self {
        Self {
            kind: SegmentKind::Static { value },
            name,
            example_value: value,
        }
    }

    /// A resource provider namespace segment.
    #[must_use]
    pub const fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self {
            kind: SegmentKind::ResourceProvider { value },
            name,
            example_value: value,
        }
    }

    /// A user-specified name.
    #[must_use]
    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            kind: SegmentKind::UserSpecified,
            name,
            example_value,
        }
    }

    /// A subscription ID.
    #[must_use]
    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            kind: SegmentKind::SubscriptionId,
            name,
            example_value: EXAMPLE_SUBSCRIPTION_ID,
        }
    }

    /// A resource group name.
    #[must_use]
    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            kind: SegmentKind::ResourceGroup,
            name,
            example_value: EXAMPLE_RESOURCE_GROUP,
        }
    }

    /// A scope: another Resource ID embedded in this one.
    #[must_use]
    pub const fn scope(name: &'static str) -> Self {
        Self {
            kind: SegmentKind::Scope,
            name,
            example_value: EXAMPLE_SCOPE,
        }
    }

    /// A segment restricted to `possible_values`.
    #[must_use]
    pub const fn constant(
        name: &'static str,
        possible_values: &'static [&'static str],
        example_value: &'static str,
    ) -> Self {
        Self {
            kind: SegmentKind::Constant { possible_values },
            name,
            example_value,
        }
    }

    /// Returns `true` for scope segments.
    #[must_use]
    pub const fn is_scope(&self) -> bool {
        matches!(self.kind, SegmentKind::Scope)
    }

    /// Describes what this segment should contain, for error messages.
    #[must_use]
    pub fn description(&self, display_name: &str) -> String {
        match self.kind {
            SegmentKind::Static { value } => format!("should be the literal value {value:?}"),
            SegmentKind::ResourceProvider { value } => {
                format!("should be the name of the Resource Provider [for example {value:?}]")
            }
            SegmentKind::UserSpecified => format!(
                "should be the user specified value for this {display_name} [for example {:?}]",
                self.example_value
            ),
            SegmentKind::SubscriptionId => "should be the UUID of the Azure Subscription".to_string(),
            SegmentKind::ResourceGroup => "should be the name of the Resource Group".to_string(),
            SegmentKind::Scope => format!(
                "specifies the Resource ID that should be used as a Scope [for example {:?}]",
                self.example_value
            ),
            SegmentKind::Constant { possible_values } => format!(
                "should be a Constant with one of the following values {possible_values:?}"
            ),
        }
    }
}

/// Builds an example Resource ID from `segments`.
#[must_use]
pub fn example_id(segments: &[Segment]) -> String {
    let mut id = String::new();
    for segment in segments {
        id.push('/');
        id.push_str(segment.example_value.trim_start_matches('/'));
    }
    id
}

/// Lists `segments` with their descriptions, one per line.
#[must_use]
pub fn describe_segments(segments: &[Segment], display_name: &str) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            format!(
                " * Segment {index} - this {}",
                segment.description(display_name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
