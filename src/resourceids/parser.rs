//! Template-driven Resource ID parser.

use std::collections::HashMap;

use crate::resourceids::segment::{describe_segments, example_id};
use crate::resourceids::{ResourceIdError, Segment, SegmentKind};

/// Values parsed out of a Resource ID, keyed by segment name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    /// Parsed values. Static segments hold their canonical value.
    pub parsed: HashMap<String, String>,
    /// The original input.
    pub raw_input: String,
    display_name: &'static str,
}

impl ParseResult {
    /// Returns the value parsed for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }

    /// Returns the value parsed for `name` as an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::MissingValue`] if `name` was not parsed.
    pub fn require(&self, name: &str) -> Result<String, ResourceIdError> {
        self.get(name)
            .map(String::from)
            .ok_or_else(|| ResourceIdError::MissingValue {
                display_name: self.display_name,
                segment: name.to_string(),
            })
    }
}

/// Matches strings against a list of [`Segment`]s.
///
/// A template may contain at most one [`SegmentKind::Scope`]; it absorbs
/// every component the other segments do not claim.
///
/// # Example
///
/// ```rust
/// use azure_arm::resourceids::{Parser, Segment};
///
/// let segments = [
///     Segment::static_value("staticSubscriptions", "subscriptions"),
///     Segment::subscription_id("subscriptionId"),
///     Segment::static_value("staticResourceGroups", "resourceGroups"),
///     Segment::resource_group("resourceGroupName"),
/// ];
///
/// let result = Parser::new(&segments)
///     .parse("/Subscriptions/1234/ResourceGroups/Example", true)
///     .unwrap();
/// assert_eq!(result.get("staticSubscriptions"), Some("subscriptions"));
/// assert_eq!(result.get("resourceGroupName"), Some("Example"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    segments: &'a [Segment],
    display_name: &'static str,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `segments`.
    #[must_use]
    pub const fn new(segments: &'a [Segment]) -> Self {
        Self {
            segments,
            display_name: "Resource ID",
        }
    }

    /// Sets the Resource ID type name used in error messages.
    #[must_use]
    pub const fn with_name(mut self, display_name: &'static str) -> Self {
        self.display_name = display_name;
        self
    }

    /// Parses `input`. With `insensitively`, literal and constant segments
    /// match regardless of case and are normalised to their canonical value.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] describing the first mismatch.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        if input.trim().is_empty() {
            return Err(ResourceIdError::Empty {
                display_name: self.display_name,
            });
        }

        let uri = input.strip_prefix('/').unwrap_or(input);
        let components: Vec<&str> = uri.split('/').collect();

        let fixed = self.segments.iter().filter(|s| !s.is_scope()).count();
        let scope_length = components.len().saturating_sub(fixed).max(1);

        let mut parsed = HashMap::with_capacity(self.segments.len());
        let mut position = 0;

        for segment in self.segments {
            let take = if segment.is_scope() { scope_length } else { 1 };
            let Some(values) = components.get(position..position + take) else {
                return Err(self.segment_not_specified(input, segment));
            };
            position += take;

            if segment.is_scope() && values.iter().any(|component| component.is_empty()) {
                return Err(self.segment_not_specified(input, segment));
            }

            let value = self.match_segment(input, segment, &values.join("/"), insensitively)?;
            parsed.insert(segment.name.to_string(), value);
        }

        if position != components.len() {
            return Err(ResourceIdError::NumberOfSegmentsDidntMatch {
                display_name: self.display_name,
                input: input.to_string(),
                expected: self.segments.len(),
                actual: components.len(),
                example: example_id(self.segments),
                segments: describe_segments(self.segments, self.display_name),
            });
        }

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
            display_name: self.display_name,
        })
    }

    fn match_segment(
        &self,
        input: &str,
        segment: &Segment,
        raw: &str,
        insensitively: bool,
    ) -> Result<String, ResourceIdError> {
        let matches = |expected: &str| raw == expected || (insensitively && raw.eq_ignore_ascii_case(expected));

        match segment.kind {
            SegmentKind::Static { value } | SegmentKind::ResourceProvider { value } => {
                if matches(value) {
                    Ok(value.to_string())
                } else {
                    Err(self.segment_not_specified(input, segment))
                }
            }
            SegmentKind::Constant { possible_values } => possible_values
                .iter()
                .find(|candidate| matches(**candidate))
                .map(|value| (*value).to_string())
                .ok_or_else(|| ResourceIdError::InvalidConstant {
                    display_name: self.display_name,
                    input: input.to_string(),
                    segment: segment.name,
                    value: raw.to_string(),
                    possible_values,
                }),
            SegmentKind::Scope if !raw.is_empty() => Ok(format!("/{raw}")),
            SegmentKind::UserSpecified | SegmentKind::SubscriptionId | SegmentKind::ResourceGroup
                if !raw.is_empty() =>
            {
                Ok(raw.to_string())
            }
            _ => Err(self.segment_not_specified(input, segment)),
        }
    }

    fn segment_not_specified(&self, input: &str, segment: &Segment) -> ResourceIdError {
        ResourceIdError::SegmentNotSpecified {
            display_name: self.display_name,
            input: input.to_string(),
            segment: segment.name,
            description: segment.description(self.display_name),
            example: example_id(self.segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAULT: &[Segment] = &[
        Segment::static_value("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_value("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_value("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        Segment::static_value("staticVaults", "vaults"),
        Segment::user_specified("vaultName", "vaultName"),
    ];

    const ROLE_ASSIGNMENT: &[Segment] = &[
        Segment::scope("scope"),
        Segment::static_value("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftAuthorization", "Microsoft.Authorization"),
        Segment::static_value("staticRoleAssignments", "roleAssignments"),
        Segment::user_specified("roleAssignmentName", "roleAssignmentName"),
    ];

    const KEY: &[Segment] = &[
        Segment::static_value("staticKeys", "keys"),
        Segment::constant("keyName", &["key1", "key2"], "key1"),
    ];

    const VAULT_ID: &str =
        "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/MyVault";

    #[test]
    fn test_parse_valid_id() {
        let result = Parser::new(VAULT).parse(VAULT_ID, false).unwrap();
        assert_eq!(result.get("subscriptionId"), Some("1234"));
        assert_eq!(result.get("resourceGroupName"), Some("rg"));
        assert_eq!(result.get("vaultName"), Some("MyVault"));
        assert_eq!(result.raw_input, VAULT_ID);
    }

    #[test]
    fn test_parse_without_leading_slash() {
        let result = Parser::new(VAULT).parse(&VAULT_ID[1..], false).unwrap();
        assert_eq!(result.get("vaultName"), Some("MyVault"));
    }

    #[test]
    fn test_parse_rejects_wrong_casing_when_sensitive() {
        let input = VAULT_ID.replace("resourceGroups", "RESOURCEGROUPS");
        let error = Parser::new(VAULT).parse(&input, false).unwrap_err();
        assert!(matches!(
            error,
            ResourceIdError::SegmentNotSpecified {
                segment: "staticResourceGroups",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_insensitively_keeps_canonical_casing_and_user_values() {
        let input = VAULT_ID
            .replace("resourceGroups", "RESOURCEGROUPS")
            .replace("Microsoft.KeyVault", "microsoft.keyvault");
        let result = Parser::new(VAULT).parse(&input, true).unwrap();
        assert_eq!(result.get("staticResourceGroups"), Some("resourceGroups"));
        assert_eq!(result.get("staticMicrosoftKeyVault"), Some("Microsoft.KeyVault"));
        assert_eq!(result.get("vaultName"), Some("MyVault"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            Parser::new(VAULT).parse("", false),
            Err(ResourceIdError::Empty { .. })
        ));
    }

    #[test]
    fn test_parse_missing_segment() {
        let error = Parser::new(VAULT)
            .parse("/subscriptions/1234/resourceGroups/rg", false)
            .unwrap_err();
        assert!(matches!(
            error,
            ResourceIdError::SegmentNotSpecified {
                segment: "staticProviders",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_empty_user_value() {
        let error = Parser::new(VAULT)
            .parse("/subscriptions//resourceGroups/rg/providers/Microsoft.KeyVault/vaults/v", false)
            .unwrap_err();
        assert!(matches!(
            error,
            ResourceIdError::SegmentNotSpecified {
                segment: "subscriptionId",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_extra_segments() {
        let input = format!("{VAULT_ID}/secrets/s");
        let error = Parser::new(VAULT).with_name("Key Vault").parse(&input, false).unwrap_err();
        match error {
            ResourceIdError::NumberOfSegmentsDidntMatch {
                display_name,
                expected,
                actual,
                ..
            } => {
                assert_eq!(display_name, "Key Vault");
                assert_eq!(expected, 8);
                assert_eq!(actual, 10);
            }
            other => panic!("expected NumberOfSegmentsDidntMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_scope_absorbs_leading_components() {
        let input = "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa/providers/Microsoft.Authorization/roleAssignments/ra";
        let result = Parser::new(ROLE_ASSIGNMENT).parse(input, false).unwrap();
        assert_eq!(
            result.get("scope"),
            Some("/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa")
        );
        assert_eq!(result.get("roleAssignmentName"), Some("ra"));
    }

    #[test]
    fn test_parse_scope_only_template() {
        let segments = [Segment::scope("scope")];
        let result = Parser::new(&segments)
            .parse("/subscriptions/1234/resourceGroups/rg", false)
            .unwrap();
        assert_eq!(result.get("scope"), Some("/subscriptions/1234/resourceGroups/rg"));
    }

    #[test]
    fn test_parse_scope_without_components() {
        let error = Parser::new(ROLE_ASSIGNMENT)
            .parse("/providers/Microsoft.Authorization/roleAssignments/ra", false)
            .unwrap_err();
        assert!(matches!(error, ResourceIdError::SegmentNotSpecified { .. }));
    }

    #[test]
    fn test_parse_scope_rejects_empty_components() {
        let segments = [Segment::scope("scope")];
        for input in [
            "/subscriptions//resourceGroups/rg",
            "/subscriptions/1234/",
            "//subscriptions/1234",
        ] {
            let error = Parser::new(&segments).parse(input, false).unwrap_err();
            assert!(
                matches!(error, ResourceIdError::SegmentNotSpecified { segment: "scope", .. }),
                "{input}: {error:?}"
            );
        }

        let error = Parser::new(ROLE_ASSIGNMENT)
            .parse(
                "/subscriptions//providers/Microsoft.Authorization/roleAssignments/ra",
                false,
            )
            .unwrap_err();
        assert!(matches!(error, ResourceIdError::SegmentNotSpecified { .. }));
    }

    #[test]
    fn test_parse_constant_segment() {
        let result = Parser::new(KEY).parse("/keys/KEY2", true).unwrap();
        assert_eq!(result.get("keyName"), Some("key2"));

        let error = Parser::new(KEY).parse("/keys/KEY2", false).unwrap_err();
        assert!(matches!(
            error,
            ResourceIdError::InvalidConstant { segment: "keyName", .. }
        ));
    }

    #[test]
    fn test_require_missing_value() {
        let result = Parser::new(KEY).parse("/keys/key1", false).unwrap();
        assert_eq!(result.require("keyName").unwrap(), "key1");
        assert!(matches!(
            result.require("nope"),
            Err(ResourceIdError::MissingValue { .. })
        ));
    }
}
