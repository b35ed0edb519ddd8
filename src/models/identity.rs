//! Managed Service Identity blocks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::commonids::UserAssignedIdentityId;
use crate::resourceids::{ResourceId, ResourceIdError};

crate::string_enum! {
    /// Which identities are attached to a resource.
    pub enum ManagedServiceIdentityType {
        /// No identity.
        None => "None",
        /// A system-assigned identity only.
        SystemAssigned => "SystemAssigned",
        /// One or more user-assigned identities only.
        UserAssigned => "UserAssigned",
        /// Both kinds.
        SystemAssignedUserAssigned => "SystemAssigned, UserAssigned",
    }
}

/// The principal and client of a user-assigned identity, as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignedIdentityDetails {
    /// Object ID of the identity's service principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    /// Client (application) ID of the identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// The `identity` block of a resource.
///
/// # Example
///
/// ```rust
/// use azure_arm::commonids::UserAssignedIdentityId;
/// use azure_arm::models::{ManagedServiceIdentity, ManagedServiceIdentityType};
///
/// let identity = ManagedServiceIdentity::system_and_user_assigned([
///     UserAssignedIdentityId::new("1", "rg", "identity"),
/// ]);
/// assert_eq!(identity.identity_type, ManagedServiceIdentityType::SystemAssignedUserAssigned);
///
/// let json = serde_json::to_value(&identity).unwrap();
/// assert_eq!(json["type"], "SystemAssigned, UserAssigned");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedServiceIdentity {
    /// Which identities are attached.
    #[serde(rename = "type")]
    pub identity_type: ManagedServiceIdentityType,
    /// Object ID of the system-assigned principal. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    /// Tenant of the system-assigned principal. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// User-assigned identities keyed by Resource ID.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub user_assigned_identities: HashMap<String, UserAssignedIdentityDetails>,
}

impl ManagedServiceIdentity {
    fn with_type(
        identity_type: ManagedServiceIdentityType,
        ids: impl IntoIterator<Item = UserAssignedIdentityId>,
    ) -> Self {
        Self {
            identity_type,
            principal_id: None,
            tenant_id: None,
            user_assigned_identities: ids
                .into_iter()
                .map(|id| (id.id(), UserAssignedIdentityDetails::default()))
                .collect(),
        }
    }

    /// An identity block that removes every identity.
    #[must_use]
    pub fn none() -> Self {
        Self::with_type(ManagedServiceIdentityType::None, std::iter::empty())
    }

    /// A system-assigned identity.
    #[must_use]
    pub fn system_assigned() -> Self {
        Self::with_type(ManagedServiceIdentityType::SystemAssigned, std::iter::empty())
    }

    /// The given user-assigned identities.
    #[must_use]
    pub fn user_assigned(ids: impl IntoIterator<Item = UserAssignedIdentityId>) -> Self {
        Self::with_type(ManagedServiceIdentityType::UserAssigned, ids)
    }

    /// A system-assigned identity plus the given user-assigned identities.
    #[must_use]
    pub fn system_and_user_assigned(ids: impl IntoIterator<Item = UserAssignedIdentityId>) -> Self {
        Self::with_type(ManagedServiceIdentityType::SystemAssignedUserAssigned, ids)
    }

    /// Parses the keys of `user_assigned_identities`.
    ///
    /// The API returns these IDs in inconsistent casing, so they are parsed
    /// insensitively.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResourceIdError`] encountered.
    pub fn user_assigned_identity_ids(&self) -> Result<Vec<UserAssignedIdentityId>, ResourceIdError> {
        let mut ids = self
            .user_assigned_identities
            .keys()
            .map(|key| UserAssignedIdentityId::parse_insensitively(key))
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_by_key(|id| id.id());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_api_response() {
        let identity: ManagedServiceIdentity = serde_json::from_value(json!({
            "type": "SystemAssigned, UserAssigned",
            "principalId": "p",
            "tenantId": "t",
            "userAssignedIdentities": {
                "/subscriptions/1/resourcegroups/rg/providers/Microsoft.ManagedIdentity/userAssignedIdentities/b": {
                    "principalId": "pb",
                    "clientId": "cb"
                },
                "/subscriptions/1/resourceGroups/rg/providers/Microsoft.ManagedIdentity/userAssignedIdentities/a": {}
            }
        }))
        .unwrap();

        assert_eq!(identity.principal_id.as_deref(), Some("p"));
        let ids = identity.user_assigned_identity_ids().unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].user_assigned_identity_name, "a");
        assert_eq!(
            ids[1].id(),
            "/subscriptions/1/resourceGroups/rg/providers/Microsoft.ManagedIdentity/userAssignedIdentities/b"
        );
    }

    #[test]
    fn test_serializes_request_without_read_only_fields() {
        let identity = ManagedServiceIdentity::user_assigned([UserAssignedIdentityId::new("1", "rg", "a")]);
        assert_eq!(
            serde_json::to_value(&identity).unwrap(),
            json!({
                "type": "UserAssigned",
                "userAssignedIdentities": {
                    "/subscriptions/1/resourceGroups/rg/providers/Microsoft.ManagedIdentity/userAssignedIdentities/a": {}
                }
            })
        );
    }

    #[test]
    fn test_none_and_system_assigned() {
        assert_eq!(
            serde_json::to_value(ManagedServiceIdentity::none()).unwrap(),
            json!({"type": "None"})
        );
        assert_eq!(
            ManagedServiceIdentity::system_assigned().identity_type,
            ManagedServiceIdentityType::SystemAssigned
        );
    }
}
