use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::string_enum! {
    /// The kind of principal that created or modified a resource.
    pub enum CreatedByType {
        /// A service principal.
        Application => "Application",
        /// An access key.
        Key => "Key",
        /// A managed identity.
        ManagedIdentity => "ManagedIdentity",
        /// A user.
        User => "User",
    }
}

/// Creation and modification metadata returned on most resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemData {
    /// When the resource was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Who created the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// The kind of principal that created the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_type: Option<CreatedByType>,
    /// When the resource was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Who last modified the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    /// The kind of principal that last modified the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_type: Option<CreatedByType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_system_data_deserializes() {
        let data: SystemData = serde_json::from_value(json!({
            "createdAt": "2023-03-01T10:00:00Z",
            "createdBy": "someone@example.com",
            "createdByType": "User",
            "lastModifiedByType": "Application"
        }))
        .unwrap();

        assert_eq!(
            data.created_at,
            Some(Utc.with_ymd_and_hms(2023, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(data.created_by_type, Some(CreatedByType::User));
        assert_eq!(data.last_modified_by_type, Some(CreatedByType::Application));
        assert!(data.last_modified_at.is_none());
    }
}
