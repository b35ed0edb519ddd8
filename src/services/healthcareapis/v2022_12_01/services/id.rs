use crate::resourceids::resource_group_resource_id;

resource_group_resource_id! {
    /// A Healthcare APIs Service ID.
    pub struct ServiceId {
        display_name: "Service",
        provider: "Microsoft.HealthcareApis",
        resource_type: "services",
        name_field: service_name,
        name_segment: "serviceName",
        name_label: "Service Name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ResourceId;

    #[test]
    fn test_validate_reports_key() {
        let errors = crate::resourceids::validate_resource_id::<ServiceId>(
            "/subscriptions/1/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa",
            "service_id",
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("service_id: "));
    }

    #[test]
    fn test_new_and_id() {
        let id = ServiceId::new("1", "rg", "fhir");
        assert_eq!(
            id.id(),
            "/subscriptions/1/resourceGroups/rg/providers/Microsoft.HealthcareApis/services/fhir"
        );
    }
}
