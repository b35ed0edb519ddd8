use crate::string_enum;

string_enum! {
    /// The FHIR flavour of the service.
    pub enum Kind {
        /// FHIR, latest.
        Fhir => "fhir",
        /// FHIR R4.
        FhirR4 => "fhir-R4",
        /// FHIR STU3.
        FhirStu3 => "fhir-Stu3",
    }
}

string_enum! {
    /// The identity type of a service.
    pub enum ManagedServiceIdentityType {
        /// No identity.
        None => "None",
        /// A system assigned identity.
        SystemAssigned => "SystemAssigned",
    }
}

string_enum! {
    /// The provisioning state of a service.
    pub enum ProvisioningState {
        /// The request was accepted.
        Accepted => "Accepted",
        /// Provisioning was cancelled.
        Canceled => "Canceled",
        /// The service is being created.
        Creating => "Creating",
        /// The service is being deleted.
        Deleting => "Deleting",
        /// The service was deprovisioned.
        Deprovisioned => "Deprovisioned",
        /// Provisioning failed.
        Failed => "Failed",
        /// The service is being moved.
        Moving => "Moving",
        /// Provisioning finished.
        Succeeded => "Succeeded",
        /// The service is suspended.
        Suspended => "Suspended",
        /// The service is under maintenance.
        SystemMaintenance => "SystemMaintenance",
        /// The service is being updated.
        Updating => "Updating",
        /// The service is being verified.
        Verifying => "Verifying",
        /// Provisioning finished with warnings.
        Warned => "Warned",
    }
}

string_enum! {
    /// Whether the service accepts traffic from public networks.
    pub enum PublicNetworkAccess {
        /// Public traffic is blocked.
        Disabled => "Disabled",
        /// Public traffic is allowed.
        Enabled => "Enabled",
    }
}
