use crate::string_enum;

string_enum! {
    /// The identity used to reach the customer-managed key.
    pub enum CmkIdentityType {
        /// The server's system assigned identity.
        SystemAssigned => "SystemAssigned",
        /// One of the server's user assigned identities.
        UserAssigned => "UserAssigned",
    }
}

string_enum! {
    /// Which of the two server keys to regenerate.
    pub enum KeyName {
        /// The primary key.
        Key1 => "key1",
        /// The secondary key.
        Key2 => "key2",
    }
}

string_enum! {
    /// The provisioning state of a Fluid Relay server.
    pub enum ProvisioningState {
        /// Provisioning was cancelled.
        Canceled => "Canceled",
        /// Provisioning failed.
        Failed => "Failed",
        /// Provisioning finished.
        Succeeded => "Succeeded",
    }
}

string_enum! {
    /// The storage tier backing the server.
    pub enum StorageSku {
        /// Basic storage.
        Basic => "basic",
        /// Standard storage.
        Standard => "standard",
    }
}
