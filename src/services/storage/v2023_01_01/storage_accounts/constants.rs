use crate::string_enum;

string_enum! {
    /// The access tier used for billing blob data.
    pub enum AccessTier {
        /// Infrequently accessed data.
        Cool => "Cool",
        /// Frequently accessed data.
        Hot => "Hot",
        /// Premium block blob accounts.
        Premium => "Premium",
    }
}

string_enum! {
    /// Availability of the primary or secondary location.
    pub enum AccountStatus {
        /// The location is available.
        Available => "available",
        /// The location is unavailable.
        Unavailable => "unavailable",
    }
}

string_enum! {
    /// The action of a network rule.
    pub enum Action {
        /// Allow traffic.
        Allow => "Allow",
    }
}

string_enum! {
    /// Traffic that bypasses the network rules. The API joins several
    /// values with commas, which parse as [`Bypass::Unknown`].
    pub enum Bypass {
        /// Trusted Azure services.
        AzureServices => "AzureServices",
        /// Logging.
        Logging => "Logging",
        /// Metrics.
        Metrics => "Metrics",
        /// Nothing bypasses the rules.
        None => "None",
    }
}

string_enum! {
    /// The action taken when no network rule matches.
    pub enum DefaultAction {
        /// Allow traffic.
        Allow => "Allow",
        /// Deny traffic.
        Deny => "Deny",
    }
}

string_enum! {
    /// The DNS zone type of the account endpoints.
    pub enum DnsEndpointType {
        /// Endpoints in an Azure DNS zone.
        AzureDnsZone => "AzureDnsZone",
        /// Standard endpoints.
        Standard => "Standard",
    }
}

string_enum! {
    /// The permission of an access key.
    pub enum KeyPermission {
        /// Full access.
        Full => "Full",
        /// Read only.
        Read => "Read",
    }
}

string_enum! {
    /// Where encryption keys are held.
    pub enum KeySource {
        /// Customer-managed keys in Key Vault.
        MicrosoftKeyvault => "Microsoft.Keyvault",
        /// Microsoft-managed keys.
        MicrosoftStorage => "Microsoft.Storage",
    }
}

string_enum! {
    /// The kind of storage account.
    pub enum Kind {
        /// Blob-only account.
        BlobStorage => "BlobStorage",
        /// Premium block blob account.
        BlockBlobStorage => "BlockBlobStorage",
        /// Premium file share account.
        FileStorage => "FileStorage",
        /// General purpose v1.
        Storage => "Storage",
        /// General purpose v2.
        StorageV2 => "StorageV2",
    }
}

string_enum! {
    /// Extra keys to return from `listKeys`.
    pub enum ListKeyExpand {
        /// Include Kerberos keys.
        Kerb => "kerb",
    }
}

string_enum! {
    /// The minimum TLS version accepted.
    pub enum MinimumTlsVersion {
        /// TLS 1.0.
        Tls10 => "TLS1_0",
        /// TLS 1.1.
        Tls11 => "TLS1_1",
        /// TLS 1.2.
        Tls12 => "TLS1_2",
    }
}

string_enum! {
    /// The provisioning state of a storage account.
    pub enum ProvisioningState {
        /// Being created.
        Creating => "Creating",
        /// Waiting on DNS.
        ResolvingDns => "ResolvingDNS",
        /// Ready.
        Succeeded => "Succeeded",
    }
}

string_enum! {
    /// Whether the account accepts traffic from public networks.
    pub enum PublicNetworkAccess {
        /// Public access disabled.
        Disabled => "Disabled",
        /// Public access enabled.
        Enabled => "Enabled",
    }
}

string_enum! {
    /// Why a name is unavailable.
    pub enum Reason {
        /// The name does not meet the naming rules.
        AccountNameInvalid => "AccountNameInvalid",
        /// The name is taken.
        AlreadyExists => "AlreadyExists",
    }
}

string_enum! {
    /// The replication SKU of a storage account.
    pub enum SkuName {
        /// Premium locally redundant.
        PremiumLrs => "Premium_LRS",
        /// Premium zone redundant.
        PremiumZrs => "Premium_ZRS",
        /// Geo redundant.
        StandardGrs => "Standard_GRS",
        /// Geo-zone redundant.
        StandardGzrs => "Standard_GZRS",
        /// Locally redundant.
        StandardLrs => "Standard_LRS",
        /// Read-access geo redundant.
        StandardRagrs => "Standard_RAGRS",
        /// Read-access geo-zone redundant.
        StandardRagzrs => "Standard_RAGZRS",
        /// Zone redundant.
        StandardZrs => "Standard_ZRS",
    }
}

string_enum! {
    /// The performance tier of a SKU.
    pub enum SkuTier {
        /// Premium.
        Premium => "Premium",
        /// Standard.
        Standard => "Standard",
    }
}

string_enum! {
    /// The state of a virtual network rule.
    pub enum State {
        /// Being removed.
        Deprovisioning => "Deprovisioning",
        /// Failed.
        Failed => "Failed",
        /// The subnet was deleted.
        NetworkSourceDeleted => "NetworkSourceDeleted",
        /// Being added.
        Provisioning => "Provisioning",
        /// Active.
        Succeeded => "Succeeded",
    }
}

string_enum! {
    /// Extra properties to return from `getProperties`.
    pub enum StorageAccountExpand {
        /// Blob restore status.
        BlobRestoreStatus => "blobRestoreStatus",
        /// Geo-replication statistics.
        GeoReplicationStats => "geoReplicationStats",
    }
}
