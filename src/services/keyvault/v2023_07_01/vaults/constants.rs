use crate::string_enum;

string_enum! {
    /// Permissions to certificates.
    pub enum CertificatePermissions {
        /// Every permission.
        All => "all",
        /// Back up.
        Backup => "backup",
        /// Create.
        Create => "create",
        /// Delete.
        Delete => "delete",
        /// Delete issuers.
        DeleteIssuers => "deleteissuers",
        /// Read.
        Get => "get",
        /// Read issuers.
        GetIssuers => "getissuers",
        /// Import.
        Import => "import",
        /// List.
        List => "list",
        /// List issuers.
        ListIssuers => "listissuers",
        /// Manage contacts.
        ManageContacts => "managecontacts",
        /// Manage issuers.
        ManageIssuers => "manageissuers",
        /// Purge.
        Purge => "purge",
        /// Recover.
        Recover => "recover",
        /// Restore.
        Restore => "restore",
        /// Set issuers.
        SetIssuers => "setissuers",
        /// Update.
        Update => "update",
    }
}

string_enum! {
    /// How a vault is created.
    pub enum CreateMode {
        /// A new vault.
        Default => "default",
        /// Recover a soft-deleted vault.
        Recover => "recover",
    }
}

string_enum! {
    /// Permissions to keys.
    pub enum KeyPermissions {
        /// Every permission.
        All => "all",
        /// Back up.
        Backup => "backup",
        /// Create.
        Create => "create",
        /// Decrypt.
        Decrypt => "decrypt",
        /// Delete.
        Delete => "delete",
        /// Encrypt.
        Encrypt => "encrypt",
        /// Read.
        Get => "get",
        /// Read the rotation policy.
        GetRotationPolicy => "getrotationpolicy",
        /// Import.
        Import => "import",
        /// List.
        List => "list",
        /// Purge.
        Purge => "purge",
        /// Recover.
        Recover => "recover",
        /// Release.
        Release => "release",
        /// Restore.
        Restore => "restore",
        /// Rotate.
        Rotate => "rotate",
        /// Set the rotation policy.
        SetRotationPolicy => "setrotationpolicy",
        /// Sign.
        Sign => "sign",
        /// Unwrap a key.
        UnwrapKey => "unwrapKey",
        /// Update.
        Update => "update",
        /// Verify.
        Verify => "verify",
        /// Wrap a key.
        WrapKey => "wrapKey",
    }
}

string_enum! {
    /// The action when no network rule matches.
    pub enum NetworkRuleAction {
        /// Allow traffic.
        Allow => "Allow",
        /// Deny traffic.
        Deny => "Deny",
    }
}

string_enum! {
    /// Traffic that bypasses the network rules.
    pub enum NetworkRuleBypassOptions {
        /// Trusted Azure services.
        AzureServices => "AzureServices",
        /// Nothing bypasses the rules.
        None => "None",
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
    /// Permissions to secrets.
    pub enum SecretPermissions {
        /// Every permission.
        All => "all",
        /// Back up.
        Backup => "backup",
        /// Delete.
        Delete => "delete",
        /// Read.
        Get => "get",
        /// List.
        List => "list",
        /// Purge.
        Purge => "purge",
        /// Recover.
        Recover => "recover",
        /// Restore.
        Restore => "restore",
        /// Set.
        Set => "set",
    }
}

string_enum! {
    /// The SKU family.
    pub enum SkuFamily {
        /// The only family.
        A => "A",
    }
}

string_enum! {
    /// The SKU name.
    pub enum SkuName {
        /// HSM-backed keys available.
        Premium => "premium",
        /// Software-protected keys only.
        Standard => "standard",
    }
}

string_enum! {
    /// Permissions to storage accounts managed by the vault.
    pub enum StoragePermissions {
        /// Every permission.
        All => "all",
        /// Back up.
        Backup => "backup",
        /// Delete.
        Delete => "delete",
        /// Delete SAS definitions.
        DeleteSas => "deletesas",
        /// Read.
        Get => "get",
        /// Read SAS definitions.
        GetSas => "getsas",
        /// List.
        List => "list",
        /// List SAS definitions.
        ListSas => "listsas",
        /// Purge.
        Purge => "purge",
        /// Recover.
        Recover => "recover",
        /// Regenerate keys.
        RegenerateKey => "regeneratekey",
        /// Restore.
        Restore => "restore",
        /// Set.
        Set => "set",
        /// Set SAS definitions.
        SetSas => "setsas",
        /// Update.
        Update => "update",
    }
}

string_enum! {
    /// The provisioning state of a vault.
    pub enum VaultProvisioningState {
        /// Waiting on DNS registration.
        RegisteringDns => "RegisteringDns",
        /// Ready.
        Succeeded => "Succeeded",
    }
}
