use crate::string_enum;

string_enum! {
    /// Host caching for a disk.
    pub enum CachingTypes {
        /// No caching.
        None => "None",
        /// Reads are cached.
        ReadOnly => "ReadOnly",
        /// Reads and writes are cached.
        ReadWrite => "ReadWrite",
    }
}

string_enum! {
    /// What happens to an attached resource when the machine is deleted.
    pub enum DeleteOptions {
        /// Delete it with the machine.
        Delete => "Delete",
        /// Keep it.
        Detach => "Detach",
    }
}

string_enum! {
    /// How a disk is created.
    pub enum DiskCreateOptionTypes {
        /// Attach an existing managed disk.
        Attach => "Attach",
        /// Create an empty data disk.
        Empty => "Empty",
        /// Create the disk from the image reference.
        FromImage => "FromImage",
    }
}

string_enum! {
    /// What happens to a disk when the machine is deleted.
    pub enum DiskDeleteOptionTypes {
        /// Delete the disk.
        Delete => "Delete",
        /// Keep the disk.
        Detach => "Detach",
    }
}

string_enum! {
    /// Extra data returned by a read.
    pub enum InstanceViewTypes {
        /// The runtime instance view.
        InstanceView => "instanceView",
        /// The base64 user data.
        UserData => "userData",
    }
}

string_enum! {
    /// The operating system family of a disk.
    pub enum OperatingSystemTypes {
        /// Linux.
        Linux => "Linux",
        /// Windows.
        Windows => "Windows",
    }
}

string_enum! {
    /// The severity of an instance view status.
    pub enum StatusLevelTypes {
        /// An error.
        Error => "Error",
        /// Informational.
        Info => "Info",
        /// A warning.
        Warning => "Warning",
    }
}

string_enum! {
    /// The storage SKU of a managed disk.
    pub enum StorageAccountTypes {
        /// Premium SSD, locally redundant.
        PremiumLrs => "Premium_LRS",
        /// Premium SSD, zone redundant.
        PremiumZrs => "Premium_ZRS",
        /// Standard HDD, locally redundant.
        StandardLrs => "Standard_LRS",
        /// Standard SSD, locally redundant.
        StandardSsdLrs => "StandardSSD_LRS",
        /// Standard SSD, zone redundant.
        StandardSsdZrs => "StandardSSD_ZRS",
        /// Ultra disk, locally redundant.
        UltraSsdLrs => "UltraSSD_LRS",
    }
}

string_enum! {
    /// What happens to a Spot machine when it is evicted.
    pub enum VirtualMachineEvictionPolicyTypes {
        /// Stop and deallocate.
        Deallocate => "Deallocate",
        /// Delete the machine.
        Delete => "Delete",
    }
}

string_enum! {
    /// The scheduling priority of a machine.
    pub enum VirtualMachinePriorityTypes {
        /// Low priority, superseded by `Spot`.
        Low => "Low",
        /// Regular capacity.
        Regular => "Regular",
        /// Spot capacity, evictable.
        Spot => "Spot",
    }
}

string_enum! {
    /// Machine sizes. Sizes not listed here arrive as `Unknown`.
    pub enum VirtualMachineSizeTypes {
        /// B1s.
        StandardB1s => "Standard_B1s",
        /// B2s.
        StandardB2s => "Standard_B2s",
        /// D2s v3.
        StandardD2sV3 => "Standard_D2s_v3",
        /// D4s v3.
        StandardD4sV3 => "Standard_D4s_v3",
        /// DS1 v2.
        StandardDs1V2 => "Standard_DS1_v2",
        /// DS2 v2.
        StandardDs2V2 => "Standard_DS2_v2",
        /// F2s v2.
        StandardF2sV2 => "Standard_F2s_v2",
    }
}
