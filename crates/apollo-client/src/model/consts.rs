//! Well-known attribute values used by the CMDB.

/// Lifecycle states stored in a resource's `state` attribute.
pub mod state {
    pub const UNKNOWN: &str = ":UNKNOWN";
    pub const ONLINE: &str = ":online";
    pub const OFFLINE: &str = ":offline";
    pub const PRE_INSTALL: &str = ":pre_install";
    pub const PRE_INSTALL_FAILED: &str = ":pre_install_failed";
    pub const INVENTORY: &str = ":inventory";
    pub const TEST: &str = ":test";
    pub const ON_JOB: &str = ":onjob";
    pub const RESIGNED: &str = ":RESIGNED";
    pub const RESIGNING: &str = ":resigning";
}

/// RAID levels.
pub mod raid {
    pub const UNKNOWN: &str = ":UNKNOWN";
    pub const RAID0: &str = ":RAID0";
    pub const RAID1: &str = ":RAID1";
    pub const RAID2: &str = ":RAID2";
    pub const RAID3: &str = ":RAID3";
    pub const RAID5: &str = ":RAID5";
    pub const RAID6: &str = ":RAID6";
    pub const RAID7: &str = ":RAID7";
    pub const RAID53: &str = ":RAID53";
    pub const RAID10: &str = ":RAID10";
}

/// Priorities.
pub mod priority {
    pub const UNKNOWN: &str = ":UNKNOWN";
    pub const P0: &str = ":P0";
    pub const P1: &str = ":P1";
    pub const P2: &str = ":P2";
    pub const P3: &str = ":P3";
    pub const P4: &str = ":P4";
}
