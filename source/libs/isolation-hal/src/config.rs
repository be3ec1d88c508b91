// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Build-time isolation level and the per-platform boundary configuration
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: IsolationLevel (BUILD), BoundaryConfig (platform/new)
//! INVARIANTS: Level selected by cargo features `isolation-l{1,2,3}`; lowest enabled level wins

use crate::mmio::MmioAllowList;

/// Partition isolation level of the build.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IsolationLevel {
    /// SPE vs NSPE only; every secure partition runs privileged.
    Level1 = 1,
    /// PSA-RoT vs App-RoT; App-RoT runs unprivileged.
    Level2 = 2,
    /// Level 2 plus partition-to-partition isolation.
    Level3 = 3,
}

impl IsolationLevel {
    /// Level selected by cargo features.
    #[cfg(feature = "isolation-l1")]
    pub const BUILD: Self = Self::Level1;
    /// Level selected by cargo features.
    #[cfg(all(not(feature = "isolation-l1"), feature = "isolation-l2"))]
    pub const BUILD: Self = Self::Level2;
    /// Level selected by cargo features.
    #[cfg(all(not(feature = "isolation-l1"), not(feature = "isolation-l2"), feature = "isolation-l3"))]
    pub const BUILD: Self = Self::Level3;
    /// No level feature enabled: single-privilege build.
    #[cfg(not(any(feature = "isolation-l1", feature = "isolation-l2", feature = "isolation-l3")))]
    pub const BUILD: Self = Self::Level1;

    /// True for the minimal single-privilege configuration.
    #[inline]
    pub const fn is_single_privilege(self) -> bool {
        matches!(self, Self::Level1)
    }
}

/// Inputs `bind` needs besides the load descriptor.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryConfig<'a> {
    pub level: IsolationLevel,
    pub allow_list: MmioAllowList<'a>,
}

impl<'a> BoundaryConfig<'a> {
    pub const fn new(level: IsolationLevel, allow_list: MmioAllowList<'a>) -> Self {
        Self { level, allow_list }
    }

    /// PSoC64 defaults: the build's isolation level and the platform named-MMIO table.
    pub const fn platform() -> BoundaryConfig<'static> {
        BoundaryConfig::new(IsolationLevel::BUILD, MmioAllowList::platform())
    }
}

impl Default for BoundaryConfig<'static> {
    fn default() -> Self {
        Self::platform()
    }
}
