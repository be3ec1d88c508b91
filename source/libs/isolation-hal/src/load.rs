// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Static partition load metadata consumed at bind time
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: PartitionLoadInfo, PartitionFlags, AssetDesc, AssetAttr, AssetTarget
//! INVARIANTS: Owned by the loader; never mutated by this crate

use bitflags::bitflags;

use crate::mmio::MmioRef;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    /// Partition attribute word. The low byte carries the scheduling priority.
    pub struct PartitionFlags: u32 {
        /// PSA Root-of-Trust partition (App-RoT when clear).
        const PSA_ROT = 1 << 8;
        /// IPC model partition (SFN when clear).
        const IPC = 1 << 9;
        /// Designated non-secure agent.
        const NS_AGENT = 1 << 10;
        const _ = 0xff;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    /// Attributes of a declared asset.
    pub struct AssetAttr: u32 {
        /// Read-only access requested.
        const READ_ONLY = 1 << 0;
        /// Read-write access requested.
        const READ_WRITE = 1 << 1;
        /// Peripheral identified by a platform name.
        const NAMED_MMIO = 1 << 8;
        /// Peripheral identified by an address range.
        const NUMBERED_MMIO = 1 << 9;
        /// Any MMIO asset.
        const MMIO = Self::NAMED_MMIO.bits() | Self::NUMBERED_MMIO.bits();
    }
}

/// What an asset points at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssetTarget {
    /// Address range `[start, limit)`.
    Range { start: usize, limit: usize },
    /// Named peripheral.
    Device(MmioRef),
}

/// One asset declared by a partition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AssetDesc {
    pub attr: AssetAttr,
    pub target: AssetTarget,
}

impl AssetDesc {
    /// Named MMIO asset.
    pub const fn named_mmio(dev: MmioRef, access: AssetAttr) -> Self {
        Self { attr: access.union(AssetAttr::NAMED_MMIO), target: AssetTarget::Device(dev) }
    }

    /// Numbered MMIO asset covering `[start, limit)`.
    pub const fn numbered_mmio(start: usize, limit: usize, access: AssetAttr) -> Self {
        Self {
            attr: access.union(AssetAttr::NUMBERED_MMIO),
            target: AssetTarget::Range { start, limit },
        }
    }

    /// Plain memory asset covering `[start, limit)`.
    pub const fn memory(start: usize, limit: usize, access: AssetAttr) -> Self {
        Self { attr: access, target: AssetTarget::Range { start, limit } }
    }

    #[inline]
    pub const fn is_named_mmio(&self) -> bool {
        self.attr.contains(AssetAttr::NAMED_MMIO)
    }
}

/// Load metadata of one partition.
#[derive(Clone, Copy, Debug)]
pub struct PartitionLoadInfo<'a> {
    pub pid: u32,
    pub flags: PartitionFlags,
    pub assets: &'a [AssetDesc],
}

impl<'a> PartitionLoadInfo<'a> {
    pub const fn new(pid: u32, flags: PartitionFlags, assets: &'a [AssetDesc]) -> Self {
        Self { pid, flags, assets }
    }

    /// PSA Root-of-Trust classification.
    #[inline]
    pub const fn is_psa_rot(&self) -> bool {
        self.flags.contains(PartitionFlags::PSA_ROT)
    }

    #[inline]
    pub const fn is_ns_agent(&self) -> bool {
        self.flags.contains(PartitionFlags::NS_AGENT)
    }

    /// Scheduling priority from the low byte of the flags.
    #[inline]
    pub const fn priority(&self) -> u8 {
        (self.flags.bits() & 0xff) as u8
    }
}
