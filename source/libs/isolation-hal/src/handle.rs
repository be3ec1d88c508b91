// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Bit-packed boundary handle handed to the SPM at bind time
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: BoundaryHandle (encode/from_raw/as_raw/is_privileged/is_ns_agent/needs_switch)
//! INVARIANTS: Handles produced by `encode` only carry PRIV/NS bits; decoding ignores reserved bits
//!
//! Layout (`u32`):
//! - bit 0: set when the partition runs unprivileged
//! - bit 1: set when the partition is the designated non-secure agent
//! - bits 2..=31: reserved, zero

use core::fmt;

/// Isolation attributes of one partition.
///
/// **Ownership**: created by [`crate::bind`] once per partition and cached by
/// the SPM for the partition's lifetime. There are no setters.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BoundaryHandle(u32);

static_assertions::assert_eq_size!(BoundaryHandle, u32);
static_assertions::const_assert_eq!(BoundaryHandle::PRIV_MASK & BoundaryHandle::NS_MASK, 0);
static_assertions::assert_impl_all!(BoundaryHandle: Send, Sync, Copy);

impl BoundaryHandle {
    /// Bit position of the unprivileged flag.
    pub const PRIV_POS: u32 = 0;
    /// Mask of the unprivileged flag.
    pub const PRIV_MASK: u32 = 1 << Self::PRIV_POS;
    /// Bit position of the non-secure-agent flag.
    pub const NS_POS: u32 = 1;
    /// Mask of the non-secure-agent flag.
    pub const NS_MASK: u32 = 1 << Self::NS_POS;

    const DEFINED_MASK: u32 = Self::PRIV_MASK | Self::NS_MASK;

    /// Packs the two isolation facts into a handle. Reserved bits are zero.
    #[inline]
    pub const fn encode(privileged: bool, ns_agent: bool) -> Self {
        let mut raw = ((!privileged as u32) << Self::PRIV_POS) & Self::PRIV_MASK;
        raw |= ((ns_agent as u32) << Self::NS_POS) & Self::NS_MASK;
        Self(raw)
    }

    /// Rebuilds a handle from the raw word stored by the SPM.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw handle word.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// True when the partition executes privileged.
    #[inline]
    pub const fn is_privileged(self) -> bool {
        self.0 & Self::PRIV_MASK == 0
    }

    /// True when the partition executes unprivileged.
    #[inline]
    pub const fn is_unprivileged(self) -> bool {
        !self.is_privileged()
    }

    /// True when the partition is the designated non-secure agent.
    #[inline]
    pub const fn is_ns_agent(self) -> bool {
        self.0 & Self::NS_MASK != 0
    }

    /// Reports whether switching from `from` to `to` requires a boundary
    /// update, i.e. whether the handles differ in any defined bit.
    #[inline]
    pub const fn needs_switch(from: Self, to: Self) -> bool {
        (from.0 ^ to.0) & Self::DEFINED_MASK != 0
    }
}

impl fmt::Debug for BoundaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryHandle")
            .field("raw", &format_args!("{:#x}", self.0))
            .field("privileged", &self.is_privileged())
            .field("ns_agent", &self.is_ns_agent())
            .finish()
    }
}

impl fmt::Display for BoundaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
