// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Platform allow-list of named MMIO peripherals partitions may declare
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: MmioRef, MmioAllowList, PSOC64_NAMED_MMIO
//! INVARIANTS: Read-only table; exact membership, no range or prefix matching

use core::fmt;

/// Reference to a named memory-mapped peripheral (its block base address).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MmioRef(usize);

impl MmioRef {
    /// Standard UART used by the secure side (SCB5).
    pub const STD_UART: Self = Self(0x4065_0000);
    /// Secure timer (TCPWM0 counter group).
    pub const TIMER0: Self = Self(0x4038_0000);

    /// Wraps a raw peripheral reference.
    #[inline]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw peripheral reference.
    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for MmioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MmioRef({:#x})", self.0)
    }
}

/// Named MMIO peripherals partitions may be bound to on PSoC64.
pub const PSOC64_NAMED_MMIO: &[MmioRef] = &[MmioRef::STD_UART, MmioRef::TIMER0];

/// Read-only view over a platform named-MMIO table.
#[derive(Copy, Clone, Debug)]
pub struct MmioAllowList<'a> {
    entries: &'a [MmioRef],
}

impl<'a> MmioAllowList<'a> {
    /// Wraps a platform table.
    pub const fn new(entries: &'a [MmioRef]) -> Self {
        Self { entries }
    }

    /// The PSoC64 table.
    pub const fn platform() -> MmioAllowList<'static> {
        MmioAllowList::new(PSOC64_NAMED_MMIO)
    }

    /// Exact membership test.
    pub fn allows(&self, dev: MmioRef) -> bool {
        self.entries.iter().any(|entry| *entry == dev)
    }

    /// Number of allowed peripherals.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no peripheral is allowed.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the allowed peripherals in table order.
    pub fn iter(&self) -> impl Iterator<Item = MmioRef> + 'a {
        self.entries.iter().copied()
    }
}
