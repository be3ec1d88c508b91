// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Access validator evaluating a memory range as the calling partition would see it
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: memory_check(oracle, handle, base, size, access), access_flags(access), AccessMode
//! DEPENDS_ON: hal::ProtectionOracle
//! INVARIANTS: Read-only predicate; mode must include read; unprivileged/NS callers never gain
//!             access a privileged/secure caller would lack

use bitflags::bitflags;
use log::trace;

use crate::error::{HalError, HalResult};
use crate::hal::{MemCheckFlags, ProtectionOracle};
use crate::handle::BoundaryHandle;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    /// Access requested by the SPM on behalf of a partition.
    pub struct AccessMode: u32 {
        const EXECUTABLE = 1 << 0;
        const READABLE = 1 << 1;
        const WRITABLE = 1 << 2;
        const READWRITE = Self::READABLE.bits() | Self::WRITABLE.bits();
        const _ = !0;
    }
}

/// Maps the requested access onto oracle flags.
///
/// Read-write takes precedence; a mode without the read bit is rejected.
pub fn access_flags(access: AccessMode) -> HalResult<MemCheckFlags> {
    if access.contains(AccessMode::READWRITE) {
        Ok(MemCheckFlags::READWRITE)
    } else if access.contains(AccessMode::READABLE) {
        Ok(MemCheckFlags::READ)
    } else {
        Err(HalError::InvalidInput)
    }
}

/// Checks whether the partition owning `boundary` may access `[base, base + size)`.
pub fn memory_check<O: ProtectionOracle + ?Sized>(
    oracle: &O,
    boundary: BoundaryHandle,
    base: usize,
    size: usize,
    access: AccessMode,
) -> HalResult<()> {
    let mut flags = access_flags(access)?;
    if boundary.is_unprivileged() {
        flags |= MemCheckFlags::UNPRIV;
    }
    if boundary.is_ns_agent() {
        flags |= MemCheckFlags::NONSECURE;
    }

    if oracle.has_access(base, size, flags) {
        Ok(())
    } else {
        trace!("memory_check: denied base={:#x} size={:#x} flags={:?} handle={}", base, size, flags, boundary);
        Err(HalError::MemFault)
    }
}
