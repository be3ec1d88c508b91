// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hardware collaborators the isolation HAL drives but does not implement.

use bitflags::bitflags;
use core::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    /// Flags passed to the protection-capability oracle.
    pub struct MemCheckFlags: u32 {
        /// Range must be readable and writable.
        const READWRITE = 1 << 0;
        /// Evaluate as unprivileged code.
        const UNPRIV = 1 << 1;
        /// Range must be readable.
        const READ = 1 << 2;
        /// Evaluate as the non-secure world.
        const NONSECURE = 1 << 3;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    /// Armv8-M CONTROL register.
    pub struct Control: u32 {
        /// Thread mode runs unprivileged.
        const NPRIV = 1 << 0;
        /// Thread mode uses the process stack.
        const SPSEL = 1 << 1;
        /// Floating-point context active.
        const FPCA = 1 << 2;
        /// Secure floating-point context active.
        const SFPA = 1 << 3;
        const _ = !0;
    }
}

/// Answers whether a memory range is reachable under the given flags.
///
/// Must be reentrant: `memory_check` may run on behalf of any partition.
pub trait ProtectionOracle {
    /// Returns true when `[base, base + size)` is accessible with `flags`.
    fn has_access(&self, base: usize, size: usize, flags: MemCheckFlags) -> bool;
}

/// Access to the calling core's privilege-control register.
pub trait PrivilegeControl {
    /// Reads CONTROL.
    fn control(&self) -> Control;
    /// Writes CONTROL; visible to the next instruction stream.
    fn set_control(&self, value: Control);
}

/// Opaque failure code reported by a platform setup routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatError(pub i32);

impl fmt::Display for PlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform error {}", self.0)
    }
}

/// One-time protection fabric setup, run before any partition is bound.
pub trait FabricConfig {
    /// Device driver library bring-up. Cannot fail.
    fn pdl_init(&mut self) {}
    /// Programs the SMPU region table.
    fn smpu_init(&mut self) -> Result<(), PlatError>;
    /// Configures peripheral protection units.
    fn ppu_init(&mut self) -> Result<(), PlatError>;
    /// Assigns bus-master protection contexts.
    fn bus_masters_init(&mut self) -> Result<(), PlatError>;
}

impl<T: ProtectionOracle + ?Sized> ProtectionOracle for &T {
    fn has_access(&self, base: usize, size: usize, flags: MemCheckFlags) -> bool {
        (**self).has_access(base, size, flags)
    }
}

impl<T: PrivilegeControl + ?Sized> PrivilegeControl for &T {
    fn control(&self) -> Control {
        (**self).control()
    }

    fn set_control(&self, value: Control) {
        (**self).set_control(value)
    }
}
