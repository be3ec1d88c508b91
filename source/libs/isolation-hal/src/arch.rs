// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Armv8-M CONTROL register access for the secure core.

use cortex_m::register::control;

use crate::hal::{Control, PrivilegeControl};

/// CONTROL register of the executing core.
pub struct CortexM;

impl PrivilegeControl for CortexM {
    fn control(&self) -> Control {
        Control::from_bits_retain(control::read().bits())
    }

    fn set_control(&self, value: Control) {
        // SAFETY: called from handler mode by the SPM while switching partitions; only
        // thread-mode privilege and stack selection change.
        unsafe {
            control::write(control::Control::from_bits(value.bits()));
        }
        cortex_m::asm::isb();
    }
}
