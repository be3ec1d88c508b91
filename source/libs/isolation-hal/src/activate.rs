// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Privilege activator run on every scheduler switch into a partition.

use crate::error::HalResult;
use crate::hal::{Control, PrivilegeControl};
use crate::handle::BoundaryHandle;
use crate::load::PartitionLoadInfo;

/// Switches thread-mode privilege to match `boundary`.
///
/// CONTROL.nPRIV is written on every call, even when it already holds the
/// right value; the remaining CONTROL bits are preserved. Never fails.
pub fn activate<C: PrivilegeControl + ?Sized>(
    cpu: &C,
    _ldinf: &PartitionLoadInfo<'_>,
    boundary: BoundaryHandle,
) -> HalResult<()> {
    let mut ctrl = cpu.control();
    ctrl.set(Control::NPRIV, boundary.is_unprivileged());
    cpu.set_control(ctrl);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::activate;
    use crate::hal::Control;
    use crate::handle::BoundaryHandle;
    use crate::load::{PartitionFlags, PartitionLoadInfo};
    use crate::mock::MockControl;

    const INFO: PartitionLoadInfo<'static> = PartitionLoadInfo::new(1, PartitionFlags::IPC, &[]);

    #[test]
    fn unprivileged_handle_sets_npriv() {
        let cpu = MockControl::new(Control::empty());
        activate(&cpu, &INFO, BoundaryHandle::encode(false, false)).expect("activate");
        assert!(cpu.current().contains(Control::NPRIV));
    }

    #[test]
    fn privileged_handle_clears_npriv_and_keeps_other_bits() {
        let cpu = MockControl::new(Control::NPRIV | Control::SPSEL | Control::FPCA);
        activate(&cpu, &INFO, BoundaryHandle::encode(true, true)).expect("activate");
        assert_eq!(cpu.current(), Control::SPSEL | Control::FPCA);
    }

    #[test]
    fn register_is_written_even_when_unchanged() {
        let cpu = MockControl::new(Control::empty());
        let handle = BoundaryHandle::encode(true, false);
        activate(&cpu, &INFO, handle).expect("activate");
        activate(&cpu, &INFO, handle).expect("activate");
        assert_eq!(cpu.writes(), 2);
        assert_eq!(cpu.current(), Control::empty());
    }

    #[test]
    fn second_activation_is_observably_idempotent() {
        let cpu = MockControl::new(Control::SPSEL);
        let handle = BoundaryHandle::encode(false, false);
        activate(&cpu, &INFO, handle).expect("activate");
        let after_first = cpu.current();
        activate(&cpu, &INFO, handle).expect("activate");
        assert_eq!(cpu.current(), after_first);
    }
}
