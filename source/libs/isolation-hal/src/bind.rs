// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Boundary encoder: load metadata + allow-list -> BoundaryHandle
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: bind(config, ldinf), bind_boundary(config, ldinf?, slot?)
//! DEPENDS_ON: config::BoundaryConfig, mmio::MmioAllowList, handle::BoundaryHandle
//! INVARIANTS: Deterministic; all-or-nothing (no handle on any rejected named MMIO asset);
//!             numbered MMIO is not validated here

use log::{debug, warn};

use crate::config::BoundaryConfig;
use crate::error::{HalError, HalResult};
use crate::handle::BoundaryHandle;
use crate::load::{AssetTarget, PartitionLoadInfo};
use crate::mmio::MmioAllowList;

/// Derives the boundary handle of one partition.
///
/// Level 1 builds bind every partition privileged; otherwise only PSA-RoT
/// partitions are privileged. Fails with [`HalError::Generic`] when a named
/// MMIO asset is missing from the allow-list.
pub fn bind(config: &BoundaryConfig<'_>, ldinf: &PartitionLoadInfo<'_>) -> HalResult<BoundaryHandle> {
    let privileged = config.level.is_single_privilege() || ldinf.is_psa_rot();
    let ns_agent = ldinf.is_ns_agent();

    validate_named_mmio(&config.allow_list, ldinf)?;

    let handle = BoundaryHandle::encode(privileged, ns_agent);
    debug!(
        "bind: pid={} level={:?} privileged={} ns_agent={} handle={}",
        ldinf.pid, config.level, privileged, ns_agent, handle
    );
    Ok(handle)
}

/// Slot form used by the SPM loader: writes the handle into `slot` on success
/// and leaves it untouched on any failure.
pub fn bind_boundary(
    config: &BoundaryConfig<'_>,
    ldinf: Option<&PartitionLoadInfo<'_>>,
    slot: Option<&mut BoundaryHandle>,
) -> HalResult<()> {
    let (Some(ldinf), Some(slot)) = (ldinf, slot) else {
        return Err(HalError::Generic);
    };
    *slot = bind(config, ldinf)?;
    Ok(())
}

// Numbered MMIO needs a platform range table; add it here once the SMPU config exposes one.
fn validate_named_mmio(allow_list: &MmioAllowList<'_>, ldinf: &PartitionLoadInfo<'_>) -> HalResult<()> {
    for asset in ldinf.assets.iter().filter(|asset| asset.is_named_mmio()) {
        match asset.target {
            AssetTarget::Device(dev) if allow_list.allows(dev) => {}
            target => {
                warn!("bind: pid={} named MMIO {:?} not allowed by platform", ldinf.pid, target);
                return Err(HalError::Generic);
            }
        }
    }
    Ok(())
}
