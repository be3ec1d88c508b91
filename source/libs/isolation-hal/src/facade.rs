// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: SPM-facing bundle of config, oracle and CPU privilege interface
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: IsolationHal (new/bind/bind_boundary/memory_check/activate/needs_switch)
//! INVARIANTS: Constructing requires FabricReady, so no boundary op precedes fabric setup
//!
//! ## Send/Sync
//!
//! `IsolationHal` is `Sync` whenever the oracle and CPU interface are; the SPM
//! may share it across handler contexts since every method takes `&self`.

use crate::activate;
use crate::bind;
use crate::check::{self, AccessMode};
use crate::config::BoundaryConfig;
use crate::error::HalResult;
use crate::fabric::FabricReady;
use crate::hal::{PrivilegeControl, ProtectionOracle};
use crate::handle::BoundaryHandle;
use crate::load::PartitionLoadInfo;

/// Boundary operations bound to one platform instance.
pub struct IsolationHal<'a, O, C> {
    config: BoundaryConfig<'a>,
    oracle: O,
    cpu: C,
    _ready: FabricReady,
}

impl<'a, O: ProtectionOracle, C: PrivilegeControl> IsolationHal<'a, O, C> {
    /// Wraps the collaborators; `ready` comes from [`crate::set_up_static_boundaries`].
    pub fn new(ready: FabricReady, config: BoundaryConfig<'a>, oracle: O, cpu: C) -> Self {
        Self { config, oracle, cpu, _ready: ready }
    }

    pub fn config(&self) -> &BoundaryConfig<'a> {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn cpu(&self) -> &C {
        &self.cpu
    }

    /// See [`crate::bind`].
    pub fn bind(&self, ldinf: &PartitionLoadInfo<'_>) -> HalResult<BoundaryHandle> {
        bind::bind(&self.config, ldinf)
    }

    /// See [`crate::bind_boundary`].
    pub fn bind_boundary(
        &self,
        ldinf: Option<&PartitionLoadInfo<'_>>,
        slot: Option<&mut BoundaryHandle>,
    ) -> HalResult<()> {
        bind::bind_boundary(&self.config, ldinf, slot)
    }

    /// See [`crate::memory_check`].
    pub fn memory_check(
        &self,
        boundary: BoundaryHandle,
        base: usize,
        size: usize,
        access: AccessMode,
    ) -> HalResult<()> {
        check::memory_check(&self.oracle, boundary, base, size, access)
    }

    /// See [`crate::activate`].
    pub fn activate(&self, ldinf: &PartitionLoadInfo<'_>, boundary: BoundaryHandle) -> HalResult<()> {
        activate::activate(&self.cpu, ldinf, boundary)
    }

    /// Whether a switch between the two partitions needs [`Self::activate`].
    pub fn needs_switch(&self, from: BoundaryHandle, to: BoundaryHandle) -> bool {
        BoundaryHandle::needs_switch(from, to)
    }
}
