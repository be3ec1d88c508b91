// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Host test doubles for the protection oracle, CONTROL register and fabric
//! OWNERS: @kernel-isolation-team
//! NOTE: Test support only (cfg(test) or feature `mock`); never linked into target images
//! INVARIANTS: MockControl models one shared register (last write wins, immediately visible);
//!             MockOracle grants only flags a matching region allows

use core::sync::atomic::{AtomicUsize, Ordering};

use spin::Mutex;

use crate::fabric::FabricStep;
use crate::hal::{Control, FabricConfig, MemCheckFlags, PlatError, PrivilegeControl, ProtectionOracle};

/// CONTROL register double.
pub struct MockControl {
    reg: Mutex<Control>,
    writes: AtomicUsize,
}

impl MockControl {
    pub const fn new(initial: Control) -> Self {
        Self { reg: Mutex::new(initial), writes: AtomicUsize::new(0) }
    }

    /// Current register value.
    pub fn current(&self) -> Control {
        *self.reg.lock()
    }

    /// Number of writes observed.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl PrivilegeControl for MockControl {
    fn control(&self) -> Control {
        *self.reg.lock()
    }

    fn set_control(&self, value: Control) {
        *self.reg.lock() = value;
        self.writes.fetch_add(1, Ordering::Relaxed);
    }
}

/// Arguments of one oracle query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleCall {
    pub base: usize,
    pub size: usize,
    pub flags: MemCheckFlags,
}

/// Region `[base, limit)` reachable with any subset of `grants`.
#[derive(Debug, Clone, Copy)]
pub struct MockRegion {
    pub base: usize,
    pub limit: usize,
    pub grants: MemCheckFlags,
}

impl MockRegion {
    fn admits(&self, base: usize, size: usize, flags: MemCheckFlags) -> bool {
        let Some(end) = base.checked_add(size) else {
            return false;
        };
        base >= self.base && end <= self.limit && self.grants.contains(flags)
    }
}

enum Rule<'r> {
    Fixed(bool),
    Regions(&'r [MockRegion]),
}

/// Protection oracle double that records its last query.
pub struct MockOracle<'r> {
    rule: Rule<'r>,
    last: Mutex<Option<OracleCall>>,
    calls: AtomicUsize,
}

impl<'r> MockOracle<'r> {
    const fn with_rule(rule: Rule<'r>) -> Self {
        Self { rule, last: Mutex::new(None), calls: AtomicUsize::new(0) }
    }

    /// Grants every query.
    pub const fn granting() -> Self {
        Self::with_rule(Rule::Fixed(true))
    }

    /// Denies every query.
    pub const fn denying() -> Self {
        Self::with_rule(Rule::Fixed(false))
    }

    /// Grants a query when one region covers the range and allows all requested flags.
    pub const fn regions(regions: &'r [MockRegion]) -> Self {
        Self::with_rule(Rule::Regions(regions))
    }

    pub fn last_call(&self) -> Option<OracleCall> {
        *self.last.lock()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ProtectionOracle for MockOracle<'_> {
    fn has_access(&self, base: usize, size: usize, flags: MemCheckFlags) -> bool {
        *self.last.lock() = Some(OracleCall { base, size, flags });
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.rule {
            Rule::Fixed(grant) => grant,
            Rule::Regions(regions) => regions.iter().any(|region| region.admits(base, size, flags)),
        }
    }
}

/// Fabric double that can fail at a chosen step.
pub struct MockFabric {
    fail_at: Option<FabricStep>,
    pdl: bool,
    done: [FabricStep; 3],
    done_len: usize,
    attempted: usize,
}

impl MockFabric {
    pub const fn new() -> Self {
        Self { fail_at: None, pdl: false, done: [FabricStep::Smpu; 3], done_len: 0, attempted: 0 }
    }

    pub const fn failing_at(step: FabricStep) -> Self {
        let mut fabric = Self::new();
        fabric.fail_at = Some(step);
        fabric
    }

    pub fn pdl_initialized(&self) -> bool {
        self.pdl
    }

    /// Steps that completed successfully, in order.
    pub fn completed(&self) -> &[FabricStep] {
        &self.done[..self.done_len]
    }

    /// Steps that were started, successful or not.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    fn step(&mut self, step: FabricStep) -> Result<(), PlatError> {
        self.attempted += 1;
        if self.fail_at == Some(step) {
            return Err(PlatError(-1));
        }
        self.done[self.done_len] = step;
        self.done_len += 1;
        Ok(())
    }
}

impl Default for MockFabric {
    fn default() -> Self {
        Self::new()
    }
}

impl FabricConfig for MockFabric {
    fn pdl_init(&mut self) {
        self.pdl = true;
    }

    fn smpu_init(&mut self) -> Result<(), PlatError> {
        self.step(FabricStep::Smpu)
    }

    fn ppu_init(&mut self) -> Result<(), PlatError> {
        self.step(FabricStep::Ppu)
    }

    fn bus_masters_init(&mut self) -> Result<(), PlatError> {
        self.step(FabricStep::BusMasters)
    }
}
