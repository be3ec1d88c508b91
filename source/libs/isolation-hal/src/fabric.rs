// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: One-time static boundary setup (SMPU, PPU, bus masters) at bring-up
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: set_up_static_boundaries(fabric) -> FabricReady, FabricStep
//! DEPENDS_ON: hal::FabricConfig
//! INVARIANTS: Steps run in fixed order and stop at the first failure; FabricReady is only
//!             minted after all steps succeeded

use core::fmt;

use log::{error, info};

use crate::error::{HalError, HalResult};
use crate::hal::{FabricConfig, PlatError};

/// Fallible fabric setup steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabricStep {
    Smpu,
    Ppu,
    BusMasters,
}

impl FabricStep {
    /// All steps in the order `set_up_static_boundaries` runs them.
    pub const ORDER: [FabricStep; 3] = [FabricStep::Smpu, FabricStep::Ppu, FabricStep::BusMasters];

    const fn tag(self) -> &'static str {
        match self {
            FabricStep::Smpu => "smpu",
            FabricStep::Ppu => "ppu",
            FabricStep::BusMasters => "bus-masters",
        }
    }

    fn run<F: FabricConfig + ?Sized>(self, fabric: &mut F) -> Result<(), PlatError> {
        match self {
            FabricStep::Smpu => fabric.smpu_init(),
            FabricStep::Ppu => fabric.ppu_init(),
            FabricStep::BusMasters => fabric.bus_masters_init(),
        }
    }
}

impl fmt::Display for FabricStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Proof that the static boundaries were programmed.
#[derive(Debug)]
pub struct FabricReady {
    _private: (),
}

/// Programs the static protection fabric. Any failed step is fatal to bring-up.
pub fn set_up_static_boundaries<F: FabricConfig + ?Sized>(fabric: &mut F) -> HalResult<FabricReady> {
    fabric.pdl_init();
    for step in FabricStep::ORDER {
        if let Err(err) = step.run(fabric) {
            error!("fabric: {} setup failed: {}", step, err);
            return Err(HalError::Generic);
        }
    }
    info!("fabric: static boundaries ready");
    Ok(FabricReady { _private: () })
}
