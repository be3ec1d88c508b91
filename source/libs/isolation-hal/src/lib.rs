// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(all(target_arch = "arm", target_os = "none")), forbid(unsafe_code))]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

//! CONTEXT: Partition isolation boundaries for the secure partition manager (PSoC64)
//! OWNERS: @kernel-isolation-team
//! PUBLIC API: bind/bind_boundary, memory_check, activate, set_up_static_boundaries, IsolationHal
//! DEPENDS_ON: hal traits (ProtectionOracle, PrivilegeControl, FabricConfig), log, bitflags
//! INVARIANTS: Handles are pure functions of load info + allow-list; memory_check never mutates;
//!             activate always re-asserts nPRIV; no boundary op reachable via the facade before fabric setup
//!
//! The SPM drives three operations per partition:
//! - [`bind`] once at load time to derive a [`BoundaryHandle`]
//! - [`activate`] on every scheduler switch into the partition
//! - [`memory_check`] whenever the partition asks the SPM to touch memory
//!
//! Hardware specifics (SMPU/PPU programming, the protection query, the
//! CONTROL register) stay behind the traits in [`hal`].

pub mod activate;
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod arch;
pub mod bind;
pub mod check;
pub mod config;
pub mod error;
pub mod fabric;
pub mod facade;
pub mod hal;
pub mod handle;
pub mod load;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod mmio;

pub use activate::activate;
pub use bind::{bind, bind_boundary};
pub use check::{access_flags, memory_check, AccessMode};
pub use config::{BoundaryConfig, IsolationLevel};
pub use error::{status_of, HalError, HalResult, STATUS_SUCCESS};
pub use fabric::{set_up_static_boundaries, FabricReady, FabricStep};
pub use facade::IsolationHal;
pub use hal::{Control, FabricConfig, MemCheckFlags, PlatError, PrivilegeControl, ProtectionOracle};
pub use handle::BoundaryHandle;
pub use load::{AssetAttr, AssetDesc, AssetTarget, PartitionFlags, PartitionLoadInfo};
pub use mmio::{MmioAllowList, MmioRef, PSOC64_NAMED_MMIO};

#[cfg(test)]
mod tests_prop;
