// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

#![cfg(test)]
//! CONTEXT: Property-based tests for bind/memory_check/activate
//! OWNERS: @kernel-isolation-team
//! NOTE: Tests only; no HAL logic.
//!
//! TEST_SCOPE:
//!   - Handle derivation is deterministic and all-or-nothing
//!   - Level 1 never yields an unprivileged handle
//!   - Modes without read never reach the oracle
//!   - Handle context bits always reach the oracle flags
//!
//! TEST_SCENARIOS:
//!   - bind_is_deterministic(): same descriptor twice yields identical handles
//!   - unknown_named_asset_leaves_slot_untouched(): rejected bind keeps the slot value
//!   - level_one_is_always_privileged(): any flags bind privileged at level 1
//!   - modes_without_read_are_rejected(): InvalidInput, zero oracle calls
//!   - context_flags_follow_handle(): UNPRIV/NONSECURE mirror the handle bits
//!   - activation_matches_handle(): nPRIV mirrors the handle, other CONTROL bits preserved

use proptest::prelude::*;

use crate::activate::activate;
use crate::bind::{bind, bind_boundary};
use crate::check::{memory_check, AccessMode};
use crate::config::{BoundaryConfig, IsolationLevel};
use crate::error::HalError;
use crate::hal::{Control, MemCheckFlags};
use crate::handle::BoundaryHandle;
use crate::load::{AssetAttr, AssetDesc, PartitionFlags, PartitionLoadInfo};
use crate::mmio::{MmioAllowList, MmioRef, PSOC64_NAMED_MMIO};
use crate::mock::{MockControl, MockOracle};

fn arb_level() -> impl Strategy<Value = IsolationLevel> {
    prop_oneof![
        Just(IsolationLevel::Level1),
        Just(IsolationLevel::Level2),
        Just(IsolationLevel::Level3),
    ]
}

fn arb_flags() -> impl Strategy<Value = PartitionFlags> {
    any::<u32>().prop_map(PartitionFlags::from_bits_retain)
}

fn arb_allowed_asset() -> impl Strategy<Value = AssetDesc> {
    prop_oneof![
        prop::sample::select(PSOC64_NAMED_MMIO)
            .prop_map(|dev| AssetDesc::named_mmio(dev, AssetAttr::READ_WRITE)),
        (0usize..0x1000, 1usize..0x100).prop_map(|(page, len)| {
            let start = 0x4000_0000 + page * 0x1000;
            AssetDesc::numbered_mmio(start, start + len, AssetAttr::READ_ONLY)
        }),
        (0usize..0x1000).prop_map(|page| {
            let start = 0x2000_0000 + page * 0x1000;
            AssetDesc::memory(start, start + 0x1000, AssetAttr::READ_WRITE)
        }),
    ]
}

fn arb_unknown_dev() -> impl Strategy<Value = MmioRef> {
    any::<usize>()
        .prop_map(MmioRef::new)
        .prop_filter("must not be allow-listed", |dev| !PSOC64_NAMED_MMIO.contains(dev))
}

fn arb_control() -> impl Strategy<Value = Control> {
    any::<u32>().prop_map(Control::from_bits_retain)
}

proptest! {
    #[test]
    fn bind_is_deterministic(
        level in arb_level(),
        flags in arb_flags(),
        assets in prop::collection::vec(arb_allowed_asset(), 0..8),
    ) {
        let config = BoundaryConfig::new(level, MmioAllowList::platform());
        let info = PartitionLoadInfo::new(1, flags, &assets);
        let first = bind(&config, &info).unwrap();
        let second = bind(&config, &info).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.as_raw() & !(BoundaryHandle::PRIV_MASK | BoundaryHandle::NS_MASK), 0);
        prop_assert_eq!(first.is_ns_agent(), info.is_ns_agent());
    }

    #[test]
    fn unknown_named_asset_leaves_slot_untouched(
        level in arb_level(),
        flags in arb_flags(),
        mut assets in prop::collection::vec(arb_allowed_asset(), 0..8),
        dev in arb_unknown_dev(),
        at in any::<prop::sample::Index>(),
        sentinel in any::<u32>(),
    ) {
        let index = at.index(assets.len() + 1);
        assets.insert(index, AssetDesc::named_mmio(dev, AssetAttr::READ_ONLY));
        let config = BoundaryConfig::new(level, MmioAllowList::platform());
        let info = PartitionLoadInfo::new(2, flags, &assets);
        let mut slot = BoundaryHandle::from_raw(sentinel);
        prop_assert_eq!(bind_boundary(&config, Some(&info), Some(&mut slot)), Err(HalError::Generic));
        prop_assert_eq!(slot.as_raw(), sentinel);
    }

    #[test]
    fn level_one_is_always_privileged(flags in arb_flags()) {
        let config = BoundaryConfig::new(IsolationLevel::Level1, MmioAllowList::platform());
        let info = PartitionLoadInfo::new(3, flags, &[]);
        prop_assert!(bind(&config, &info).unwrap().is_privileged());
    }

    #[test]
    fn modes_without_read_are_rejected(
        raw in any::<u32>(),
        handle in any::<u32>(),
        base in any::<usize>(),
        size in any::<usize>(),
    ) {
        let mode = AccessMode::from_bits_retain(raw).difference(AccessMode::READABLE);
        let oracle = MockOracle::granting();
        prop_assert_eq!(
            memory_check(&oracle, BoundaryHandle::from_raw(handle), base, size, mode),
            Err(HalError::InvalidInput)
        );
        prop_assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn context_flags_follow_handle(
        privileged in any::<bool>(),
        ns_agent in any::<bool>(),
        write in any::<bool>(),
        base in any::<usize>(),
        size in any::<usize>(),
    ) {
        let handle = BoundaryHandle::encode(privileged, ns_agent);
        let mode = if write { AccessMode::READWRITE } else { AccessMode::READABLE };
        let oracle = MockOracle::granting();
        prop_assert_eq!(memory_check(&oracle, handle, base, size, mode), Ok(()));

        let flags = oracle.last_call().unwrap().flags;
        prop_assert_eq!(flags.contains(MemCheckFlags::UNPRIV), !privileged);
        prop_assert_eq!(flags.contains(MemCheckFlags::NONSECURE), ns_agent);
        prop_assert_eq!(flags.contains(MemCheckFlags::READWRITE), write);
        prop_assert_eq!(flags.contains(MemCheckFlags::READ), !write);
    }

    #[test]
    fn activation_matches_handle(initial in arb_control(), raw in any::<u32>()) {
        let handle = BoundaryHandle::from_raw(raw);
        let cpu = MockControl::new(initial);
        let info = PartitionLoadInfo::new(4, PartitionFlags::IPC, &[]);
        activate(&cpu, &info, handle).unwrap();
        let after = cpu.current();
        prop_assert_eq!(after.contains(Control::NPRIV), handle.is_unprivileged());
        prop_assert_eq!(after.difference(Control::NPRIV), initial.difference(Control::NPRIV));

        activate(&cpu, &info, handle).unwrap();
        prop_assert_eq!(cpu.current(), after);
    }
}
