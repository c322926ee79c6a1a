//! Weights for pallet-successor-token.
//!
//! Hand-estimated until the benchmarks in `benchmarking.rs` are run against
//! reference hardware. Reads and writes are counted from the storage items
//! each call touches.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_with_payload(len: u32) -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn increase_approval() -> Weight;
    fn decrease_approval() -> Weight;
    fn burn() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn set_protocol_active() -> Weight;
    fn set_supported_recipient() -> Weight;
    fn set_acknowledgement() -> Weight;
    fn migrate_vault() -> Weight;
    fn migrate_to() -> Weight;
    fn migrate_balance() -> Weight;
    fn migrate_balances(n: u32) -> Weight;
    fn propose_owner() -> Weight;
    fn accept_ownership() -> Weight;
}

/// Weights for a runtime using `T::DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Paused, Balances (2), ProtocolActive, SupportedRecipients, Acknowledgements
    // Writes: Balances (2)
    fn transfer() -> Weight {
        Weight::from_parts(35_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn transfer_with_payload(len: u32) -> Weight {
        Self::transfer().saturating_add(Weight::from_parts(2_000, 0).saturating_mul(len.into()))
    }
    // Adds Allowances read and write to `transfer`.
    fn transfer_from() -> Weight {
        Weight::from_parts(45_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn increase_approval() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn decrease_approval() -> Weight {
        Self::increase_approval()
    }
    // Reads: Owner, Balances, TotalSupply. Writes: Balances, TotalSupply
    fn burn() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Self::pause()
    }
    fn set_protocol_active() -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn set_supported_recipient() -> Weight {
        Self::set_protocol_active()
    }
    fn set_acknowledgement() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Owner, Phase, TimeLock vault index, Balances, TotalSupply, TargetSupply, Paused
    // Writes: vault info, vault index, Balances, TotalSupply, Phase, Paused
    fn migrate_vault() -> Weight {
        Weight::from_parts(60_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    // Reads: Owner, Phase, Balances, TotalSupply, TargetSupply, Paused
    // Writes: Balances, TotalSupply, Phase, Paused
    fn migrate_to() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    fn migrate_balance() -> Weight {
        Self::migrate_to()
    }
    fn migrate_balances(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(Self::migrate_balance().saturating_mul(n.into()))
    }
    fn propose_owner() -> Weight {
        Self::set_protocol_active()
    }
    // Reads: PendingOwner, Owner. Writes: PendingOwner, Owner
    fn accept_ownership() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(35_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_with_payload(len: u32) -> Weight {
        Self::transfer().saturating_add(Weight::from_parts(2_000, 0).saturating_mul(len.into()))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(45_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn increase_approval() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn decrease_approval() -> Weight {
        Self::increase_approval()
    }
    fn burn() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Self::pause()
    }
    fn set_protocol_active() -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_supported_recipient() -> Weight {
        Self::set_protocol_active()
    }
    fn set_acknowledgement() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn migrate_vault() -> Weight {
        Weight::from_parts(60_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn migrate_to() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn migrate_balance() -> Weight {
        Self::migrate_to()
    }
    fn migrate_balances(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(Self::migrate_balance().saturating_mul(n.into()))
    }
    fn propose_owner() -> Weight {
        Self::set_protocol_active()
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
