//! Weights for pallet-token-timelock.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use core::marker::PhantomData;

pub trait WeightInfo {
    fn release() -> Weight;
}

/// Weights for a runtime using `T::DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Vaults, timestamp, ledger balance and the ledger's transfer reads
    // Writes: ledger balances (2)
    fn release() -> Weight {
        Weight::from_parts(50_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(9_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

impl WeightInfo for () {
    fn release() -> Weight {
        Weight::from_parts(50_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(9_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
