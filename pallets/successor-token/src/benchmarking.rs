//! Benchmarking setup for pallet-successor-token

use super::*;

#[allow(unused)]
use crate::Pallet as SuccessorToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn units(amount: u64) -> Balance {
    Balance::from(amount)
}

fn set_owner<T: Config>(who: &T::AccountId) {
    Owner::<T>::put(who);
}

/// Leave the pending phase with `who` holding `amount` and the ledger unpaused.
fn fund_migrated<T: Config>(who: &T::AccountId, amount: Balance) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::put(amount);
    TargetSupply::<T>::put(amount);
    Phase::<T>::put(MigrationPhase::Completed);
    Paused::<T>::put(false);
}

/// Register `count` predecessor holders of `amount` each and aim the target
/// at their sum, so the last credited holder completes the migration.
fn legacy_holders<T: Config>(count: u32, amount: Balance) -> Vec<T::AccountId> {
    let holders: Vec<T::AccountId> = (0..count).map(|i| account("holder", i, 0)).collect();
    for holder in &holders {
        T::BenchmarkHelper::set_legacy_balance(holder, amount);
    }
    TargetSupply::<T>::put(amount.saturating_mul(Balance::from(count)));
    Phase::<T>::put(MigrationPhase::Pending);
    holders
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund_migrated::<T>(&caller, units(10_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), units(1_000_000));

        assert_eq!(Balances::<T>::get(&recipient), units(1_000_000));
    }

    #[benchmark]
    fn transfer_with_payload(l: Linear<0, { T::MaxPayloadLen::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund_migrated::<T>(&caller, units(10_000_000));
        let payload: BoundedVec<u8, T::MaxPayloadLen> =
            (0..l).map(|_| 7u8).collect::<Vec<u8>>().try_into().expect("length within bound");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), units(1_000_000), payload);

        assert_eq!(Balances::<T>::get(&recipient), units(1_000_000));
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund_migrated::<T>(&owner, units(10_000_000));
        Allowances::<T>::insert(&owner, &spender, units(5_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), units(1_000_000));

        assert_eq!(Allowances::<T>::get(&owner, &spender), units(4_000_000));
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        fund_migrated::<T>(&caller, units(10_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), units(1_000_000));

        assert_eq!(Allowances::<T>::get(&caller, &spender), units(1_000_000));
    }

    #[benchmark]
    fn increase_approval() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        fund_migrated::<T>(&caller, units(10_000_000));
        Allowances::<T>::insert(&caller, &spender, units(1_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), units(1_000));

        assert_eq!(Allowances::<T>::get(&caller, &spender), units(2_000));
    }

    #[benchmark]
    fn decrease_approval() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        fund_migrated::<T>(&caller, units(10_000_000));
        Allowances::<T>::insert(&caller, &spender, units(1_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), units(400));

        assert_eq!(Allowances::<T>::get(&caller, &spender), units(600));
    }

    #[benchmark]
    fn burn() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        fund_migrated::<T>(&owner, units(10_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), units(1_000_000));

        assert_eq!(TotalSupply::<T>::get(), units(9_000_000));
    }

    #[benchmark]
    fn pause() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        Paused::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn set_protocol_active() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert_eq!(ProtocolActive::<T>::get(), true);
    }

    #[benchmark]
    fn set_supported_recipient() {
        let owner: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        set_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), true);

        assert_eq!(SupportedRecipients::<T>::get(&recipient), true);
    }

    #[benchmark]
    fn set_acknowledgement() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), true);

        assert_eq!(Acknowledgements::<T>::get(&caller, &recipient), true);
    }

    #[benchmark]
    fn migrate_vault() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        let vault = legacy_holders::<T>(1, units(1_000_000)).remove(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), vault);

        assert_eq!(TotalSupply::<T>::get(), units(1_000_000));
        assert!(SuccessorToken::<T>::initialized());
    }

    #[benchmark]
    fn migrate_to() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        let from = legacy_holders::<T>(1, units(1_000_000)).remove(0);
        let to: T::AccountId = account("destination", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), from, to.clone());

        assert_eq!(Balances::<T>::get(&to), units(1_000_000));
        assert!(SuccessorToken::<T>::initialized());
    }

    #[benchmark]
    fn migrate_balance() {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        let holder = legacy_holders::<T>(1, units(1_000_000)).remove(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holder.clone());

        assert_eq!(Balances::<T>::get(&holder), units(1_000_000));
        assert!(SuccessorToken::<T>::initialized());
    }

    #[benchmark]
    fn migrate_balances(n: Linear<1, { T::MaxMigrationBatch::get() }>) {
        let owner: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        let holders: BoundedVec<T::AccountId, T::MaxMigrationBatch> =
            legacy_holders::<T>(n, units(1_000))
                .try_into()
                .expect("batch within bound");

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holders);

        assert_eq!(TotalSupply::<T>::get(), units(1_000).saturating_mul(Balance::from(n)));
        assert!(SuccessorToken::<T>::initialized());
    }

    #[benchmark]
    fn propose_owner() {
        let owner: T::AccountId = whitelisted_caller();
        let proposed: T::AccountId = account("proposed", 0, 0);
        set_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), proposed.clone());

        assert_eq!(PendingOwner::<T>::get(), Some(proposed));
    }

    #[benchmark]
    fn accept_ownership() {
        let owner: T::AccountId = account("owner", 0, 0);
        let proposed: T::AccountId = whitelisted_caller();
        set_owner::<T>(&owner);
        PendingOwner::<T>::put(&proposed);

        #[extrinsic_call]
        _(RawOrigin::Signed(proposed.clone()));

        assert_eq!(Owner::<T>::get(), Some(proposed));
    }

    impl_benchmark_test_suite!(SuccessorToken, crate::mock::new_test_ext(), crate::mock::Test);
}
