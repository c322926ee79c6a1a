#![allow(clippy::needless_borrows_for_generic_args)]

use crate::{mock::*, Error, Event, NextVaultIndex, TimeLockFactory, VaultInfo};
use frame_support::{assert_noop, assert_ok};
use successor_token_primitives::Balance;

fn create_vault() -> u64 {
    <TokenTimelock as TimeLockFactory<u64>>::create(&BENEFICIARY, RELEASE_AT).unwrap()
}

#[test]
fn create_records_vault_terms() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();

        assert_eq!(
            TokenTimelock::vault(&vault),
            Some(VaultInfo { beneficiary: BENEFICIARY, release_at: RELEASE_AT })
        );
        assert_eq!(NextVaultIndex::<Test>::get(), 1);
        System::assert_last_event(
            Event::VaultCreated { vault, beneficiary: BENEFICIARY, release_at: RELEASE_AT }.into(),
        );
    });
}

#[test]
fn each_vault_gets_a_distinct_account() {
    new_test_ext().execute_with(|| {
        let first = create_vault();
        let second = create_vault();

        assert_ne!(first, second);
        assert_eq!(TokenTimelock::vault_account(0).unwrap(), first);
        assert_eq!(TokenTimelock::vault_account(1).unwrap(), second);
    });
}

#[test]
fn release_pays_beneficiary_after_release_time() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        credit(vault, 5_000);
        set_now(RELEASE_AT);

        assert_ok!(TokenTimelock::release(RuntimeOrigin::signed(42), vault));

        assert_eq!(ledger_balance(vault), Balance::zero());
        assert_eq!(ledger_balance(BENEFICIARY), Balance::from(5_000u64));
        System::assert_last_event(
            Event::Released { vault, beneficiary: BENEFICIARY, amount: Balance::from(5_000u64) }
                .into(),
        );
    });
}

#[test]
fn release_fails_before_release_time() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        credit(vault, 5_000);
        set_now(RELEASE_AT - 1);

        assert_noop!(TokenTimelock::release(RuntimeOrigin::signed(42), vault), Error::<Test>::TooEarly);
        assert_eq!(ledger_balance(vault), Balance::from(5_000u64));
    });
}

#[test]
fn release_fails_when_vault_is_empty() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        set_now(RELEASE_AT);

        assert_noop!(
            TokenTimelock::release(RuntimeOrigin::signed(42), vault),
            Error::<Test>::NothingToRelease
        );
    });
}

#[test]
fn second_release_has_nothing_left() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        credit(vault, 100);
        set_now(RELEASE_AT + 10);

        assert_ok!(TokenTimelock::release(RuntimeOrigin::signed(BENEFICIARY), vault));
        assert_noop!(
            TokenTimelock::release(RuntimeOrigin::signed(BENEFICIARY), vault),
            Error::<Test>::NothingToRelease
        );
    });
}

#[test]
fn release_fails_for_unknown_vault() {
    new_test_ext().execute_with(|| {
        set_now(RELEASE_AT);

        assert_noop!(
            TokenTimelock::release(RuntimeOrigin::signed(42), 99),
            Error::<Test>::UnknownVault
        );
    });
}

#[test]
fn release_propagates_ledger_failure() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        credit(vault, 100);
        set_now(RELEASE_AT);
        set_ledger_paused(true);

        assert_noop!(
            TokenTimelock::release(RuntimeOrigin::signed(42), vault),
            sp_runtime::DispatchError::Other("ledger paused")
        );
        assert_eq!(ledger_balance(vault), Balance::from(100u64));
    });
}

#[test]
fn release_requires_signed_origin() {
    new_test_ext().execute_with(|| {
        let vault = create_vault();
        set_now(RELEASE_AT);

        assert_noop!(
            TokenTimelock::release(RuntimeOrigin::none(), vault),
            sp_runtime::DispatchError::BadOrigin
        );
    });
}
