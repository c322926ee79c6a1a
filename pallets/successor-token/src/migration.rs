//! One-shot migration from the predecessor ledger.
//!
//! While the phase is `Pending` the owner copies balances out of
//! [`Config::LegacySource`]. After every credit the total supply is compared
//! with the target recorded at genesis; when they are equal the phase becomes
//! `Completed` and the ledger is unpaused. Nothing moves the phase back.
//!
//! Whether an account was migrated is not stored. An account counts as
//! migrated once its balance is nonzero, so an account whose predecessor
//! balance is zero is simply looked up again on every batch.

use frame_support::{dispatch::DispatchResult, ensure, traits::Get};
use sp_runtime::{traits::AccountIdConversion, DispatchError};

use crate::{
    Balances, Config, Error, Event, LegacyLedger, MigrationPhase, Pallet, Paused, Phase,
    TargetSupply, TimeLockFactory, TotalSupply, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Whether the target supply has been reached.
    pub fn initialized() -> bool {
        Phase::<T>::get() == MigrationPhase::Completed
    }

    /// Account of this ledger, beneficiary of every migrated vault.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub(crate) fn ensure_pending() -> DispatchResult {
        ensure!(!Self::initialized(), Error::<T>::AlreadyInitialized);
        Ok(())
    }

    /// Lock the predecessor balance of `legacy_vault` in a new time-locked
    /// holder whose beneficiary is this ledger.
    ///
    /// Credits are additive and nothing records that the vault was migrated,
    /// so a second call credits a second holder.
    pub(crate) fn do_migrate_vault(legacy_vault: &T::AccountId) -> DispatchResult {
        let amount = T::LegacySource::balance_of(legacy_vault);
        let holder = T::TimeLocks::create(&Self::account_id(), T::VaultReleaseTime::get())?;
        Self::credit_additive(&holder, amount)?;

        log::info!(
            target: LOG_TARGET,
            "migrated vault {:?} into holder {:?} ({:?})",
            legacy_vault,
            holder,
            amount
        );
        Self::deposit_event(Event::VaultMigrated {
            legacy_vault: legacy_vault.clone(),
            holder,
            amount,
        });
        Self::complete_if_target_reached();
        Ok(())
    }

    /// Credit the predecessor balance of `from` to `to`, overwriting the
    /// balance `to` holds now.
    pub(crate) fn do_migrate_to(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
        let amount = T::LegacySource::balance_of(from);
        ensure!(!amount.is_zero(), Error::<T>::EmptyBalance);

        if !Balances::<T>::get(to).is_zero() {
            log::warn!(
                target: LOG_TARGET,
                "migrate_to overwrites nonzero balance of {:?}",
                to
            );
        }
        Self::credit_migration(to, amount)?;

        Self::deposit_event(Event::Migrated { from: from.clone(), to: to.clone(), amount });
        Self::complete_if_target_reached();
        Ok(())
    }

    /// Copy the predecessor balance of `holder` unless `holder` already has
    /// tokens or had none to copy. Returns whether anything was credited.
    pub fn do_migrate_balance(holder: &T::AccountId) -> Result<bool, DispatchError> {
        if !Balances::<T>::get(holder).is_zero() {
            return Ok(false);
        }
        let amount = T::LegacySource::balance_of(holder);
        if amount.is_zero() {
            return Ok(false);
        }

        Self::credit_migration(holder, amount)?;
        Self::deposit_event(Event::Migrated { from: holder.clone(), to: holder.clone(), amount });
        Self::complete_if_target_reached();
        Ok(true)
    }

    /// Apply [`Self::do_migrate_balance`] to each holder in order and return
    /// how many were credited. Holders after the one that completes the
    /// migration are left alone.
    pub(crate) fn do_migrate_balances(holders: &[T::AccountId]) -> Result<u32, DispatchError> {
        let mut credited = 0u32;
        for holder in holders {
            if Self::initialized() {
                break;
            }
            if Self::do_migrate_balance(holder)? {
                credited = credited.saturating_add(1);
            }
        }

        log::debug!(
            target: LOG_TARGET,
            "batch migration credited {} of {} holders",
            credited,
            holders.len()
        );
        Ok(credited)
    }

    fn complete_if_target_reached() {
        let total_supply = TotalSupply::<T>::get();
        if total_supply != TargetSupply::<T>::get() {
            return;
        }

        Phase::<T>::put(MigrationPhase::Completed);
        log::info!(target: LOG_TARGET, "migration completed at total supply {:?}", total_supply);
        Self::deposit_event(Event::MigrationCompleted { total_supply });

        if Paused::<T>::get() {
            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpause);
        }
    }
}
