//! Balance and allowance bookkeeping.
//!
//! Every function here checks its preconditions before touching storage and
//! keeps `TotalSupply` equal to the sum of `Balances`, with one exception:
//! [`Pallet::credit_migration`] overwrites the destination balance and can
//! therefore drop tokens the destination already held.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};

use crate::{Allowances, Balance, Balances, Config, Error, Event, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    /// Whether `who` encodes to all zero bytes. Such an account can never
    /// receive tokens.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|byte| *byte == 0))
    }

    /// Set the balance of `who` to `amount` and grow the supply by `amount`.
    ///
    /// Any balance `who` held before is discarded without being removed from
    /// the supply. Only the migration controller calls this, and only for
    /// accounts it believes were never credited.
    pub(crate) fn credit_migration(who: &T::AccountId, amount: Balance) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(who, amount);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Add `amount` to the balance of `who` and to the supply.
    pub(crate) fn credit_additive(who: &T::AccountId, amount: Balance) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(who).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(who, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Move `amount` from `from` to `to`. The supply is unchanged.
    pub(crate) fn move_balance(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        let remaining =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        Balances::<T>::insert(from, remaining);
        // Read after the debit so a self-transfer lands back on the same balance.
        let credited = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(to, credited);

        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// the allowance `from` granted to `spender`.
    pub(crate) fn spend_and_move(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        ensure!(amount <= Balances::<T>::get(from), Error::<T>::InsufficientBalance);
        let remaining = Allowances::<T>::get(from, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)?;

        Self::move_balance(from, to, amount)?;
        Allowances::<T>::insert(from, spender, remaining);
        Ok(())
    }

    pub(crate) fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: Balance) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    pub(crate) fn do_increase_approval(
        owner: &T::AccountId,
        spender: &T::AccountId,
        added: Balance,
    ) -> DispatchResult {
        let amount = Allowances::<T>::get(owner, spender)
            .checked_add(added)
            .ok_or(Error::<T>::Overflow)?;
        Self::do_approve(owner, spender, amount);
        Ok(())
    }

    pub(crate) fn do_decrease_approval(
        owner: &T::AccountId,
        spender: &T::AccountId,
        subtracted: Balance,
    ) {
        let amount = Allowances::<T>::get(owner, spender).saturating_sub(subtracted);
        Self::do_approve(owner, spender, amount);
    }

    /// Destroy `amount` of `who`'s tokens.
    pub(crate) fn do_burn(who: &T::AccountId, amount: Balance) -> DispatchResult {
        let remaining =
            Balances::<T>::get(who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let supply =
            TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        Balances::<T>::insert(who, remaining);
        TotalSupply::<T>::put(supply);
        Self::deposit_event(Event::Burn { who: who.clone(), amount });
        Ok(())
    }
}
