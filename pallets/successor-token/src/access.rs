//! Owner and pause guards, plus the two-step ownership handover.

use frame_support::{dispatch::DispatchResult, ensure};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use sp_runtime::DispatchError;

use crate::{Config, Error, Event, Owner, Pallet, Paused, PendingOwner, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Ensure `origin` is signed by the current owner and return the owner.
    pub(crate) fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    pub(crate) fn ensure_unpaused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::Paused);
        Ok(())
    }

    pub(crate) fn do_pause() -> DispatchResult {
        Self::ensure_unpaused()?;
        Paused::<T>::put(true);
        Self::deposit_event(Event::Pause);
        Ok(())
    }

    pub(crate) fn do_unpause() -> DispatchResult {
        ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
        Paused::<T>::put(false);
        Self::deposit_event(Event::Unpause);
        Ok(())
    }

    /// Record `proposed` as the next owner. A later proposal replaces an
    /// earlier one that was never accepted.
    pub(crate) fn do_propose_owner(owner: T::AccountId, proposed: T::AccountId) {
        PendingOwner::<T>::put(&proposed);
        Self::deposit_event(Event::OwnershipProposed { owner, proposed });
    }

    pub(crate) fn do_accept_ownership(who: T::AccountId) -> DispatchResult {
        ensure!(PendingOwner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);

        PendingOwner::<T>::kill();
        let previous = Owner::<T>::get();
        Owner::<T>::put(&who);

        log::info!(target: LOG_TARGET, "ownership transferred from {:?} to {:?}", previous, who);
        Self::deposit_event(Event::OwnershipTransferred { previous, new: who });
        Ok(())
    }
}
