//! # Token Timelock Pallet
//!
//! Holds successor token balances for a beneficiary until a fixed unix
//! timestamp. Vaults are created through [`TimeLockFactory`] (the token
//! pallet does this while migrating a predecessor vault); anyone may call
//! [`Pallet::release`] once the timestamp has passed, which moves the vault's
//! whole ledger balance to its beneficiary.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::*,
    traits::UnixTime,
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{
    traits::{BlakeTwo256, Hash, TrailingZeroInput},
    DispatchError,
};

pub use pallet::*;
pub use successor_token_primitives::{Balance, LedgerTransfer, TimeLockFactory};
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "pallet-token-timelock";

/// Terms of a single vault.
#[derive(Encode, Decode, TypeInfo, MaxEncodedLen, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct VaultInfo<AccountId> {
    pub beneficiary: AccountId,
    /// Unix timestamp (seconds) from which the balance may be released.
    pub release_at: u64,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Ledger holding the locked tokens.
        type Ledger: LedgerTransfer<Self::AccountId>;

        type UnixTime: UnixTime;

        /// Seed for vault account derivation.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type Vaults<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, VaultInfo<T::AccountId>, OptionQuery>;

    /// Index used to derive the next vault account.
    #[pallet::storage]
    pub type NextVaultIndex<T> = StorageValue<_, u32, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        VaultCreated { vault: T::AccountId, beneficiary: T::AccountId, release_at: u64 },
        /// Whole vault balance paid out to the beneficiary
        Released { vault: T::AccountId, beneficiary: T::AccountId, amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// No vault at this account.
        UnknownVault,
        /// Release timestamp not reached yet.
        TooEarly,
        /// Vault balance is zero.
        NothingToRelease,
        /// Vault index space exhausted.
        TooManyVaults,
        /// Derived vault account could not be decoded.
        InvalidVaultAccount,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Pay out the whole balance of `vault` to its beneficiary. Callable
        /// by anyone once the release time has passed.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::release())]
        pub fn release(origin: OriginFor<T>, vault: T::AccountId) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_release(&vault)
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn vault(who: &T::AccountId) -> Option<VaultInfo<T::AccountId>> {
        Vaults::<T>::get(who)
    }

    /// Account of the vault created with `index`.
    pub fn vault_account(index: u32) -> Result<T::AccountId, DispatchError> {
        let entropy = BlakeTwo256::hash_of(&(T::PalletId::get(), index));
        T::AccountId::decode(&mut TrailingZeroInput::new(entropy.as_ref()))
            .map_err(|_| Error::<T>::InvalidVaultAccount.into())
    }

    pub(crate) fn do_release(vault: &T::AccountId) -> DispatchResult {
        let info = Vaults::<T>::get(vault).ok_or(Error::<T>::UnknownVault)?;
        ensure!(T::UnixTime::now().as_secs() >= info.release_at, Error::<T>::TooEarly);

        let amount = T::Ledger::balance_of(vault);
        ensure!(!amount.is_zero(), Error::<T>::NothingToRelease);
        T::Ledger::transfer(vault, &info.beneficiary, amount)?;

        log::info!(target: LOG_TARGET, "released {:?} from vault {:?}", amount, vault);
        Self::deposit_event(Event::Released {
            vault: vault.clone(),
            beneficiary: info.beneficiary,
            amount,
        });
        Ok(())
    }
}

impl<T: Config> TimeLockFactory<T::AccountId> for Pallet<T> {
    fn create(beneficiary: &T::AccountId, release_at: u64) -> Result<T::AccountId, DispatchError> {
        let index = NextVaultIndex::<T>::get();
        let next = index.checked_add(1).ok_or(Error::<T>::TooManyVaults)?;
        let vault = Self::vault_account(index)?;

        Vaults::<T>::insert(&vault, VaultInfo { beneficiary: beneficiary.clone(), release_at });
        NextVaultIndex::<T>::put(next);

        Self::deposit_event(Event::VaultCreated {
            vault: vault.clone(),
            beneficiary: beneficiary.clone(),
            release_at,
        });
        Ok(vault)
    }
}
