//! # Successor Token Pallet
//!
//! A fungible token ledger that is populated once from a frozen predecessor
//! ledger and then runs in normal operation.
//!
//! The pallet is made of four cooperating parts:
//!
//! - **Ledger** (`ledger.rs`): balances, allowances and the total supply.
//! - **Access gate** (`access.rs`): owner identity, two-step ownership
//!   handover and the pause flag.
//! - **Migration controller** (`migration.rs`): copies balances from
//!   [`Config::LegacySource`] until the total supply reaches the target fixed at
//!   genesis, then flips the pallet into the `Completed` phase and unpauses it.
//! - **Transfer gate** (`gate.rs`): decides per transfer whether the recipient
//!   must be notified through [`Config::Recipients`], and rolls the whole
//!   transfer back when the notification fails.
//!
//! The pallet starts paused. Only migration calls make progress until the
//! target supply is reached.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept until the runtime API exposes the read surface.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use successor_token_primitives::{
    Balance, LedgerTransfer, LegacyLedger, TimeLockFactory, TokenRecipient,
};
pub use weights::WeightInfo;

mod access;
mod gate;
mod ledger;
mod migration;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-successor-token";

/// Progress of the one-shot migration from the predecessor ledger.
#[derive(
    Encode, Decode, TypeInfo, MaxEncodedLen, Clone, Copy, PartialEq, Eq, RuntimeDebug, Default,
)]
pub enum MigrationPhase {
    /// Balances are still being copied; the pallet starts here.
    #[default]
    Pending,
    /// Target supply reached. Terminal.
    Completed,
}

/// Seeds the predecessor ledger so the migration calls can be benchmarked.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    fn set_legacy_balance(who: &AccountId, amount: Balance);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Read-only view of the predecessor ledger.
        type LegacySource: LegacyLedger<Self::AccountId>;

        /// Capability probe and notification hook for programmable recipients.
        type Recipients: TokenRecipient<Self::AccountId>;

        /// Creates the time-locked holder credited by `migrate_vault`.
        type TimeLocks: TimeLockFactory<Self::AccountId>;

        /// Identifier of this ledger; its account is the beneficiary of
        /// migrated vaults.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Unix timestamp (seconds) after which a migrated vault may release.
        #[pallet::constant]
        type VaultReleaseTime: Get<u64>;

        /// Maximum size of a transfer payload forwarded to recipients.
        #[pallet::constant]
        type MaxPayloadLen: Get<u32>;

        /// Maximum number of holders in one `migrate_balances` call.
        #[pallet::constant]
        type MaxMigrationBatch: Get<u32>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Successor Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SUC")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Predecessor total supply at snapshot time. Written once at genesis.
    #[pallet::storage]
    #[pallet::getter(fn target_supply)]
    pub type TargetSupply<T> = StorageValue<_, Balance, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Approved amounts, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account proposed by the owner; becomes owner once it accepts.
    #[pallet::storage]
    #[pallet::getter(fn pending_owner)]
    pub type PendingOwner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn migration_phase)]
    pub type Phase<T> = StorageValue<_, MigrationPhase, ValueQuery>;

    /// Whether transfers to callback-capable recipients notify them.
    #[pallet::storage]
    #[pallet::getter(fn protocol_active)]
    pub type ProtocolActive<T> = StorageValue<_, bool, ValueQuery>;

    /// Recipients that never receive a callback, set by the owner.
    #[pallet::storage]
    #[pallet::getter(fn is_supported_recipient)]
    pub type SupportedRecipients<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Recipients a sender has opted out of notifying, keyed by (sender, recipient).
    #[pallet::storage]
    #[pallet::getter(fn is_acknowledged)]
    pub type Acknowledgements<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between accounts
        Transfer { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Allowance of `spender` over `owner`'s tokens is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: Balance },
        /// Tokens destroyed
        Burn { who: T::AccountId, amount: Balance },
        /// Predecessor balance of `from` credited to `to`
        Migrated { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Predecessor vault balance credited to a new time-locked holder
        VaultMigrated { legacy_vault: T::AccountId, holder: T::AccountId, amount: Balance },
        /// Target supply reached; the pallet is now in normal operation
        MigrationCompleted { total_supply: Balance },
        Pause,
        Unpause,
        ProtocolActiveSet { active: bool },
        SupportedRecipientSet { recipient: T::AccountId, supported: bool },
        AcknowledgementSet { sender: T::AccountId, recipient: T::AccountId, acknowledged: bool },
        /// Owner proposed a successor
        OwnershipProposed { owner: T::AccountId, proposed: T::AccountId },
        /// Proposed owner accepted
        OwnershipTransferred { previous: Option<T::AccountId>, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the required role.
        Unauthorized,
        /// Operation blocked while the ledger is paused.
        Paused,
        /// `unpause` called while not paused.
        NotPaused,
        /// Migration call after the target supply was reached.
        AlreadyInitialized,
        InsufficientBalance,
        InsufficientAllowance,
        /// Recipient is the null account.
        InvalidRecipient,
        /// Predecessor holds nothing for this account.
        EmptyBalance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_transfer(&sender, &to, amount, &[])
        }

        /// Transfer and hand `payload` to the recipient's callback, if one runs.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_with_payload(payload.len() as u32))]
        pub fn transfer_with_payload(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: Balance,
            payload: BoundedVec<u8, T::MaxPayloadLen>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_transfer(&sender, &to, amount, &payload)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        /// Overwrite the caller's allowance for `spender`. Does not require the
        /// previous allowance to be zero.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_approve(&owner, &spender, amount);
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::increase_approval())]
        pub fn increase_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_increase_approval(&owner, &spender, added)
        }

        /// Lower the caller's allowance for `spender`, clamping at zero.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::decrease_approval())]
        pub fn decrease_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::do_decrease_approval(&owner, &spender, subtracted);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::do_burn(&owner, amount)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_pause()
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_unpause()
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_protocol_active())]
        pub fn set_protocol_active(origin: OriginFor<T>, active: bool) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ProtocolActive::<T>::put(active);
            Self::deposit_event(Event::ProtocolActiveSet { active });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_supported_recipient())]
        pub fn set_supported_recipient(
            origin: OriginFor<T>,
            recipient: T::AccountId,
            supported: bool,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            SupportedRecipients::<T>::insert(&recipient, supported);
            Self::deposit_event(Event::SupportedRecipientSet { recipient, supported });
            Ok(())
        }

        /// Opt the caller in or out of notifying `recipient` on transfers.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_acknowledgement())]
        pub fn set_acknowledgement(
            origin: OriginFor<T>,
            recipient: T::AccountId,
            acknowledged: bool,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Acknowledgements::<T>::insert(&sender, &recipient, acknowledged);
            Self::deposit_event(Event::AcknowledgementSet { sender, recipient, acknowledged });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::migrate_vault())]
        pub fn migrate_vault(origin: OriginFor<T>, legacy_vault: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_pending()?;
            Self::do_migrate_vault(&legacy_vault)
        }

        /// Credit the predecessor balance of `from` to `to`, overwriting
        /// whatever `to` currently holds.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::migrate_to())]
        pub fn migrate_to(origin: OriginFor<T>, from: T::AccountId, to: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_pending()?;
            Self::do_migrate_to(&from, &to)
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::migrate_balance())]
        pub fn migrate_balance(origin: OriginFor<T>, holder: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_pending()?;
            Self::do_migrate_balance(&holder).map(|_| ())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::migrate_balances(holders.len() as u32))]
        pub fn migrate_balances(
            origin: OriginFor<T>,
            holders: BoundedVec<T::AccountId, T::MaxMigrationBatch>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_pending()?;
            Self::do_migrate_balances(&holders).map(|_| ())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::propose_owner())]
        pub fn propose_owner(origin: OriginFor<T>, proposed: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::do_propose_owner(owner, proposed);
            Ok(())
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::accept_ownership())]
        pub fn accept_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_accept_ownership(who)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner; administrative calls are rejected until one is set
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }

            // Snapshot of the predecessor; never written again.
            TargetSupply::<T>::put(T::LegacySource::total_supply());

            // Nothing but migration calls may run until the target is reached.
            Paused::<T>::put(true);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Check the ledger invariants against current storage.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(Balance::zero(), |acc, balance| acc.checked_add(balance))
            .ok_or(sp_runtime::DispatchError::Other("sum of balances overflows"))?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply differs from sum of balances");

        if !Self::initialized() {
            ensure!(
                TotalSupply::<T>::get() <= TargetSupply::<T>::get(),
                "total supply exceeds target before migration completed"
            );
        }
        Ok(())
    }
}
