//! Primitives shared by `pallet-successor-token` and `pallet-token-timelock`.
//!
//! The token pallet talks to everything outside its own storage through the
//! traits below: the frozen predecessor ledger it migrates from, recipient
//! accounts that can run code when they receive tokens, and the factory that
//! creates time-locked holders. The timelock pallet in turn moves funds back
//! out through [`LedgerTransfer`].

#![cfg_attr(not(feature = "std"), no_std)]

use sp_runtime::{DispatchError, DispatchResult};

pub use sp_core::U256;

/// Token amount. 256 bits wide so balances copied from the predecessor ledger
/// never have to be truncated.
pub type Balance = U256;

/// Read-only view of the predecessor ledger.
///
/// Implementations must not have side effects; the migration controller may
/// query the same account several times within one call.
pub trait LegacyLedger<AccountId> {
    /// Total supply of the predecessor at snapshot time.
    fn total_supply() -> Balance;

    /// Balance `who` held in the predecessor at snapshot time.
    fn balance_of(who: &AccountId) -> Balance;
}

/// An empty predecessor: nothing to migrate, target supply of zero.
impl<AccountId> LegacyLedger<AccountId> for () {
    fn total_supply() -> Balance {
        Balance::zero()
    }

    fn balance_of(_who: &AccountId) -> Balance {
        Balance::zero()
    }
}

/// Recipient-side hook for accounts with executable logic attached.
pub trait TokenRecipient<AccountId> {
    /// Whether `who` has executable logic attached right now.
    ///
    /// An entity that is still being constructed reports `false`.
    fn is_callback_capable(who: &AccountId) -> bool;

    /// Notify `recipient` that `amount` tokens arrived from `from`.
    ///
    /// Any error aborts the enclosing transfer.
    fn on_tokens_received(
        recipient: &AccountId,
        from: &AccountId,
        amount: Balance,
        payload: &[u8],
    ) -> DispatchResult;
}

/// No account is callback-capable.
impl<AccountId> TokenRecipient<AccountId> for () {
    fn is_callback_capable(_who: &AccountId) -> bool {
        false
    }

    fn on_tokens_received(
        _recipient: &AccountId,
        _from: &AccountId,
        _amount: Balance,
        _payload: &[u8],
    ) -> DispatchResult {
        Ok(())
    }
}

/// Creates time-locked holders whose balance can be released to a
/// beneficiary once `release_at` (unix seconds) has passed.
pub trait TimeLockFactory<AccountId> {
    /// Create a new holder and return its account.
    fn create(beneficiary: &AccountId, release_at: u64) -> Result<AccountId, DispatchError>;
}

/// Balance queries and transfers on the successor ledger, as seen by pallets
/// that hold tokens on behalf of others.
pub trait LedgerTransfer<AccountId> {
    fn balance_of(who: &AccountId) -> Balance;

    /// Move `amount` from `from` to `to` with the same rules as a user
    /// transfer, including the pause check and recipient callback.
    fn transfer(from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;
}
