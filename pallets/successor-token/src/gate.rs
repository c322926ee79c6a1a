//! Transfer gate: plain transfers versus transfers that notify the recipient.
//!
//! A recipient is notified when all of the following hold:
//!
//! - the protocol is active,
//! - the recipient currently has executable logic attached
//!   ([`TokenRecipient::is_callback_capable`]),
//! - the owner has not listed it in `SupportedRecipients`,
//! - the sender has not acknowledged it in `Acknowledgements`.
//!
//! The ledger is updated first and the recipient is called afterwards. Both
//! run in one storage layer, so a failing callback undoes the ledger update.
//! A recipient that calls back into the ledger sees the updated balances and
//! passes through the same checks as any other caller.

use frame_support::{dispatch::DispatchResult, storage::with_storage_layer};

use crate::{
    Acknowledgements, Balance, Balances, Config, LedgerTransfer, Pallet, ProtocolActive,
    SupportedRecipients, TokenRecipient, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Whether `who` has executable logic attached right now. Accounts still
    /// under construction report `false`.
    pub fn is_callback_capable(who: &T::AccountId) -> bool {
        T::Recipients::is_callback_capable(who)
    }

    /// Whether a transfer from `from` to `to` would notify `to`.
    pub fn requires_callback(from: &T::AccountId, to: &T::AccountId) -> bool {
        ProtocolActive::<T>::get() &&
            Self::is_callback_capable(to) &&
            !SupportedRecipients::<T>::get(to) &&
            !Acknowledgements::<T>::get(from, to)
    }

    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
        payload: &[u8],
    ) -> DispatchResult {
        with_storage_layer(|| {
            Self::move_balance(from, to, amount)?;
            Self::notify_recipient(from, to, amount, payload)
        })
    }

    /// Same gate as [`Self::do_transfer`], keyed on the debited account.
    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> DispatchResult {
        with_storage_layer(|| {
            Self::spend_and_move(spender, from, to, amount)?;
            Self::notify_recipient(from, to, amount, &[])
        })
    }

    fn notify_recipient(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
        payload: &[u8],
    ) -> DispatchResult {
        if !Self::requires_callback(from, to) {
            return Ok(());
        }

        log::debug!(target: LOG_TARGET, "notifying recipient {:?} of {:?} from {:?}", to, amount, from);
        T::Recipients::on_tokens_received(to, from, amount, payload)
    }
}

impl<T: Config> LedgerTransfer<T::AccountId> for Pallet<T> {
    fn balance_of(who: &T::AccountId) -> Balance {
        Balances::<T>::get(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        Self::ensure_unpaused()?;
        Self::do_transfer(from, to, amount, &[])
    }
}
