use crate as pallet_token_timelock;
use core::{cell::RefCell, time::Duration};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, UnixTime},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError, DispatchResult,
};
use std::collections::BTreeMap;
use successor_token_primitives::{Balance, LedgerTransfer};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenTimelock: pallet_token_timelock,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

pub const BENEFICIARY: u64 = 7;
pub const RELEASE_AT: u64 = 1_700_000_000;

thread_local! {
    static NOW: RefCell<u64> = const { RefCell::new(0) };
    static LEDGER: RefCell<BTreeMap<u64, Balance>> = RefCell::new(BTreeMap::new());
    static LEDGER_PAUSED: RefCell<bool> = const { RefCell::new(false) };
}

pub fn set_now(secs: u64) {
    NOW.with(|now| *now.borrow_mut() = secs);
}

pub fn set_ledger_paused(paused: bool) {
    LEDGER_PAUSED.with(|p| *p.borrow_mut() = paused);
}

pub fn credit(who: u64, amount: u128) {
    LEDGER.with(|ledger| {
        let mut ledger = ledger.borrow_mut();
        let balance = ledger.entry(who).or_default();
        *balance = *balance + Balance::from(amount);
    });
}

pub fn ledger_balance(who: u64) -> Balance {
    LEDGER.with(|ledger| ledger.borrow().get(&who).copied().unwrap_or_default())
}

pub struct MockTime;
impl UnixTime for MockTime {
    fn now() -> Duration {
        Duration::from_secs(NOW.with(|now| *now.borrow()))
    }
}

/// Minimal ledger standing in for the successor token pallet.
pub struct MockLedger;
impl LedgerTransfer<u64> for MockLedger {
    fn balance_of(who: &u64) -> Balance {
        ledger_balance(*who)
    }

    fn transfer(from: &u64, to: &u64, amount: Balance) -> DispatchResult {
        if LEDGER_PAUSED.with(|p| *p.borrow()) {
            return Err(DispatchError::Other("ledger paused"));
        }
        LEDGER.with(|ledger| {
            let mut ledger = ledger.borrow_mut();
            let from_balance = ledger.get(from).copied().unwrap_or_default();
            let remaining =
                from_balance.checked_sub(amount).ok_or(DispatchError::Other("insufficient"))?;
            ledger.insert(*from, remaining);
            let to_balance = ledger.get(to).copied().unwrap_or_default();
            ledger.insert(*to, to_balance + amount);
            Ok(())
        })
    }
}

parameter_types! {
    pub const TimelockPalletId: PalletId = PalletId(*b"py/tmlck");
}

impl pallet_token_timelock::Config for Test {
    type Ledger = MockLedger;
    type UnixTime = MockTime;
    type PalletId = TimelockPalletId;
    type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    set_now(0);
    set_ledger_paused(false);
    LEDGER.with(|ledger| ledger.borrow_mut().clear());

    let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
