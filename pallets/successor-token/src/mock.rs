use crate as pallet_successor_token;
use core::{cell::RefCell, time::Duration};
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, UnixTime},
    BoundedVec, PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError, DispatchResult,
};
use std::collections::BTreeMap;
use successor_token_primitives::{Balance, LegacyLedger, TokenRecipient};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        SuccessorToken: pallet_successor_token,
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

pub const OWNER: u64 = 1;
pub const LEGACY_VAULT: u64 = 9;
pub const RELEASE_AT: u64 = 1_700_000_000;

// Recipients with attached logic.
pub const ACCEPTING: u64 = 20;
pub const REJECTING: u64 = 21;
pub const BOUNCING: u64 = 22;
pub const CONSTRUCTING: u64 = 23;

/// How a callback-capable recipient reacts to `on_tokens_received`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Behaviour {
    Accept,
    Reject,
    /// Sends the received amount straight back to the sender.
    Bounce,
    /// Deployment still running; not yet callback-capable.
    UnderConstruction,
}

/// A recorded `on_tokens_received` call: (recipient, from, amount, payload).
pub type Received = (u64, u64, Balance, Vec<u8>);

thread_local! {
    static LEGACY_BALANCES: RefCell<BTreeMap<u64, Balance>> = RefCell::new(BTreeMap::new());
    static LEGACY_TOTAL: RefCell<Balance> = RefCell::new(Balance::zero());
    static CONTRACTS: RefCell<BTreeMap<u64, Behaviour>> = RefCell::new(BTreeMap::new());
    static RECEIVED: RefCell<Vec<Received>> = const { RefCell::new(Vec::new()) };
    static NOW: RefCell<u64> = const { RefCell::new(0) };
}

pub fn bal(amount: u128) -> Balance {
    Balance::from(amount)
}

pub fn set_now(secs: u64) {
    NOW.with(|now| *now.borrow_mut() = secs);
}

pub fn received() -> Vec<Received> {
    RECEIVED.with(|r| r.borrow().clone())
}

pub fn holders(accounts: Vec<u64>) -> BoundedVec<u64, ConstU32<16>> {
    accounts.try_into().unwrap()
}

/// Predecessor ledger backed by thread-local state.
pub struct MockLegacy;
impl LegacyLedger<u64> for MockLegacy {
    fn total_supply() -> Balance {
        LEGACY_TOTAL.with(|total| *total.borrow())
    }

    fn balance_of(who: &u64) -> Balance {
        LEGACY_BALANCES.with(|balances| balances.borrow().get(who).copied().unwrap_or_default())
    }
}

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for MockLegacy {
    fn set_legacy_balance(who: &u64, amount: Balance) {
        LEGACY_BALANCES.with(|balances| balances.borrow_mut().insert(*who, amount));
    }
}

pub struct MockRecipients;
impl TokenRecipient<u64> for MockRecipients {
    fn is_callback_capable(who: &u64) -> bool {
        CONTRACTS.with(|contracts| {
            matches!(
                contracts.borrow().get(who),
                Some(Behaviour::Accept | Behaviour::Reject | Behaviour::Bounce)
            )
        })
    }

    fn on_tokens_received(
        recipient: &u64,
        from: &u64,
        amount: Balance,
        payload: &[u8],
    ) -> DispatchResult {
        RECEIVED.with(|r| r.borrow_mut().push((*recipient, *from, amount, payload.to_vec())));

        match CONTRACTS.with(|contracts| contracts.borrow().get(recipient).copied()) {
            Some(Behaviour::Reject) => Err(DispatchError::Other("recipient rejected")),
            Some(Behaviour::Bounce) => SuccessorToken::do_transfer(recipient, from, amount, &[]),
            _ => Ok(()),
        }
    }
}

pub struct MockTime;
impl UnixTime for MockTime {
    fn now() -> Duration {
        Duration::from_secs(NOW.with(|now| *now.borrow()))
    }
}

parameter_types! {
    pub const TokenPalletId: PalletId = PalletId(*b"py/succt");
    pub const TimelockPalletId: PalletId = PalletId(*b"py/tmlck");
    pub const VaultReleaseTime: u64 = RELEASE_AT;
}

impl pallet_successor_token::Config for Test {
    type LegacySource = MockLegacy;
    type Recipients = MockRecipients;
    type TimeLocks = TokenTimelock;
    type PalletId = TokenPalletId;
    type VaultReleaseTime = VaultReleaseTime;
    type MaxPayloadLen = ConstU32<256>;
    type MaxMigrationBatch = ConstU32<16>;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockLegacy;
}

impl pallet_token_timelock::Config for Test {
    type Ledger = SuccessorToken;
    type UnixTime = MockTime;
    type PalletId = TimelockPalletId;
    type WeightInfo = ();
}

/// Default predecessor: accounts 2, 3 and 4 hold 600, 300 and 100 of a
/// 1_000 total supply.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with_legacy(&[(2, 600), (3, 300), (4, 100)], 1_000)
}

// Build genesis storage with the given predecessor snapshot.
pub fn new_test_ext_with_legacy(
    legacy: &[(u64, u128)],
    legacy_total: u128,
) -> sp_io::TestExternalities {
    LEGACY_BALANCES.with(|balances| {
        *balances.borrow_mut() = legacy.iter().map(|(who, amount)| (*who, bal(*amount))).collect()
    });
    LEGACY_TOTAL.with(|total| *total.borrow_mut() = bal(legacy_total));
    CONTRACTS.with(|contracts| {
        *contracts.borrow_mut() = BTreeMap::from([
            (ACCEPTING, Behaviour::Accept),
            (REJECTING, Behaviour::Reject),
            (BOUNCING, Behaviour::Bounce),
            (CONSTRUCTING, Behaviour::UnderConstruction),
        ])
    });
    RECEIVED.with(|r| r.borrow_mut().clear());
    set_now(0);

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_successor_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Successor Token".to_vec(),
        token_symbol: b"SUC".to_vec(),
        decimals: 18,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Default predecessor fully migrated: the ledger is unpaused and in
/// normal operation.
pub fn new_migrated_ext() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        assert_ok!(SuccessorToken::migrate_balances(
            RuntimeOrigin::signed(OWNER),
            holders(vec![2, 3, 4])
        ));
        assert!(SuccessorToken::initialized());
    });
    ext
}
