use crate as pallet_digital_legacy;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{Moment, params};

pub type AccountId = u64;
pub type Balance = u128;

pub const ADMIN: AccountId = 1;
pub const ORACLE: AccountId = 2;
pub const OWNER: AccountId = 10;
pub const ALICE: AccountId = 11;
pub const BOB: AccountId = 12;
pub const CHARLIE: AccountId = 13;
pub const STRANGER: AccountId = 99;

pub const UNIT: Balance = 1_000_000_000_000;
pub const EXISTENTIAL_DEPOSIT: Balance = 100;
pub const INITIAL_BALANCE: Balance = 1_000 * UNIT;

/// Wall clock at the start of every test, in seconds.
pub const GENESIS_TIME: Moment = 1_700_000_000;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Timestamp: polkadot_sdk::pallet_timestamp,
    DigitalLegacy: pallet_digital_legacy,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

pub struct LegacyPalletId;
impl Get<PalletId> for LegacyPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::DIGITAL_LEGACY_PALLET_ID)
  }
}

impl pallet_digital_legacy::Config for Test {
  type Currency = Balances;
  type TimeProvider = Timestamp;
  type PalletId = LegacyPalletId;
  type MaxBeneficiaries = ConstU32<{ params::MAX_BENEFICIARIES }>;
  type MinRequiredSignatures = ConstU32<{ params::MIN_REQUIRED_SIGNATURES }>;
  type UpdateCooldown = ConstU64<{ params::UPDATE_COOLDOWN_SECS }>;
  type MaxDataLength = ConstU32<{ params::MAX_DATA_LENGTH }>;
  type MaxNameLength = ConstU32<{ params::MAX_NAME_LENGTH }>;
  type MaxCategoriesPerOwner = ConstU32<4>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = TimestampBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TimestampBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper for TimestampBenchmarkHelper {
  fn advance_time(secs: Moment) {
    let now = polkadot_sdk::pallet_timestamp::Now::<Test>::get();
    polkadot_sdk::pallet_timestamp::Now::<Test>::put(now.saturating_add(secs.saturating_mul(1_000)));
  }
}

/// Moves the wall clock to `secs` after the Unix epoch.
pub fn set_now(secs: Moment) {
  Timestamp::set_timestamp(secs * 1_000);
}

/// Moves the wall clock forward by `secs`.
pub fn advance(secs: Moment) {
  set_now(now() + secs);
}

pub fn now() -> Moment {
  Timestamp::get() / 1_000
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: [ADMIN, ORACLE, OWNER, ALICE, BOB, CHARLIE, STRANGER]
      .into_iter()
      .map(|who| (who, INITIAL_BALANCE))
      .collect(),
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Custody account gets a provider ref at genesis
  pallet_digital_legacy::GenesisConfig::<Test> {
    admins: vec![ADMIN],
    oracles: vec![ORACLE],
    paused: false,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    set_now(GENESIS_TIME);
  });
  ext
}
