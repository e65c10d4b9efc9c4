extern crate alloc;

use crate::*;
use alloc::{vec, vec::Vec};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{
  Get,
  fungible::{Inspect, Mutate},
};
use polkadot_sdk::frame_system::{self, RawOrigin};
use polkadot_sdk::sp_runtime::traits::{Saturating, Zero};
use primitives::CategoryId;

const SEED: u32 = 0;

fn plenty<T: Config>() -> BalanceOf<T> {
  T::Currency::minimum_balance().saturating_mul(1_000_000u32.into())
}

fn funded<T: Config>(name: &'static str, index: u32) -> T::AccountId {
  let who: T::AccountId = account(name, index, SEED);
  T::Currency::set_balance(&who, plenty::<T>());
  who
}

fn beneficiaries<T: Config>(n: u32) -> Vec<T::AccountId> {
  (0..n).map(|i| funded::<T>("beneficiary", i)).collect()
}

fn admin<T: Config>() -> T::AccountId {
  let admin = funded::<T>("admin", 0);
  Admins::<T>::insert(&admin, ());
  admin
}

fn oracle<T: Config>() -> T::AccountId {
  let oracle = funded::<T>("oracle", 0);
  Oracles::<T>::insert(&oracle, ());
  oracle
}

fn max_data<T: Config>() -> Vec<u8> {
  vec![7u8; T::MaxDataLength::get() as usize]
}

/// Registers `owner` with `bens` and a quorum of `required`.
fn register<T: Config>(owner: &T::AccountId, bens: Vec<T::AccountId>, required: u32) {
  Pallet::<T>::register_user(
    RawOrigin::Signed(owner.clone()).into(),
    max_data::<T>(),
    bens,
    required,
  )
  .expect("registration succeeds");
}

fn new_category<T: Config>(admin: &T::AccountId) -> CategoryId {
  let category_id = NextCategoryId::<T>::get();
  Pallet::<T>::create_category(
    RawOrigin::Signed(admin.clone()).into(),
    vec![b'c'; T::MaxNameLength::get() as usize],
  )
  .expect("category creation succeeds");
  category_id
}

/// Percentages for `n` beneficiaries adding up to exactly 100.
fn even_percentages(n: u32) -> Vec<u8> {
  let share = (primitives::params::PERCENT_TOTAL / n) as u8;
  let mut pcts = vec![share; n as usize];
  if let Some(last) = pcts.last_mut() {
    *last = (primitives::params::PERCENT_TOTAL - share as u32 * (n - 1)) as u8;
  }
  pcts
}

fn assert_last_event<T: Config>(event: Event<T>) {
  frame_system::Pallet::<T>::assert_last_event(<T as frame_system::Config>::RuntimeEvent::from(event));
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn add_admin() {
    let caller = admin::<T>();
    let who: T::AccountId = account("new-admin", 0, SEED);

    #[extrinsic_call]
    add_admin(RawOrigin::Signed(caller.clone()), who.clone());

    assert!(Pallet::<T>::is_admin(&who));
  }

  #[benchmark]
  fn remove_admin() {
    let caller = admin::<T>();
    let who: T::AccountId = account("old-admin", 0, SEED);
    Admins::<T>::insert(&who, ());

    #[extrinsic_call]
    remove_admin(RawOrigin::Signed(caller), who.clone());

    assert!(!Pallet::<T>::is_admin(&who));
  }

  #[benchmark]
  fn add_oracle() {
    let caller = admin::<T>();
    let who: T::AccountId = account("new-oracle", 0, SEED);

    #[extrinsic_call]
    add_oracle(RawOrigin::Signed(caller), who.clone());

    assert!(Pallet::<T>::is_oracle(&who));
  }

  #[benchmark]
  fn remove_oracle() {
    let caller = admin::<T>();
    let who = oracle::<T>();

    #[extrinsic_call]
    remove_oracle(RawOrigin::Signed(caller), who.clone());

    assert!(!Pallet::<T>::is_oracle(&who));
  }

  #[benchmark]
  fn register_user() {
    let owner: T::AccountId = whitelisted_caller();
    let max = T::MaxBeneficiaries::get();
    let bens = beneficiaries::<T>(max);

    #[extrinsic_call]
    register_user(RawOrigin::Signed(owner.clone()), max_data::<T>(), bens, max);

    assert!(Pallet::<T>::is_registered(&owner));
  }

  #[benchmark]
  fn update_user_info() {
    let owner: T::AccountId = whitelisted_caller();
    let min = T::MinRequiredSignatures::get();
    let max = T::MaxBeneficiaries::get();
    register::<T>(&owner, beneficiaries::<T>(min), min);
    T::BenchmarkHelper::advance_time(T::UpdateCooldown::get());
    let bens = beneficiaries::<T>(max);

    #[extrinsic_call]
    update_user_info(RawOrigin::Signed(owner.clone()), max_data::<T>(), bens, max);

    assert_eq!(
      Pallet::<T>::user(&owner).map(|record| record.required_signatures),
      Some(max)
    );
  }

  #[benchmark]
  fn verify_death() {
    let oracle = oracle::<T>();
    let owner = funded::<T>("owner", 0);
    let min = T::MinRequiredSignatures::get();
    register::<T>(&owner, beneficiaries::<T>(min), min);

    #[extrinsic_call]
    verify_death(RawOrigin::Signed(oracle), owner.clone());

    assert!(Pallet::<T>::user(&owner).is_some_and(|record| record.is_deceased));
  }

  #[benchmark]
  fn create_category() {
    let caller = admin::<T>();
    let name = vec![b'c'; T::MaxNameLength::get() as usize];

    #[extrinsic_call]
    create_category(RawOrigin::Signed(caller), name);

    assert_eq!(NextCategoryId::<T>::get(), 1);
  }

  #[benchmark]
  fn add_asset_to_category() {
    let admin = admin::<T>();
    let category_id = new_category::<T>(&admin);
    let owner = funded::<T>("owner", 0);
    let amount = T::Currency::minimum_balance().saturating_mul(100u32.into());

    #[extrinsic_call]
    add_asset_to_category(RawOrigin::Signed(owner.clone()), category_id, amount, amount);

    assert_eq!(Pallet::<T>::category_balance(&owner, category_id), amount);
  }

  #[benchmark]
  fn set_category_beneficiaries(b: Linear<1, { T::MaxBeneficiaries::get() }>) {
    let admin = admin::<T>();
    let category_id = new_category::<T>(&admin);
    let owner = funded::<T>("owner", 0);
    let min = T::MinRequiredSignatures::get();
    register::<T>(&owner, beneficiaries::<T>(min), min);
    let bens = beneficiaries::<T>(b);

    #[extrinsic_call]
    set_category_beneficiaries(
      RawOrigin::Signed(owner.clone()),
      category_id,
      bens,
      even_percentages(b),
    );

    assert_last_event::<T>(Event::CategoryBeneficiariesSet {
      category_id,
      by: owner,
    });
  }

  #[benchmark]
  fn sign_for_user() {
    let oracle = oracle::<T>();
    let owner = funded::<T>("owner", 0);
    let max = T::MaxBeneficiaries::get();
    let bens = beneficiaries::<T>(max);
    register::<T>(&owner, bens.clone(), max);
    Pallet::<T>::verify_death(RawOrigin::Signed(oracle).into(), owner.clone())
      .expect("death attested");
    let (last, rest) = bens.split_last().expect("at least one beneficiary");
    for signer in rest {
      Pallet::<T>::sign_for_user(RawOrigin::Signed(signer.clone()).into(), owner.clone())
        .expect("signature accepted");
    }

    // Last signature reaches the quorum
    #[extrinsic_call]
    sign_for_user(RawOrigin::Signed(last.clone()), owner.clone());

    assert_last_event::<T>(Event::QuorumReached { owner });
  }

  #[benchmark]
  fn transfer_assets(
    c: Linear<1, { T::MaxCategoriesPerOwner::get() }>,
    b: Linear<{ T::MinRequiredSignatures::get() }, { T::MaxBeneficiaries::get() }>,
  ) {
    let admin = admin::<T>();
    let oracle = oracle::<T>();
    let owner = funded::<T>("owner", 0);
    let bens = beneficiaries::<T>(b);
    let required = T::MinRequiredSignatures::get();
    register::<T>(&owner, bens.clone(), required);

    let amount = T::Currency::minimum_balance().saturating_mul(100u32.into());
    for _ in 0..c {
      let category_id = new_category::<T>(&admin);
      Pallet::<T>::add_asset_to_category(
        RawOrigin::Signed(owner.clone()).into(),
        category_id,
        amount,
        amount,
      )
      .expect("deposit succeeds");
    }
    Pallet::<T>::verify_death(RawOrigin::Signed(oracle).into(), owner.clone())
      .expect("death attested");
    for signer in bens.iter().take(required as usize) {
      Pallet::<T>::sign_for_user(RawOrigin::Signed(signer.clone()).into(), owner.clone())
        .expect("signature accepted");
    }
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    transfer_assets(RawOrigin::Signed(caller), owner.clone());

    assert!(Pallet::<T>::user(&owner).is_some_and(|record| record.assets_distributed));
    assert!(Pallet::<T>::owner_categories(&owner).is_empty());
  }

  #[benchmark]
  fn pause() {
    let caller = admin::<T>();

    #[extrinsic_call]
    pause(RawOrigin::Signed(caller));

    assert!(Pallet::<T>::is_paused());
  }

  #[benchmark]
  fn unpause() {
    let caller = admin::<T>();
    Paused::<T>::put(true);

    #[extrinsic_call]
    unpause(RawOrigin::Signed(caller));

    assert!(!Pallet::<T>::is_paused());
  }

  #[benchmark]
  fn emergency_withdraw() {
    let caller = admin::<T>();
    T::Currency::set_balance(&Pallet::<T>::account_id(), plenty::<T>());

    #[extrinsic_call]
    emergency_withdraw(RawOrigin::Signed(caller));

    assert!(T::Currency::balance(&Pallet::<T>::account_id()).is_zero());
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
