//! Digital Legacy Pallet
//!
//! Custody engine for digital inheritance. Owners register an opaque legacy blob, a beneficiary
//! list and a signature quorum, then deposit value into admin-created categories. Once an oracle
//! attests the owner's death and enough beneficiaries sign off, any account may trigger the
//! distribution, which drains the owner's category balances to the beneficiaries according to
//! each category's split.
//!
//! ## Roles
//!
//! - Admins manage roles, create categories, pause the pallet and hold the emergency sweep.
//! - Oracles attest deaths.
//! - Owners and beneficiaries are plain signed accounts.
//!
//! ## Custody
//!
//! All deposits sit on the pallet account derived from `Config::PalletId`. Per-owner,
//! per-category balances are tracked in `OwnerBalances`; `Category::total_assets` and
//! `TotalAssets` are running sums of those balances. `emergency_withdraw` moves the whole
//! custody balance to an admin without touching that accounting, so after a sweep the ledger
//! overstates what the pallet actually holds.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod types;
pub use types::{BeneficiariesOf, Category, Payout, UserRecord, split_amount};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::digital-legacy";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper {
  /// Move the wall clock forward by `secs`.
  fn advance_time(secs: primitives::Moment);
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use crate::types::{BeneficiariesOf, Category, Payout, UserRecord};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      PalletId,
      traits::{
        UnixTime,
        fungible::{Inspect, Mutate},
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::traits::{AccountIdConversion, CheckedAdd, Saturating, Zero},
  };
  use frame::prelude::*;
  use primitives::{CategoryId, Moment};

  pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

  pub type PayoutOf<T> = Payout<<T as frame_system::Config>::AccountId, BalanceOf<T>>;

  /// Categories drained by a distribution and the transfers that pay them out.
  type DistributionPlan<T> = (Vec<(CategoryId, BalanceOf<T>)>, Vec<PayoutOf<T>>);

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Native currency held in custody and paid out to beneficiaries
    type Currency: Inspect<Self::AccountId> + Mutate<Self::AccountId>;

    /// Wall clock used for registration, update cooldown and death timestamps
    type TimeProvider: UnixTime;

    /// Pallet ID deriving the custody account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Upper bound on beneficiaries per record and per category split
    #[pallet::constant]
    type MaxBeneficiaries: Get<u32>;

    /// Lowest quorum an owner may declare
    #[pallet::constant]
    type MinRequiredSignatures: Get<u32>;

    /// Seconds that must pass between two updates of a user record
    #[pallet::constant]
    type UpdateCooldown: Get<Moment>;

    /// Upper bound on the opaque legacy payload
    #[pallet::constant]
    type MaxDataLength: Get<u32>;

    /// Upper bound on a category name
    #[pallet::constant]
    type MaxNameLength: Get<u32>;

    /// Number of distinct categories one owner may hold balances in
    #[pallet::constant]
    type MaxCategoriesPerOwner: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Accounts holding the admin role.
  #[pallet::storage]
  pub type Admins<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Accounts allowed to attest deaths.
  #[pallet::storage]
  pub type Oracles<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Blocks registration, record updates and deposits while set.
  #[pallet::storage]
  pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

  /// Legacy record per registered owner.
  #[pallet::storage]
  pub type Users<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, UserRecord<T>, OptionQuery>;

  /// Number of entries in `Users`.
  #[pallet::storage]
  pub type TotalUsers<T> = StorageValue<_, u32, ValueQuery>;

  /// Id handed to the next created category.
  #[pallet::storage]
  pub type NextCategoryId<T> = StorageValue<_, CategoryId, ValueQuery>;

  /// Category registry. Ids are never reused.
  #[pallet::storage]
  pub type Categories<T: Config> =
    StorageMap<_, Twox64Concat, CategoryId, Category<T>, OptionQuery>;

  /// Value each owner has deposited into each category and not yet distributed.
  #[pallet::storage]
  pub type OwnerBalances<T: Config> = StorageDoubleMap<
    _,
    Twox64Concat,
    CategoryId,
    Blake2_128Concat,
    T::AccountId,
    BalanceOf<T>,
    ValueQuery,
  >;

  /// Categories an owner has deposited into, in first-deposit order.
  #[pallet::storage]
  pub type OwnerCategories<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<CategoryId, T::MaxCategoriesPerOwner>,
    ValueQuery,
  >;

  /// Value held on behalf of owners across every category.
  #[pallet::storage]
  pub type TotalAssets<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    AdminAdded {
      admin: T::AccountId,
      by: T::AccountId,
    },
    AdminRemoved {
      admin: T::AccountId,
      by: T::AccountId,
    },
    OracleAdded {
      oracle: T::AccountId,
      by: T::AccountId,
    },
    OracleRemoved {
      oracle: T::AccountId,
      by: T::AccountId,
    },
    UserRegistered {
      owner: T::AccountId,
      beneficiaries: u32,
      required_signatures: u32,
    },
    UserUpdated {
      owner: T::AccountId,
      beneficiaries: u32,
      required_signatures: u32,
    },
    /// An oracle attested the owner's death.
    DeathVerified {
      owner: T::AccountId,
      oracle: T::AccountId,
      death_date: Moment,
    },
    CategoryCreated {
      category_id: CategoryId,
      name: Vec<u8>,
    },
    AssetAdded {
      owner: T::AccountId,
      category_id: CategoryId,
      amount: BalanceOf<T>,
    },
    /// The category split was overwritten. Applies to every owner in the category.
    CategoryBeneficiariesSet {
      category_id: CategoryId,
      by: T::AccountId,
    },
    Signed {
      owner: T::AccountId,
      beneficiary: T::AccountId,
      signatures: u32,
    },
    /// Signature count reached the owner's quorum.
    QuorumReached {
      owner: T::AccountId,
    },
    BeneficiaryPaid {
      owner: T::AccountId,
      beneficiary: T::AccountId,
      category_id: CategoryId,
      amount: BalanceOf<T>,
    },
    AssetsDistributed {
      owner: T::AccountId,
      total: BalanceOf<T>,
      triggered_by: T::AccountId,
    },
    Paused {
      by: T::AccountId,
    },
    Unpaused {
      by: T::AccountId,
    },
    /// Custody was swept outside the normal accounting.
    EmergencyWithdrawal {
      to: T::AccountId,
      amount: BalanceOf<T>,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller lacks the role the call requires
    NotAuthorized,
    /// Account already holds the admin role
    AlreadyAdmin,
    /// Account does not hold the admin role
    NotAdmin,
    /// Account already holds the oracle role
    AlreadyOracle,
    /// Account does not hold the oracle role
    NotOracle,
    /// Admins cannot revoke their own role
    CannotRemoveSelf,
    /// Registration, updates and deposits are paused
    ContractPaused,
    /// Caller already has a legacy record
    AlreadyRegistered,
    /// Account has no legacy record
    NotRegistered,
    /// Legacy payload is empty
    EmptyData,
    /// Legacy payload exceeds `MaxDataLength`
    DataTooLong,
    /// Beneficiary list is empty
    TooFewBeneficiaries,
    /// Beneficiary list exceeds `MaxBeneficiaries`
    TooManyBeneficiaries,
    /// Quorum is below `MinRequiredSignatures` or above the beneficiary count
    InvalidSignatureCount,
    /// `UpdateCooldown` has not elapsed since the last update
    CooldownNotOver,
    /// Owner is already marked deceased
    UserDeceased,
    /// Category id was never allocated
    CategoryNotFound,
    /// Category name exceeds `MaxNameLength`
    NameTooLong,
    /// Category ids are exhausted
    CategoryIdOverflow,
    /// Attached value differs from the declared amount
    AmountMismatch,
    /// Deposit amount is zero
    ZeroAmount,
    /// Owner already holds balances in `MaxCategoriesPerOwner` categories
    TooManyCategories,
    /// Beneficiary and percentage lists differ in length
    LengthMismatch,
    /// Percentages do not add up to exactly 100
    InvalidPercentages,
    /// Owner has not been attested deceased
    UserNotDeceased,
    /// Caller is not on the owner's beneficiary list
    NotABeneficiary,
    /// Caller already signed for this owner
    AlreadySigned,
    /// Fewer signatures than the owner's quorum
    QuorumNotMet,
    /// Owner holds no balance in any category
    NothingToDistribute,
    /// Balance arithmetic overflowed
    Overflow,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::MinRequiredSignatures::get() >= 1,
        "MinRequiredSignatures must be at least 1"
      );
      assert!(
        T::MaxBeneficiaries::get() >= T::MinRequiredSignatures::get(),
        "MaxBeneficiaries must admit the minimum quorum"
      );
    }

    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Grant the admin role. Admin only.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::add_admin())]
    pub fn add_admin(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      ensure!(!Admins::<T>::contains_key(&who), Error::<T>::AlreadyAdmin);
      Admins::<T>::insert(&who, ());
      Self::deposit_event(Event::AdminAdded {
        admin: who,
        by: caller,
      });
      Ok(())
    }

    /// Revoke the admin role. Admin only, and never on the caller itself, so the admin set
    /// cannot become empty.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::remove_admin())]
    pub fn remove_admin(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      ensure!(who != caller, Error::<T>::CannotRemoveSelf);
      Self::ensure_admin(&caller)?;
      ensure!(Admins::<T>::contains_key(&who), Error::<T>::NotAdmin);
      Admins::<T>::remove(&who);
      Self::deposit_event(Event::AdminRemoved {
        admin: who,
        by: caller,
      });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::add_oracle())]
    pub fn add_oracle(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      ensure!(!Oracles::<T>::contains_key(&who), Error::<T>::AlreadyOracle);
      Oracles::<T>::insert(&who, ());
      Self::deposit_event(Event::OracleAdded {
        oracle: who,
        by: caller,
      });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::remove_oracle())]
    pub fn remove_oracle(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      ensure!(Oracles::<T>::contains_key(&who), Error::<T>::NotOracle);
      Oracles::<T>::remove(&who);
      Self::deposit_event(Event::OracleRemoved {
        oracle: who,
        by: caller,
      });
      Ok(())
    }

    /// Create the caller's legacy record.
    ///
    /// - `data`: opaque payload, stored as-is.
    /// - `beneficiaries`: 1..=`MaxBeneficiaries` accounts, order matters for rounding.
    /// - `required_signatures`: quorum in `MinRequiredSignatures..=beneficiaries.len()`.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::register_user())]
    pub fn register_user(
      origin: OriginFor<T>,
      data: Vec<u8>,
      beneficiaries: Vec<T::AccountId>,
      required_signatures: u32,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::ensure_not_paused()?;
      ensure!(
        !Users::<T>::contains_key(&owner),
        Error::<T>::AlreadyRegistered
      );
      let (data, beneficiaries) =
        Self::validate_legacy(data, beneficiaries, required_signatures)?;
      let beneficiary_count = beneficiaries.len() as u32;
      let now = Self::now();
      Users::<T>::insert(
        &owner,
        UserRecord {
          data,
          beneficiaries,
          required_signatures,
          is_deceased: false,
          registered_at: now,
          last_updated: now,
          death_date: None,
          signatures: BoundedVec::new(),
          assets_distributed: false,
        },
      );
      TotalUsers::<T>::mutate(|count| *count = count.saturating_add(1));
      log::debug!(
        target: crate::LOG_TARGET,
        "registered {:?}: {} beneficiaries, quorum {}",
        owner,
        beneficiary_count,
        required_signatures,
      );
      Self::deposit_event(Event::UserRegistered {
        owner,
        beneficiaries: beneficiary_count,
        required_signatures,
      });
      Ok(())
    }

    /// Replace the caller's payload, beneficiaries and quorum.
    ///
    /// Same validation as `register_user`, only while alive and once `UpdateCooldown` has
    /// elapsed since registration or the previous update.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::update_user_info())]
    pub fn update_user_info(
      origin: OriginFor<T>,
      data: Vec<u8>,
      beneficiaries: Vec<T::AccountId>,
      required_signatures: u32,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::ensure_not_paused()?;
      let now = Self::now();
      Users::<T>::try_mutate(&owner, |maybe_record| -> DispatchResult {
        let record = maybe_record.as_mut().ok_or(Error::<T>::NotRegistered)?;
        ensure!(!record.is_deceased, Error::<T>::UserDeceased);
        ensure!(
          now.saturating_sub(record.last_updated) >= T::UpdateCooldown::get(),
          Error::<T>::CooldownNotOver
        );
        let (data, beneficiaries) =
          Self::validate_legacy(data, beneficiaries, required_signatures)?;
        record.data = data;
        record.beneficiaries = beneficiaries;
        record.required_signatures = required_signatures;
        record.last_updated = now;
        Self::deposit_event(Event::UserUpdated {
          owner: owner.clone(),
          beneficiaries: record.beneficiaries.len() as u32,
          required_signatures,
        });
        Ok(())
      })
    }

    /// Attest the owner's death. Oracle only.
    ///
    /// Attesting an owner that is already deceased succeeds without changing anything.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::verify_death())]
    pub fn verify_death(origin: OriginFor<T>, owner: T::AccountId) -> DispatchResult {
      let oracle = ensure_signed(origin)?;
      ensure!(
        Oracles::<T>::contains_key(&oracle),
        Error::<T>::NotAuthorized
      );
      Users::<T>::try_mutate(&owner, |maybe_record| -> DispatchResult {
        let record = maybe_record.as_mut().ok_or(Error::<T>::NotRegistered)?;
        if record.is_deceased {
          log::debug!(
            target: crate::LOG_TARGET,
            "death of {:?} already attested, ignoring",
            owner,
          );
          return Ok(());
        }
        let now = Self::now();
        record.is_deceased = true;
        record.death_date = Some(now);
        log::info!(
          target: crate::LOG_TARGET,
          "death of {:?} attested by {:?}",
          owner,
          oracle,
        );
        Self::deposit_event(Event::DeathVerified {
          owner: owner.clone(),
          oracle,
          death_date: now,
        });
        Ok(())
      })
    }

    /// Allocate the next category id. Admin only.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::create_category())]
    pub fn create_category(origin: OriginFor<T>, name: Vec<u8>) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      let bounded: BoundedVec<u8, T::MaxNameLength> =
        name.clone().try_into().map_err(|_| Error::<T>::NameTooLong)?;
      let category_id = NextCategoryId::<T>::get();
      let next = category_id
        .checked_add(1)
        .ok_or(Error::<T>::CategoryIdOverflow)?;
      Categories::<T>::insert(category_id, Category::new(bounded));
      NextCategoryId::<T>::put(next);
      Self::deposit_event(Event::CategoryCreated { category_id, name });
      Ok(())
    }

    /// Deposit into a category on the caller's own behalf.
    ///
    /// `value` is the funds attached to the call and is moved into custody; `amount` is the
    /// deposit being declared. The two must agree. Registration is not required; owners
    /// attested deceased are rejected.
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::add_asset_to_category())]
    pub fn add_asset_to_category(
      origin: OriginFor<T>,
      category_id: CategoryId,
      amount: BalanceOf<T>,
      value: BalanceOf<T>,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::ensure_not_paused()?;
      ensure!(
        !Users::<T>::get(&owner).is_some_and(|record| record.is_deceased),
        Error::<T>::UserDeceased
      );
      ensure!(
        Categories::<T>::contains_key(category_id),
        Error::<T>::CategoryNotFound
      );
      ensure!(value == amount, Error::<T>::AmountMismatch);
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

      T::Currency::transfer(
        &owner,
        &Self::account_id(),
        value,
        Preservation::Preserve,
      )?;

      OwnerBalances::<T>::try_mutate(category_id, &owner, |balance| -> DispatchResult {
        *balance = balance.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
        Ok(())
      })?;
      Categories::<T>::try_mutate(category_id, |maybe_category| -> DispatchResult {
        let category = maybe_category
          .as_mut()
          .ok_or(Error::<T>::CategoryNotFound)?;
        category.total_assets = category
          .total_assets
          .checked_add(&amount)
          .ok_or(Error::<T>::Overflow)?;
        Ok(())
      })?;
      TotalAssets::<T>::try_mutate(|total| -> DispatchResult {
        *total = total.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
        Ok(())
      })?;
      OwnerCategories::<T>::try_mutate(&owner, |categories| -> DispatchResult {
        if !categories.contains(&category_id) {
          categories
            .try_push(category_id)
            .map_err(|_| Error::<T>::TooManyCategories)?;
        }
        Ok(())
      })?;

      log::debug!(
        target: crate::LOG_TARGET,
        "{:?} deposited {:?} into category {}",
        owner,
        amount,
        category_id,
      );
      Self::deposit_event(Event::AssetAdded {
        owner,
        category_id,
        amount,
      });
      Ok(())
    }

    /// Overwrite the category's beneficiary/percentage split.
    ///
    /// The split belongs to the category, not to the caller: it applies to every owner with a
    /// balance in the category and the last writer wins. Caller must be a living registered
    /// owner; percentages must add up to exactly 100.
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::set_category_beneficiaries(beneficiaries.len() as u32))]
    pub fn set_category_beneficiaries(
      origin: OriginFor<T>,
      category_id: CategoryId,
      beneficiaries: Vec<T::AccountId>,
      percentages: Vec<u8>,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      let record = Users::<T>::get(&caller).ok_or(Error::<T>::NotRegistered)?;
      ensure!(!record.is_deceased, Error::<T>::UserDeceased);
      ensure!(
        Categories::<T>::contains_key(category_id),
        Error::<T>::CategoryNotFound
      );
      ensure!(
        beneficiaries.len() == percentages.len(),
        Error::<T>::LengthMismatch
      );
      let total: u32 = percentages.iter().map(|pct| u32::from(*pct)).sum();
      ensure!(
        total == primitives::params::PERCENT_TOTAL,
        Error::<T>::InvalidPercentages
      );
      let beneficiaries: BeneficiariesOf<T> = beneficiaries
        .try_into()
        .map_err(|_| Error::<T>::TooManyBeneficiaries)?;
      let percentages: BoundedVec<u8, T::MaxBeneficiaries> = percentages
        .try_into()
        .map_err(|_| Error::<T>::TooManyBeneficiaries)?;

      Categories::<T>::try_mutate(category_id, |maybe_category| -> DispatchResult {
        let category = maybe_category
          .as_mut()
          .ok_or(Error::<T>::CategoryNotFound)?;
        category.beneficiaries = beneficiaries;
        category.percentages = percentages;
        Ok(())
      })?;
      Self::deposit_event(Event::CategoryBeneficiariesSet {
        category_id,
        by: caller,
      });
      Ok(())
    }

    /// Sign off on the release of a deceased owner's assets. Beneficiaries only, once each.
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::sign_for_user())]
    pub fn sign_for_user(origin: OriginFor<T>, owner: T::AccountId) -> DispatchResult {
      let beneficiary = ensure_signed(origin)?;
      Users::<T>::try_mutate(&owner, |maybe_record| -> DispatchResult {
        let record = maybe_record
          .as_mut()
          .filter(|record| record.is_deceased)
          .ok_or(Error::<T>::UserNotDeceased)?;
        ensure!(
          record.is_beneficiary(&beneficiary),
          Error::<T>::NotABeneficiary
        );
        ensure!(
          !record.has_signed(&beneficiary),
          Error::<T>::AlreadySigned
        );
        record
          .signatures
          .try_push(beneficiary.clone())
          .map_err(|_| Error::<T>::TooManyBeneficiaries)?;
        let signatures = record.signature_count();
        log::debug!(
          target: crate::LOG_TARGET,
          "{:?} signed for {:?} ({}/{})",
          beneficiary,
          owner,
          signatures,
          record.required_signatures,
        );
        Self::deposit_event(Event::Signed {
          owner: owner.clone(),
          beneficiary,
          signatures,
        });
        if signatures == record.required_signatures {
          Self::deposit_event(Event::QuorumReached {
            owner: owner.clone(),
          });
        }
        Ok(())
      })
    }

    /// Pay out every category balance of a deceased owner whose quorum is met.
    ///
    /// Callable by any signed account. The ledger is settled before value leaves custody;
    /// if any single payout fails the whole call fails and nothing is settled.
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::transfer_assets(
      T::MaxCategoriesPerOwner::get(),
      T::MaxBeneficiaries::get(),
    ))]
    pub fn transfer_assets(origin: OriginFor<T>, owner: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      let mut record = Users::<T>::get(&owner)
        .filter(|record| record.is_deceased)
        .ok_or(Error::<T>::UserNotDeceased)?;
      ensure!(record.has_quorum(), Error::<T>::QuorumNotMet);

      let (drained, payouts) = Self::plan_distribution(&owner, &record)?;
      let total = drained
        .iter()
        .fold(BalanceOf::<T>::zero(), |acc, (_, amount)| {
          acc.saturating_add(*amount)
        });
      ensure!(!total.is_zero(), Error::<T>::NothingToDistribute);

      for (category_id, amount) in &drained {
        OwnerBalances::<T>::remove(category_id, &owner);
        Categories::<T>::mutate(category_id, |maybe_category| {
          if let Some(category) = maybe_category {
            category.total_assets = category.total_assets.saturating_sub(*amount);
          }
        });
      }
      TotalAssets::<T>::mutate(|held| *held = held.saturating_sub(total));
      OwnerCategories::<T>::remove(&owner);
      record.assets_distributed = true;
      Users::<T>::insert(&owner, record);

      let custody = Self::account_id();
      for payout in payouts {
        T::Currency::transfer(
          &custody,
          &payout.beneficiary,
          payout.amount,
          Preservation::Expendable,
        )?;
        Self::deposit_event(Event::BeneficiaryPaid {
          owner: owner.clone(),
          beneficiary: payout.beneficiary,
          category_id: payout.category_id,
          amount: payout.amount,
        });
      }

      log::info!(
        target: crate::LOG_TARGET,
        "distributed {:?} of {:?} across {} categories",
        total,
        owner,
        drained.len(),
      );
      Self::deposit_event(Event::AssetsDistributed {
        owner,
        total,
        triggered_by: caller,
      });
      Ok(())
    }

    /// Block registration, updates and deposits. Admin only.
    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      Paused::<T>::put(true);
      Self::deposit_event(Event::Paused { by: caller });
      Ok(())
    }

    #[pallet::call_index(13)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::ensure_admin(&caller)?;
      Paused::<T>::put(false);
      Self::deposit_event(Event::Unpaused { by: caller });
      Ok(())
    }

    /// Sweep the entire custody balance to the calling admin.
    ///
    /// Break-glass control: owner balances and category totals are left as they were, so
    /// `TotalAssets` no longer matches the custody balance afterwards.
    #[pallet::call_index(14)]
    #[pallet::weight(T::WeightInfo::emergency_withdraw())]
    pub fn emergency_withdraw(origin: OriginFor<T>) -> DispatchResult {
      let admin = ensure_signed(origin)?;
      Self::ensure_admin(&admin)?;
      let custody = Self::account_id();
      let amount =
        T::Currency::reducible_balance(&custody, Preservation::Expendable, Fortitude::Polite);
      if !amount.is_zero() {
        T::Currency::transfer(&custody, &admin, amount, Preservation::Expendable)?;
      }
      log::warn!(
        target: crate::LOG_TARGET,
        "emergency withdrawal of {:?} to {:?}",
        amount,
        admin,
      );
      Self::deposit_event(Event::EmergencyWithdrawal { to: admin, amount });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Custody account holding every deposit.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn is_admin(who: &T::AccountId) -> bool {
      Admins::<T>::contains_key(who)
    }

    pub fn is_oracle(who: &T::AccountId) -> bool {
      Oracles::<T>::contains_key(who)
    }

    pub fn is_paused() -> bool {
      Paused::<T>::get()
    }

    pub fn is_registered(who: &T::AccountId) -> bool {
      Users::<T>::contains_key(who)
    }

    pub fn user(owner: &T::AccountId) -> Option<UserRecord<T>> {
      Users::<T>::get(owner)
    }

    /// `None` for an id that was never allocated.
    pub fn category(category_id: CategoryId) -> Option<Category<T>> {
      Categories::<T>::get(category_id)
    }

    pub fn category_balance(owner: &T::AccountId, category_id: CategoryId) -> BalanceOf<T> {
      OwnerBalances::<T>::get(category_id, owner)
    }

    pub fn owner_categories(owner: &T::AccountId) -> Vec<CategoryId> {
      OwnerCategories::<T>::get(owner).into_inner()
    }

    pub fn total_users() -> u32 {
      TotalUsers::<T>::get()
    }

    pub fn total_assets() -> BalanceOf<T> {
      TotalAssets::<T>::get()
    }

    pub fn next_category_id() -> CategoryId {
      NextCategoryId::<T>::get()
    }

    /// Whether the owner's signatures meet the declared quorum.
    pub fn has_quorum(owner: &T::AccountId) -> bool {
      Users::<T>::get(owner).is_some_and(|record| record.has_quorum())
    }

    fn now() -> Moment {
      T::TimeProvider::now().as_secs()
    }

    fn ensure_admin(who: &T::AccountId) -> DispatchResult {
      ensure!(Admins::<T>::contains_key(who), Error::<T>::NotAuthorized);
      Ok(())
    }

    fn ensure_not_paused() -> DispatchResult {
      ensure!(!Paused::<T>::get(), Error::<T>::ContractPaused);
      Ok(())
    }

    fn validate_legacy(
      data: Vec<u8>,
      beneficiaries: Vec<T::AccountId>,
      required_signatures: u32,
    ) -> Result<(BoundedVec<u8, T::MaxDataLength>, BeneficiariesOf<T>), DispatchError> {
      ensure!(!data.is_empty(), Error::<T>::EmptyData);
      let data: BoundedVec<u8, T::MaxDataLength> =
        data.try_into().map_err(|_| Error::<T>::DataTooLong)?;
      ensure!(!beneficiaries.is_empty(), Error::<T>::TooFewBeneficiaries);
      let beneficiaries: BeneficiariesOf<T> = beneficiaries
        .try_into()
        .map_err(|_| Error::<T>::TooManyBeneficiaries)?;
      ensure!(
        required_signatures >= T::MinRequiredSignatures::get()
          && required_signatures <= beneficiaries.len() as u32,
        Error::<T>::InvalidSignatureCount
      );
      Ok((data, beneficiaries))
    }

    /// Walks the owner's categories and splits every non-zero balance.
    fn plan_distribution(
      owner: &T::AccountId,
      record: &UserRecord<T>,
    ) -> Result<DistributionPlan<T>, DispatchError> {
      let mut drained = Vec::new();
      let mut payouts = Vec::new();
      for category_id in OwnerCategories::<T>::get(owner) {
        let balance = OwnerBalances::<T>::get(category_id, owner);
        if balance.is_zero() {
          continue;
        }
        let category = Categories::<T>::get(category_id).ok_or(Error::<T>::CategoryNotFound)?;
        for (beneficiary, amount) in category.split(balance, &record.beneficiaries) {
          if amount.is_zero() {
            continue;
          }
          payouts.push(Payout {
            category_id,
            beneficiary,
            amount,
          });
        }
        drained.push((category_id, balance));
      }
      Ok((drained, payouts))
    }

    /// Checks the ledger: every category total equals the sum of its owner balances, the
    /// global total equals the sum of category totals and the user counter matches `Users`.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
      let mut held = BalanceOf::<T>::zero();
      for (category_id, category) in Categories::<T>::iter() {
        let owners_sum = OwnerBalances::<T>::iter_prefix_values(category_id)
          .fold(BalanceOf::<T>::zero(), |acc, balance| {
            acc.saturating_add(balance)
          });
        ensure!(
          owners_sum == category.total_assets,
          "category total diverges from owner balances"
        );
        held = held.saturating_add(category.total_assets);
      }
      ensure!(
        held == TotalAssets::<T>::get(),
        "TotalAssets diverges from category totals"
      );
      ensure!(
        Users::<T>::iter_keys().count() as u32 == TotalUsers::<T>::get(),
        "TotalUsers diverges from registered records"
      );
      Ok(())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Initial admin set. Must not be empty.
    pub admins: Vec<T::AccountId>,
    pub oracles: Vec<T::AccountId>,
    pub paused: bool,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      assert!(
        !self.admins.is_empty(),
        "digital-legacy genesis needs at least one admin"
      );
      for admin in &self.admins {
        Admins::<T>::insert(admin, ());
      }
      for oracle in &self.oracles {
        Oracles::<T>::insert(oracle, ());
      }
      Paused::<T>::put(self.paused);
      // Custody survives a zero balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
