//! Value types stored by the legacy pallet and the payout arithmetic.

use crate::{BalanceOf, Config};
use alloc::vec::Vec;
use frame::deps::sp_runtime::{
  Percent,
  traits::{AtLeast32BitUnsigned, Saturating, Zero},
};
use frame::prelude::*;
use primitives::{CategoryId, Moment};

/// Bounded list of principals, used for beneficiary lists, category splits and signer sets.
pub type BeneficiariesOf<T> =
  BoundedVec<<T as frame_system::Config>::AccountId, <T as Config>::MaxBeneficiaries>;

/// Per-owner legacy record.
///
/// Presence in `Users` means the owner is registered. The `data` blob is opaque and is never
/// interpreted by the pallet.
#[derive(
  CloneNoBound,
  PartialEqNoBound,
  EqNoBound,
  RuntimeDebugNoBound,
  Encode,
  Decode,
  TypeInfo,
  MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound())]
pub struct UserRecord<T: Config> {
  /// Opaque legacy payload, never empty.
  pub data: BoundedVec<u8, T::MaxDataLength>,
  /// Beneficiaries in declaration order. Duplicates are not rejected.
  pub beneficiaries: BeneficiariesOf<T>,
  /// Quorum of beneficiary signatures required before distribution.
  pub required_signatures: u32,
  pub is_deceased: bool,
  pub registered_at: Moment,
  pub last_updated: Moment,
  pub death_date: Option<Moment>,
  /// Beneficiaries that signed off on the release, in signing order.
  pub signatures: BeneficiariesOf<T>,
  /// Set once the owner's balances have been paid out.
  pub assets_distributed: bool,
}

impl<T: Config> UserRecord<T> {
  pub fn is_beneficiary(&self, who: &T::AccountId) -> bool {
    self.beneficiaries.contains(who)
  }

  pub fn has_signed(&self, who: &T::AccountId) -> bool {
    self.signatures.contains(who)
  }

  pub fn signature_count(&self) -> u32 {
    self.signatures.len() as u32
  }

  pub fn has_quorum(&self) -> bool {
    self.signature_count() >= self.required_signatures
  }
}

/// A named pool of deposited value.
///
/// `beneficiaries` and `percentages` are parallel; both empty means no override is set and the
/// owner's own beneficiary list is split equally.
#[derive(
  CloneNoBound,
  PartialEqNoBound,
  EqNoBound,
  RuntimeDebugNoBound,
  Encode,
  Decode,
  TypeInfo,
  MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound())]
pub struct Category<T: Config> {
  pub name: BoundedVec<u8, T::MaxNameLength>,
  /// Sum of every owner's balance in this category.
  pub total_assets: BalanceOf<T>,
  pub beneficiaries: BeneficiariesOf<T>,
  pub percentages: BoundedVec<u8, T::MaxBeneficiaries>,
}

impl<T: Config> Category<T> {
  pub fn new(name: BoundedVec<u8, T::MaxNameLength>) -> Self {
    Self {
      name,
      total_assets: Zero::zero(),
      beneficiaries: BoundedVec::new(),
      percentages: BoundedVec::new(),
    }
  }

  pub fn has_override(&self) -> bool {
    !self.beneficiaries.is_empty()
  }

  /// Payout legs for `amount`, using the override when set and `fallback` otherwise.
  pub fn split(
    &self,
    amount: BalanceOf<T>,
    fallback: &[T::AccountId],
  ) -> Vec<(T::AccountId, BalanceOf<T>)> {
    if self.has_override() {
      split_amount(
        amount,
        &self.beneficiaries,
        Some(self.percentages.as_slice()),
      )
    } else {
      split_amount(amount, fallback, None)
    }
  }
}

/// One transfer leg of a distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout<AccountId, Balance> {
  pub category_id: CategoryId,
  pub beneficiary: AccountId,
  pub amount: Balance,
}

/// Splits `amount` across `beneficiaries`.
///
/// With `percentages`, each leg is `floor(amount * pct / 100)`; without, each leg is
/// `floor(amount / n)`. Whatever the floors leave behind goes to the last beneficiary, so the
/// legs always add up to `amount`. Returns no legs for an empty list.
pub fn split_amount<AccountId: Clone, Balance: AtLeast32BitUnsigned + Copy>(
  amount: Balance,
  beneficiaries: &[AccountId],
  percentages: Option<&[u8]>,
) -> Vec<(AccountId, Balance)> {
  if beneficiaries.is_empty() {
    return Vec::new();
  }
  let equal_share = amount / Balance::from(beneficiaries.len() as u32);
  let mut legs: Vec<(AccountId, Balance)> = beneficiaries
    .iter()
    .enumerate()
    .map(|(idx, who)| {
      let share = match percentages {
        Some(pcts) => {
          Percent::from_percent(pcts.get(idx).copied().unwrap_or_default()).mul_floor(amount)
        }
        None => equal_share,
      };
      (who.clone(), share)
    })
    .collect();
  let distributed = legs
    .iter()
    .fold(Balance::zero(), |acc, (_, share)| acc.saturating_add(*share));
  if let Some((_, last)) = legs.last_mut() {
    *last = last.saturating_add(amount.saturating_sub(distributed));
  }
  legs
}
