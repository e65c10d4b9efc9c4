//! Ecosystem Constants for the Digital Legacy chain
//!
//! Centralizes the pallet identifiers and the custody parameters shared between
//! the legacy pallet and any runtime that wires it.

/// Identifier of an asset category. Allocated sequentially from zero.
pub type CategoryId = u32;

/// Seconds since the Unix epoch.
pub type Moment = u64;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()` to derive the custody
/// account that holds every deposit until it is distributed.
pub mod pallet_ids {
  /// Digital Legacy custody pallet ID
  pub const DIGITAL_LEGACY_PALLET_ID: &[u8; 8] = b"py/legcy";
}

/// Custody parameters.
pub mod params {
  use super::Moment;

  /// Maximum number of beneficiaries on a user record or a category split.
  pub const MAX_BENEFICIARIES: u32 = 10;

  /// Minimum quorum an owner may declare.
  ///
  /// A single signature would let any one beneficiary release the estate.
  pub const MIN_REQUIRED_SIGNATURES: u32 = 2;

  /// Mandatory wait between successive updates to a user record (7 days).
  pub const UPDATE_COOLDOWN_SECS: Moment = 7 * DAY_SECS;

  /// Seconds in a day.
  pub const DAY_SECS: Moment = 24 * 60 * 60;

  /// Category percentages must add up to exactly this value.
  pub const PERCENT_TOTAL: u32 = 100;

  /// Upper bound on the opaque legacy blob (bytes).
  pub const MAX_DATA_LENGTH: u32 = 4096;

  /// Upper bound on a category name (bytes).
  pub const MAX_NAME_LENGTH: u32 = 64;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pallet_ids_are_correct_length() {
    assert_eq!(pallet_ids::DIGITAL_LEGACY_PALLET_ID.len(), 8);
  }

  #[test]
  fn cooldown_is_one_week() {
    assert_eq!(params::UPDATE_COOLDOWN_SECS, 604_800);
  }

  #[test]
  fn quorum_bounds_are_consistent() {
    assert!(params::MIN_REQUIRED_SIGNATURES >= 2);
    assert!(params::MAX_BENEFICIARIES >= params::MIN_REQUIRED_SIGNATURES);
  }
}
