#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn add_admin() -> Weight;
	fn remove_admin() -> Weight;
	fn add_oracle() -> Weight;
	fn remove_oracle() -> Weight;
	fn register_user() -> Weight;
	fn update_user_info() -> Weight;
	fn verify_death() -> Weight;
	fn create_category() -> Weight;
	fn add_asset_to_category() -> Weight;
	fn set_category_beneficiaries(b: u32, ) -> Weight;
	fn sign_for_user() -> Weight;
	fn transfer_assets(c: u32, b: u32, ) -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn emergency_withdraw() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `DigitalLegacy::Admins` (r:2 w:1)
	fn add_admin() -> Weight {
		Weight::from_parts(12_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:2 w:1)
	fn remove_admin() -> Weight {
		Weight::from_parts(12_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `DigitalLegacy::Oracles` (r:1 w:1)
	fn add_oracle() -> Weight {
		Weight::from_parts(12_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `DigitalLegacy::Oracles` (r:1 w:1)
	fn remove_oracle() -> Weight {
		Weight::from_parts(12_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Paused` (r:1 w:0)
	/// Storage: `DigitalLegacy::Users` (r:1 w:1)
	/// Storage: `DigitalLegacy::TotalUsers` (r:1 w:1)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn register_user() -> Weight {
		Weight::from_parts(30_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	/// Storage: `DigitalLegacy::Paused` (r:1 w:0)
	/// Storage: `DigitalLegacy::Users` (r:1 w:1)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn update_user_info() -> Weight {
		Weight::from_parts(30_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Oracles` (r:1 w:0)
	/// Storage: `DigitalLegacy::Users` (r:1 w:1)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn verify_death() -> Weight {
		Weight::from_parts(20_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `DigitalLegacy::NextCategoryId` (r:1 w:1)
	/// Storage: `DigitalLegacy::Categories` (r:0 w:1)
	fn create_category() -> Weight {
		Weight::from_parts(15_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	/// Storage: `DigitalLegacy::Paused` (r:1 w:0)
	/// Storage: `DigitalLegacy::Users` (r:1 w:0)
	/// Storage: `DigitalLegacy::Categories` (r:1 w:1)
	/// Storage: `DigitalLegacy::OwnerBalances` (r:1 w:1)
	/// Storage: `DigitalLegacy::OwnerCategories` (r:1 w:1)
	/// Storage: `DigitalLegacy::TotalAssets` (r:1 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	fn add_asset_to_category() -> Weight {
		Weight::from_parts(60_000_000, 6500)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	/// Storage: `DigitalLegacy::Users` (r:1 w:0)
	/// Storage: `DigitalLegacy::Categories` (r:1 w:1)
	/// The range of component `b` is `[1, 10]`.
	fn set_category_beneficiaries(b: u32, ) -> Weight {
		Weight::from_parts(18_000_000, 4000)
			.saturating_add(Weight::from_parts(400_000, 0).saturating_mul(b.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Users` (r:1 w:1)
	fn sign_for_user() -> Weight {
		Weight::from_parts(18_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Users` (r:1 w:1)
	/// Storage: `DigitalLegacy::OwnerCategories` (r:1 w:1)
	/// Storage: `DigitalLegacy::OwnerBalances` (r:c w:c)
	/// Storage: `DigitalLegacy::Categories` (r:c w:c)
	/// Storage: `DigitalLegacy::TotalAssets` (r:1 w:1)
	/// Storage: `System::Account` (r:1+c*b w:1+c*b)
	/// The range of component `c` is `[1, 32]`.
	/// The range of component `b` is `[2, 10]`.
	fn transfer_assets(c: u32, b: u32, ) -> Weight {
		Weight::from_parts(40_000_000, 6500)
			.saturating_add(Weight::from_parts(10_000_000, 2600).saturating_mul(c.into()))
			.saturating_add(Weight::from_parts(35_000_000, 2600).saturating_mul(c.saturating_mul(b).into()))
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(c.into())))
			.saturating_add(T::DbWeight::get().reads((c.saturating_mul(b)).into()))
			.saturating_add(T::DbWeight::get().writes(4))
			.saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(c.into())))
			.saturating_add(T::DbWeight::get().writes((c.saturating_mul(b)).into()))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `DigitalLegacy::Paused` (r:0 w:1)
	fn pause() -> Weight {
		Weight::from_parts(10_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `DigitalLegacy::Paused` (r:0 w:1)
	fn unpause() -> Weight {
		Weight::from_parts(10_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `DigitalLegacy::Admins` (r:1 w:0)
	/// Storage: `System::Account` (r:2 w:2)
	fn emergency_withdraw() -> Weight {
		Weight::from_parts(45_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
}

impl WeightInfo for () {
	fn add_admin() -> Weight {
		Weight::from_parts(12_000_000, 3500)
	}
	fn remove_admin() -> Weight {
		Weight::from_parts(12_000_000, 3500)
	}
	fn add_oracle() -> Weight {
		Weight::from_parts(12_000_000, 3500)
	}
	fn remove_oracle() -> Weight {
		Weight::from_parts(12_000_000, 3500)
	}
	fn register_user() -> Weight {
		Weight::from_parts(30_000_000, 6000)
	}
	fn update_user_info() -> Weight {
		Weight::from_parts(30_000_000, 6000)
	}
	fn verify_death() -> Weight {
		Weight::from_parts(20_000_000, 6000)
	}
	fn create_category() -> Weight {
		Weight::from_parts(15_000_000, 3500)
	}
	fn add_asset_to_category() -> Weight {
		Weight::from_parts(60_000_000, 6500)
	}
	fn set_category_beneficiaries(b: u32, ) -> Weight {
		Weight::from_parts(18_000_000, 4000)
			.saturating_add(Weight::from_parts(400_000, 0).saturating_mul(b.into()))
	}
	fn sign_for_user() -> Weight {
		Weight::from_parts(18_000_000, 6000)
	}
	fn transfer_assets(c: u32, b: u32, ) -> Weight {
		Weight::from_parts(40_000_000, 6500)
			.saturating_add(Weight::from_parts(10_000_000, 2600).saturating_mul(c.into()))
			.saturating_add(Weight::from_parts(35_000_000, 2600).saturating_mul(c.saturating_mul(b).into()))
	}
	fn pause() -> Weight {
		Weight::from_parts(10_000_000, 3500)
	}
	fn unpause() -> Weight {
		Weight::from_parts(10_000_000, 3500)
	}
	fn emergency_withdraw() -> Weight {
		Weight::from_parts(45_000_000, 6000)
	}
}
