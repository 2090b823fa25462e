//! Food-waste domain module (households, members, storages, food groups).
//!
//! This crate contains business rules for the household food-waste domain,
//! implemented purely as deterministic in-memory domain logic (no IO, no
//! storage, no transport). Collaborators such as the validation policy, a
//! storage type or a household are injected through constructors.

pub mod food_group;
pub mod foreign_key;
pub mod household;
pub mod household_member;
pub mod membership;
pub mod storage;
pub mod storage_type;
pub mod validations;

pub use food_group::{FoodGroup, FoodGroupTree};
pub use foreign_key::ForeignKey;
pub use household::{Household, HouseholdRef};
pub use household_member::{HouseholdMember, HouseholdMemberRef, generate_activation_code};
pub use membership::Membership;
pub use storage::{Storage, StorageRef, StorageSettings, StorageTypeRef};
pub use storage_type::{StorageType, StorageTypePermissions};
pub use validations::{
    DomainObjectValidations, SORT_ORDER_RANGE, StandardDomainObjectValidations,
};
