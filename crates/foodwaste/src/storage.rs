//! Storages: a household's refrigerator, freezer, cabinets and so on.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use intranet_core::{CultureInfo, DomainError, DomainResult, Identifiable, Identity, Translatable};

use crate::household::{Household, HouseholdRef};
use crate::storage_type::StorageType;
use crate::validations::{DomainObjectValidations, SORT_ORDER_RANGE};

/// Shared handle to a storage type.
pub type StorageTypeRef = Rc<RefCell<StorageType>>;

/// Shared handle to a storage.
pub type StorageRef = Rc<RefCell<Storage>>;

/// Values a storage is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub sort_order: i32,
    pub temperature: i32,
    pub description: Option<String>,
}

/// A storage owned by one household and typed by one storage type.
///
/// `sort_order` stays within `[1, 100]` and `temperature` within the
/// temperature range of the storage type assigned when it was last set.
/// The household owns its storages; a storage only links back to it.
#[derive(Debug)]
pub struct Storage {
    identity: Identity,
    household: Weak<RefCell<Household>>,
    sort_order: i32,
    storage_type: StorageTypeRef,
    temperature: i32,
    description: Option<String>,
    creation_time: DateTime<Utc>,
    validations: Arc<dyn DomainObjectValidations>,
}

impl Storage {
    pub fn new(
        identity: Identity,
        household: &HouseholdRef,
        storage_type: StorageTypeRef,
        settings: StorageSettings,
        creation_time: DateTime<Utc>,
        validations: Arc<dyn DomainObjectValidations>,
    ) -> DomainResult<Self> {
        let StorageSettings {
            sort_order,
            temperature,
            description,
        } = settings;
        check_sort_order(validations.as_ref(), sort_order, "sort_order")?;
        check_temperature(validations.as_ref(), &storage_type, temperature, "temperature")?;

        Ok(Self {
            identity,
            household: Rc::downgrade(household),
            sort_order,
            storage_type,
            temperature,
            description,
            creation_time,
            validations,
        })
    }

    pub fn into_ref(self) -> StorageRef {
        Rc::new(RefCell::new(self))
    }

    /// Owning household; `None` once the household has been dropped.
    pub fn household(&self) -> Option<HouseholdRef> {
        self.household.upgrade()
    }

    pub fn belongs_to(&self, household: &HouseholdRef) -> bool {
        std::ptr::eq(self.household.as_ptr(), Rc::as_ptr(household))
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, value: i32) -> DomainResult<()> {
        check_sort_order(self.validations.as_ref(), value, "value")?;
        self.sort_order = value;
        Ok(())
    }

    pub fn storage_type(&self) -> &StorageTypeRef {
        &self.storage_type
    }

    /// Replace the storage type. The current temperature is kept as is; the
    /// new type's range applies to subsequent temperature changes.
    pub fn set_storage_type(&mut self, storage_type: StorageTypeRef) {
        self.storage_type = storage_type;
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn set_temperature(&mut self, value: i32) -> DomainResult<()> {
        check_temperature(self.validations.as_ref(), &self.storage_type, value, "value")?;
        self.temperature = value;
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    /// Translate the household and/or the storage type. A storage carries no
    /// text of its own.
    pub fn translate(
        &self,
        culture: &CultureInfo,
        translate_household: bool,
        translate_storage_type: bool,
    ) {
        if translate_household {
            if let Some(household) = self.household() {
                household.borrow_mut().translate(culture, false);
            }
        }
        if translate_storage_type {
            self.storage_type.borrow_mut().translate(culture);
        }
    }
}

impl Identifiable for Storage {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

fn check_sort_order(
    validations: &dyn DomainObjectValidations,
    value: i32,
    property: &str,
) -> DomainResult<()> {
    if validations.in_range(value, &SORT_ORDER_RANGE) {
        return Ok(());
    }
    tracing::debug!(property, value, "rejected storage sort order");
    Err(DomainError::illegal_value(value, property))
}

fn check_temperature(
    validations: &dyn DomainObjectValidations,
    storage_type: &StorageTypeRef,
    value: i32,
    property: &str,
) -> DomainResult<()> {
    let in_range = validations.in_range(value, storage_type.borrow().temperature_range());
    if in_range {
        return Ok(());
    }
    tracing::debug!(property, value, "rejected storage temperature");
    Err(DomainError::illegal_value(value, property))
}
