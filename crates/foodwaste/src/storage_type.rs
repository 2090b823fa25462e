//! Storage types (refrigerator, freezer, kitchen cabinets, ...).

use std::sync::Arc;

use intranet_core::{
    DomainError, DomainResult, Identifiable, Identity, Range, Translatable, Translations,
};

use crate::validations::{DomainObjectValidations, SORT_ORDER_RANGE};

/// Kind of storage a household can create, with its accepted temperatures.
#[derive(Debug, Clone)]
pub struct StorageType {
    identity: Identity,
    sort_order: i32,
    temperature: i32,
    temperature_range: Range<i32>,
    creatable: bool,
    editable: bool,
    deletable: bool,
    translations: Translations,
}

/// Flags controlling what users may do with storages of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageTypePermissions {
    pub creatable: bool,
    pub editable: bool,
    pub deletable: bool,
}

impl Default for StorageTypePermissions {
    fn default() -> Self {
        Self {
            creatable: true,
            editable: true,
            deletable: true,
        }
    }
}

impl StorageType {
    /// Build a storage type; `sort_order` must lie in `[1, 100]` and the
    /// default `temperature` in `temperature_range`.
    pub fn new(
        identity: Identity,
        sort_order: i32,
        temperature: i32,
        temperature_range: Range<i32>,
        permissions: StorageTypePermissions,
        validations: Arc<dyn DomainObjectValidations>,
    ) -> DomainResult<Self> {
        if !validations.in_range(sort_order, &SORT_ORDER_RANGE) {
            return Err(DomainError::illegal_value(sort_order, "sort_order"));
        }
        if !validations.in_range(temperature, &temperature_range) {
            return Err(DomainError::illegal_value(temperature, "temperature"));
        }

        Ok(Self {
            identity,
            sort_order,
            temperature,
            temperature_range,
            creatable: permissions.creatable,
            editable: permissions.editable,
            deletable: permissions.deletable,
            translations: Translations::new(),
        })
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Default temperature of new storages of this type.
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn temperature_range(&self) -> &Range<i32> {
        &self.temperature_range
    }

    pub fn creatable(&self) -> bool {
        self.creatable
    }

    pub fn editable(&self) -> bool {
        self.editable
    }

    pub fn deletable(&self) -> bool {
        self.deletable
    }
}

impl Identifiable for StorageType {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

impl Translatable for StorageType {
    fn translations(&self) -> &Translations {
        &self.translations
    }

    fn translations_mut(&mut self) -> &mut Translations {
        &mut self.translations
    }
}
