//! Households: the aggregate root members join and storages belong to.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use intranet_core::{
    CultureInfo, DomainError, DomainResult, Identifiable, Identifier, Identity, require_text,
};

use crate::household_member::HouseholdMemberRef;
use crate::storage::StorageRef;

/// Shared handle to a household.
pub type HouseholdRef = Rc<RefCell<Household>>;

#[derive(Debug)]
pub struct Household {
    identity: Identity,
    name: String,
    description: Option<String>,
    creation_time: DateTime<Utc>,
    household_members: Vec<HouseholdMemberRef>,
    storages: Vec<StorageRef>,
}

impl Household {
    pub fn new(
        identity: Identity,
        name: impl Into<String>,
        description: Option<String>,
        creation_time: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        require_text(&name, "name")?;
        Ok(Self {
            identity,
            name,
            description,
            creation_time,
            household_members: Vec::new(),
            storages: Vec::new(),
        })
    }

    /// Wrap the household in a shared handle so members can link back to it.
    pub fn into_ref(self) -> HouseholdRef {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        require_text(&value, "value")?;
        self.name = value;
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

    pub fn household_members(&self) -> &[HouseholdMemberRef] {
        &self.household_members
    }

    /// Member with the given identifier, if it belongs to this household.
    pub fn household_member(&self, identifier: Identifier) -> Option<HouseholdMemberRef> {
        self.household_members
            .iter()
            .find(|member| member.borrow().identifier() == Some(identifier))
            .cloned()
    }

    pub fn contains_household_member(&self, member: &HouseholdMemberRef) -> bool {
        self.household_members.iter().any(|m| Rc::ptr_eq(m, member))
    }

    /// Link `member` to `household` on both sides.
    ///
    /// The member side is only touched when its link to this household is
    /// missing, and the household side skips members it already holds, so
    /// repeated calls leave exactly one link in each direction. Household
    /// limits are not checked here; see
    /// [`HouseholdMember::has_reached_household_limit`](crate::HouseholdMember::has_reached_household_limit).
    pub fn household_member_add(household: &HouseholdRef, member: &HouseholdMemberRef) {
        let linked = member.borrow().contains_household(household);
        if !linked {
            member.borrow_mut().household_add(household);
        }

        let mut this = household.borrow_mut();
        if !this.contains_household_member(member) {
            this.household_members.push(Rc::clone(member));
            tracing::debug!(
                household = ?this.identifier(),
                members = this.household_members.len(),
                "household member added"
            );
        }
    }

    pub fn storages(&self) -> &[StorageRef] {
        &self.storages
    }

    pub fn contains_storage(&self, storage: &StorageRef) -> bool {
        self.storages.iter().any(|s| Rc::ptr_eq(s, storage))
    }

    /// Register `storage` with the household it was created for.
    ///
    /// Adding the same storage again is a no-op. A storage created for
    /// another household is a business-rule failure.
    pub fn storage_add(household: &HouseholdRef, storage: &StorageRef) -> DomainResult<()> {
        if !storage.borrow().belongs_to(household) {
            return Err(DomainError::business_rule(
                "storage belongs to another household",
            ));
        }

        let mut this = household.borrow_mut();
        if !this.contains_storage(storage) {
            this.storages.push(Rc::clone(storage));
            tracing::debug!(
                household = ?this.identifier(),
                storages = this.storages.len(),
                "storage added"
            );
        }
        Ok(())
    }

    /// Translate the household's storages and, when asked, its members.
    ///
    /// A household carries no text of its own. Storages translate their
    /// storage type only; members are translated without cascading back to
    /// their households.
    pub fn translate(&mut self, culture: &CultureInfo, translate_household_members: bool) {
        for storage in &self.storages {
            storage.borrow().translate(culture, false, true);
        }
        if !translate_household_members {
            return;
        }
        for member in &self.household_members {
            member.borrow_mut().translate(culture, false);
        }
    }
}

impl Identifiable for Household {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}
