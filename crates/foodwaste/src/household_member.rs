//! Household members: accounts that join households.
//!
//! Activation is derived from the stored activation time: a member is
//! activated once that time has passed. A time in the future leaves the
//! member pending; there is no way back to "not activated".

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use intranet_core::{
    CultureInfo, DomainError, DomainResult, Identifiable, Identifier, Identity, require_text,
};

use crate::household::{Household, HouseholdRef};
use crate::membership::Membership;
use crate::validations::DomainObjectValidations;

/// Shared handle to a household member.
pub type HouseholdMemberRef = Rc<RefCell<HouseholdMember>>;

/// Random six character activation code.
pub fn generate_activation_code() -> String {
    // The tail of a v7 UUID is random; the head is the timestamp.
    let simple = Uuid::now_v7().simple().to_string();
    simple
        .chars()
        .skip(simple.len().saturating_sub(6))
        .collect::<String>()
        .to_ascii_uppercase()
}

#[derive(Debug)]
pub struct HouseholdMember {
    identity: Identity,
    mail_address: String,
    membership: Membership,
    membership_expire_time: Option<DateTime<Utc>>,
    activation_code: String,
    activation_time: Option<DateTime<Utc>>,
    privacy_policy_accepted_time: Option<DateTime<Utc>>,
    creation_time: DateTime<Utc>,
    households: Vec<Weak<RefCell<Household>>>,
    validations: Arc<dyn DomainObjectValidations>,
}

impl HouseholdMember {
    /// Build a not-yet-activated member on the basic membership.
    pub fn new(
        identity: Identity,
        mail_address: impl Into<String>,
        activation_code: impl Into<String>,
        creation_time: DateTime<Utc>,
        validations: Arc<dyn DomainObjectValidations>,
    ) -> DomainResult<Self> {
        let mail_address = mail_address.into();
        let activation_code = activation_code.into();
        require_text(&mail_address, "mail_address")?;
        Self::check_mail_address(validations.as_ref(), &mail_address, "mail_address")?;
        require_text(&activation_code, "activation_code")?;

        Ok(Self {
            identity,
            mail_address,
            membership: Membership::Basic,
            membership_expire_time: None,
            activation_code,
            activation_time: None,
            privacy_policy_accepted_time: None,
            creation_time,
            households: Vec::new(),
            validations,
        })
    }

    pub fn into_ref(self) -> HouseholdMemberRef {
        Rc::new(RefCell::new(self))
    }

    fn check_mail_address(
        validations: &dyn DomainObjectValidations,
        value: &str,
        property: &str,
    ) -> DomainResult<()> {
        if !validations.is_mail_address(value)? {
            tracing::debug!(property, "rejected mail address");
            return Err(DomainError::illegal_value(value, property));
        }
        Ok(())
    }

    pub fn mail_address(&self) -> &str {
        &self.mail_address
    }

    pub fn set_mail_address(&mut self, value: impl Into<String>) -> DomainResult<()> {
        let value = value.into();
        require_text(&value, "value")?;
        Self::check_mail_address(self.validations.as_ref(), &value, "value")?;
        self.mail_address = value;
        Ok(())
    }

    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    pub fn activation_code(&self) -> &str {
        &self.activation_code
    }

    pub fn activation_time(&self) -> Option<DateTime<Utc>> {
        self.activation_time
    }

    /// Record the activation time. A future time leaves the member pending
    /// until that time passes.
    pub fn activate(&mut self, at: DateTime<Utc>) {
        self.activation_time = Some(at);
    }

    /// Activate after checking the code the member received.
    pub fn activate_with_code(&mut self, activation_code: &str, at: DateTime<Utc>) -> DomainResult<()> {
        require_text(activation_code, "activation_code")?;
        if activation_code != self.activation_code {
            return Err(DomainError::illegal_value(activation_code, "activation_code"));
        }
        self.activate(at);
        Ok(())
    }

    pub fn is_activated(&self) -> bool {
        self.is_activated_at(Utc::now())
    }

    pub fn is_activated_at(&self, now: DateTime<Utc>) -> bool {
        self.activation_time.is_some_and(|at| at <= now)
    }

    pub fn privacy_policy_accepted_time(&self) -> Option<DateTime<Utc>> {
        self.privacy_policy_accepted_time
    }

    pub fn accept_privacy_policy(&mut self, at: DateTime<Utc>) {
        self.privacy_policy_accepted_time = Some(at);
    }

    pub fn is_privacy_policy_accepted(&self) -> bool {
        self.is_privacy_policy_accepted_at(Utc::now())
    }

    pub fn is_privacy_policy_accepted_at(&self, now: DateTime<Utc>) -> bool {
        self.privacy_policy_accepted_time.is_some_and(|at| at <= now)
    }

    /// Effective membership now.
    pub fn membership(&self) -> Membership {
        self.membership_at(Utc::now())
    }

    /// Effective membership at `now`: an expired paid membership counts as basic.
    pub fn membership_at(&self, now: DateTime<Utc>) -> Membership {
        if self.membership_has_expired_at(now) {
            Membership::Basic
        } else {
            self.membership
        }
    }

    pub fn membership_expire_time(&self) -> Option<DateTime<Utc>> {
        self.membership_expire_time
    }

    pub fn membership_has_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.membership_expire_time.is_some_and(|expires| expires <= now)
    }

    /// Move to `target`, which must not be below the current effective
    /// membership. Basic memberships never expire.
    pub fn membership_apply(
        &mut self,
        target: Membership,
        expire_time: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        let current = self.membership();
        if !self.validations.can_upgrade_membership(current, target) {
            return Err(DomainError::illegal_value(target, "membership"));
        }
        self.membership = target;
        self.membership_expire_time = match target {
            Membership::Basic => None,
            _ => expire_time,
        };
        Ok(())
    }

    pub fn has_membership(&self, required: Membership) -> bool {
        self.validations
            .has_required_membership(self.membership(), required)
    }

    /// Households this member belongs to (dropped households are skipped).
    pub fn households(&self) -> Vec<HouseholdRef> {
        self.households.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn household_count(&self) -> usize {
        self.households.iter().filter(|h| h.strong_count() > 0).count()
    }

    pub fn contains_household(&self, household: &HouseholdRef) -> bool {
        self.households
            .iter()
            .any(|h| std::ptr::eq(h.as_ptr(), Rc::as_ptr(household)))
    }

    /// Household with the given identifier among this member's households.
    pub fn household(&self, identifier: Identifier) -> Option<HouseholdRef> {
        self.households()
            .into_iter()
            .find(|household| household.borrow().identifier() == Some(identifier))
    }

    /// Record membership of `household` on this side only; a no-op when
    /// already recorded. Use [`Household::household_member_add`] to link both
    /// sides.
    pub fn household_add(&mut self, household: &HouseholdRef) {
        if self.contains_household(household) {
            return;
        }
        self.households.push(Rc::downgrade(household));
    }

    /// Whether the effective membership allows no further households.
    pub fn has_reached_household_limit(&self) -> bool {
        self.validations
            .has_reached_household_limit(self.membership(), self.household_count())
    }

    /// Translate the member and, when asked, its households.
    ///
    /// Households are translated without cascading back to their members.
    pub fn translate(&mut self, culture: &CultureInfo, translate_households: bool) {
        if !translate_households {
            return;
        }
        for household in self.households() {
            household.borrow_mut().translate(culture, false);
        }
    }
}

impl Identifiable for HouseholdMember {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}
