//! Business-rule predicates shared by the food-waste entities.
//!
//! Entities receive a [`DomainObjectValidations`] implementation at
//! construction and consult it before committing a new value.

use once_cell::sync::Lazy;
use regex::Regex;

use intranet_core::{DomainResult, Range, require_text};

use crate::membership::Membership;

/// Accepted sort order of storages and storage types.
pub const SORT_ORDER_RANGE: Range<i32> = Range::new(1, 100);

// local-part@domain.tld, no quoting, no IP literals.
static MAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("mail address pattern must compile")
});

/// Stateless validation policy.
pub trait DomainObjectValidations: core::fmt::Debug + Send + Sync {
    /// Shape-check a mail address. Blank input is an argument error, not a
    /// `false` result.
    fn is_mail_address(&self, value: &str) -> DomainResult<bool>;

    /// Number of households a member with `membership` may belong to.
    fn get_household_limit(&self, membership: Membership) -> usize;

    fn has_reached_household_limit(&self, membership: Membership, current_count: usize) -> bool {
        current_count >= self.get_household_limit(membership)
    }

    fn has_required_membership(&self, actual: Membership, required: Membership) -> bool {
        actual >= required
    }

    /// Whether `current` may move to `target`. Staying on the same tier is allowed.
    fn can_upgrade_membership(&self, current: Membership, target: Membership) -> bool {
        target >= current
    }

    /// Inclusive bounds check.
    fn in_range(&self, value: i32, range: &Range<i32>) -> bool {
        *range.start_value() <= value && value <= *range.end_value()
    }
}

/// Default [`DomainObjectValidations`] with the fixed household limits
/// `Basic → 1`, `Deluxe → 2`, `Premium → 999`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardDomainObjectValidations;

impl StandardDomainObjectValidations {
    pub fn new() -> Self {
        Self
    }
}

impl DomainObjectValidations for StandardDomainObjectValidations {
    fn is_mail_address(&self, value: &str) -> DomainResult<bool> {
        require_text(value, "value")?;
        Ok(MAIL_ADDRESS.is_match(value))
    }

    fn get_household_limit(&self, membership: Membership) -> usize {
        match membership {
            Membership::Basic => 1,
            Membership::Deluxe => 2,
            Membership::Premium => 999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intranet_core::DomainError;
    use proptest::prelude::*;

    fn validations() -> StandardDomainObjectValidations {
        StandardDomainObjectValidations::new()
    }

    #[test]
    fn accepts_well_formed_mail_addresses() {
        for value in [
            "mrgoodlife@gmail.com",
            "ole.hansen+food@example.co.uk",
            "a_b-c@sub-domain.example.dk",
        ] {
            assert!(validations().is_mail_address(value).unwrap(), "{value}");
        }
    }

    #[test]
    fn rejects_malformed_mail_addresses() {
        for value in [
            "plainaddress",
            "@example.com",
            "ole@",
            "ole@example",
            "ole@@example.com",
            "ole..hansen@example.com",
            "ole hansen@example.com",
            "ole@-example.com",
        ] {
            assert!(!validations().is_mail_address(value).unwrap(), "{value}");
        }
    }

    #[test]
    fn blank_mail_address_is_an_argument_error() {
        let err = validations().is_mail_address("").unwrap_err();
        assert_eq!(err, DomainError::argument_null("value"));
        assert!(validations().is_mail_address("  ").is_err());
    }

    #[test]
    fn household_limits_are_positive() {
        for membership in Membership::ALL {
            assert!(validations().get_household_limit(membership) > 0);
        }
    }

    #[test]
    fn household_limit_boundaries() {
        let v = validations();
        assert!(!v.has_reached_household_limit(Membership::Basic, 0));
        assert!(v.has_reached_household_limit(Membership::Basic, 1));
        assert!(!v.has_reached_household_limit(Membership::Deluxe, 1));
        assert!(v.has_reached_household_limit(Membership::Deluxe, 2));
        assert!(!v.has_reached_household_limit(Membership::Premium, 998));
        assert!(v.has_reached_household_limit(Membership::Premium, 999));
    }

    #[test]
    fn same_tier_upgrade_is_allowed() {
        for membership in Membership::ALL {
            assert!(validations().can_upgrade_membership(membership, membership));
        }
        assert!(!validations().can_upgrade_membership(Membership::Premium, Membership::Basic));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Range::new(0, 10);
        assert!(validations().in_range(0, &range));
        assert!(validations().in_range(10, &range));
        assert!(!validations().in_range(-1, &range));
        assert!(!validations().in_range(11, &range));
    }

    fn any_membership() -> impl Strategy<Value = Membership> {
        prop::sample::select(Membership::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: `in_range` agrees with `lo <= v <= hi`.
        #[test]
        fn in_range_matches_inclusive_comparison(v in -200i32..200, lo in -200i32..200, hi in -200i32..200) {
            let range = Range::new(lo, hi);
            prop_assert_eq!(validations().in_range(v, &range), lo <= v && v <= hi);
        }

        /// Property: the limit is reached exactly from the tier's limit upwards.
        #[test]
        fn household_limit_matches_table(membership in any_membership(), count in 0usize..2_000) {
            let limit = match membership {
                Membership::Basic => 1,
                Membership::Deluxe => 2,
                Membership::Premium => 999,
            };
            prop_assert_eq!(
                validations().has_reached_household_limit(membership, count),
                count >= limit
            );
        }

        /// Property: membership checks follow the tier ranks.
        #[test]
        fn membership_checks_follow_rank(a in any_membership(), b in any_membership()) {
            prop_assert_eq!(validations().has_required_membership(a, b), a.rank() >= b.rank());
            prop_assert_eq!(validations().can_upgrade_membership(a, b), b.rank() >= a.rank());
        }
    }
}
