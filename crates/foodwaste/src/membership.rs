//! Membership tiers of a household member.

use serde::{Deserialize, Serialize};

/// Ordered account class: `Basic < Deluxe < Premium`.
///
/// Gates how many households a member may belong to and which queries the
/// member may run.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    #[default]
    Basic,
    Deluxe,
    Premium,
}

impl Membership {
    pub const ALL: [Membership; 3] = [Membership::Basic, Membership::Deluxe, Membership::Premium];

    /// Numeric rank used for comparisons (higher = more features).
    pub fn rank(&self) -> u8 {
        match self {
            Membership::Basic => 0,
            Membership::Deluxe => 1,
            Membership::Premium => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Membership::Basic => "Basic",
            Membership::Deluxe => "Deluxe",
            Membership::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_rank() {
        assert!(Membership::Basic < Membership::Deluxe);
        assert!(Membership::Deluxe < Membership::Premium);
        for a in Membership::ALL {
            for b in Membership::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Membership::Deluxe).unwrap();
        assert_eq!(json, "\"deluxe\"");

        let tier: Membership = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(tier, Membership::Premium);
    }

    #[test]
    fn defaults_to_basic() {
        assert_eq!(Membership::default(), Membership::Basic);
    }
}
