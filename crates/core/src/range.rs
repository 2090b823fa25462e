//! Inclusive interval value.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Closed interval `[start_value, end_value]`.
///
/// No ordering is enforced between the bounds; callers build meaningful
/// ranges. Membership is decided by the validation policy, not here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range<T> {
    start_value: T,
    end_value: T,
}

impl<T> Range<T> {
    pub const fn new(start_value: T, end_value: T) -> Self {
        Self {
            start_value,
            end_value,
        }
    }

    pub fn start_value(&self) -> &T {
        &self.start_value
    }

    pub fn end_value(&self) -> &T {
        &self.end_value
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Range<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_bounds_as_given() {
        let range = Range::new(10, 0);
        assert_eq!(*range.start_value(), 10);
        assert_eq!(*range.end_value(), 0);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Range::new(-18, -1)).unwrap();
        assert_eq!(json, serde_json::json!({ "startValue": -18, "endValue": -1 }));
    }
}
