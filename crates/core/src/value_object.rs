//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no [`Identity`](crate::Identity): two instances with the
/// same attribute values are interchangeable. They are immutable once built;
/// to "change" one, construct a new value.
///
/// ```ignore
/// let fridge = Range::new(2, 8);
/// assert_eq!(fridge, Range::new(2, 8));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
