//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two instances with the same attribute values
/// are interchangeable. In the catalog these are things like `Price`, `Rating` and
/// `Category`, as opposed to a `Product`, which is identified by its `ProductId`.
///
/// Value objects are immutable: to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
