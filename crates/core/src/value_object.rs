//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A price of `"1,000"` is a value object, a product is an
//! entity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// enum NumericValue {
///     Number(f64),
///     Text(String),
/// }
///
/// impl ValueObject for NumericValue {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
