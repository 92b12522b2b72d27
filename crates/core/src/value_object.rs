//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are the same value. `Money { amount: 1000,
/// currency: Usd }` is a value object; `Company { nit: "900123456", .. }` is
/// an entity, because its NIT gives it identity across state changes.
///
/// To "modify" a value object, construct a new one. Immutability keeps value
/// objects safe to share and lets construction remain the single validation
/// gate.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
