//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities in this domain are keyed by natural business identifiers (a
/// company's NIT, a product's code) rather than synthetic ids. An entity that
/// exists is guaranteed valid: construction is the only validation gate, and
/// "mutation" means constructing a new validated instance with the same
/// identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
