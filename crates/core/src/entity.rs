//! Entity trait: identity + continuity across snapshots.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier that stays stable across catalog snapshots.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
