//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records are stored as snapshots; a newer snapshot of the same entity keeps
/// its `id` and replaces the older one in its owning collection.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
