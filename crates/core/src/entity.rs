//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An order keeps its identity while its status and priority are rewritten
/// during a processing pass; collaborators key persistence on `id()` alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
