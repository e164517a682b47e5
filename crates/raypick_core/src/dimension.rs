//! Entity store interface
//!
//! The picking query never owns entities. It asks a [`Dimension`] for the
//! entities an [`EntitySelector`] picks out and borrows them for the duration
//! of the call.

use raypick_math::Point3;

use crate::EntitySelector;

/// Anything a dimension stores that can be picked
pub trait WorldEntity {
    /// Identifier shown to the user (e.g. `"minecraft:pig"`)
    fn id(&self) -> &str;

    /// Block-space position
    fn position(&self) -> Point3;
}

/// A spatially partitioned entity store
///
/// Implementations should only scan the chunks listed by
/// [`EntitySelector::chunk_positions`] and should return entities for which
/// [`EntitySelector::contains`] holds. The returned list must be a consistent
/// snapshot; ordering is up to the store but must be stable for identical input.
pub trait Dimension {
    type Entity: WorldEntity;
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_entities(
        &self,
        selector: &dyn EntitySelector,
    ) -> Result<Vec<&Self::Entity>, Self::Error>;
}
