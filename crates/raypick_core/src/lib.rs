//! Entity picking along rays in a chunked block world
//!
//! This crate provides the picking pipeline and the types around it:
//!
//! - [`ChunkCoord`] - Horizontal 16x16 chunk column index
//! - [`ChunkTraversal`] - Distinct chunks crossed by a line segment
//! - [`ProximityFilter`] - Cylinder test around a ray axis
//! - [`RaySelection`] - Chunks plus filter handed to an entity store
//! - [`Dimension`] - Entity store interface
//! - [`ChunkedWorld`] - In-memory [`Dimension`] indexed by chunk
//! - [`entities_on_ray`] - The picking query
//! - [`Scene`] - Loadable/saveable entity layout

mod chunk;
pub mod traversal;
mod selection;
mod query;
mod dimension;
mod entity;
mod world;
mod scene;

pub use chunk::{ChunkCoord, CHUNK_SIZE};
pub use traversal::{chunks_along, ChunkPath, ChunkTraversal, GridLine};
pub use selection::{EntitySelector, ProximityFilter, RaySelection, CELL_CENTER_OFFSET};
pub use query::{
    entities_on_ray, entities_on_ray_with, RayQueryConfig, RayQueryError,
    DEFAULT_MAX_DISTANCE, DEFAULT_RAY_WIDTH,
};
pub use dimension::{Dimension, WorldEntity};
pub use entity::Entity;
pub use world::{ChunkedWorld, EntityKey};
pub use scene::{Scene, EntityTemplate, SceneLoadError, SceneSaveError};

// Re-export commonly used types from raypick_math for convenience
pub use raypick_math::{DegenerateVectorError, Point3, Ray, Vec3};
