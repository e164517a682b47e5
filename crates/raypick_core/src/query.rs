//! Picking entities along a ray
//!
//! [`entities_on_ray_with`] is the whole picking pipeline:
//!
//! 1. Normalize the ray direction
//! 2. Clip the ray at `max_distance`
//! 3. Collect the distinct chunks the clipped segment crosses
//! 4. Bundle them with a proximity filter into a [`RaySelection`]
//! 5. Ask the [`Dimension`] for the entities it selects
//!
//! Results come back in the order the dimension produced them, not sorted by
//! distance along the ray.

use raypick_math::{DegenerateVectorError, Point3, Ray};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::{Dimension, EntitySelector, RaySelection, WorldEntity};

/// Default radius of the picking cylinder, in blocks
pub const DEFAULT_RAY_WIDTH: f64 = 0.75;
/// Default distance at which the ray stops looking for chunks, in blocks
pub const DEFAULT_MAX_DISTANCE: f64 = 1000.0;

/// Tuning for a ray query
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayQueryConfig {
    /// Radius around the ray axis within which entities count as hit.
    /// Zero or negative values are allowed and match nothing.
    pub ray_width: f64,
    /// Length of the ray; chunks beyond it are never scanned
    pub max_distance: f64,
}

impl Default for RayQueryConfig {
    fn default() -> Self {
        Self {
            ray_width: DEFAULT_RAY_WIDTH,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl RayQueryConfig {
    pub fn new(ray_width: f64, max_distance: f64) -> Self {
        Self { ray_width, max_distance }
    }

    /// Set the picking radius
    pub fn with_ray_width(mut self, ray_width: f64) -> Self {
        self.ray_width = ray_width;
        self
    }

    /// Set the ray length
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }
}

/// Error from a ray query
///
/// A query either returns every matching entity or fails; there are no
/// partial results.
#[derive(Debug, Error)]
pub enum RayQueryError {
    /// The ray direction has no usable length
    #[error("ray direction is degenerate: {0}")]
    DegenerateDirection(#[from] DegenerateVectorError),
    /// The ray origin has a NaN or infinite component
    #[error("ray origin is not finite: {0:?}")]
    NonFiniteOrigin(Point3),
    /// Negative, NaN or infinite query distance
    #[error("max distance must be finite and non-negative, got {0}")]
    InvalidMaxDistance(f64),
    /// The entity store failed
    #[error("entity store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Entities hit by `ray` using [`RayQueryConfig::default`]
pub fn entities_on_ray<'d, D: Dimension>(
    dimension: &'d D,
    ray: &Ray,
) -> Result<Vec<&'d D::Entity>, RayQueryError> {
    entities_on_ray_with(dimension, ray, &RayQueryConfig::default())
}

/// Entities within `config.ray_width` of the ray axis, among the chunks the
/// ray crosses within `config.max_distance`
pub fn entities_on_ray_with<'d, D: Dimension>(
    dimension: &'d D,
    ray: &Ray,
    config: &RayQueryConfig,
) -> Result<Vec<&'d D::Entity>, RayQueryError> {
    if config.ray_width.is_nan() || config.ray_width <= 0.0 {
        log::debug!("ray width {} can never match, query will be empty", config.ray_width);
    }

    let selection = RaySelection::new(ray, config)?;
    let mut entities = dimension
        .get_entities(&selection)
        .map_err(|e| RayQueryError::Store(Box::new(e)))?;

    // Stores may only honour the chunk restriction
    entities.retain(|e| selection.contains(e.position()));

    log::debug!(
        "ray query scanned {} chunks, {} entities hit",
        selection.chunk_positions().len(),
        entities.len()
    );

    Ok(entities)
}
