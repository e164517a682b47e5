//! Ray selections
//!
//! A [`RaySelection`] is what a picking query hands to a [`Dimension`](crate::Dimension):
//! the chunks worth scanning plus a per-entity containment test.

use raypick_math::{DegenerateVectorError, Point3, Ray, Vec3};

use crate::traversal::ChunkPath;
use crate::{ChunkCoord, RayQueryConfig, RayQueryError};

/// Offset from a block position to the centre of its cell
pub const CELL_CENTER_OFFSET: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Restricts which entities an entity store returns
///
/// Stores use [`chunk_positions`](Self::chunk_positions) to limit which
/// partitions they scan and [`contains`](Self::contains) to test each candidate.
pub trait EntitySelector {
    /// Chunks that may hold matching entities, in visiting order
    fn chunk_positions(&self) -> &[ChunkCoord];

    /// Whether an entity at `position` is selected
    fn contains(&self, position: Point3) -> bool;
}

/// Cylinder of radius `ray_width` around a ray's infinite axis
///
/// Positions are tested at their cell centre. There is no near or far clipping
/// here: points behind the origin are as close to the axis as points in front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityFilter {
    origin: Point3,
    direction: Vec3,
    ray_width: f64,
}

impl ProximityFilter {
    /// Build a filter around `ray`, normalizing its direction
    pub fn new(ray: &Ray, ray_width: f64) -> Result<Self, DegenerateVectorError> {
        let ray = ray.normalized()?;
        Ok(Self {
            origin: ray.origin,
            direction: ray.direction,
            ray_width,
        })
    }

    #[inline]
    pub fn ray_width(&self) -> f64 {
        self.ray_width
    }

    /// Perpendicular distance from the cell centre of `position` to the axis
    pub fn distance_to_axis(&self, position: Point3) -> f64 {
        let offset = (position + CELL_CENTER_OFFSET) - self.origin;
        self.direction.cross(offset).length()
    }

    /// Strictly inside the cylinder; the boundary itself is excluded
    #[inline]
    pub fn contains(&self, position: Point3) -> bool {
        self.distance_to_axis(position) < self.ray_width
    }
}

/// Chunks touched by a ray up to the query distance, plus its proximity filter
///
/// Built fresh for each query and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct RaySelection {
    chunks: Vec<ChunkCoord>,
    filter: ProximityFilter,
}

impl RaySelection {
    /// Normalize the ray, clip it at `config.max_distance` and collect the
    /// chunks it crosses
    pub fn new(ray: &Ray, config: &RayQueryConfig) -> Result<Self, RayQueryError> {
        if !ray.origin.is_finite() {
            return Err(RayQueryError::NonFiniteOrigin(ray.origin));
        }
        let max_distance = config.max_distance;
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(RayQueryError::InvalidMaxDistance(max_distance));
        }

        let unit = ray.normalized()?;
        let end = unit.point_at(max_distance);
        let chunks: Vec<ChunkCoord> = ChunkPath::along(unit.origin, unit.direction, max_distance)
            .iter()
            .collect();

        log::trace!(
            "ray from {:?} to {:?} crosses {} chunks",
            unit.origin,
            end,
            chunks.len()
        );

        Ok(Self {
            chunks,
            filter: ProximityFilter::new(&unit, config.ray_width)?,
        })
    }

    pub fn filter(&self) -> &ProximityFilter {
        &self.filter
    }
}

impl EntitySelector for RaySelection {
    fn chunk_positions(&self) -> &[ChunkCoord] {
        &self.chunks
    }

    fn contains(&self, position: Point3) -> bool {
        self.filter.contains(position)
    }
}
