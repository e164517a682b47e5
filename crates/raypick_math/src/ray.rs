//! Picking ray

use serde::{Serialize, Deserialize};

use crate::{DegenerateVectorError, Point3, Vec3};

/// A half-line from `origin` along `direction`
///
/// The direction does not need to be unit length; call [`Ray::normalized`]
/// before doing distance math with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is not validated here.
    #[inline]
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Same ray with a unit-length direction
    pub fn normalized(&self) -> Result<Self, DegenerateVectorError> {
        Ok(Self {
            origin: self.origin,
            direction: self.direction.try_normalized()?,
        })
    }

    /// Point at parameter `t` along the direction as stored
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
