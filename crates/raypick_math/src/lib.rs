//! 3D Mathematics Library
//!
//! This crate provides the vector and ray types used for picking in a block world.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Point3`] - alias of [`Vec3`] used for world positions
//! - [`Ray`] - origin plus direction, used for camera-to-cursor picking
//! - [`DegenerateVectorError`] - returned when a zero-length vector is normalized

mod vec3;
mod ray;
mod error;

pub use vec3::{Vec3, Point3, DEGENERATE_EPSILON};
pub use ray::Ray;
pub use error::DegenerateVectorError;
