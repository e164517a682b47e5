//! Chunk coordinates
//!
//! The world is partitioned into vertical columns of `CHUNK_SIZE` x `CHUNK_SIZE`
//! blocks. The y axis plays no part in chunk identity.

use raypick_math::Point3;
use serde::{Serialize, Deserialize};

/// Width of a chunk along x and z, in blocks
pub const CHUNK_SIZE: i32 = 16;

/// Horizontal index of a chunk column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk containing the block cell at (x, z)
    ///
    /// Uses floor division, so block -1 lands in chunk -1 rather than chunk 0.
    /// Cells beyond the `i32` chunk range clamp to the outermost chunk.
    #[inline]
    pub fn from_cell(x: i64, z: i64) -> Self {
        Self {
            cx: chunk_index(x),
            cz: chunk_index(z),
        }
    }

    /// Chunk containing a continuous world position
    #[inline]
    pub fn containing(position: Point3) -> Self {
        Self::from_cell(position.x.floor() as i64, position.z.floor() as i64)
    }

}

fn chunk_index(cell: i64) -> i32 {
    let index = cell.div_euclid(i64::from(CHUNK_SIZE));
    i32::try_from(index).unwrap_or(if index < 0 { i32::MIN } else { i32::MAX })
}
