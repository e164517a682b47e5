//! Chunk traversal along a line segment
//!
//! A segment is first rasterized into the block cells it passes through
//! ([`GridLine`]), stepping across one cell face at a time. Each cell is then
//! projected onto its chunk column and consecutive repeats are collapsed
//! ([`ChunkTraversal`]).

use std::iter::FusedIterator;

use raypick_math::{Point3, Vec3};

use crate::ChunkCoord;

/// Integer cells entered by a segment, in order
///
/// The walk starts in the cell containing the start point. Each axis keeps the
/// parameter `t` at which the segment next crosses a cell face on that axis,
/// and every step crosses whichever face comes first, then advances that
/// axis's crossing by one cell width. Consecutive cells therefore share a
/// face, and the last cell is the one containing the end point.
///
/// On ties the earliest axis (x, then y, then z) steps first.
#[derive(Clone, Debug)]
pub struct GridLine {
    cell: [i64; 3],
    step: [i64; 3],
    t_max: [f64; 3],
    t_delta: [f64; 3],
    length: f64,
    pending: Option<[i64; 3]>,
}

impl GridLine {
    /// Walk the segment from `start` to `end`
    pub fn new(start: Point3, end: Point3) -> Self {
        Self::along(start, end - start, 1.0)
    }

    /// Walk from `origin` along `direction` up to parameter `length`
    ///
    /// The face crossings depend only on `origin` and `direction`, so a
    /// shorter `length` always visits a prefix of a longer one's cells.
    pub fn along(origin: Point3, direction: Vec3, length: f64) -> Self {
        let origin: [f64; 3] = origin.into();
        let direction: [f64; 3] = direction.into();

        let mut cell = [0; 3];
        let mut step = [0; 3];
        let mut t_max = [f64::INFINITY; 3];
        let mut t_delta = [f64::INFINITY; 3];
        for axis in 0..3 {
            let floor = origin[axis].floor();
            cell[axis] = floor as i64;
            let d = direction[axis];
            if d > 0.0 {
                step[axis] = 1;
                t_max[axis] = (floor + 1.0 - origin[axis]) / d;
                t_delta[axis] = 1.0 / d;
            } else if d < 0.0 {
                step[axis] = -1;
                t_max[axis] = (floor - origin[axis]) / d;
                t_delta[axis] = -1.0 / d;
            }
        }

        Self {
            cell,
            step,
            t_max,
            t_delta,
            length,
            pending: Some(cell),
        }
    }

    fn advance(&mut self) -> Option<[i64; 3]> {
        let mut axis = 0;
        for other in 1..3 {
            if self.t_max[other] < self.t_max[axis] {
                axis = other;
            }
        }

        // A zero-length walk stays put even when it starts on a face
        if self.length > 0.0 && self.t_max[axis] <= self.length {
            self.cell[axis] = self.cell[axis].saturating_add(self.step[axis]);
            self.t_max[axis] += self.t_delta[axis];
            Some(self.cell)
        } else {
            None
        }
    }
}

impl Iterator for GridLine {
    type Item = [i64; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.pending.take()?;
        self.pending = self.advance();
        Some(cell)
    }
}

impl FusedIterator for GridLine {}

/// Distinct chunks crossed by a [`GridLine`], in visiting order
///
/// Only immediately consecutive repeats are collapsed. A path that leaves a
/// chunk and later comes back to it yields that chunk again.
#[derive(Clone, Debug)]
pub struct ChunkTraversal {
    line: GridLine,
    last: Option<ChunkCoord>,
}

impl ChunkTraversal {
    pub fn new(start: Point3, end: Point3) -> Self {
        GridLine::new(start, end).into()
    }
}

impl From<GridLine> for ChunkTraversal {
    fn from(line: GridLine) -> Self {
        Self { line, last: None }
    }
}

impl Iterator for ChunkTraversal {
    type Item = ChunkCoord;

    fn next(&mut self) -> Option<Self::Item> {
        for [x, _, z] in self.line.by_ref() {
            let chunk = ChunkCoord::from_cell(x, z);
            if self.last != Some(chunk) {
                self.last = Some(chunk);
                return Some(chunk);
            }
        }
        None
    }
}

impl FusedIterator for ChunkTraversal {}

/// A segment whose chunk traversal can be replayed any number of times
///
/// The segment runs from `origin` to `origin + direction * length`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkPath {
    pub origin: Point3,
    pub direction: Vec3,
    pub length: f64,
}

impl ChunkPath {
    /// Path from `start` to `end`
    pub fn new(start: Point3, end: Point3) -> Self {
        Self::along(start, end - start, 1.0)
    }

    /// Path covering `length` units of `direction` from `origin`
    pub fn along(origin: Point3, direction: Vec3, length: f64) -> Self {
        Self { origin, direction, length }
    }

    /// Fresh traversal from `origin`
    pub fn iter(&self) -> ChunkTraversal {
        GridLine::along(self.origin, self.direction, self.length).into()
    }
}

impl IntoIterator for &ChunkPath {
    type Item = ChunkCoord;
    type IntoIter = ChunkTraversal;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Distinct chunks between `start` and `end`, in order
pub fn chunks_along(start: Point3, end: Point3) -> ChunkTraversal {
    ChunkTraversal::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: Vec3, end: Vec3) -> Vec<ChunkCoord> {
        chunks_along(start, end).collect()
    }

    fn cell_of(p: Vec3) -> [i64; 3] {
        [p.x.floor() as i64, p.y.floor() as i64, p.z.floor() as i64]
    }

    /// Segments with fractional ends on both sides of chunk boundaries
    fn fractional_segments() -> Vec<(Vec3, Vec3)> {
        vec![
            (Vec3::new(0.5, 64.0, 0.5), Vec3::new(16.2, 64.0, 0.5)),
            (Vec3::new(0.9, 0.0, 0.1), Vec3::new(17.5, 0.0, 17.3)),
            (Vec3::new(-3.7, 10.2, 5.1), Vec3::new(40.3, -2.6, -27.9)),
            (Vec3::new(12.25, 70.0, -0.75), Vec3::new(-33.4, 71.0, 19.6)),
            (Vec3::new(7.3, 0.0, 15.9), Vec3::new(7.6, 2.5, 16.1)),
            (Vec3::new(31.95, 5.0, -16.03), Vec3::new(32.05, 5.0, -15.98)),
            (Vec3::new(-0.1, 0.0, -0.1), Vec3::new(-0.3, 0.0, -47.9)),
        ]
    }

    #[test]
    fn test_grid_line_same_point() {
        let p = Vec3::new(3.5, 4.25, 5.0);
        let cells: Vec<_> = GridLine::new(p, p).collect();
        assert_eq!(cells, vec![[3, 4, 5]]);
    }

    #[test]
    fn test_grid_line_axis_aligned() {
        let cells: Vec<_> = GridLine::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(4.5, 0.5, 0.5)).collect();
        assert_eq!(cells, vec![[0, 0, 0], [1, 0, 0], [2, 0, 0], [3, 0, 0], [4, 0, 0]]);
    }

    #[test]
    fn test_grid_line_floors_continuous_positions() {
        let cells: Vec<_> = GridLine::new(Vec3::new(-0.75, 0.5, 0.5), Vec3::new(2.5, 0.5, 0.5)).collect();
        assert_eq!(cells, vec![[-1, 0, 0], [0, 0, 0], [1, 0, 0], [2, 0, 0]]);
    }

    #[test]
    fn test_grid_line_enters_clipped_corner_cell() {
        // Crosses x = 1 just below z = 1, then z = 1
        let cells: Vec<_> = GridLine::new(Vec3::new(0.2, 0.5, 0.9), Vec3::new(1.9, 0.5, 1.1)).collect();
        assert_eq!(cells, vec![[0, 0, 0], [1, 0, 0], [1, 0, 1]]);
    }

    #[test]
    fn test_grid_line_face_steps_and_endpoints() {
        for (start, end) in fractional_segments() {
            let cells: Vec<_> = GridLine::new(start, end).collect();
            assert_eq!(cells[0], cell_of(start));
            assert_eq!(*cells.last().unwrap(), cell_of(end), "{start:?} -> {end:?}");

            for pair in cells.windows(2) {
                let moved: i64 = (0..3).map(|a| (pair[1][a] - pair[0][a]).abs()).sum();
                assert_eq!(moved, 1, "{:?} -> {:?} is not a face step", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_grid_line_zero_length_on_a_face() {
        let cells: Vec<_> = GridLine::along(Vec3::ZERO, -Vec3::X, 0.0).collect();
        assert_eq!(cells, vec![[0, 0, 0]]);
    }

    #[test]
    fn test_grid_line_leaves_face_when_moving_negative() {
        let cells: Vec<_> = GridLine::along(Vec3::new(16.0, 0.5, 0.5), -Vec3::X, 0.5).collect();
        assert_eq!(cells, vec![[16, 0, 0], [15, 0, 0]]);
    }

    #[test]
    fn test_grid_line_shorter_length_is_prefix() {
        let start = Vec3::new(2.3, 64.1, -7.6);
        let dir = Vec3::new(0.8137, -0.3049, 0.5273).try_normalized().unwrap();
        let long: Vec<_> = GridLine::along(start, dir, 300.0).collect();
        for len in [0.0, 1.0, 17.0, 120.5, 299.99] {
            let short: Vec<_> = GridLine::along(start, dir, len).collect();
            assert_eq!(short.as_slice(), &long[..short.len()]);
        }
    }

    #[test]
    fn test_three_chunks_along_x() {
        let chunks = collect(Vec3::ZERO, Vec3::new(32.0, 0.0, 0.0));
        assert_eq!(
            chunks,
            vec![ChunkCoord::new(0, 0), ChunkCoord::new(1, 0), ChunkCoord::new(2, 0)]
        );
    }

    #[test]
    fn test_segment_ending_just_past_chunk_boundary() {
        let chunks = collect(Vec3::new(0.5, 0.0, 0.5), Vec3::new(16.2, 0.0, 0.5));
        assert_eq!(chunks, vec![ChunkCoord::new(0, 0), ChunkCoord::new(1, 0)]);
    }

    #[test]
    fn test_chunks_cover_whole_segment() {
        const SAMPLES: u32 = 4096;
        for (start, end) in fractional_segments() {
            let chunks = collect(start, end);
            assert_eq!(chunks[0], ChunkCoord::containing(start));
            assert_eq!(*chunks.last().unwrap(), ChunkCoord::containing(end), "{start:?} -> {end:?}");

            for i in 0..=SAMPLES {
                let p = start + (end - start) * (f64::from(i) / f64::from(SAMPLES));
                let chunk = ChunkCoord::containing(p);
                assert!(chunks.contains(&chunk), "{chunk:?} at {p:?} missing for {start:?} -> {end:?}");
            }

            for pair in chunks.windows(2) {
                let moved = (pair[1].cx - pair[0].cx).abs() + (pair[1].cz - pair[0].cz).abs();
                assert_eq!(moved, 1);
            }
        }
    }

    #[test]
    fn test_same_point_yields_one_chunk() {
        let p = Vec3::new(-3.5, 70.0, 40.25);
        let chunks = collect(p, p);
        assert_eq!(chunks, vec![ChunkCoord::containing(p)]);
        assert_eq!(chunks[0], ChunkCoord::new(-1, 2));
    }

    #[test]
    fn test_negative_direction_crosses_origin() {
        let chunks = collect(Vec3::new(0.5, 0.0, 0.5), Vec3::new(-20.0, 0.0, 0.5));
        assert_eq!(
            chunks,
            vec![ChunkCoord::new(0, 0), ChunkCoord::new(-1, 0), ChunkCoord::new(-2, 0)]
        );
    }

    #[test]
    fn test_vertical_segment_stays_in_one_chunk() {
        let chunks = collect(Vec3::new(5.0, 0.0, 5.0), Vec3::new(5.0, 255.0, 5.0));
        assert_eq!(chunks, vec![ChunkCoord::new(0, 0)]);
    }

    #[test]
    fn test_no_consecutive_duplicates() {
        let cases = [
            (Vec3::new(0.0, 64.0, 0.0), Vec3::new(100.0, 10.0, 37.0)),
            (Vec3::new(-40.0, 0.0, 90.0), Vec3::new(33.0, 5.0, -70.0)),
            (Vec3::new(7.5, 7.5, 7.5), Vec3::new(-200.0, 30.0, -199.0)),
        ];
        for (start, end) in cases {
            let chunks = collect(start, end);
            assert!(!chunks.is_empty());
            assert_eq!(chunks[0], ChunkCoord::containing(start));
            for pair in chunks.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_chunk_path_along_matches_segment() {
        let origin = Vec3::new(-10.5, 0.0, -10.5);
        let dir = Vec3::new(0.6, 0.0, 0.8);
        let along: Vec<_> = ChunkPath::along(origin, dir, 50.0).iter().collect();
        assert_eq!(*along.last().unwrap(), ChunkCoord::containing(origin + dir * 50.0));
        assert_eq!(along[0], ChunkCoord::containing(origin));
    }

    #[test]
    fn test_chunk_path_is_restartable() {
        let path = ChunkPath::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(50.0, 0.0, 20.0));
        let first: Vec<_> = path.iter().collect();
        let second: Vec<_> = (&path).into_iter().collect();
        assert_eq!(first, second);

        // A cloned traversal mid-way resumes from the same point
        let mut traversal = path.iter();
        traversal.next();
        let rest_a: Vec<_> = traversal.clone().collect();
        let rest_b: Vec<_> = traversal.collect();
        assert_eq!(rest_a, rest_b);
        assert_eq!(rest_a.as_slice(), &first[1..]);
    }
}
