use crate::{
    grid::Grid,
    traits::PixelClassifier,
    types::{Coordinate, Polygon},
};

/// Offsets of the 8 neighbours in clockwise order, starting north-west.
pub(crate) const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Index into the clockwise neighbour ring, always in `0..8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    pub const fn new(index: u8) -> Self {
        Self(index % 8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rotate clockwise by `steps` eighths of a turn.
    pub const fn rotate(self, steps: u8) -> Self {
        Self((self.0 + steps % 8) % 8)
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        self.rotate(4)
    }

    pub const fn offset(self) -> (i64, i64) {
        NEIGHBOURS[self.0 as usize]
    }
}

/// `true` iff `at` is inside the grid and classified as inside.
pub(crate) fn is_inside<C>(grid: &Grid, classifier: &C, at: Coordinate) -> bool
where
    C: PixelClassifier + ?Sized,
{
    grid.get(at).is_some_and(|color| classifier.classify(&color))
}

/// Advance one pixel clockwise along the border of the region containing `at`.
///
/// The ring of neighbours is swept clockwise starting at `dir`. The walker
/// moves to the first inside neighbour that follows an outside one; the sweep
/// ends on the neighbour it started from, so a dead end turns back. Returns
/// the new position and the direction pointing back at the old one, or the
/// unchanged state if no such neighbour exists.
pub fn next_pixel<C>(
    grid: &Grid,
    classifier: &C,
    at: Coordinate,
    dir: Direction,
) -> (Coordinate, Direction)
where
    C: PixelClassifier + ?Sized,
{
    let mut seen_outside = false;
    for i in 0..=8 {
        let probe = dir.rotate(i);
        let (dx, dy) = probe.offset();
        let candidate = at.offset(dx, dy);

        if !is_inside(grid, classifier, candidate) {
            seen_outside = true;
        } else if seen_outside {
            return (candidate, probe.reverse());
        }
    }
    (at, dir)
}

/// Trace the outline of the region containing `seed`.
///
/// Every `step` border pixels one vertex is recorded. Tracing stops as soon
/// as the walker lands on an already recorded vertex. A `step` of zero is
/// treated as one. Returns `None` if `seed` is not an inside pixel.
pub fn trace<C>(grid: &Grid, classifier: &C, seed: Coordinate, step: usize) -> Option<Polygon>
where
    C: PixelClassifier + ?Sized,
{
    if !is_inside(grid, classifier, seed) {
        return None;
    }

    let step = step.max(1);
    let mut vertices: Vec<Coordinate> = Vec::new();
    let mut at = seed;
    let mut dir = Direction::default();

    loop {
        let mut closed = false;
        for _ in 0..step {
            (at, dir) = next_pixel(grid, classifier, at, dir);
            // border loops are short, a linear scan is enough
            if vertices.contains(&at) {
                closed = true;
            }
        }
        if closed {
            break;
        }
        vertices.push(at);
    }

    Some(Polygon::new(vertices))
}
