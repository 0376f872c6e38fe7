use std::collections::HashSet;

use tracing::trace;

use super::boundary::NEIGHBOURS;
use crate::{grid::Grid, traits::PixelClassifier, types::Coordinate};

/// Number of slots the pending stack grows by when it runs full.
pub const STACK_CHUNK: usize = 5000;

/// LIFO of coordinates waiting to be erased.
///
/// A coordinate is never held twice at the same time. Capacity grows in
/// fixed chunks and is kept when entries are popped.
#[derive(Debug)]
pub struct PendingStack {
    data: Vec<Coordinate>,
    contains: HashSet<Coordinate>,
}

impl PendingStack {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(STACK_CHUNK),
            contains: HashSet::new(),
        }
    }

    /// Push `at` unless it is already pending. Returns whether it was added.
    pub fn push(&mut self, at: Coordinate) -> bool {
        if !self.contains.insert(at) {
            return false;
        }
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(STACK_CHUNK);
        }
        self.data.push(at);
        true
    }

    pub fn pop(&mut self) -> Option<Coordinate> {
        let at = self.data.pop()?;
        self.contains.remove(&at);
        Some(at)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl Default for PendingStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Flood-fill the 8-connected region containing `seed` with the classifier's
/// false color. Returns the number of pixels cleared.
///
/// Neighbours are only followed when their stored color equals
/// `classifier.true_color()`, so the region must already be painted in the
/// canonical true color (see [`render`](super::render::render)) for it to be
/// erased as a whole. The seed itself only has to classify as inside.
pub fn erase<C>(grid: &mut Grid, seed: Coordinate, classifier: &C) -> usize
where
    C: PixelClassifier + ?Sized,
{
    erase_with(grid, seed, classifier, |_| {})
}

/// Like [`erase`], calling `on_clear` with every pixel as it is cleared.
pub fn erase_with<C, F>(grid: &mut Grid, seed: Coordinate, classifier: &C, mut on_clear: F) -> usize
where
    C: PixelClassifier + ?Sized,
    F: FnMut(Coordinate),
{
    let true_color = classifier.true_color();
    let false_color = classifier.false_color();

    let mut stack = PendingStack::new();
    stack.push(seed);
    let mut cleared = 0;

    while let Some(at) = stack.pop() {
        match grid.get(at) {
            Some(color) if classifier.classify(&color) => {}
            _ => continue,
        }

        grid.set(at, false_color);
        on_clear(at);
        cleared += 1;

        for (dx, dy) in NEIGHBOURS {
            let neighbour = at.offset(dx, dy);
            if grid.get(neighbour) == Some(true_color) {
                stack.push(neighbour);
            }
        }
    }

    trace!("Erased {} pixels from region at ({}, {})", cleared, seed.x, seed.y);
    cleared
}
