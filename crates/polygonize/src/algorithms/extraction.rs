use tracing::debug;

use super::{boundary::trace, erasing::erase_with, render::render};
use crate::{
    grid::Grid,
    traits::PixelClassifier,
    types::{Coordinate, Polygon},
};

/// First inside pixel in column-major order (x outer, y inner).
pub fn first_true_pixel<C>(grid: &Grid, classifier: &C) -> Option<Coordinate>
where
    C: PixelClassifier + ?Sized,
{
    grid.coordinates()
        .find(|&at| grid.get(at).is_some_and(|color| classifier.classify(&color)))
}

/// Lazy polygon extraction over a private working copy of a grid.
///
/// Each call to `next` finds the first inside pixel, traces its region and
/// erases the region. Tracing and erasure run on the classifier's rendering
/// of the input so that erasure removes complete regions; every pixel cleared
/// there is also cleared in a copy of the input, which keeps its original
/// colors elsewhere. Iteration ends after at most as many steps as there are
/// inside pixels.
pub struct Extraction<C> {
    mask: Grid,
    grid: Grid,
    classifier: C,
    step: usize,
}

impl<C: PixelClassifier> Extraction<C> {
    pub fn new(grid: &Grid, classifier: C, step: usize) -> Self {
        Self {
            mask: render(grid, &classifier),
            grid: grid.clone(),
            classifier,
            step,
        }
    }

    /// Copy of the input with every region extracted so far erased.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl<C: PixelClassifier> Iterator for Extraction<C> {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        let seed = first_true_pixel(&self.mask, &self.classifier)?;
        let polygon = trace(&self.mask, &self.classifier, seed, self.step);

        let false_color = self.classifier.false_color();
        let grid = &mut self.grid;
        let cleared = erase_with(&mut self.mask, seed, &self.classifier, |at| {
            grid.set(at, false_color)
        });

        debug!(
            "Region at ({}, {}): {} vertices, {} pixels",
            seed.x,
            seed.y,
            polygon.as_ref().map_or(0, Polygon::len),
            cleared
        );
        polygon
    }
}

/// Extract every polygon in `grid`. `grid` itself is not modified.
///
/// A larger `step` yields fewer vertices per polygon but makes
/// self-intersecting outlines more likely.
pub fn extract_all<C>(grid: &Grid, classifier: &C, step: usize) -> Vec<Polygon>
where
    C: PixelClassifier + ?Sized,
{
    Extraction::new(grid, classifier, step).collect()
}

/// Extract the first polygon and return it with a copy of `grid` in which
/// its region is set to the classifier's false color. Returns `None` if no
/// pixel is inside.
///
/// The returned grid can be passed back in to continue extraction.
pub fn extract_next<C>(grid: &Grid, classifier: &C, step: usize) -> Option<(Polygon, Grid)>
where
    C: PixelClassifier + ?Sized,
{
    let mut extraction = Extraction::new(grid, classifier, step);
    let polygon = extraction.next()?;
    Some((polygon, extraction.into_grid()))
}
