pub mod builder;

use tracing::info;
use crate::{
    algorithms::{extract_all, simplify},
    grid::Grid,
    traits::PixelClassifier,
    types::ExtractedPolygons,
};

/// Extraction followed by optional simplification and filtering.
pub struct Pipeline {
    classifier: Box<dyn PixelClassifier>,
    step: usize,
    simplify: bool,
    min_vertices: usize,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        classifier: Box<dyn PixelClassifier>,
        step: usize,
        simplify: bool,
        min_vertices: usize,
    ) -> Self {
        Self {
            classifier,
            step,
            simplify,
            min_vertices,
        }
    }

    /// Process a grid through the entire pipeline. The grid is not modified.
    pub fn process(&self, grid: &Grid) -> ExtractedPolygons {
        // Step 1: Trace and erase every region
        let mut polygons = extract_all(grid, self.classifier.as_ref(), self.step);
        let traced = polygons.len();

        // Step 2: Drop collinear vertices
        if self.simplify {
            polygons = polygons.iter().map(simplify).collect();
        }

        // Step 3: Filter out polygons that are too small
        polygons.retain(|polygon| polygon.len() >= self.min_vertices);

        info!(
            "Extracted {} polygons ({} traced) from {}x{} image",
            polygons.len(),
            traced,
            grid.width(),
            grid.height()
        );

        ExtractedPolygons {
            polygons,
            image_width: grid.width(),
            image_height: grid.height(),
        }
    }

    pub fn classifier(&self) -> &dyn PixelClassifier {
        self.classifier.as_ref()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: step {}, simplification {}, minimum {} vertices",
            self.step,
            if self.simplify { "on" } else { "off" },
            self.min_vertices
        )
    }
}
