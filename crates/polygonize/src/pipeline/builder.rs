use crate::{
    classifier::ThresholdClassifier,
    pipeline::Pipeline,
    traits::PixelClassifier,
};

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    classifier: Option<Box<dyn PixelClassifier>>,
    step: usize,
    simplify: bool,
    min_vertices: usize,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            classifier: None,
            step: 1,
            simplify: false,
            min_vertices: 0,
        }
    }

    /// Set the pixel classifier (replaces any existing one)
    pub fn set_classifier<C>(mut self, classifier: C) -> Self
    where
        C: PixelClassifier + 'static,
    {
        self.classifier = Some(Box::new(classifier));
        self
    }

    /// Record one vertex every `step` border pixels
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }

    /// Remove collinear vertices from every polygon
    pub fn with_simplification(mut self) -> Self {
        self.simplify = true;
        self
    }

    /// Drop polygons with fewer vertices than this
    pub fn with_min_vertices(mut self, min_vertices: usize) -> Self {
        self.min_vertices = min_vertices;
        self
    }

    /// Build the pipeline, using the default grey classifier if none was set
    pub fn build(self) -> Pipeline {
        let classifier = self.classifier
            .unwrap_or_else(|| Box::new(ThresholdClassifier::default()));

        Pipeline::new(classifier, self.step, self.simplify, self.min_vertices)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
