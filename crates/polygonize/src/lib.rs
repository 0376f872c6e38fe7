//! # Raster Polygon Extraction Library
//!
//! Turns regions of a raster image into polygon outlines. A
//! [`PixelClassifier`] decides which pixels are inside a region; every
//! 8-connected region of inside pixels is traced clockwise along its outer
//! border and returned as an ordered list of corner coordinates.
//!
//! ## Core Features
//!
//! - **Boundary tracing**: neighbour-sweep border walker with a configurable stride
//! - **Region erasure**: stack based flood fill so each region is reported once
//! - **Simplification**: removal of collinear vertices
//! - **Classifiers**: grey/red/green/blue thresholds or any closure
//! - **GeoJSON Support**: export/import of extracted polygons
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polygonize::{ThresholdClassifier, extract_all, load_image, simplify};
//!
//! let grid = load_image("mask.png")?;
//! let classifier = ThresholdClassifier::grey(100, true)?;
//!
//! for polygon in extract_all(&grid, &classifier, 1) {
//!     let corners = simplify(&polygon);
//!     println!("{} corners", corners.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pipeline
//!
//! ```rust,no_run
//! use polygonize::{Pipeline, ThresholdClassifier, load_image};
//!
//! let pipeline = Pipeline::builder()
//!     .set_classifier(ThresholdClassifier::red(150, false)?)
//!     .with_step(2)
//!     .with_simplification()
//!     .build();
//!
//! let result = pipeline.process(&load_image("mask.png")?);
//! result.save_geojson("output.geojson")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod grid;
pub mod traits;
pub mod classifier;
pub mod algorithms;
pub mod pipeline;
pub mod io;
pub mod config;

// Re-exports for convenience
pub use error::{PolygonizeError, Result};
pub use types::{Coordinate, ExtractedPolygons, Polygon};
pub use grid::Grid;
pub use traits::PixelClassifier;
pub use classifier::{Channel, FnClassifier, ThresholdClassifier};
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use io::{load_image, save_image};
pub use config::{ExtractionConfig, FilterConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn create_test_grid() -> Grid {
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        for y in 20..80 {
            for x in 20..80 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        Grid::from(img)
    }

    fn create_two_shape_grid() -> Grid {
        let mut img = RgbaImage::from_pixel(200, 120, Rgba([0, 0, 0, 255]));

        // Rectangle
        for y in 10..50 {
            for x in 10..90 {
                img.put_pixel(x, y, Rgba([230, 230, 230, 255]));
            }
        }

        // Circle
        let (cx, cy, r) = (150.0f32, 70.0f32, 30.0f32);
        for y in 40..101 {
            for x in 120..181 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    img.put_pixel(x, y, Rgba([200, 200, 200, 255]));
                }
            }
        }

        Grid::from(img)
    }

    #[test]
    fn test_pipeline_basic() {
        let pipeline = Pipeline::builder().build();
        let grid = create_test_grid();

        let result = pipeline.process(&grid);
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.image_width, 100);
        assert_eq!(result.image_height, 100);
    }

    #[test]
    fn test_pipeline_with_simplification() {
        let pipeline = Pipeline::builder()
            .with_simplification()
            .build();
        let grid = create_test_grid();

        let result = pipeline.process(&grid);
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(
            result.polygons[0].vertices,
            vec![
                Coordinate::new(79, 20),
                Coordinate::new(79, 79),
                Coordinate::new(20, 79),
                Coordinate::new(20, 20),
            ]
        );
    }

    #[test]
    fn test_coarse_step_reduces_vertices() {
        let grid = create_test_grid();
        let fine = Pipeline::builder().build().process(&grid);
        let coarse = Pipeline::builder().with_step(10).build().process(&grid);

        assert_eq!(coarse.polygons.len(), 1);
        assert!(coarse.total_vertices() < fine.total_vertices());
    }

    #[test]
    fn test_two_shapes() {
        let grid = create_two_shape_grid();
        let classifier = ThresholdClassifier::grey(100, false).expect("valid threshold");

        let polygons = extract_all(&grid, &classifier, 1);
        assert_eq!(polygons.len(), 2);
        for polygon in &polygons {
            assert!(polygon.iter().all(|&c| grid.contains(c)));
            assert_eq!(simplify(&simplify(polygon)), simplify(polygon));
        }
    }

    #[test]
    fn test_min_vertices_filter() {
        let mut grid = create_test_grid();
        grid.set(Coordinate::new(5, 5), Rgba([255, 255, 255, 255]));

        let all = Pipeline::builder().build().process(&grid);
        let filtered = Pipeline::builder().with_min_vertices(3).build().process(&grid);
        assert_eq!(all.polygons.len(), 2);
        assert_eq!(filtered.polygons.len(), 1);
    }

    #[test]
    fn test_custom_classifier() {
        let mut img = RgbaImage::from_pixel(30, 30, Rgba([0, 0, 0, 0]));
        for y in 5..10 {
            for x in 5..25 {
                img.put_pixel(x, y, Rgba([10, 20, 30, 255]));
            }
        }
        let classifier = FnClassifier::new(
            |p: &Rgba<u8>| p.0[3] > 0,
            Rgba([255, 255, 255, 255]),
            Rgba([0, 0, 0, 0]),
        );

        let pipeline = Pipeline::builder()
            .set_classifier(classifier)
            .with_simplification()
            .build();
        let result = pipeline.process(&Grid::from(img));
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.polygons[0].len(), 4);
    }

    #[test]
    fn test_config_driven_pipeline() {
        let config = ExtractionConfig::from_toml(
            r#"
            simplify = true

            [filter]
            channel = "grey"
            threshold = 100
            "#,
        )
        .expect("valid config");
        let pipeline = config.build_pipeline().expect("valid pipeline");

        let result = pipeline.process(&create_two_shape_grid());
        assert_eq!(result.polygons.len(), 2);
        let geojson = result.to_geojson().expect("Should create GeoJSON");
        assert_eq!(geojson.features.len(), 2);
    }
}
