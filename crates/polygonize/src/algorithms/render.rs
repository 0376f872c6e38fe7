use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::{grid::Grid, traits::PixelClassifier, types::Polygon};

/// Replace every pixel with the classifier's true or false color.
///
/// Useful to inspect what a classifier sees; the input is left untouched.
pub fn render<C>(grid: &Grid, classifier: &C) -> Grid
where
    C: PixelClassifier + ?Sized,
{
    let (true_color, false_color) = (classifier.true_color(), classifier.false_color());
    let source = grid.as_image();

    let rendered = RgbaImage::from_fn(source.width(), source.height(), |x, y| {
        if classifier.classify(source.get_pixel(x, y)) {
            true_color
        } else {
            false_color
        }
    });

    Grid::from(rendered)
}

/// Draw each polygon as a closed outline on top of a copy of `image`.
pub fn draw_outlines(image: &RgbaImage, polygons: &[Polygon], color: Rgba<u8>) -> RgbaImage {
    let mut canvas = image.clone();

    for polygon in polygons {
        let n = polygon.len();
        for i in 0..n {
            let a = polygon.vertices[i];
            let b = polygon.vertices[(i + 1) % n];
            draw_line_segment_mut(
                &mut canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                color,
            );
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classifier::ThresholdClassifier, types::Coordinate};

    fn gradient() -> Grid {
        Grid::from(RgbaImage::from_fn(16, 4, |x, y| {
            let v = (x * 16 + y) as u8;
            Rgba([v, v, v, 255])
        }))
    }

    #[test]
    fn test_render_is_pure() {
        let grid = gradient();
        let before = grid.clone();
        let classifier = ThresholdClassifier::grey(120, false).expect("valid threshold");

        let first = render(&grid, &classifier);
        let second = render(&grid, &classifier);
        assert_eq!(first, second);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_render_round_trip() {
        let grid = gradient();
        let classifier = ThresholdClassifier::grey(120, true).expect("valid threshold");
        let rendered = render(&grid, &classifier);

        for at in grid.coordinates() {
            let original = grid.get(at).expect("in bounds");
            let output = rendered.get(at).expect("in bounds");
            let inside = classifier.classify(&original);
            assert_eq!(output == classifier.true_color(), inside);
            assert_eq!(classifier.classify(&output), inside);
        }
    }

    #[test]
    fn test_draw_outlines_closes_ring() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let red = Rgba([255, 0, 0, 255]);
        let square = Polygon::new(vec![
            Coordinate::new(1, 1),
            Coordinate::new(5, 1),
            Coordinate::new(5, 5),
            Coordinate::new(1, 5),
        ]);

        let out = draw_outlines(&image, &[square], red);
        assert_eq!(*out.get_pixel(3, 1), red);
        // closing edge from last vertex back to the first
        assert_eq!(*out.get_pixel(1, 3), red);
        assert_eq!(*out.get_pixel(3, 3), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(3, 1), Rgba([0, 0, 0, 255]));
    }
}
