use image::{DynamicImage, Rgba, RgbaImage};

use crate::types::Coordinate;

/// Canonical in-memory raster the extraction engine works on.
///
/// `Clone` is the full-copy operation; the engine clones the caller's grid
/// once and only ever mutates its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    image: RgbaImage,
}

impl Grid {
    /// Create a grid filled with a single color.
    pub fn new(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, fill),
        }
    }

    /// Convert any decoded image into the canonical RGBA representation.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Strict bounds test: `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, at: Coordinate) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width() as i64 && at.y < self.height() as i64
    }

    pub fn get(&self, at: Coordinate) -> Option<Rgba<u8>> {
        self.contains(at)
            .then(|| *self.image.get_pixel(at.x as u32, at.y as u32))
    }

    /// Write a pixel. Writes outside the grid are ignored.
    pub fn set(&mut self, at: Coordinate, color: Rgba<u8>) {
        if self.contains(at) {
            self.image.put_pixel(at.x as u32, at.y as u32, color);
        }
    }

    /// Column-major iteration over every coordinate (x outer, y inner).
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let (width, height) = (self.width() as i64, self.height() as i64);
        (0..width).flat_map(move |x| (0..height).map(move |y| Coordinate::new(x, y)))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl From<RgbaImage> for Grid {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl From<&DynamicImage> for Grid {
    fn from(image: &DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_strict() {
        let grid = Grid::new(4, 3, Rgba([0, 0, 0, 255]));
        assert!(grid.contains(Coordinate::new(0, 0)));
        assert!(grid.contains(Coordinate::new(3, 2)));
        // width and height themselves are outside
        assert!(!grid.contains(Coordinate::new(4, 0)));
        assert!(!grid.contains(Coordinate::new(0, 3)));
        assert!(!grid.contains(Coordinate::new(-1, 0)));
        assert!(!grid.contains(Coordinate::new(0, -1)));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(2, 2, Rgba([1, 2, 3, 255]));
        assert_eq!(grid.get(Coordinate::new(2, 0)), None);
        grid.set(Coordinate::new(5, 5), Rgba([9, 9, 9, 255]));
        assert_eq!(grid, Grid::new(2, 2, Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Grid::new(3, 3, Rgba([0, 0, 0, 255]));
        let mut copy = original.clone();
        copy.set(Coordinate::new(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(original.get(Coordinate::new(1, 1)), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(copy.get(Coordinate::new(1, 1)), Some(Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_column_major_order() {
        let grid = Grid::new(2, 2, Rgba([0, 0, 0, 255]));
        let order: Vec<_> = grid.coordinates().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_from_dynamic_converts_to_rgba() {
        let gray = image::GrayImage::from_pixel(2, 1, image::Luma([200]));
        let grid = Grid::from_dynamic(&DynamicImage::ImageLuma8(gray));
        assert_eq!(grid.get(Coordinate::new(1, 0)), Some(Rgba([200, 200, 200, 255])));
    }
}
