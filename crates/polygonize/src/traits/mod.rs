use image::Rgba;

/// Decides whether a pixel belongs to a region.
///
/// `true_color` and `false_color` are written into working grids as sentinels,
/// so implementations must classify them as `true` and `false` respectively
/// and neither color may otherwise appear in an image with a different
/// meaning.
pub trait PixelClassifier: Send + Sync {
    /// Returns `true` if the color is inside a region
    fn classify(&self, color: &Rgba<u8>) -> bool;

    /// Canonical color for pixels classified as inside
    fn true_color(&self) -> Rgba<u8>;

    /// Canonical color for pixels classified as outside
    fn false_color(&self) -> Rgba<u8>;
}

impl<T: PixelClassifier + ?Sized> PixelClassifier for &T {
    fn classify(&self, color: &Rgba<u8>) -> bool {
        (**self).classify(color)
    }

    fn true_color(&self) -> Rgba<u8> {
        (**self).true_color()
    }

    fn false_color(&self) -> Rgba<u8> {
        (**self).false_color()
    }
}

impl<T: PixelClassifier + ?Sized> PixelClassifier for Box<T> {
    fn classify(&self, color: &Rgba<u8>) -> bool {
        (**self).classify(color)
    }

    fn true_color(&self) -> Rgba<u8> {
        (**self).true_color()
    }

    fn false_color(&self) -> Rgba<u8> {
        (**self).false_color()
    }
}
