use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::{
    error::{PolygonizeError, Result},
    grid::Grid,
};

/// Pick the codec from the file extension; only PNG and JPEG are supported.
fn format_for(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg" | "jpeg") => Ok(ImageFormat::Jpeg),
        _ => Err(PolygonizeError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Decode a PNG or JPEG file into a [`Grid`].
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let format = format_for(path)?;

    let reader = BufReader::new(File::open(path)?);
    let decoded = image::load(reader, format)?;
    debug!("Loaded {} ({}x{})", path.display(), decoded.width(), decoded.height());

    Ok(Grid::from_dynamic(&decoded))
}

/// Encode a [`Grid`] as PNG or JPEG depending on the extension of `path`.
///
/// JPEG has no alpha channel, so it is dropped on save.
pub fn save_image<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let format = format_for(path)?;

    match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(grid.as_image().clone()).to_rgb8();
            rgb.save_with_format(path, format)?;
        }
        _ => grid.as_image().save_with_format(path, format)?,
    }

    debug!("Saved {}", path.display());
    Ok(())
}
