pub mod geojson;
pub mod raster;

pub use raster::{load_image, save_image};
