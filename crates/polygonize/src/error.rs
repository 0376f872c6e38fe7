use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolygonizeError {
    #[error("Threshold makes the classifier constant")]
    ConstantThreshold,

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported config format. Please use .toml or .json files")]
    UnsupportedConfigFormat,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
}

pub type Result<T> = std::result::Result<T, PolygonizeError>;
