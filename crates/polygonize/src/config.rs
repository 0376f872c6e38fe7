use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    classifier::{Channel, ThresholdClassifier},
    error::{PolygonizeError, Result},
    pipeline::Pipeline,
};

/// Which pixels count as inside a region.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    pub channel: Channel,
    /// Must be below 255
    pub threshold: u8,
    /// Accept values below the threshold instead of above it
    pub inverted: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            channel: Channel::Grey,
            threshold: 128,
            inverted: false,
        }
    }
}

impl FilterConfig {
    pub fn classifier(&self) -> Result<ThresholdClassifier> {
        ThresholdClassifier::new(self.channel, self.threshold, self.inverted)
    }
}

/// Settings for one extraction run, loadable from TOML or JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Border pixels walked per recorded vertex
    #[schemars(range(min = 1))]
    pub step: usize,
    /// Remove collinear vertices
    pub simplify: bool,
    /// Drop polygons with fewer vertices
    pub min_vertices: usize,
    pub filter: FilterConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            step: 1,
            simplify: false,
            min_vertices: 0,
            filter: FilterConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Get the JSON schema of the configuration file
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ExtractionConfig)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            _ => Err(PolygonizeError::UnsupportedConfigFormat),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the filter and assemble a [`Pipeline`].
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let mut builder = Pipeline::builder()
            .set_classifier(self.filter.classifier()?)
            .with_step(self.step)
            .with_min_vertices(self.min_vertices);

        if self.simplify {
            builder = builder.with_simplification();
        }

        Ok(builder.build())
    }
}
