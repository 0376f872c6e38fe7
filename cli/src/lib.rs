use std::path::PathBuf;

use clap::Args;
use image::Rgba;
use polygonize::{Channel, ExtractionConfig, PolygonizeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Polygonize(#[from] PolygonizeError),
    #[error("Invalid color '{0}', expected RRGGBB or RRGGBBAA")]
    InvalidColor(String),
}

/// Extraction settings, read from an optional config file and overridden by flags
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ExtractArgs {
    /// Path to a .toml or .json configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Channel the threshold applies to (grey, red, green, blue)
    #[arg(long)]
    pub channel: Option<Channel>,
    /// Threshold in 0..=254
    #[arg(short, long)]
    pub threshold: Option<u8>,
    /// Select pixels below the threshold instead of above it
    #[arg(long)]
    pub inverted: bool,
    /// Border pixels walked per recorded vertex
    #[arg(short, long)]
    pub step: Option<usize>,
    /// Remove collinear vertices
    #[arg(long)]
    pub simplify: bool,
    /// Drop polygons with fewer vertices
    #[arg(long)]
    pub min_vertices: Option<usize>,
}

impl ExtractArgs {
    /// Load the config file (if any) and apply command line overrides
    pub fn resolve(&self) -> Result<ExtractionConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ExtractionConfig::from_file(path)?,
            None => ExtractionConfig::default(),
        };

        if let Some(channel) = self.channel {
            config.filter.channel = channel;
        }
        if let Some(threshold) = self.threshold {
            config.filter.threshold = threshold;
        }
        if self.inverted {
            config.filter.inverted = true;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if self.simplify {
            config.simplify = true;
        }
        if let Some(min_vertices) = self.min_vertices {
            config.min_vertices = min_vertices;
        }

        Ok(config)
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
pub fn parse_color(hex: &str) -> Result<Rgba<u8>, CliError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || CliError::InvalidColor(hex.to_string());

    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let mut channels = [255u8; 4];
    for (i, channel) in channels.iter_mut().take(digits.len() / 2).enumerate() {
        *channel = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| invalid())?;
    }
    Ok(Rgba(channels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ExtractArgs,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::try_parse_from([
            "test", "--channel", "green", "-t", "90", "--inverted", "-s", "3", "--simplify",
        ])
        .expect("valid arguments");

        let config = cli.args.resolve().expect("no config file");
        assert_eq!(config.filter.channel, Channel::Green);
        assert_eq!(config.filter.threshold, 90);
        assert!(config.filter.inverted);
        assert_eq!(config.step, 3);
        assert!(config.simplify);
        assert_eq!(config.min_vertices, 0);
    }

    #[test]
    fn test_unknown_channel_rejected() {
        assert!(TestCli::try_parse_from(["test", "--channel", "cyan"]).is_err());
    }

    #[test]
    fn test_no_flags_gives_default_config() {
        let config = ExtractArgs::default().resolve().expect("no config file");
        assert_eq!(config, ExtractionConfig::default());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("ff0000").ok(), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(parse_color("#00ff0080").ok(), Some(Rgba([0, 255, 0, 128])));
        assert!(matches!(parse_color("red"), Err(CliError::InvalidColor(_))));
        assert!(matches!(parse_color("gg0000"), Err(CliError::InvalidColor(_))));
    }
}
