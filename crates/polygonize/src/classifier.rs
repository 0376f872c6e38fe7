use image::Rgba;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{
    error::{PolygonizeError, Result},
    traits::PixelClassifier,
};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Color channel a [`ThresholdClassifier`] compares against its threshold.
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq, Hash
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Channel {
    /// Average of red, green and blue
    #[default]
    Grey,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Sentinel color for inside pixels when the classifier is not inverted.
    fn accent(self) -> Rgba<u8> {
        match self {
            Self::Grey => WHITE,
            Self::Red => Rgba([255, 0, 0, 255]),
            Self::Green => Rgba([0, 255, 0, 255]),
            Self::Blue => Rgba([0, 0, 255, 255]),
        }
    }
}

/// Classifier comparing one channel (or the grey value) against a threshold.
///
/// A non-inverted classifier accepts values strictly above the threshold,
/// an inverted one values strictly below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdClassifier {
    channel: Channel,
    threshold: u8,
    inverted: bool,
    true_color: Rgba<u8>,
    false_color: Rgba<u8>,
}

impl ThresholdClassifier {
    /// Fails with [`PolygonizeError::ConstantThreshold`] for threshold 255.
    pub fn new(channel: Channel, threshold: u8, inverted: bool) -> Result<Self> {
        if threshold == u8::MAX {
            return Err(PolygonizeError::ConstantThreshold);
        }

        let (true_color, false_color) = if inverted {
            (BLACK, channel.accent())
        } else {
            (channel.accent(), BLACK)
        };

        Ok(Self {
            channel,
            threshold,
            inverted,
            true_color,
            false_color,
        })
    }

    pub fn grey(threshold: u8, inverted: bool) -> Result<Self> {
        Self::new(Channel::Grey, threshold, inverted)
    }

    pub fn red(threshold: u8, inverted: bool) -> Result<Self> {
        Self::new(Channel::Red, threshold, inverted)
    }

    pub fn green(threshold: u8, inverted: bool) -> Result<Self> {
        Self::new(Channel::Green, threshold, inverted)
    }

    pub fn blue(threshold: u8, inverted: bool) -> Result<Self> {
        Self::new(Channel::Blue, threshold, inverted)
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    fn compare(&self, value: u32, threshold: u32) -> bool {
        if self.inverted {
            value < threshold
        } else {
            value > threshold
        }
    }
}

impl Default for ThresholdClassifier {
    /// Grey channel, threshold 128, not inverted.
    fn default() -> Self {
        Self {
            channel: Channel::Grey,
            threshold: 128,
            inverted: false,
            true_color: WHITE,
            false_color: BLACK,
        }
    }
}

impl PixelClassifier for ThresholdClassifier {
    fn classify(&self, color: &Rgba<u8>) -> bool {
        let [r, g, b, _] = color.0;
        let threshold = self.threshold as u32;
        match self.channel {
            Channel::Grey => self.compare(r as u32 + g as u32 + b as u32, 3 * threshold),
            Channel::Red => self.compare(r as u32, threshold),
            Channel::Green => self.compare(g as u32, threshold),
            Channel::Blue => self.compare(b as u32, threshold),
        }
    }

    fn true_color(&self) -> Rgba<u8> {
        self.true_color
    }

    fn false_color(&self) -> Rgba<u8> {
        self.false_color
    }
}

/// Classifier backed by an arbitrary predicate.
pub struct FnClassifier<F> {
    predicate: F,
    true_color: Rgba<u8>,
    false_color: Rgba<u8>,
}

impl<F> FnClassifier<F>
where
    F: Fn(&Rgba<u8>) -> bool + Send + Sync,
{
    pub fn new(predicate: F, true_color: Rgba<u8>, false_color: Rgba<u8>) -> Self {
        Self {
            predicate,
            true_color,
            false_color,
        }
    }
}

impl<F> PixelClassifier for FnClassifier<F>
where
    F: Fn(&Rgba<u8>) -> bool + Send + Sync,
{
    fn classify(&self, color: &Rgba<u8>) -> bool {
        (self.predicate)(color)
    }

    fn true_color(&self) -> Rgba<u8> {
        self.true_color
    }

    fn false_color(&self) -> Rgba<u8> {
        self.false_color
    }
}
