//! Converter configuration
//!
//! Both conversion directions (CSS to classes, and colors to classes) read
//! their thresholds from one [`ConverterConfig`], so a color always maps to
//! the same palette entry no matter which entry point produced it.
//!
//! The defaults can be overridden from TOML:
//!
//! ```toml
//! grayscale_spread = 30
//! hue_margin = 30
//!
//! [weights]
//! floor = 800
//! tiers = [
//!     { above = 200, weight = 300 },
//!     { above = 160, weight = 400 },
//!     { above = 120, weight = 500 },
//!     { above = 80, weight = 600 },
//!     { above = 40, weight = 700 },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Weight;
use crate::error::ConfigError;

/// One step of a [`BrightnessScale`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrightnessTier {
    /// Brightness (0-255) that must be strictly exceeded
    pub above: f32,
    pub weight: Weight,
}

/// Maps a 0-255 brightness to a weight through descending thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrightnessScale {
    /// Tiers ordered from brightest to darkest
    pub tiers: Vec<BrightnessTier>,
    /// Weight used when no tier matches
    pub floor: Weight,
}

impl BrightnessScale {
    /// Canonical weight table for chromatic colors
    pub fn weights() -> Self {
        Self::from_pairs(
            &[
                (200.0, Weight::W300),
                (160.0, Weight::W400),
                (120.0, Weight::W500),
                (80.0, Weight::W600),
                (40.0, Weight::W700),
            ],
            Weight::W800,
        )
    }

    /// Five gray shades, independent of the chromatic table
    pub fn grays() -> Self {
        Self::from_pairs(
            &[
                (240.0, Weight::W100),
                (200.0, Weight::W300),
                (120.0, Weight::W500),
                (40.0, Weight::W700),
            ],
            Weight::W900,
        )
    }

    fn from_pairs(pairs: &[(f32, Weight)], floor: Weight) -> Self {
        Self {
            tiers: pairs
                .iter()
                .map(|&(above, weight)| BrightnessTier { above, weight })
                .collect(),
            floor,
        }
    }

    /// Weight of the first tier whose threshold `brightness` exceeds
    pub fn weight_for(&self, brightness: f32) -> Weight {
        self.tiers
            .iter()
            .find(|tier| brightness > tier.above)
            .map_or(self.floor, |tier| tier.weight)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if let Some(tier) = self.tiers.iter().find(|t| !t.above.is_finite()) {
            return Err(ConfigError::InvalidScale {
                name,
                reason: format!("threshold {} is not a finite number", tier.above),
            });
        }

        if let Some(pair) = self.tiers.windows(2).find(|w| w[0].above <= w[1].above) {
            return Err(ConfigError::InvalidScale {
                name,
                reason: format!(
                    "thresholds must be strictly descending, found {} before {}",
                    pair[0].above, pair[1].above
                ),
            });
        }

        Ok(())
    }
}

/// Tunables of the color mapping heuristics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Brightness to weight table for chromatic colors
    pub weights: BrightnessScale,
    /// Brightness to weight table for grays
    pub grays: BrightnessScale,
    /// Colors whose max-min channel spread is below this are gray
    pub grayscale_spread: u8,
    /// How far a secondary channel must lead to shift the hue family
    /// (red to orange, green to teal, ...)
    pub hue_margin: u8,
    /// HSL colors below this saturation (percent) are gray
    pub gray_saturation: f32,
    /// Emit `/NN` opacity modifiers for translucent colors
    pub opacity_modifiers: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            weights: BrightnessScale::weights(),
            grays: BrightnessScale::grays(),
            grayscale_spread: 30,
            hue_margin: 30,
            gray_saturation: 10.0,
            opacity_modifiers: true,
        }
    }
}

impl ConverterConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate("weights")?;
        self.grays.validate("grays")
    }
}
