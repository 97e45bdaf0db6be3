//! Gradwind configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use gradwind_core::ConverterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "gradwind.toml";

/// Top-level Gradwind configuration (gradwind.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GradwindConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Color mapping thresholds, shared by every subcommand
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Fallback values for command line options
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Angle in degrees for `generate` and `presets`
    #[serde(default = "default_angle")]
    pub angle: f32,
    /// Opacity in percent for `generate`
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_angle() -> f32 {
    45.0
}

fn default_opacity() -> f32 {
    100.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            angle: default_angle(),
            opacity: default_opacity(),
            format: OutputFormat::default(),
        }
    }
}

/// How results are printed
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl GradwindConfig {
    /// Load `path` when given, otherwise `./gradwind.toml` if present,
    /// otherwise the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.is_file() {
                    Self::load_from_path(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file, or from `gradwind.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `gradwind init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GradwindConfig = toml::from_str(content)?;
        config
            .converter
            .validate()
            .context("Invalid [converter] section")?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradwind_core::Weight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GradwindConfig::from_toml_str("").unwrap();
        assert_eq!(config, GradwindConfig::default());
        assert_eq!(config.defaults.angle, 45.0);
        assert_eq!(config.defaults.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let config = GradwindConfig::from_toml_str(
            r#"
            [defaults]
            format = "json"

            [converter]
            opacity_modifiers = false
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.format, OutputFormat::Json);
        assert_eq!(config.defaults.opacity, 100.0);
        assert!(!config.converter.opacity_modifiers);
        assert_eq!(config.converter.hue_margin, 30);
    }

    #[test]
    fn test_invalid_converter_section() {
        let err = GradwindConfig::from_toml_str(
            r#"
            [converter.weights]
            floor = 800
            tiers = [{ above = 10, weight = 700 }, { above = 90, weight = 500 }]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("[converter]"), "{err}");
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = GradwindConfig::default();
        config.defaults.angle = 90.0;
        config.converter.weights.floor = Weight::W900;

        let text = config.to_toml().unwrap();
        assert_eq!(GradwindConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = GradwindConfig::load(Some(Path::new("/nonexistent/gradwind.toml"))).unwrap_err();
        assert!(err.to_string().contains("gradwind init"), "{err}");
    }
}
