//! Nearest-match mapping of colors onto the palette
//!
//! The mapping is approximate: a color lands in one of a few
//! families, with a weight picked from its perceived brightness.

use tracing::debug;

use super::palette::{literal_color, Family, MappedColor};
use super::resolve::{Hsla, Rgba};
use super::token::ColorToken;
use crate::config::ConverterConfig;

/// Maps color tokens to palette colors using a [`ConverterConfig`]
#[derive(Clone, Debug, Default)]
pub struct ColorMapper {
    config: ConverterConfig,
}

impl ColorMapper {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Map a token: literal overrides first, then the HSL hue classifier for
    /// `hsl()` input, then the RGB channel heuristic. Unresolvable colors map
    /// to [`MappedColor::FALLBACK`].
    pub fn map(&self, token: &ColorToken) -> MappedColor {
        if let Some(mapped) = literal_color(token.as_str()) {
            return mapped;
        }

        if let Some(hsla) = token.to_hsla() {
            return self.map_hsl(hsla);
        }

        match token.to_rgba() {
            Some(rgba) => self.map_rgb(rgba),
            None if token.notation().is_resolvable() => {
                debug!(color = token.as_str(), "Malformed color, using fallback");
                MappedColor::FALLBACK
            }
            None => {
                debug!(color = token.as_str(), notation = ?token.notation(), "Unsupported color space, using fallback");
                MappedColor::FALLBACK
            }
        }
    }

    /// Map free-form color text such as `#8B5CF6`
    pub fn map_text(&self, text: &str) -> MappedColor {
        match ColorToken::classify(text) {
            Some(token) => self.map(&token),
            None => {
                debug!(color = text, "Unrecognized color, using fallback");
                MappedColor::FALLBACK
            }
        }
    }

    /// Map an sRGB color by its dominant channel
    pub fn map_rgb(&self, rgba: Rgba) -> MappedColor {
        let brightness = rgba.brightness();
        let opacity = self.opacity(rgba.a);

        if rgba.spread() < self.config.grayscale_spread {
            let weight = self.config.grays.weight_for(brightness);
            return MappedColor::new(Family::Gray, weight).with_opacity(opacity);
        }

        let weight = self.config.weights.weight_for(brightness);
        let margin = self.config.hue_margin as i16;
        let (r, g, b) = (rgba.r as i16, rgba.g as i16, rgba.b as i16);
        let max = r.max(g).max(b);

        let family = if r == max {
            if g > b + margin {
                Family::Orange
            } else if b > g + margin {
                Family::Pink
            } else {
                Family::Red
            }
        } else if g == max {
            if r > b + margin {
                Family::Yellow
            } else if b > r + margin {
                Family::Teal
            } else {
                Family::Green
            }
        } else if r > g + margin {
            Family::Purple
        } else if g > r + margin {
            Family::Cyan
        } else {
            Family::Blue
        };

        MappedColor::new(family, weight).with_opacity(opacity)
    }

    /// Map an HSL color by its hue. The weight still comes from the
    /// brightness of the equivalent sRGB color.
    pub fn map_hsl(&self, hsla: Hsla) -> MappedColor {
        let rgba = hsla.to_rgba();
        let brightness = rgba.brightness();
        let opacity = self.opacity(hsla.a);

        if hsla.s < self.config.gray_saturation {
            let weight = self.config.grays.weight_for(brightness);
            return MappedColor::new(Family::Gray, weight).with_opacity(opacity);
        }

        let weight = self.config.weights.weight_for(brightness);
        MappedColor::new(hue_family(hsla.h), weight).with_opacity(opacity)
    }

    fn opacity(&self, alpha: f32) -> Option<u8> {
        if !self.config.opacity_modifiers || !alpha.is_finite() || alpha >= 1.0 {
            return None;
        }
        Some((alpha.clamp(0.0, 1.0) * 100.0).round() as u8)
    }
}

/// Pick the hue family owning `hue`. Slices are 30deg wide and red is
/// centered on 0deg.
fn hue_family(hue: f32) -> Family {
    let index = ((hue + 15.0).rem_euclid(360.0) / 30.0) as usize;
    Family::HUE_WHEEL[index.min(Family::HUE_WHEEL.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Weight;

    fn mapper() -> ColorMapper {
        ColorMapper::default()
    }

    fn map(text: &str) -> String {
        mapper().map_text(text).to_string()
    }

    #[test]
    fn test_literal_overrides_win() {
        assert_eq!(map("#667eea"), "blue-400");
        assert_eq!(map("#764BA2"), "purple-600");
        assert_eq!(map("black"), "gray-900");
        assert_eq!(map("white"), "white");
    }

    #[test]
    fn test_rgb_dominant_channels() {
        assert_eq!(map("#ff0000"), "red-700");
        assert_eq!(map("#ff8800"), "orange-500");
        assert_eq!(map("#ff00aa"), "pink-600");
        assert_eq!(map("#00ff00"), "green-500");
        assert_eq!(map("#aaff00"), "yellow-300");
        assert_eq!(map("#00ffaa"), "teal-400");
        assert_eq!(map("#0000ff"), "blue-800");
        assert_eq!(map("#8800ff"), "purple-700");
        assert_eq!(map("#0088ff"), "cyan-600");
    }

    #[test]
    fn test_rgb_function_input() {
        assert_eq!(map("rgb(255, 107, 107)"), "red-500");
        assert_eq!(map("rgba(78, 205, 196, 0.8)"), "teal-400/80");
    }

    #[test]
    fn test_true_grays_never_get_a_hue() {
        for v in (0..=255u8).step_by(5) {
            let mapped = mapper().map_rgb(Rgba::opaque(v, v, v));
            assert!(mapped.family.is_neutral(), "v={v} mapped to {mapped}");
        }
        assert_eq!(map("#fff"), "gray-100");
        assert_eq!(map("#000"), "gray-900");
        assert_eq!(map("#808080"), "gray-500");
    }

    #[test]
    fn test_hsl_uses_hue_wheel() {
        assert_eq!(map("hsl(0, 100%, 50%)"), "red-700");
        assert_eq!(map("hsl(350, 80%, 50%)"), "red-600");
        assert_eq!(map("hsl(30, 100%, 50%)"), "orange-500");
        assert_eq!(map("hsl(90, 100%, 50%)"), "lime-400");
        assert_eq!(map("hsl(150, 100%, 40%)"), "emerald-500");
        assert_eq!(map("hsl(240, 100%, 50%)"), "blue-800");
        assert_eq!(map("hsl(270, 100%, 50%)"), "indigo-700");
        assert_eq!(map("hsl(330, 100%, 50%)"), "pink-600");
    }

    #[test]
    fn test_hsl_low_saturation_is_gray() {
        let mapped = mapper().map_text("hsl(200, 5%, 50%)");
        assert_eq!(mapped.family, Family::Gray);
    }

    #[test]
    fn test_hsla_opacity() {
        assert_eq!(map("hsla(180, 100%, 50%, 0.5)"), "teal-400/50");
    }

    #[test]
    fn test_unresolvable_falls_back() {
        assert_eq!(mapper().map_text("oklch(70% 0.1 200)"), MappedColor::FALLBACK);
        assert_eq!(mapper().map_text("not a color"), MappedColor::FALLBACK);
        assert_eq!(mapper().map_text("#zzzzzz"), MappedColor::FALLBACK);
    }

    #[test]
    fn test_opacity_modifiers_can_be_disabled() {
        let config = ConverterConfig {
            opacity_modifiers: false,
            ..ConverterConfig::default()
        };
        let mapped = ColorMapper::new(config).map_text("rgba(255, 0, 0, 0.5)");
        assert_eq!(mapped, MappedColor::new(Family::Red, Weight::W700));
    }

    #[test]
    fn test_non_finite_alpha_is_opaque() {
        let mapped = mapper().map_text("hsla(nan, 50%, 50%, nan)");
        assert_eq!(mapped.opacity, None);

        let rgba = Rgba {
            a: f32::NAN,
            ..Rgba::opaque(255, 0, 0)
        };
        assert_eq!(mapper().map_rgb(rgba).opacity, None);
    }

    #[test]
    fn test_violet_fuchsia_rose_literals() {
        assert_eq!(map("#A78BFA"), "violet-400");
        assert_eq!(map("violet"), "violet-500");
        assert_eq!(map("fuchsia"), "fuchsia-500");
        assert_eq!(map("#d946ef"), "fuchsia-500");
        assert_eq!(map("#f43f5e"), "rose-500");
    }

    #[test]
    fn test_hue_family_boundaries() {
        assert_eq!(hue_family(344.9), Family::Pink);
        assert_eq!(hue_family(345.0), Family::Red);
        assert_eq!(hue_family(14.9), Family::Red);
        assert_eq!(hue_family(15.0), Family::Orange);
        assert_eq!(hue_family(359.99), Family::Red);
    }
}
