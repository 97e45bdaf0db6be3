//! The builder direction: a list of colors plus an angle, turned into either
//! a class string or a `linear-gradient()` CSS value

use crate::color::{ColorToken, Rgba};
use crate::direction::bucket_direction;
use crate::emit::{gradient_classes, select_slots, ClassEmitter};

impl ClassEmitter {
    /// Class string for a linear gradient of `colors` at `angle` degrees.
    ///
    /// Uses the same slot selection and mapping as [`ClassEmitter::emit`].
    pub fn generate<S: AsRef<str>>(&self, colors: &[S], angle: f32) -> String {
        let slots = select_slots(colors, |color| self.mapper().map_text(color.as_ref()));
        gradient_classes(bucket_direction(angle), &slots)
    }
}

/// [`ClassEmitter::generate`] with the default configuration
pub fn generate_class_string<S: AsRef<str>>(colors: &[S], angle: f32) -> String {
    ClassEmitter::default().generate(colors, angle)
}

/// CSS text for a linear gradient of `colors` at `angle` degrees.
///
/// Below 100% opacity every color is rewritten as `rgba()` with its alpha
/// scaled by `opacity` (clamped to 0-100). Colors that do not resolve to
/// RGB are kept as written.
pub fn generate_css_text<S: AsRef<str>>(colors: &[S], angle: f32, opacity: f32) -> String {
    let opacity = if opacity.is_nan() {
        100.0
    } else {
        opacity.clamp(0.0, 100.0)
    };

    let stops: Vec<String> = colors
        .iter()
        .map(|color| {
            let color = color.as_ref().trim();
            if opacity >= 100.0 {
                return color.to_string();
            }
            match ColorToken::classify(color).and_then(|token| token.to_rgba()) {
                Some(rgba) => rgba_text(rgba, rgba.a * opacity / 100.0),
                None => color.to_string(),
            }
        })
        .collect();

    format!("linear-gradient({}deg, {})", angle, stops.join(", "))
}

/// Alpha is rounded half away from zero to two decimals (`0.125` prints as `0.13`)
fn rgba_text(rgba: Rgba, alpha: f32) -> String {
    let alpha = (alpha * 100.0).round() / 100.0;
    format!("rgba({}, {}, {}, {:.2})", rgba.r, rgba.g, rgba.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_class_string() {
        assert_eq!(
            generate_class_string(&["#667eea", "#764ba2"], 45.0),
            "bg-gradient-to-tr from-blue-400 to-purple-600"
        );
        assert_eq!(
            generate_class_string(&["#ff6b6b", "#4ecdc4", "#45b7d1"], 180.0),
            "bg-gradient-to-b from-red-400 via-teal-400 to-sky-400"
        );
    }

    #[test]
    fn test_generate_class_string_never_adds_a_note() {
        let output = generate_class_string(&["red", "blue"], 135.0);
        assert_eq!(output, "bg-gradient-to-br from-red-500 to-blue-500");
    }

    #[test]
    fn test_generate_matches_parse_direction() {
        let colors = ["#1a2b3c", "#c0ffee", "#bada55"];
        let generated = generate_class_string(&colors, 200.0);
        let parsed = crate::emit::to_class_string(
            &crate::gradient::parse("linear-gradient(200deg, #1a2b3c, #c0ffee, #bada55)").unwrap(),
        );
        assert_eq!(generated, parsed);
    }

    #[test]
    fn test_generate_with_owned_strings() {
        let colors = vec![String::from("#fff")];
        assert_eq!(generate_class_string(&colors, -45.0), "bg-gradient-to-tl from-gray-100");
        let empty: [&str; 0] = [];
        assert_eq!(generate_class_string(&empty, 90.0), "bg-gradient-to-r");
    }

    #[test]
    fn test_generate_uses_config() {
        let config = ConverterConfig::from_toml_str("grayscale_spread = 0").unwrap();
        let emitter = ClassEmitter::new(config);
        // no gray bucket
        assert_eq!(emitter.generate(&["#808080"], 0.0), "bg-gradient-to-t from-red-500");
    }

    #[test]
    fn test_css_text_opaque() {
        assert_eq!(
            generate_css_text(&["#ff0000", "#00ff00"], 90.0, 100.0),
            "linear-gradient(90deg, #ff0000, #00ff00)"
        );
    }

    #[test]
    fn test_css_text_with_opacity() {
        let css = generate_css_text(&["#ff0000", "#00ff00"], 90.0, 50.0);
        assert_eq!(
            css,
            "linear-gradient(90deg, rgba(255, 0, 0, 0.50), rgba(0, 255, 0, 0.50))"
        );
    }

    #[test]
    fn test_css_text_clamps_opacity() {
        assert_eq!(
            generate_css_text(&["#000"], 0.0, -20.0),
            "linear-gradient(0deg, rgba(0, 0, 0, 0.00))"
        );
        assert_eq!(
            generate_css_text(&["#000"], 12.5, 250.0),
            "linear-gradient(12.5deg, #000)"
        );
    }

    #[test]
    fn test_malformed_hex_is_not_reinterpreted() {
        assert_eq!(
            generate_class_string(&["#ff000", "#00f"], 90.0),
            "bg-gradient-to-r from-gray-500 to-blue-800"
        );
        assert_eq!(
            generate_css_text(&["#ff000", "#1234567"], 90.0, 50.0),
            "linear-gradient(90deg, #ff000, #1234567)"
        );
    }

    #[test]
    fn test_css_text_alpha_rounds_half_up() {
        assert_eq!(
            generate_css_text(&["#000"], 0.0, 12.5),
            "linear-gradient(0deg, rgba(0, 0, 0, 0.13))"
        );
    }

    #[test]
    fn test_css_text_keeps_unresolvable_colors() {
        assert_eq!(
            generate_css_text(&["#zzz", "oklch(70% 0.1 200)", "tomato"], 45.0, 80.0),
            "linear-gradient(45deg, #zzz, oklch(70% 0.1 200), rgba(255, 99, 71, 0.80))"
        );
    }
}
