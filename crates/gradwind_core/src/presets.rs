//! Built-in color presets and sample gradients

/// A named color combination for the builder direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Ocean Breeze",
        colors: &["#667eea", "#764ba2"],
    },
    Preset {
        name: "Sunset Glow",
        colors: &["#ff9a56", "#ff6b9d"],
    },
    Preset {
        name: "Forest Mist",
        colors: &["#56ab2f", "#a8e6cf"],
    },
    Preset {
        name: "Fire Burst",
        colors: &["#ff416c", "#ff4b2b"],
    },
    Preset {
        name: "Arctic Dawn",
        colors: &["#74b9ff", "#0984e3"],
    },
    Preset {
        name: "Golden Hour",
        colors: &["#fdcb6e", "#e17055"],
    },
];

/// Labelled CSS gradients covering each supported kind
pub const SAMPLE_GRADIENTS: &[(&str, &str)] = &[
    ("Linear", "linear-gradient(45deg, #ff6b6b, #4ecdc4)"),
    ("Multi-Color", "linear-gradient(135deg, #667eea, #764ba2, #ff9a56)"),
    ("Conic", "conic-gradient(from 0deg, #ff6b6b, #4ecdc4, #45b7d1)"),
    ("Radial", "radial-gradient(circle, #667eea, #764ba2)"),
    (
        "RGBA",
        "linear-gradient(90deg, rgba(255,107,107,0.8), rgba(78,205,196,0.8))",
    ),
];

/// Case-insensitive preset lookup
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
