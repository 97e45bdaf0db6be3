//! Gradwind Core
//!
//! Converts CSS gradients into utility-class gradients, and color lists into
//! both.
//!
//! # Overview
//!
//! Two pipelines share one color mapper:
//! - **Parse direction**: CSS text → [`ParsedGradient`] → class string
//! - **Builder direction**: colors + angle → class string or `linear-gradient()` text
//!
//! The class vocabulary is small: one of eight directions and three color
//! slots (`from-`, `via-`, `to-`). Conversion is approximate on purpose.
//! Colors land on the nearest palette family and weight, extra stops are
//! dropped, and radial or conic gradients become linear ones with a note.
//!
//! # Quick Start
//!
//! ```rust
//! use gradwind_core::{convert, generate_class_string, generate_css_text};
//!
//! let conversion = convert("linear-gradient(45deg, #ff6b6b, #4ecdc4)").unwrap();
//! assert_eq!(conversion.classes, "bg-gradient-to-tr from-red-400 to-teal-400");
//!
//! let classes = generate_class_string(&["#667eea", "#764ba2"], 45.0);
//! assert_eq!(classes, "bg-gradient-to-tr from-blue-400 to-purple-600");
//!
//! let css = generate_css_text(&["#ff0000", "#00ff00"], 90.0, 50.0);
//! assert_eq!(css, "linear-gradient(90deg, rgba(255, 0, 0, 0.50), rgba(0, 255, 0, 0.50))");
//! ```
//!
//! # Configuration
//!
//! The brightness thresholds and hue margins live in [`ConverterConfig`],
//! which can be loaded from TOML and passed to a [`ClassEmitter`]:
//!
//! ```rust
//! use gradwind_core::{ClassEmitter, ConverterConfig};
//!
//! let config = ConverterConfig::from_toml_str("opacity_modifiers = false").unwrap();
//! let emitter = ClassEmitter::new(config);
//! let conversion = emitter.convert("linear-gradient(rgba(0,0,255,.5), white)").unwrap();
//! assert_eq!(conversion.classes, "bg-gradient-to-r from-blue-800 to-white");
//! ```

pub mod color;
pub mod config;
pub mod convert;
pub mod direction;
pub mod emit;
pub mod error;
pub mod generate;
pub mod gradient;
pub mod presets;
pub mod split;

// Re-export commonly used types
pub use color::{ColorMapper, ColorNotation, ColorToken, Family, MappedColor, Weight};
pub use config::{BrightnessScale, BrightnessTier, ConverterConfig};
pub use convert::{approximation_warning, convert, Conversion};
pub use direction::{bucket_direction, Direction};
pub use emit::{to_class_string, ClassEmitter, CONIC_NOTE, RADIAL_NOTE};
pub use error::{ConfigError, GradientError, Result};
pub use generate::{generate_class_string, generate_css_text};
pub use gradient::{
    parse, GradientKind, GradientStop, LengthUnit, ParsedGradient, RadialShape, RadialSize,
    StopPosition,
};
pub use presets::{find_preset, Preset, PRESETS, SAMPLE_GRADIENTS};
pub use split::split_arguments;
