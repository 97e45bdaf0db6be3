//! Structured representation of a parsed CSS gradient

mod parse;
mod stop;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GradientError;

pub use parse::parse;
pub use stop::{extract_position, GradientStop, LengthUnit, StopPosition};

/// The three supported gradient functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub const ALL: [GradientKind; 3] = [
        GradientKind::Linear,
        GradientKind::Radial,
        GradientKind::Conic,
    ];

    /// CSS function name, e.g. `linear-gradient`
    pub fn function_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::Conic => "conic-gradient",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientKind::Linear => write!(f, "linear"),
            GradientKind::Radial => write!(f, "radial"),
            GradientKind::Conic => write!(f, "conic"),
        }
    }
}

/// Ending shape of a radial gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    Circle,
    Ellipse,
}

/// Size keyword of a radial gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialSize {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

impl RadialSize {
    pub const ALL: [RadialSize; 4] = [
        RadialSize::ClosestSide,
        RadialSize::ClosestCorner,
        RadialSize::FarthestSide,
        RadialSize::FarthestCorner,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            RadialSize::ClosestSide => "closest-side",
            RadialSize::ClosestCorner => "closest-corner",
            RadialSize::FarthestSide => "farthest-side",
            RadialSize::FarthestCorner => "farthest-corner",
        }
    }
}

/// A parsed gradient.
///
/// Which header fields are meaningful depends on `kind`:
/// - linear: `angle` and `direction`
/// - radial: `shape`, `size` and `position`
/// - conic: `angle` (the `from` angle) and `position`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedGradient {
    pub kind: GradientKind,
    /// A `repeating-` prefix was present. Repetition itself is not modeled.
    pub repeating: bool,
    /// Angle in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    /// Direction keyword as written, e.g. `to bottom right`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<RadialShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<RadialSize>,
    /// Center position as written after `at`, e.g. `25% 75%`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub stops: Vec<GradientStop>,
}

impl ParsedGradient {
    /// An empty gradient of the given kind
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            repeating: false,
            angle: None,
            direction: None,
            shape: None,
            size: None,
            position: None,
            stops: Vec::new(),
        }
    }
}

impl FromStr for ParsedGradient {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
