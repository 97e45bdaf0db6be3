//! Angle to direction bucketing
//!
//! CSS angles are measured clockwise from the top: 0deg points up, 90deg
//! right, 180deg down. The class vocabulary only knows the eight compass
//! directions, so every angle is snapped to the nearest one.

use std::fmt;

/// One of the eight gradient directions of the class vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// All directions in clockwise order starting at the top
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Class fragment, e.g. `to-tr`
    pub fn class_suffix(self) -> &'static str {
        match self {
            Direction::Top => "to-t",
            Direction::TopRight => "to-tr",
            Direction::Right => "to-r",
            Direction::BottomRight => "to-br",
            Direction::Bottom => "to-b",
            Direction::BottomLeft => "to-bl",
            Direction::Left => "to-l",
            Direction::TopLeft => "to-tl",
        }
    }

    /// The CSS angle this direction points at
    pub fn degrees(self) -> f32 {
        match self {
            Direction::Top => 0.0,
            Direction::TopRight => 45.0,
            Direction::Right => 90.0,
            Direction::BottomRight => 135.0,
            Direction::Bottom => 180.0,
            Direction::BottomLeft => 225.0,
            Direction::Left => 270.0,
            Direction::TopLeft => 315.0,
        }
    }

    /// Parse a `to <side> [<side>]` keyword, e.g. `to bottom right`.
    ///
    /// Both keyword orders are accepted (`to right bottom`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let lower = keyword.trim().to_ascii_lowercase();
        let sides = lower.strip_prefix("to ")?;
        let mut words: Vec<&str> = sides.split_whitespace().collect();
        words.sort_unstable();

        let direction = match words.as_slice() {
            ["top"] => Direction::Top,
            ["right"] => Direction::Right,
            ["bottom"] => Direction::Bottom,
            ["left"] => Direction::Left,
            ["right", "top"] => Direction::TopRight,
            ["bottom", "right"] => Direction::BottomRight,
            ["bottom", "left"] => Direction::BottomLeft,
            ["left", "top"] => Direction::TopLeft,
            _ => return None,
        };
        Some(direction)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_suffix())
    }
}

/// Snap an angle in degrees to one of the eight directions.
///
/// The angle is normalized into `[0, 360)` first. Buckets are 45deg wide,
/// centered on the compass points, and include their lower bound, so `22.5`
/// already belongs to [`Direction::TopRight`]. Non-finite angles fall back
/// to [`Direction::Right`].
pub fn bucket_direction(angle: f32) -> Direction {
    let angle = angle.rem_euclid(360.0);

    if angle >= 337.5 || (0.0..22.5).contains(&angle) {
        Direction::Top
    } else if (22.5..67.5).contains(&angle) {
        Direction::TopRight
    } else if (67.5..112.5).contains(&angle) {
        Direction::Right
    } else if (112.5..157.5).contains(&angle) {
        Direction::BottomRight
    } else if (157.5..202.5).contains(&angle) {
        Direction::Bottom
    } else if (202.5..247.5).contains(&angle) {
        Direction::BottomLeft
    } else if (247.5..292.5).contains(&angle) {
        Direction::Left
    } else if (292.5..337.5).contains(&angle) {
        Direction::TopLeft
    } else {
        Direction::Right
    }
}

/// Convert an angle with a CSS unit to degrees. A missing unit means degrees.
pub(crate) fn angle_to_degrees(value: f32, unit: Option<&str>) -> Option<f32> {
    let Some(unit) = unit else {
        return Some(value);
    };

    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "rad" => Some(value * 180.0 / std::f32::consts::PI),
        "turn" => Some(value * 360.0),
        "grad" => Some(value * 0.9),
        _ => None,
    }
}
