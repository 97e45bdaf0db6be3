//! Gradient to utility class emission
//!
//! The class vocabulary has a direction plus three color slots:
//!
//! ```text
//! bg-gradient-to-tr from-blue-400 via-purple-600 to-pink-400
//! ```
//!
//! `from-` takes the first stop, `via-` the second (only when there are at
//! least three), and `to-` the last. Any other stops are dropped. Radial and
//! conic gradients have no class equivalent and are approximated with a
//! linear one followed by an inline note.

use tracing::debug;

use crate::color::{ColorMapper, MappedColor};
use crate::config::ConverterConfig;
use crate::direction::{bucket_direction, Direction};
use crate::gradient::{GradientKind, ParsedGradient};

/// Appended to the classes of a radial gradient
pub const RADIAL_NOTE: &str =
    "/* Note: Radial gradient converted to linear. Use custom CSS for true radial effect. */";

/// Appended to the classes of a conic gradient
pub const CONIC_NOTE: &str =
    "/* Note: Conic gradient converted to linear. Use custom CSS for true conic effect. */";

/// Direction used for a linear gradient without an angle or keyword
const DEFAULT_LINEAR_DIRECTION: Direction = Direction::Right;
const RADIAL_DIRECTION: Direction = Direction::BottomRight;
const CONIC_DIRECTION: Direction = Direction::Right;

/// Turns parsed gradients and color lists into class strings
#[derive(Clone, Debug, Default)]
pub struct ClassEmitter {
    mapper: ColorMapper,
}

impl ClassEmitter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            mapper: ColorMapper::new(config),
        }
    }

    pub fn mapper(&self) -> &ColorMapper {
        &self.mapper
    }

    /// Render `gradient` as a class string. Never fails; a gradient without
    /// stops yields just the direction class.
    pub fn emit(&self, gradient: &ParsedGradient) -> String {
        let direction = match gradient.kind {
            GradientKind::Linear => gradient
                .angle
                .map_or(DEFAULT_LINEAR_DIRECTION, bucket_direction),
            GradientKind::Radial => RADIAL_DIRECTION,
            GradientKind::Conic => CONIC_DIRECTION,
        };

        let slots = select_slots(&gradient.stops, |stop| self.mapper.map(&stop.color));
        let classes = gradient_classes(direction, &slots);

        match gradient.kind {
            GradientKind::Linear => classes,
            GradientKind::Radial => format!("{classes} {RADIAL_NOTE}"),
            GradientKind::Conic => format!("{classes} {CONIC_NOTE}"),
        }
    }
}

/// The mapped colors of the three class slots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slots {
    pub from: Option<MappedColor>,
    pub via: Option<MappedColor>,
    pub to: Option<MappedColor>,
}

/// Pick the `from`/`via`/`to` items and map only those
pub(crate) fn select_slots<T, F>(items: &[T], map: F) -> Slots
where
    F: Fn(&T) -> MappedColor,
{
    if items.len() > 3 {
        debug!(stops = items.len(), "Dropping middle stops beyond the three class slots");
    }

    let via = if items.len() >= 3 { items.get(1) } else { None };
    let to = if items.len() >= 2 { items.last() } else { None };

    Slots {
        from: items.first().map(&map),
        via: via.map(&map),
        to: to.map(&map),
    }
}

pub(crate) fn gradient_classes(direction: Direction, slots: &Slots) -> String {
    let mut classes = format!("bg-gradient-{direction}");
    for (prefix, color) in [("from", slots.from), ("via", slots.via), ("to", slots.to)] {
        if let Some(color) = color {
            classes.push_str(&format!(" {prefix}-{color}"));
        }
    }
    classes
}

/// Render `gradient` with the default configuration
pub fn to_class_string(gradient: &ParsedGradient) -> String {
    ClassEmitter::default().emit(gradient)
}
