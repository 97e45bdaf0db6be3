//! CSS gradient parser
//!
//! Supported syntax:
//! - `linear-gradient([<angle> | to <side> [<side>],] <stop>, ...)`
//! - `radial-gradient([<shape>] [<size>] [at <position>], <stop>, ...)`
//! - `conic-gradient([from <angle>] [at <position>], <stop>, ...)`
//!
//! Each may carry a `repeating-` prefix. Angles accept `deg`, `grad`, `rad`
//! and `turn`.

use nom::{
    branch::alt,
    character::complete::{alpha1, char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    error::ParseError as NomParseError,
    sequence::{pair, tuple},
    IResult,
};
use tracing::debug;

use super::{GradientKind, GradientStop, ParsedGradient, RadialShape, RadialSize};
use crate::color::extract_color;
use crate::direction::{angle_to_degrees, Direction};
use crate::error::{GradientError, Result};
use crate::split::split_arguments;

const REPEATING_PREFIX: &str = "repeating-";

/// Angle used for a `to ...` keyword that names no known direction
const DEFAULT_DIRECTION_ANGLE: f32 = 180.0;

/// Parse a CSS gradient string.
///
/// Fails only when the gradient function is not recognized or the argument
/// parentheses are missing. Arguments without a color are dropped, so an
/// empty stop list is a valid result.
pub fn parse(text: &str) -> Result<ParsedGradient> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = normalized.to_ascii_lowercase();

    let (repeating, name) = match lower.strip_prefix(REPEATING_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, lower.as_str()),
    };

    let kind = GradientKind::ALL
        .into_iter()
        .find(|kind| name.starts_with(kind.function_name()))
        .ok_or_else(|| GradientError::InvalidGradientKind(normalized.clone()))?;

    let inner = match (normalized.find('('), normalized.rfind(')')) {
        (Some(open), Some(close)) if open < close => &normalized[open + 1..close],
        _ => return Err(GradientError::MalformedSyntax(normalized)),
    };

    let mut gradient = ParsedGradient::new(kind);
    gradient.repeating = repeating;

    let parts = split_arguments(inner);
    let mut color_start = 0;

    if let Some(first) = parts.first().filter(|_| parts.len() > 1) {
        let consumed = match kind {
            GradientKind::Linear => parse_linear_header(first, &mut gradient),
            GradientKind::Radial => parse_radial_header(first, &mut gradient),
            GradientKind::Conic => parse_conic_header(first, &mut gradient),
        };
        if consumed {
            color_start = 1;
        }
    }

    for part in &parts[color_start..] {
        match GradientStop::parse(part) {
            Some(stop) => gradient.stops.push(stop),
            None => debug!(fragment = part.as_str(), "Dropping gradient argument without a color"),
        }
    }

    debug!(
        kind = %gradient.kind,
        stops = gradient.stops.len(),
        angle = ?gradient.angle,
        "Parsed gradient"
    );

    Ok(gradient)
}

/// Angle or `to <side>` keyword. Returns whether `first` was a header.
fn parse_linear_header(first: &str, gradient: &mut ParsedGradient) -> bool {
    let lower = first.to_ascii_lowercase();

    if let Some(angle) = leading_angle(&lower) {
        gradient.angle = Some(angle);
        return true;
    }

    if lower.starts_with("to ") {
        // an `in <color space>` interpolation hint may follow the keyword
        let keyword = lower.split(" in ").next().unwrap_or_default();
        let angle = match Direction::from_keyword(keyword) {
            Some(direction) => direction.degrees(),
            None => {
                debug!(keyword = first, "Unknown direction keyword, using to bottom");
                DEFAULT_DIRECTION_ANGLE
            }
        };
        gradient.direction = Some(first.to_string());
        gradient.angle = Some(angle);
        return true;
    }

    false
}

/// Shape, size and `at` position, each detected independently
fn parse_radial_header(first: &str, gradient: &mut ParsedGradient) -> bool {
    let lower = first.to_ascii_lowercase();

    if lower.contains("circle") {
        gradient.shape = Some(RadialShape::Circle);
    } else if lower.contains("ellipse") {
        gradient.shape = Some(RadialShape::Ellipse);
    }

    gradient.size = RadialSize::ALL
        .into_iter()
        .find(|size| lower.contains(size.keyword()));

    gradient.position = keyword_clause(first, "at").map(str::to_string);

    let is_header = gradient.shape.is_some() || gradient.size.is_some() || gradient.position.is_some();
    is_header || extract_color(first).is_none()
}

/// `from <angle>` and `at <position>`, each detected independently
fn parse_conic_header(first: &str, gradient: &mut ParsedGradient) -> bool {
    let from = keyword_clause(first, "from");

    if let Some(clause) = from {
        let lower = clause.to_ascii_lowercase();
        let angle_text = lower.split(" at ").next().unwrap_or_default();
        gradient.angle = parse_angle(angle_text.trim());
    }

    gradient.position = keyword_clause(first, "at").map(str::to_string);

    from.is_some() || gradient.position.is_some() || extract_color(first).is_none()
}

/// Text following `keyword` when it appears as a whole word, e.g. the
/// position in `circle at 25% 75%`
fn keyword_clause<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let lower = text.to_ascii_lowercase();
    let needle = format!("{keyword} ");

    let start = if lower.starts_with(&needle) {
        Some(0)
    } else {
        lower.find(&format!(" {needle}")).map(|i| i + 1)
    }?;

    let rest = text[start + needle.len()..].trim();
    (!rest.is_empty()).then_some(rest)
}

/// Optionally signed decimal number
fn number<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(input)
}

fn angle<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (&'a str, Option<&'a str>), E> {
    all_consuming(tuple((number, opt(alpha1))))(input)
}

fn angle_prefix<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (&'a str, &'a str), E> {
    pair(number, alpha1)(input)
}

/// Angle with a unit at the start of `text`, e.g. `45deg` in `45deg in oklch`.
/// Whatever follows the unit must be separated by whitespace.
fn leading_angle(text: &str) -> Option<f32> {
    let (rest, (value, unit)) = angle_prefix::<nom::error::Error<&str>>(text).ok()?;
    if !(rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace())) {
        return None;
    }
    angle_to_degrees(value.parse().ok()?, Some(unit))
}

/// Parse `from` angles such as `45deg`, `0.25turn` or a bare number (degrees)
fn parse_angle(text: &str) -> Option<f32> {
    let (_, (value, unit)) = angle::<nom::error::Error<&str>>(text).ok()?;
    angle_to_degrees(value.parse().ok()?, unit)
}
