//! Gradient color stops

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    error::ParseError as NomParseError,
    sequence::pair,
    IResult,
};
use serde::Serialize;

use crate::color::{extract_color, ColorToken};

/// Unit of a stop position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LengthUnit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "vh")]
    Vh,
    #[serde(rename = "vw")]
    Vw,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Percent => "%",
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Vh => "vh",
            LengthUnit::Vw => "vw",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "%" => Some(LengthUnit::Percent),
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            "rem" => Some(LengthUnit::Rem),
            "vh" => Some(LengthUnit::Vh),
            "vw" => Some(LengthUnit::Vw),
            _ => None,
        }
    }
}

/// Position of a color stop, kept in its source unit
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StopPosition {
    pub value: f32,
    pub unit: LengthUnit,
}

impl fmt::Display for StopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// One color stop of a gradient
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: ColorToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<StopPosition>,
}

impl GradientStop {
    pub fn new(color: ColorToken, position: Option<StopPosition>) -> Self {
        Self { color, position }
    }

    /// Parse a stop argument such as `#667eea 40%` or `rgba(0,0,0,.5) 2rem`.
    ///
    /// Returns `None` when the argument contains no color.
    pub fn parse(part: &str) -> Option<Self> {
        let color = extract_color(part)?;
        let rest = part.replacen(color.as_str(), " ", 1);
        let position = extract_position(&rest);
        Some(Self::new(color, position))
    }
}

/// Unsigned decimal followed by `%`, `px`, `em`, `rem`, `vh` or `vw`
fn length<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (&'a str, &'a str), E> {
    pair(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        alt((
            tag_no_case("%"),
            tag_no_case("px"),
            tag_no_case("rem"),
            tag_no_case("em"),
            tag_no_case("vh"),
            tag_no_case("vw"),
        )),
    )(input)
}

/// Find the first length or percentage in `text`
pub fn extract_position(text: &str) -> Option<StopPosition> {
    text.char_indices().find_map(|(i, _)| {
        let (_, (number, suffix)) = length::<nom::error::Error<&str>>(&text[i..]).ok()?;
        Some(StopPosition {
            value: number.parse().ok()?,
            unit: LengthUnit::from_suffix(suffix)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorNotation;

    #[test]
    fn test_stop_with_percentage() {
        let stop = GradientStop::parse("#667eea 40%").unwrap();
        assert_eq!(stop.color.as_str(), "#667eea");
        assert_eq!(
            stop.position,
            Some(StopPosition {
                value: 40.0,
                unit: LengthUnit::Percent
            })
        );
    }

    #[test]
    fn test_stop_without_position() {
        let stop = GradientStop::parse("tomato").unwrap();
        assert_eq!(stop.color.notation(), ColorNotation::Named);
        assert_eq!(stop.position, None);
    }

    #[test]
    fn test_stop_ignores_numbers_inside_color() {
        let stop = GradientStop::parse("hsl(120, 50%, 50%) 2.5rem").unwrap();
        assert_eq!(stop.color.as_str(), "hsl(120, 50%, 50%)");
        assert_eq!(
            stop.position,
            Some(StopPosition {
                value: 2.5,
                unit: LengthUnit::Rem
            })
        );

        let bare = GradientStop::parse("hsl(120, 50%, 50%)").unwrap();
        assert_eq!(bare.position, None);
    }

    #[test]
    fn test_stop_without_color() {
        assert_eq!(GradientStop::parse("50%"), None);
    }

    #[test]
    fn test_position_units() {
        let units = [
            ("10px", LengthUnit::Px),
            ("1.5em", LengthUnit::Em),
            ("2rem", LengthUnit::Rem),
            ("50vh", LengthUnit::Vh),
            ("20vw", LengthUnit::Vw),
        ];
        for (text, unit) in units {
            assert_eq!(extract_position(text).map(|p| p.unit), Some(unit), "{text}");
        }
        assert_eq!(extract_position("45deg"), None);
    }

    #[test]
    fn test_position_display() {
        let position = StopPosition {
            value: 12.5,
            unit: LengthUnit::Percent,
        };
        assert_eq!(position.to_string(), "12.5%");
    }
}
