//! Color token extraction
//!
//! A [`ColorToken`] is the textual form of one color exactly as it appeared
//! in the source gradient, tagged with the notation it was recognized as.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1, take_while_m_n},
    character::complete::char,
    combinator::{opt, recognize},
    error::ParseError as NomParseError,
    sequence::{pair, preceded, tuple},
    IResult,
};
use serde::Serialize;

use super::named::{find_named_color, named_rgb};
use super::resolve::{parse_hex_color, parse_hsl_function, parse_rgb_function, Hsla, Rgba};

type Error<'a> = nom::error::Error<&'a str>;

/// The notation a color was written in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorNotation {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    Hex,
    /// `rgb()` / `rgba()`
    Rgb,
    /// `hsl()` / `hsla()`
    Hsl,
    Lab,
    Lch,
    Oklab,
    Oklch,
    /// `color(<space> ...)`
    ColorFunction,
    /// One of the CSS named colors
    Named,
}

impl ColorNotation {
    /// Whether colors in this notation can be resolved to sRGB
    pub fn is_resolvable(self) -> bool {
        matches!(
            self,
            ColorNotation::Hex | ColorNotation::Rgb | ColorNotation::Hsl | ColorNotation::Named
        )
    }
}

/// A color as written in the source text
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken {
    notation: ColorNotation,
    text: String,
}

impl ColorToken {
    fn new(notation: ColorNotation, text: &str) -> Self {
        Self {
            notation,
            text: text.to_string(),
        }
    }

    pub fn notation(&self) -> ColorNotation {
        self.notation
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Classify a standalone color string such as `#3B82F6` or `tomato`.
    ///
    /// Returns `None` when no color can be found in `text`.
    pub fn classify(text: &str) -> Option<Self> {
        extract_color(text.trim())
    }

    /// Resolve to sRGB. `None` for lab/lch/oklab/oklch/color() and for
    /// malformed values.
    pub fn to_rgba(&self) -> Option<Rgba> {
        match self.notation {
            ColorNotation::Hex => parse_hex_color::<Error>(&self.text)
                .ok()
                .map(|(_, c)| c),
            ColorNotation::Rgb => parse_rgb_function::<Error>(&self.text)
                .ok()
                .map(|(_, c)| c),
            ColorNotation::Hsl => self.to_hsla().map(Hsla::to_rgba),
            ColorNotation::Named => named_rgb(&self.text).map(|[r, g, b]| Rgba::opaque(r, g, b)),
            _ => None,
        }
    }

    /// The HSL components, only for colors written in `hsl()`/`hsla()`
    pub fn to_hsla(&self) -> Option<Hsla> {
        if self.notation != ColorNotation::Hsl {
            return None;
        }
        parse_hsl_function::<Error>(&self.text)
            .ok()
            .map(|(_, c)| c)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Find the first color in a fragment such as `rgba(0, 0, 0, 0.5) 40%`.
///
/// Notations are tried in priority order: hex, `rgb()`, `hsl()`, the other
/// functional color spaces, and only then the named-color lexicon. Within a
/// notation the leftmost occurrence wins.
pub fn extract_color(fragment: &str) -> Option<ColorToken> {
    if let Some(hex) = find_first(fragment, hex_literal::<Error>) {
        return Some(ColorToken::new(ColorNotation::Hex, hex));
    }

    if let Some(rgb) = find_first(fragment, rgb_literal::<Error>) {
        return Some(ColorToken::new(ColorNotation::Rgb, rgb));
    }

    if let Some(hsl) = find_first(fragment, hsl_literal::<Error>) {
        return Some(ColorToken::new(ColorNotation::Hsl, hsl));
    }

    if let Some(func) = find_first(fragment, color_space_literal::<Error>) {
        return Some(ColorToken::new(color_space_notation(func), func));
    }

    find_named_color(fragment).map(|name| ColorToken::new(ColorNotation::Named, name))
}

/// Run `parser` at every char boundary and return the first match
fn find_first<'a, F>(text: &'a str, mut parser: F) -> Option<&'a str>
where
    F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
{
    text.char_indices()
        .find_map(|(i, _)| parser(&text[i..]).ok().map(|(_, matched)| matched))
}

/// `#` followed by a run of 3 to 8 hex digits. Runs of 5 or 7 digits are
/// kept whole and later fail to resolve.
fn hex_literal<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(preceded(
        char('#'),
        take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit()),
    ))(input)
}

fn function_body<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(tuple((char('('), take_while1(|c: char| c != ')'), char(')'))))(input)
}

fn rgb_literal<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(tuple((
        tag_no_case("rgb"),
        opt(tag_no_case("a")),
        function_body,
    )))(input)
}

fn hsl_literal<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(tuple((
        tag_no_case("hsl"),
        opt(tag_no_case("a")),
        function_body,
    )))(input)
}

fn color_space_literal<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(pair(
        alt((
            tag_no_case("oklab"),
            tag_no_case("oklch"),
            tag_no_case("lab"),
            tag_no_case("lch"),
            tag_no_case("color"),
        )),
        function_body,
    ))(input)
}

fn color_space_notation(func: &str) -> ColorNotation {
    let lower = func.to_ascii_lowercase();
    if lower.starts_with("oklab") {
        ColorNotation::Oklab
    } else if lower.starts_with("oklch") {
        ColorNotation::Oklch
    } else if lower.starts_with("lab") {
        ColorNotation::Lab
    } else if lower.starts_with("lch") {
        ColorNotation::Lch
    } else {
        ColorNotation::ColorFunction
    }
}
