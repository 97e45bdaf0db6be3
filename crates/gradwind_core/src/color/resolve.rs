//! Resolution of color notations to numeric components

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, hex_digit1, multispace0, multispace1, one_of},
    combinator::{opt, value},
    error::ParseError as NomParseError,
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, pair},
    IResult,
};

use crate::direction::angle_to_degrees;

/// An sRGB color with 8-bit channels and a 0-1 alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 luma weights)
    pub fn brightness(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Difference between the strongest and the weakest channel
    pub fn spread(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }
}

/// An HSL color: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`, alpha `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    /// Standard HSL to sRGB conversion
    pub fn to_rgba(self) -> Rgba {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba {
            r: unit_to_channel(r + m),
            g: unit_to_channel(g + m),
            b: unit_to_channel(b + m),
            a: self.a,
        }
    }
}

fn unit_to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A numeric function argument with its optional unit
type Arg<'a> = (f32, Option<&'a str>);

fn argument<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Arg<'a>, E> {
    pair(
        float,
        opt(alt((
            tag("%"),
            tag_no_case("deg"),
            tag_no_case("grad"),
            tag_no_case("rad"),
            tag_no_case("turn"),
        ))),
    )(input)
}

/// `,` or `/` with optional surrounding whitespace, or plain whitespace, so
/// both `rgb(1, 2, 3)` and `rgb(1 2 3 / 50%)` are accepted
fn separator<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    alt((
        value((), delimited(multispace0, one_of(",/"), multispace0)),
        value((), multispace1),
    ))(input)
}

fn arguments<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Vec<Arg<'a>>, E> {
    delimited(
        pair(char('('), multispace0),
        separated_list1(separator, argument),
        pair(multispace0, char(')')),
    )(input)
}

fn count_error<'a, E: NomParseError<&'a str>>(input: &'a str) -> nom::Err<E> {
    nom::Err::Error(E::from_error_kind(input, nom::error::ErrorKind::Count))
}

fn channel((v, unit): Arg) -> u8 {
    let v = if unit == Some("%") { v * 2.55 } else { v };
    v.round().clamp(0.0, 255.0) as u8
}

fn alpha(arg: Option<&Arg>) -> f32 {
    match arg {
        Some(&(v, _)) if !v.is_finite() => 1.0,
        Some(&(v, Some("%"))) => (v / 100.0).clamp(0.0, 1.0),
        Some(&(v, _)) => v.clamp(0.0, 1.0),
        None => 1.0,
    }
}

fn percentage((v, _): Arg) -> f32 {
    v.clamp(0.0, 100.0)
}

/// Parse hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA
pub fn parse_hex_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Rgba, E> {
    let (input, _) = char('#')(input)?;
    let (input, hex) = hex_digit1(input)?;

    let byte = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| {
            nom::Err::Error(E::from_error_kind(input, nom::error::ErrorKind::HexDigit))
        })
    };
    let nibble = |s: &str| byte(&s.repeat(2));

    let color = match hex.len() {
        3 | 4 => {
            let a = if hex.len() == 4 {
                nibble(&hex[3..4])? as f32 / 255.0
            } else {
                1.0
            };
            Rgba {
                r: nibble(&hex[0..1])?,
                g: nibble(&hex[1..2])?,
                b: nibble(&hex[2..3])?,
                a,
            }
        }
        6 | 8 => {
            let a = if hex.len() == 8 {
                byte(&hex[6..8])? as f32 / 255.0
            } else {
                1.0
            };
            Rgba {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a,
            }
        }
        _ => {
            return Err(nom::Err::Error(E::from_error_kind(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
    };

    Ok((input, color))
}

/// Parse rgb(r, g, b) or rgba(r, g, b, a), comma or space separated
pub fn parse_rgb_function<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Rgba, E> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = opt(tag_no_case("a"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) = arguments(input)?;

    if !(3..=4).contains(&args.len()) {
        return Err(count_error(input));
    }

    let color = Rgba {
        r: channel(args[0]),
        g: channel(args[1]),
        b: channel(args[2]),
        a: alpha(args.get(3)),
    };
    Ok((input, color))
}

/// Parse hsl(h, s%, l%) or hsla(h, s%, l%, a)
pub fn parse_hsl_function<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Hsla, E> {
    let (input, _) = tag_no_case("hsl")(input)?;
    let (input, _) = opt(tag_no_case("a"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) = arguments(input)?;

    if !(3..=4).contains(&args.len()) {
        return Err(count_error(input));
    }

    let (hue, unit) = args[0];
    let h = angle_to_degrees(hue, unit)
        .unwrap_or(hue)
        .rem_euclid(360.0);

    let color = Hsla {
        h,
        s: percentage(args[1]),
        l: percentage(args[2]),
        a: alpha(args.get(3)),
    };
    Ok((input, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    type E<'a> = nom::error::Error<&'a str>;

    fn hex(input: &str) -> Option<Rgba> {
        parse_hex_color::<E>(input).ok().map(|(_, c)| c)
    }

    fn rgb(input: &str) -> Option<Rgba> {
        parse_rgb_function::<E>(input).ok().map(|(_, c)| c)
    }

    fn hsl(input: &str) -> Option<Hsla> {
        parse_hsl_function::<E>(input).ok().map(|(_, c)| c)
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(hex("#f00"), Some(Rgba::opaque(255, 0, 0)));
        assert_eq!(hex("#4ecdc4"), Some(Rgba::opaque(78, 205, 196)));

        let short_alpha = hex("#f008").unwrap();
        assert_eq!((short_alpha.r, short_alpha.g, short_alpha.b), (255, 0, 0));
        assert!((short_alpha.a - 0.533).abs() < 0.01);

        let long_alpha = hex("#00ff0080").unwrap();
        assert_eq!((long_alpha.r, long_alpha.g, long_alpha.b), (0, 255, 0));
        assert!((long_alpha.a - 0.502).abs() < 0.01);

        assert_eq!(hex("#12345"), None);
        assert_eq!(hex("#zzzzzz"), None);
    }

    #[test]
    fn test_rgb_forms() {
        assert_eq!(rgb("rgb(255, 107, 107)"), Some(Rgba::opaque(255, 107, 107)));
        assert_eq!(rgb("rgb(255 107 107)"), Some(Rgba::opaque(255, 107, 107)));
        assert_eq!(rgb("RGB(100%, 0%, 50%)"), Some(Rgba::opaque(255, 0, 128)));

        let translucent = rgb("rgba(78,205,196,0.8)").unwrap();
        assert_eq!((translucent.r, translucent.g, translucent.b), (78, 205, 196));
        assert!((translucent.a - 0.8).abs() < f32::EPSILON);

        let slash = rgb("rgb(0 0 0 / 25%)").unwrap();
        assert!((slash.a - 0.25).abs() < f32::EPSILON);

        assert_eq!(rgb("rgb(1, 2)"), None);
        assert_eq!(rgb("rgb(a, b, c)"), None);
    }

    #[test]
    fn test_hsl_forms() {
        let c = hsl("hsl(210, 50%, 40%)").unwrap();
        assert_eq!((c.h, c.s, c.l, c.a), (210.0, 50.0, 40.0, 1.0));

        let turn = hsl("hsla(0.5turn 100% 50% / 0.5)").unwrap();
        assert!((turn.h - 180.0).abs() < 0.001);
        assert!((turn.a - 0.5).abs() < f32::EPSILON);

        let negative = hsl("hsl(-120, 100%, 50%)").unwrap();
        assert!((negative.h - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_hsl_to_rgb() {
        let red = Hsla { h: 0.0, s: 100.0, l: 50.0, a: 1.0 }.to_rgba();
        assert_eq!(red, Rgba::opaque(255, 0, 0));

        let green = Hsla { h: 120.0, s: 100.0, l: 25.0, a: 1.0 }.to_rgba();
        assert_eq!(green, Rgba::opaque(0, 128, 0));

        let gray = Hsla { h: 300.0, s: 0.0, l: 50.0, a: 1.0 }.to_rgba();
        assert_eq!(gray, Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_brightness_and_spread() {
        let white = Rgba::opaque(255, 255, 255);
        assert!((white.brightness() - 255.0).abs() < 0.01);
        assert_eq!(white.spread(), 0);
        assert_eq!(Rgba::opaque(255, 107, 107).spread(), 148);
    }
}
