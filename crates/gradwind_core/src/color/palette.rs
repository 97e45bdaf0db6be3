//! Target palette vocabulary: color families, weights and literal overrides

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A color family of the utility-class palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
    Gray,
    White,
}

impl Family {
    /// Hue families in hue-wheel order, each owning a 30deg slice starting
    /// at 345deg for red
    pub const HUE_WHEEL: [Family; 12] = [
        Family::Red,
        Family::Orange,
        Family::Yellow,
        Family::Lime,
        Family::Green,
        Family::Emerald,
        Family::Teal,
        Family::Cyan,
        Family::Blue,
        Family::Indigo,
        Family::Purple,
        Family::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Red => "red",
            Family::Orange => "orange",
            Family::Amber => "amber",
            Family::Yellow => "yellow",
            Family::Lime => "lime",
            Family::Green => "green",
            Family::Emerald => "emerald",
            Family::Teal => "teal",
            Family::Cyan => "cyan",
            Family::Sky => "sky",
            Family::Blue => "blue",
            Family::Indigo => "indigo",
            Family::Violet => "violet",
            Family::Purple => "purple",
            Family::Fuchsia => "fuchsia",
            Family::Pink => "pink",
            Family::Rose => "rose",
            Family::Gray => "gray",
            Family::White => "white",
        }
    }

    /// Whether this is one of the neutral families (gray or white)
    pub fn is_neutral(self) -> bool {
        matches!(self, Family::Gray | Family::White)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shade weight of a palette color
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Weight {
    W100,
    W300,
    W400,
    W500,
    W600,
    W700,
    W800,
    W900,
}

impl Weight {
    pub fn value(self) -> u16 {
        match self {
            Weight::W100 => 100,
            Weight::W300 => 300,
            Weight::W400 => 400,
            Weight::W500 => 500,
            Weight::W600 => 600,
            Weight::W700 => 700,
            Weight::W800 => 800,
            Weight::W900 => 900,
        }
    }
}

impl TryFrom<u16> for Weight {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Weight::W100),
            300 => Ok(Weight::W300),
            400 => Ok(Weight::W400),
            500 => Ok(Weight::W500),
            600 => Ok(Weight::W600),
            700 => Ok(Weight::W700),
            800 => Ok(Weight::W800),
            900 => Ok(Weight::W900),
            other => Err(format!(
                "unsupported weight {other}, expected one of 100, 300, 400, 500, 600, 700, 800, 900"
            )),
        }
    }
}

impl From<Weight> for u16 {
    fn from(weight: Weight) -> Self {
        weight.value()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A color mapped onto the palette, rendered as `red-400`, `white` or
/// `teal-400/80`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MappedColor {
    pub family: Family,
    /// `None` only for [`Family::White`]
    pub weight: Option<Weight>,
    /// Opacity modifier in percent, set when the source color was translucent
    pub opacity: Option<u8>,
}

impl MappedColor {
    pub const WHITE: MappedColor = MappedColor {
        family: Family::White,
        weight: None,
        opacity: None,
    };

    /// Used for colors that cannot be resolved (lab(), oklch(), malformed
    /// values)
    pub const FALLBACK: MappedColor = MappedColor::new(Family::Gray, Weight::W500);

    pub const fn new(family: Family, weight: Weight) -> Self {
        Self {
            family,
            weight: Some(weight),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: Option<u8>) -> Self {
        self.opacity = opacity;
        self
    }
}

impl fmt::Display for MappedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if let Some(weight) = self.weight {
            write!(f, "-{}", weight)?;
        }
        if let Some(opacity) = self.opacity {
            write!(f, "/{}", opacity)?;
        }
        Ok(())
    }
}

const fn c(family: Family, weight: Weight) -> MappedColor {
    MappedColor::new(family, weight)
}

/// Source colors with a hand-picked palette equivalent. Matched on the exact
/// (lowercased) token text before any heuristic runs.
const LITERAL_COLORS: &[(&str, MappedColor)] = &[
    // Reds
    ("#ff6b6b", c(Family::Red, Weight::W400)),
    ("#ff5252", c(Family::Red, Weight::W500)),
    ("#f44336", c(Family::Red, Weight::W600)),
    ("#d32f2f", c(Family::Red, Weight::W700)),
    ("#c62828", c(Family::Red, Weight::W800)),
    ("#ef4444", c(Family::Red, Weight::W500)),
    ("#dc2626", c(Family::Red, Weight::W600)),
    ("#b91c1c", c(Family::Red, Weight::W700)),
    // Blues
    ("#3b82f6", c(Family::Blue, Weight::W500)),
    ("#2563eb", c(Family::Blue, Weight::W600)),
    ("#1d4ed8", c(Family::Blue, Weight::W700)),
    ("#1e40af", c(Family::Blue, Weight::W800)),
    ("#667eea", c(Family::Blue, Weight::W400)),
    ("#60a5fa", c(Family::Blue, Weight::W400)),
    ("#45b7d1", c(Family::Sky, Weight::W400)),
    // Purples
    ("#8b5cf6", c(Family::Purple, Weight::W500)),
    ("#7c3aed", c(Family::Purple, Weight::W600)),
    ("#6d28d9", c(Family::Purple, Weight::W700)),
    ("#764ba2", c(Family::Purple, Weight::W600)),
    ("#a855f7", c(Family::Purple, Weight::W500)),
    ("#9333ea", c(Family::Purple, Weight::W600)),
    ("#c4b5fd", c(Family::Violet, Weight::W300)),
    ("#a78bfa", c(Family::Violet, Weight::W400)),
    ("#5b21b6", c(Family::Violet, Weight::W800)),
    ("#e879f9", c(Family::Fuchsia, Weight::W400)),
    ("#d946ef", c(Family::Fuchsia, Weight::W500)),
    ("#c026d3", c(Family::Fuchsia, Weight::W600)),
    // Greens
    ("#10b981", c(Family::Emerald, Weight::W500)),
    ("#059669", c(Family::Emerald, Weight::W600)),
    ("#047857", c(Family::Emerald, Weight::W700)),
    ("#56ab2f", c(Family::Green, Weight::W500)),
    ("#22c55e", c(Family::Green, Weight::W500)),
    ("#16a34a", c(Family::Green, Weight::W600)),
    ("#15803d", c(Family::Green, Weight::W700)),
    // Oranges
    ("#f59e0b", c(Family::Amber, Weight::W500)),
    ("#ff9a56", c(Family::Orange, Weight::W400)),
    ("#fb923c", c(Family::Orange, Weight::W400)),
    ("#f97316", c(Family::Orange, Weight::W500)),
    ("#ea580c", c(Family::Orange, Weight::W600)),
    // Pinks
    ("#ff6b9d", c(Family::Pink, Weight::W400)),
    ("#f472b6", c(Family::Pink, Weight::W400)),
    ("#ec4899", c(Family::Pink, Weight::W500)),
    ("#db2777", c(Family::Pink, Weight::W600)),
    ("#fb7185", c(Family::Rose, Weight::W400)),
    ("#f43f5e", c(Family::Rose, Weight::W500)),
    ("#e11d48", c(Family::Rose, Weight::W600)),
    // Yellows
    ("#facc15", c(Family::Yellow, Weight::W400)),
    ("#eab308", c(Family::Yellow, Weight::W500)),
    ("#ca8a04", c(Family::Yellow, Weight::W600)),
    // Teals and cyans
    ("#4ecdc4", c(Family::Teal, Weight::W400)),
    ("#14b8a6", c(Family::Teal, Weight::W500)),
    ("#0d9488", c(Family::Teal, Weight::W600)),
    ("#06b6d4", c(Family::Cyan, Weight::W500)),
    ("#0891b2", c(Family::Cyan, Weight::W600)),
    ("#0e7490", c(Family::Cyan, Weight::W700)),
    // Grays
    ("#6b7280", c(Family::Gray, Weight::W500)),
    ("#4b5563", c(Family::Gray, Weight::W600)),
    ("#374151", c(Family::Gray, Weight::W700)),
    ("#1f2937", c(Family::Gray, Weight::W800)),
    ("#111827", c(Family::Gray, Weight::W900)),
    // Names
    ("red", c(Family::Red, Weight::W500)),
    ("blue", c(Family::Blue, Weight::W500)),
    ("green", c(Family::Green, Weight::W500)),
    ("yellow", c(Family::Yellow, Weight::W500)),
    ("purple", c(Family::Purple, Weight::W500)),
    ("pink", c(Family::Pink, Weight::W500)),
    ("orange", c(Family::Orange, Weight::W500)),
    ("teal", c(Family::Teal, Weight::W500)),
    ("cyan", c(Family::Cyan, Weight::W500)),
    ("indigo", c(Family::Indigo, Weight::W500)),
    ("violet", c(Family::Violet, Weight::W500)),
    ("fuchsia", c(Family::Fuchsia, Weight::W500)),
    ("gray", c(Family::Gray, Weight::W500)),
    ("grey", c(Family::Gray, Weight::W500)),
    ("black", c(Family::Gray, Weight::W900)),
    ("white", MappedColor::WHITE),
];

fn literal_table() -> &'static FxHashMap<&'static str, MappedColor> {
    static TABLE: OnceLock<FxHashMap<&'static str, MappedColor>> = OnceLock::new();
    TABLE.get_or_init(|| LITERAL_COLORS.iter().copied().collect())
}

/// Look up the hand-picked palette color for an exact source value
pub fn literal_color(text: &str) -> Option<MappedColor> {
    literal_table()
        .get(text.trim().to_ascii_lowercase().as_str())
        .copied()
}
