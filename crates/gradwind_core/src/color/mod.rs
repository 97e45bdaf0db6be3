//! Color classification
//!
//! - `token`: finding a color inside a gradient argument and tagging its
//!   notation
//! - `resolve`: turning hex, `rgb()`, `hsl()` and named colors into numbers
//! - `palette`: the families and weights of the target vocabulary
//! - `mapper`: the nearest-match heuristics from one to the other

mod mapper;
mod named;
mod palette;
mod resolve;
mod token;

pub use mapper::ColorMapper;
pub use named::{find_named_color, named_rgb, NAMED_COLORS};
pub use palette::{literal_color, Family, MappedColor, Weight};
pub use resolve::{Hsla, Rgba};
pub use token::{extract_color, ColorNotation, ColorToken};
