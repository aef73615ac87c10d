//! Model a color packed into a 24-bit integer.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, HasSpace, Space};
use crate::error::ParseColorError;

/// A color packed as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex(u32);

impl Hex {
    /// Mask for the 24 bits a hex color keeps.
    pub const MASK: u32 = 0x00FF_FFFF;

    /// Create a new hex color. Only the low 24 bits of `value` are kept.
    pub const fn new(value: u32) -> Self {
        Self(value & Self::MASK)
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

impl From<u32> for Hex {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}

impl FromStr for Hex {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::hex(s).map(Self::new)
    }
}
