//! A [`Color`] holds a value in any of the supported color models.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::models::{Cmy, Cmyk, Hex, Hsl, Hsv, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all real components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all real components are stored as.
pub type Component = f64;

/// Represent three real components of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color models a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Additive red, green and blue with 8 bits per channel.
    Rgb = 0,
    /// Hue, saturation and lightness.
    Hsl = 1,
    /// Hue, saturation and value.
    Hsv = 2,
    /// Subtractive cyan, magenta and yellow.
    Cmy = 3,
    /// Subtractive cyan, magenta, yellow and key (black).
    Cmyk = 4,
    /// RGB packed into a 24-bit integer.
    Hex = 5,
}

impl Space {
    /// All the spaces, in declaration order.
    pub const ALL: [Space; 6] = [
        Space::Rgb,
        Space::Hsl,
        Space::Hsv,
        Space::Cmy,
        Space::Cmyk,
        Space::Hex,
    ];

    /// The lowercase name of the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Cmy => "cmy",
            Space::Cmyk => "cmyk",
            Space::Hex => "hex",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Space::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseColorError::UnknownSpace(s.to_string()))
    }
}

/// Implemented by every model to name the [`Space`] it lives in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// A color in any of the supported models.
///
/// The set of models is closed, so this is a plain tagged union.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color in the RGB model.
    Rgb(Rgb),
    /// A color in the HSL model.
    Hsl(Hsl),
    /// A color in the HSV model.
    Hsv(Hsv),
    /// A color in the CMY model.
    Cmy(Cmy),
    /// A color in the CMYK model.
    Cmyk(Cmyk),
    /// A color packed as a 24-bit integer.
    Hex(Hex),
}

impl Color {
    /// The space of the model held by this color.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::Cmy(_) => Space::Cmy,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Hex(_) => Space::Hex,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(model) => model.fmt(f),
            Color::Hsl(model) => model.fmt(f),
            Color::Hsv(model) => model.fmt(f),
            Color::Cmy(model) => model.fmt(f),
            Color::Cmyk(model) => model.fmt(f),
            Color::Hex(model) => model.fmt(f),
        }
    }
}
