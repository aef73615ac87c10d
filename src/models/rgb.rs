//! Model a color with 8-bit red, green and blue channels.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, HasSpace, Space};
use crate::error::ParseColorError;

/// A color specified with red, green and blue channels of 8 bits each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The channels in red, green, blue order, e.g. for writing into a pixel
    /// buffer.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.channels()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::components::<u8, 3>(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let rgb = Rgb::new(141, 178, 148);
        assert_eq!(rgb.red(), 141);
        assert_eq!(rgb.green(), 178);
        assert_eq!(rgb.blue(), 148);
        assert_eq!(rgb.channels(), [141, 178, 148]);
        assert_eq!(<[u8; 3]>::from(rgb), [141, 178, 148]);
        assert_eq!(Rgb::from([141, 178, 148]), rgb);
    }

    #[test]
    fn display_and_parse() {
        let rgb = Rgb::new(0, 128, 255);
        assert_eq!(rgb.to_string(), "0 128 255");
        assert_eq!("0 128 255".parse::<Rgb>(), Ok(rgb));
        assert_eq!(
            "0 128 300".parse::<Rgb>(),
            Err(ParseColorError::InvalidComponent("300".to_string()))
        );
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::Empty));
    }
}
