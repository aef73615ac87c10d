//! Model a color in the subtractive CMYK model.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Component, HasSpace, Space};
use crate::error::ParseColorError;
use crate::math::clamp_upper;
use crate::models::Cmy;

/// A color specified with cyan, magenta and yellow ink coverage plus a key
/// (black) channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cmyk {
    cmy: Cmy,
    key: Component,
}

impl Cmyk {
    /// Create a new CMYK color. Like every model, components are clamped to
    /// their upper bound of 1.0 only.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self::from_parts(Cmy::new(cyan, magenta, yellow), key)
    }

    /// Create a CMYK color from the chromatic channels and a key.
    pub fn from_parts(cmy: Cmy, key: Component) -> Self {
        Self {
            cmy,
            key: clamp_upper(key, 1.0),
        }
    }

    /// The chromatic channels without the key.
    pub fn cmy(&self) -> Cmy {
        self.cmy
    }

    /// The cyan component, `[0, 1]`.
    #[inline]
    pub fn cyan(&self) -> Component {
        self.cmy.cyan()
    }

    /// The magenta component, `[0, 1]`.
    #[inline]
    pub fn magenta(&self) -> Component {
        self.cmy.magenta()
    }

    /// The yellow component, `[0, 1]`.
    #[inline]
    pub fn yellow(&self) -> Component {
        self.cmy.yellow()
    }

    /// The key (black) component, `[0, 1]`.
    #[inline]
    pub fn key(&self) -> Component {
        self.key
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cmy, self.key)
    }
}

impl FromStr for Cmyk {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [cyan, magenta, yellow, key] = crate::parse::components::<Component, 4>(s)?;
        Ok(Self::new(cyan, magenta, yellow, key))
    }
}
