//! The value types for each supported color model.

use crate::color::{Color, HasSpace};

pub mod cmy;
pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use cmy::Cmy;
pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: HasSpace + Copy {
    /// Wrap the model in a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] of any space to this model.
    fn from_color(color: &Color) -> Self;
}
