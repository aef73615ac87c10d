//! colorcast converts single color values between the RGB, HSL, HSV, CMY,
//! CMYK and packed 24-bit HEX models.
//!
//! The [`convert`] module holds one pure function per conversion. The same
//! conversions are available through `From`, through [`SetFrom`] for updating
//! a value in place, and through [`Color::to_space`] for colors whose model is
//! only known at runtime.

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
pub mod math;
pub mod models;
mod parse;
mod set_from;

pub use color::{Color, Component, Components, HasSpace, Space};
pub use error::{ParseColorError, Result};
pub use models::{Cmy, Cmyk, Hex, Hsl, Hsv, Model, Rgb};
pub use set_from::SetFrom;
