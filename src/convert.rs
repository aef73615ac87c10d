//! Conversions between the color models.
//!
//! Every model has its own type and each conversion is a pure function from
//! one model to another. RGB is the hub: HSL, HSV, CMY, CMYK and HEX all
//! convert to and from it, with HSL and HSV also converting directly into each
//! other. The same arrows are available as `From` implementations, and
//! [`Color::to_space`] picks a path for dynamically typed colors.
//!
//! ```rust
//! use colorcast::convert::{rgb_to_hex, rgb_to_hsv};
//! use colorcast::{Hsv, Rgb};
//!
//! let rgb = Rgb::new(141, 178, 148);
//! assert_eq!(rgb_to_hex(&rgb).to_string(), "0x8DB294");
//!
//! let hsv: Hsv = rgb.into();
//! assert_eq!(hsv, rgb_to_hsv(&rgb));
//! ```
//!
//! NOTE: Going from a real valued model to RGB truncates each channel, so a
//!       round trip through HSL or HSV can lose up to 1 per channel.

use crate::{
    color::{Color, Component, Components, Space},
    math::{max, max3, min, min3, modulo},
    models::{Cmy, Cmyk, Hex, Hsl, Hsv, Model, Rgb},
};

const CHANNEL_MAX: Component = 255.0;

/// Scale an 8-bit channel into `[0, 1]`.
#[inline]
fn normalize(channel: u8) -> Component {
    channel as Component / CHANNEL_MAX
}

/// Scale a `[0, 1]` value to an 8-bit channel, truncating. Out of range values
/// saturate and NaN becomes 0.
#[inline]
fn truncate_channel(value: Component) -> u8 {
    (value * CHANNEL_MAX) as u8
}

/// Scale a `[0, 1]` value to an 8-bit channel, rounding to nearest.
#[inline]
fn round_channel(value: Component) -> u8 {
    (value * CHANNEL_MAX).round() as u8
}

/// The complement of each channel, i.e. the ink needed for it.
fn complements(rgb: &Rgb) -> Components {
    Components(
        normalize(rgb.red()),
        normalize(rgb.green()),
        normalize(rgb.blue()),
    )
    .map(|v| 1.0 - v)
}

/// Calculate the hue, as a distance in sixths of the color wheel, from
/// normalized RGB components.
///
/// The caller must have handled the achromatic case, `chroma` may not be 0,
/// and `max` must be exactly one of `red`, `green` or `blue`. If it is
/// none of them the blue sector is assumed.
pub fn hue_from_color(
    red: Component,
    green: Component,
    blue: Component,
    max: Component,
    chroma: Component,
) -> Component {
    if max == red {
        (green - blue) / chroma + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / chroma + 2.0
    } else {
        (red - green) / chroma + 4.0
    }
}

/// Convert RGB to CMY with the shared black removed from the three inks.
///
/// Pure black has no chromatic component and converts to `Cmy(0, 0, 0)`.
pub fn rgb_to_cmy(rgb: &Rgb) -> Cmy {
    let Components(c, m, y) = complements(rgb);
    let key = min3(c, m, y);

    if key == 1.0 {
        tracing::trace!(%rgb, "pure black has no chromatic component");
        return Cmy::new(0.0, 0.0, 0.0);
    }

    Cmy::new(
        (c - key) / (1.0 - key),
        (m - key) / (1.0 - key),
        (y - key) / (1.0 - key),
    )
}

/// Convert CMY to RGB by taking the complement of each ink.
///
/// [`rgb_to_cmy`] drops the shared black, so this only inverts it exactly
/// when one of the channels was at full intensity.
pub fn cmy_to_rgb(cmy: &Cmy) -> Rgb {
    Rgb::new(
        round_channel(1.0 - cmy.cyan()),
        round_channel(1.0 - cmy.magenta()),
        round_channel(1.0 - cmy.yellow()),
    )
}

/// Convert RGB to CMYK. The chromatic inks are the same as [`rgb_to_cmy`] and
/// the key is the black that was removed from them.
pub fn rgb_to_cmyk(rgb: &Rgb) -> Cmyk {
    let Components(c, m, y) = complements(rgb);

    let key = if rgb.red() == 0 && rgb.green() == 0 && rgb.blue() == 0 {
        1.0
    } else {
        min3(c, m, y)
    };

    Cmyk::from_parts(rgb_to_cmy(rgb), key)
}

/// Convert CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: &Cmyk) -> Rgb {
    let white = 1.0 - cmyk.key();
    Rgb::new(
        round_channel((1.0 - cmyk.cyan()) * white),
        round_channel((1.0 - cmyk.magenta()) * white),
        round_channel((1.0 - cmyk.yellow()) * white),
    )
}

/// Convert from HSL notation to RGB.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let Components(hue, saturation, lightness) = hsl.to_components();

    let a = saturation * min(lightness, 1.0 - lightness);

    let channel = |n: Component| {
        let k = modulo(n + hue / 30.0, 12.0);
        truncate_channel(lightness - a * max(-1.0, min3(k - 3.0, 9.0 - k, 1.0)))
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Convert from HSV notation to RGB.
pub fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let Components(hue, saturation, value) = hsv.to_components();

    let channel = |n: Component| {
        let k = modulo(n + hue / 60.0, 6.0);
        truncate_channel(value - value * saturation * max(0.0, min3(k, 4.0 - k, 1.0)))
    };

    Rgb::new(channel(5.0), channel(3.0), channel(1.0))
}

/// Convert from RGB to HSL notation. Achromatic colors get a hue and
/// saturation of 0.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let (red, green, blue) = (
        normalize(rgb.red()),
        normalize(rgb.green()),
        normalize(rgb.blue()),
    );

    let max = max3(red, green, blue);
    let min = min3(red, green, blue);
    let chroma = max - min;

    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if max == min {
        (0.0, 0.0)
    } else {
        let saturation = if lightness > 0.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };
        (hue_from_color(red, green, blue, max, chroma), saturation)
    };

    Hsl::new(hue * 60.0, saturation, lightness)
}

/// Convert from RGB to HSV notation. Achromatic colors get a hue and
/// saturation of 0.
pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let (red, green, blue) = (
        normalize(rgb.red()),
        normalize(rgb.green()),
        normalize(rgb.blue()),
    );

    let max = max3(red, green, blue);
    let min = min3(red, green, blue);
    let chroma = max - min;

    let (hue, saturation) = if max == min {
        (0.0, 0.0)
    } else {
        let saturation = if max > 0.0 { chroma / max } else { 0.0 };
        (hue_from_color(red, green, blue, max, chroma), saturation)
    };

    Hsv::new(hue * 60.0, saturation, max)
}

/// Convert from HSL to HSV notation without going through RGB. The hue is
/// carried over unchanged.
pub fn hsl_to_hsv(hsl: &Hsl) -> Hsv {
    let Components(hue, saturation, lightness) = hsl.to_components();

    let value = lightness + saturation * min(lightness, 1.0 - lightness);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - lightness / value)
    };

    Hsv::new(hue, saturation, value)
}

/// Convert from HSV to HSL notation without going through RGB. The hue is
/// carried over unchanged.
pub fn hsv_to_hsl(hsv: &Hsv) -> Hsl {
    let Components(hue, saturation, value) = hsv.to_components();

    let lightness = value * (1.0 - saturation / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / min(lightness, 1.0 - lightness)
    };

    Hsl::new(hue, saturation, lightness)
}

/// Pack RGB into a `0xRRGGBB` value.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
    Hex::new((rgb.red() as u32) << 16 | (rgb.green() as u32) << 8 | rgb.blue() as u32)
}

/// Unpack a `0xRRGGBB` value into RGB.
pub fn hex_to_rgb(hex: &Hex) -> Rgb {
    let value = hex.value();
    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Convert from HSL notation to a packed hex value, by way of RGB.
pub fn hsl_to_hex(hsl: &Hsl) -> Hex {
    rgb_to_hex(&hsl_to_rgb(hsl))
}

macro_rules! impl_from {
    ($($from:ident => $to:ident: $f:ident,)*) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    $f(&value)
                }
            }
        )*
    };
}

impl_from! {
    Rgb => Cmy: rgb_to_cmy,
    Cmy => Rgb: cmy_to_rgb,
    Rgb => Cmyk: rgb_to_cmyk,
    Cmyk => Rgb: cmyk_to_rgb,
    Hsl => Rgb: hsl_to_rgb,
    Hsv => Rgb: hsv_to_rgb,
    Rgb => Hsl: rgb_to_hsl,
    Rgb => Hsv: rgb_to_hsv,
    Hsl => Hsv: hsl_to_hsv,
    Hsv => Hsl: hsv_to_hsl,
    Rgb => Hex: rgb_to_hex,
    Hex => Rgb: hex_to_rgb,
    Hsl => Hex: hsl_to_hex,
}

impl Model for Rgb {
    fn to_color(&self) -> Color {
        Color::Rgb(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl_to_rgb(hsl),
            Color::Hsv(hsv) => hsv_to_rgb(hsv),
            Color::Cmy(cmy) => cmy_to_rgb(cmy),
            Color::Cmyk(cmyk) => cmyk_to_rgb(cmyk),
            Color::Hex(hex) => hex_to_rgb(hex),
        }
    }
}

impl Model for Hsl {
    fn to_color(&self) -> Color {
        Color::Hsl(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Hsl(hsl) => *hsl,
            Color::Hsv(hsv) => hsv_to_hsl(hsv),
            other => rgb_to_hsl(&Rgb::from_color(other)),
        }
    }
}

impl Model for Hsv {
    fn to_color(&self) -> Color {
        Color::Hsv(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Hsv(hsv) => *hsv,
            Color::Hsl(hsl) => hsl_to_hsv(hsl),
            other => rgb_to_hsv(&Rgb::from_color(other)),
        }
    }
}

impl Model for Cmy {
    fn to_color(&self) -> Color {
        Color::Cmy(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Cmy(cmy) => *cmy,
            other => rgb_to_cmy(&Rgb::from_color(other)),
        }
    }
}

impl Model for Cmyk {
    fn to_color(&self) -> Color {
        Color::Cmyk(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Cmyk(cmyk) => *cmyk,
            other => rgb_to_cmyk(&Rgb::from_color(other)),
        }
    }
}

impl Model for Hex {
    fn to_color(&self) -> Color {
        Color::Hex(*self)
    }

    fn from_color(color: &Color) -> Self {
        match color {
            Color::Hex(hex) => *hex,
            Color::Hsl(hsl) => hsl_to_hex(hsl),
            other => rgb_to_hex(&Rgb::from_color(other)),
        }
    }
}

impl Color {
    /// Convert this color from its current model to the specified one.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        tracing::trace!(from = %self.space(), to = %space, "converting color");

        match space {
            Space::Rgb => Rgb::from_color(self).to_color(),
            Space::Hsl => Hsl::from_color(self).to_color(),
            Space::Hsv => Hsv::from_color(self).to_color(),
            Space::Cmy => Cmy::from_color(self).to_color(),
            Space::Cmyk => Cmyk::from_color(self).to_color(),
            Space::Hex => Hex::from_color(self).to_color(),
        }
    }

    /// Convert this color to the model `M`.
    pub fn to_model<M: Model>(&self) -> M {
        M::from_color(self)
    }
}
