//! Model a color with the HSL notation.

use crate::color::{Component, HasSpace, Space};

colorcast_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue of the color in degrees, `[0, 360]`.
        #[max = 360.0]
        hue: Component,
        /// The saturation of the color, `[0, 1]`.
        #[max = 1.0]
        saturation: Component,
        /// The lightness of the color, `[0, 1]`.
        #[max = 1.0]
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}
