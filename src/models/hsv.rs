//! Model a color with the HSV notation.

use crate::color::{Component, HasSpace, Space};

colorcast_macros::gen_model! {
    /// A color specified with hue, saturation and value (brightness).
    pub struct Hsv {
        /// The hue of the color in degrees, `[0, 360]`.
        #[max = 360.0]
        hue: Component,
        /// The saturation of the color, `[0, 1]`.
        #[max = 1.0]
        saturation: Component,
        /// The value (brightness) of the color, `[0, 1]`.
        #[max = 1.0]
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    #[test]
    fn clamps_like_hsl() {
        assert_eq!(
            Hsv::new(361.0, 1.01, 7.0).to_components(),
            Components(360.0, 1.0, 1.0)
        );
        assert_eq!(
            Hsv::new(-1.0, -0.25, 0.5).to_components(),
            Components(-1.0, -0.25, 0.5)
        );
        assert_eq!(Hsv::default().to_components(), Components(0.0, 0.0, 0.0));
    }

    #[test]
    fn display_and_parse() {
        let hsv = "131.5 0.25 0.75".parse::<Hsv>().unwrap();
        assert_eq!(hsv.hue(), 131.5);
        assert_eq!(hsv.saturation(), 0.25);
        assert_eq!(hsv.value(), 0.75);
        assert_eq!(hsv.to_string(), "131.5 0.25 0.75");
        assert!("1 2".parse::<Hsv>().is_err());
    }
}
