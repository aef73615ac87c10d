//! Model a color in the subtractive CMY model.

use crate::color::{Component, HasSpace, Space};

colorcast_macros::gen_model! {
    /// A color specified with cyan, magenta and yellow ink coverage.
    pub struct Cmy {
        /// The cyan component, `[0, 1]`.
        #[max = 1.0]
        cyan: Component,
        /// The magenta component, `[0, 1]`.
        #[max = 1.0]
        magenta: Component,
        /// The yellow component, `[0, 1]`.
        #[max = 1.0]
        yellow: Component,
    }
}

impl HasSpace for Cmy {
    const SPACE: Space = Space::Cmy;
}
