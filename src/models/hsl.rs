//! Model a color with the HSL notation.

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in percent.
        pub saturation: Component,
        /// The lightness component of the color, in percent.
        pub lightness: Component,
    }
}
