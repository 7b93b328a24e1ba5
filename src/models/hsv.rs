//! Model a color with the HSV notation.

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in percent.
        pub saturation: Component,
        /// The value component of the color, in percent.
        pub value: Component,
    }
}
