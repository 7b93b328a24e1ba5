//! Model a color with the HWB notation.

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    ///
    /// Whiteness and blackness are expected to add up to at most 100, but
    /// this is not enforced.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The whiteness component of the color, in percent.
        pub whiteness: Component,
        /// The blackness component of the color, in percent.
        pub blackness: Component,
    }
}
