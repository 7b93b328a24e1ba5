//! Model a color with the subtractive CMYK notation.

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) inks, each
    /// in percent.
    pub struct Cmyk {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The key (black) component of the color.
        pub key: Component,
    }
}
