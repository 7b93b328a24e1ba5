//! Model a color with 16 bits per channel, as used by Apple color pickers.

use crate::{models::Rgb, Component};

tinct_macros::gen_model! {
    /// An sRGB color with each channel in the range [0, 65535].
    pub struct Apple {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Apple {
    /// Convert this color to 8-bit sRGB. The result is not rounded.
    pub fn to_rgb(&self) -> Rgb {
        self.map(|v| v / 65535.0 * 255.0).to_array().into()
    }
}
