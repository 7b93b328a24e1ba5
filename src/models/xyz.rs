//! Model a color in the CIE-XYZ color space.

use crate::{
    math::{round_tenth, transform, transform_3x3, Transform},
    models::{Lab, Rgb},
    Component,
};

tinct_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point reference,
    /// scaled so that the reference white has a Y of 100.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// The D65 reference white used to normalize CIE-Lab conversions.
pub const D65: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// Apply the sRGB gamma encoding to a linear channel in [0, 1].
fn to_gamma_encoded(value: Component) -> Component {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        value * 12.92
    }
}

impl Xyz {
    /// Convert this color to sRGB. Out of gamut channels are clamped and the
    /// result is rounded to one decimal.
    pub fn to_rgb(&self) -> Rgb {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.969266,   0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.041556,   1.0572252,
        );

        let scaled = self.map(|v| v / 100.0).to_array();
        let linear = transform(&FROM_XYZ, scaled);

        Rgb::from(linear.map(|v| round_tenth(to_gamma_encoded(v).clamp(0.0, 1.0) * 255.0)))
    }

    /// Convert this color to CIE-Lab relative to [`D65`]. The result is not
    /// rounded.
    pub fn to_lab(&self) -> Lab {
        let f = |n: Component| {
            if n > 0.008856 {
                n.powf(1.0 / 3.0)
            } else {
                7.787 * n + 16.0 / 116.0
            }
        };

        let x = f(self.x / D65.x);
        let y = f(self.y / D65.y);
        let z = f(self.z / D65.z);

        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}
