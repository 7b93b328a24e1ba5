//! Models for the rectangular and polar forms of CIE-Lab.

use crate::{
    math::normalize_hue,
    models::{Rgb, Xyz, D65},
    Component,
};

tinct_macros::gen_model! {
    /// A color in the CIE-Lab color space, in its rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component, in the range [0, 100].
        pub lightness: Component,
        /// The a component, from green to red.
        pub a: Component,
        /// The b component, from blue to yellow.
        pub b: Component,
    }
}

impl Lab {
    /// Convert this color to CIE-XYZ. The result is not rounded.
    pub fn to_xyz(&self) -> Xyz {
        let y = (self.lightness + 16.0) / 116.0;
        let x = self.a / 500.0 + y;
        let z = y - self.b / 200.0;

        let f = |n: Component| {
            let cubed = n * n * n;
            if cubed > 0.008856 {
                cubed
            } else {
                (n - 16.0 / 116.0) / 7.787
            }
        };

        Xyz::new(f(x) * D65.x, f(y) * D65.y, f(z) * D65.z)
    }

    /// Convert this color to sRGB through CIE-XYZ.
    pub fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_lch(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.lightness, chroma, hue)
    }
}

tinct_macros::gen_model! {
    /// A color in the CIE-Lab color space, in its cylindrical polar form.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}
