//! Model a color in the sRGB color space.

use crate::{
    math::{transform, transform_3x3, Transform},
    models::{Apple, Lab, Xyz},
    Component,
};

tinct_macros::gen_model! {
    /// A color specified in the sRGB color space, each channel in the range
    /// [0, 255].
    pub struct Rgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Remove the sRGB gamma encoding from a channel in [0, 255].
fn to_linear_light(value: Component) -> Component {
    let value = value / 255.0;

    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

impl Rgb {
    /// Convert this color to CIE-XYZ with a D65 white point, scaled so that
    /// white has a Y of 100. The result is not rounded.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.119192,
            0.1804375, 0.072175,  0.9503041,
        );

        let linear = self.to_array().map(to_linear_light);
        Xyz::from(transform(&TO_XYZ, linear)).map(|v| v * 100.0)
    }

    /// Convert this color to CIE-Lab through CIE-XYZ. The result is not
    /// rounded.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert this color to 16-bit Apple RGB, each channel in the range
    /// [0, 65535]. The result is not rounded.
    pub fn to_apple(&self) -> Apple {
        self.map(|v| v / 255.0 * 65535.0).to_array().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq};

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(1.0, 2.0, 3.0);
        assert_eq!(rgb.red, 1.0);
        assert_eq!(rgb.green, 2.0);
        assert_eq!(rgb.blue, 3.0);
        assert_eq!(rgb.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Rgb::from([1.0, 2.0, 3.0]), rgb);
        assert_eq!(rgb.to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn white_to_xyz_is_the_reference_white() {
        let xyz = Rgb::new(255.0, 255.0, 255.0).to_xyz();
        assert_component_eq!(xyz.x, 95.047, 1.0e-6);
        assert_component_eq!(xyz.y, 100.00001, 1.0e-6);
        assert_component_eq!(xyz.z, 108.883, 1.0e-6);
    }

    #[test]
    fn primaries_to_xyz_are_matrix_columns() {
        assert_components_eq!(
            Rgb::new(255.0, 0.0, 0.0).to_xyz().to_array(),
            [41.24564, 21.26729, 1.93339],
            1.0e-9
        );
        assert_components_eq!(
            Rgb::new(0.0, 0.0, 255.0).to_xyz().to_array(),
            [18.04375, 7.2175, 95.03041],
            1.0e-9
        );
        assert_components_eq!(Rgb::new(0.0, 0.0, 0.0).to_xyz().to_array(), [0.0; 3]);
    }

    #[test]
    fn dark_channels_use_the_linear_segment() {
        // 10 / 255 is below the 0.04045 threshold.
        let xyz = Rgb::new(10.0, 10.0, 10.0).to_xyz();
        let linear = 10.0 / 255.0 / 12.92;
        assert_component_eq!(xyz.y, linear * 100.0 * 1.0000001, 1.0e-9);
    }

    #[test]
    fn rgb_to_lab() {
        let white = Rgb::new(255.0, 255.0, 255.0).to_lab();
        assert_components_eq!(white.to_array(), [100.0, 0.0, 0.0], 1.0e-3);

        let red = Rgb::new(255.0, 0.0, 0.0).to_lab();
        assert_components_eq!(red.to_array(), [53.24, 80.09, 67.2], 0.05);
    }

    #[test]
    fn rgb_to_apple() {
        assert_eq!(
            Rgb::new(255.0, 0.0, 255.0).to_apple(),
            Apple::new(65535.0, 0.0, 65535.0)
        );
        assert_component_eq!(Rgb::new(128.0, 0.0, 0.0).to_apple().red, 32896.0);
    }
}
