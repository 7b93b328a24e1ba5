//! Grayscale colors given as a percentage of white.

use crate::{
    hex,
    math::round_tenth,
    models::{Cmyk, Hsl, Hsv, Hwb, Lab, Rgb},
    Component,
};

/// A gray level in percent, 0 is black and 100 is white.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gray(pub Component);

impl Rgb {
    /// Return the gray level of this color, the mean of its channels in
    /// percent.
    pub fn to_gray(&self) -> Gray {
        Gray(round_tenth((self.red + self.green + self.blue) / 765.0 * 100.0))
    }
}

impl Gray {
    /// Convert this gray to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let value = round_tenth(self.0 / 100.0 * 255.0);
        Rgb::new(value, value, value)
    }

    /// Convert this gray to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::new(0.0, 0.0, self.0)
    }

    /// Convert this gray to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::new(0.0, 0.0, self.0)
    }

    /// Convert this gray to the HWB notation. The whiteness is always 100 and
    /// the gray level is carried as blackness.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::new(0.0, 100.0, self.0)
    }

    /// Convert this gray to the CMYK notation, carrying the gray level as the
    /// key.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::new(0.0, 0.0, 0.0, self.0)
    }

    /// Convert this gray to CIE-Lab, using the gray level as lightness.
    pub fn to_lab(&self) -> Lab {
        Lab::new(self.0, 0.0, 0.0)
    }

    /// Convert this gray to a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        let value = (self.0 / 100.0 * 255.0).round() as i64 & 0xFF;
        hex::from_int((value << 16) + (value << 8) + value)
    }
}
