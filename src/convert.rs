//! Conversions between the sRGB based notations. RGB is the hub: every
//! notation converts to and from it, and conversions between two other
//! notations go through it.
//!
//! Most results are rounded to one decimal with [`round_tenth`]. The
//! exceptions are the CIE conversions and Apple RGB, which keep full
//! precision.
//!
//! ```rust
//! use tinct::{Hsl, Rgb};
//! let rgb = Hsl::new(120.0, 100.0, 50.0).to_rgb();
//! assert_eq!(rgb, Rgb::new(0.0, 255.0, 0.0));
//! assert_eq!(rgb.to_hsv().to_hsl(), Hsl::new(120.0, 100.0, 50.0));
//! ```
//!
//! [`round_tenth`]: crate::round_tenth

use crate::{
    math::round_tenth,
    models::{Cmyk, Hsl, Hsv, Hwb, Rgb},
    Component,
};

impl Rgb {
    /// Convert this color to the HSV notation. Achromatic colors have a hue
    /// and saturation of 0.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(self.to_array()).into()
    }

    /// Convert this color to the HSL notation. Achromatic colors have a hue
    /// and saturation of 0.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self.to_array()).into()
    }

    /// Convert this color to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        util::rgb_to_hwb(self.to_array()).into()
    }

    /// Convert this color to the CMYK notation. Pure black yields a key of
    /// 100 with no other ink.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(self.to_array()).into()
    }

    /// Return the hue of this color in degrees, rounded to one decimal and
    /// always in [0, 360). Achromatic colors have a hue of 0.
    pub fn to_hue(&self) -> Component {
        self.to_hue_with_bounds(None, None)
    }

    /// Same as [`Rgb::to_hue`], reusing the largest and smallest channels if
    /// the caller already has them. They are recomputed unless both are
    /// given.
    pub fn to_hue_with_bounds(&self, max: Option<Component>, min: Option<Component>) -> Component {
        let channels = self.to_array();
        let (max, min) = match (max, min) {
            (Some(max), Some(min)) => (max, min),
            _ => util::bounds(channels),
        };

        util::hue(channels, max, min)
    }
}

impl Hsv {
    /// Convert this color to sRGB. The hue wraps around at 360 degrees.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(self.to_array()).into()
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::hsv_to_hsl(self.to_array()).into()
    }

    /// Convert this color to a `#rrggbb` hex string through sRGB.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Hsl {
    /// Convert this color to sRGB. The hue wraps around at 360 degrees.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(self.to_array()).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::hsl_to_hsv(self.to_array()).into()
    }

    /// Convert this color to a `#rrggbb` hex string through sRGB.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Hwb {
    /// Convert this color to sRGB.
    ///
    /// The fully saturated hue is scaled by the remaining chroma and the
    /// whiteness is added to each channel as is.
    pub fn to_rgb(&self) -> Rgb {
        let pure = Hsl::new(self.hue, 100.0, 50.0).to_rgb();
        let chroma = 100.0 - self.whiteness - self.blackness;

        pure.map(|v| round_tenth(v * chroma / 100.0 + self.whiteness))
    }
}

impl Cmyk {
    /// Convert this color to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        util::cmyk_to_rgb(self.to_array()).into()
    }

    /// Reinterpret the cyan, magenta and yellow components as HSL and return
    /// that color as CMYK. The key is ignored.
    ///
    /// Despite the name this does not produce a hex string, and it is not the
    /// inverse of any other conversion. Use `self.to_rgb().to_hex()` for the
    /// hex form of a CMYK color.
    pub fn to_hex(&self) -> Cmyk {
        Hsl::new(self.cyan, self.magenta, self.yellow)
            .to_rgb()
            .to_cmyk()
    }
}

mod util {
    use crate::{
        math::{normalize_hue, round_tenth as round},
        Component,
    };

    /// Return the largest and smallest channels.
    pub fn bounds([red, green, blue]: [Component; 3]) -> (Component, Component) {
        (red.max(green).max(blue), red.min(green).min(blue))
    }

    /// Calculate the hue in degrees from any scale of RGB channels.
    ///
    /// The hue is anchored on the sector of the smallest channel: 120 when red
    /// is the smallest, 0 when blue is and 240 when green is.
    pub fn hue([red, green, blue]: [Component; 3], max: Component, min: Component) -> Component {
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }

        let (sector, distance) = if red == min {
            (3.0, green - blue)
        } else if blue == min {
            (1.0, red - green)
        } else {
            (5.0, blue - red)
        };

        let hue = round((sector - distance / delta) * 60.0);
        if hue >= 360.0 {
            hue - 360.0
        } else {
            hue
        }
    }

    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let from = from.map(|v| v / 255.0);
        let (max, min) = bounds(from);

        if max == min {
            return [0.0, 0.0, round(max * 100.0)];
        }

        let delta = max - min;
        [
            hue(from, max, min),
            round(100.0 * delta / max),
            round(max * 100.0),
        ]
    }

    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let from = from.map(|v| v / 255.0);
        let (max, min) = bounds(from);

        let lightness = (max + min) / 2.0;
        let (hue, saturation) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            (hue(from, max, min), saturation)
        };

        [hue, round(saturation * 100.0), round(lightness * 100.0)]
    }

    pub fn rgb_to_hwb(from: [Component; 3]) -> [Component; 3] {
        let (max, min) = bounds(from);

        [
            hue(from, max, min),
            round(100.0 / 255.0 * min),
            round(100.0 * (1.0 - max / 255.0)),
        ]
    }

    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let [cyan, magenta, yellow] = from.map(|v| 1.0 - v / 255.0);
        let key = cyan.min(magenta).min(yellow);

        if key >= 1.0 {
            log::debug!("Converting black to CMYK, using the key component only");
            return [0.0, 0.0, 0.0, 100.0];
        }

        let ink = |v: Component| round((v - key) / (1.0 - key) * 100.0);
        [ink(cyan), ink(magenta), ink(yellow), round(key * 100.0)]
    }

    pub fn hsv_to_rgb([hue, saturation, value]: [Component; 3]) -> [Component; 3] {
        let hue = normalize_hue(hue) / 60.0;
        let saturation = saturation / 100.0;
        let value = value / 100.0;

        let sector = hue.floor();
        let fraction = hue - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - fraction * saturation);
        let t = value * (1.0 - (1.0 - fraction) * saturation);

        let rgb = match sector as u8 % 6 {
            0 => [value, t, p],
            1 => [q, value, p],
            2 => [p, value, t],
            3 => [p, q, value],
            4 => [t, p, value],
            _ => [value, p, q],
        };

        rgb.map(|v| round(v * 255.0))
    }

    pub fn hsv_to_hsl([hue, saturation, value]: [Component; 3]) -> [Component; 3] {
        let saturation = saturation / 100.0;
        let value = value / 100.0;

        let max = value.max(0.01);
        let lightness = (2.0 - saturation) * value;
        let guarded = (2.0 - saturation) * max;
        let denominator = if guarded > 1.0 {
            2.0 - guarded
        } else {
            guarded
        };

        let saturation = if denominator == 0.0 {
            0.0
        } else {
            saturation * max / denominator
        };

        [hue, round(saturation * 100.0), round(lightness * 50.0)]
    }

    pub fn hsl_to_rgb([hue, saturation, lightness]: [Component; 3]) -> [Component; 3] {
        let hue = normalize_hue(hue);
        let saturation = saturation / 100.0;
        let lightness = lightness / 100.0;

        let a = saturation * lightness.min(1.0 - lightness);
        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            round((lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)) * 255.0)
        };

        [f(0.0), f(8.0), f(4.0)]
    }

    pub fn hsl_to_hsv([hue, saturation, lightness]: [Component; 3]) -> [Component; 3] {
        let saturation = saturation / 100.0;
        let lightness = lightness / 100.0;

        let max = lightness.max(0.01);
        let guarded = saturation * if max > 1.0 { 2.0 - max } else { max };

        let lightness = lightness * 2.0;
        let saturation = saturation
            * if lightness > 1.0 {
                2.0 - lightness
            } else {
                lightness
            };

        let hsv_saturation = if lightness == 0.0 {
            guarded * 2.0 / (max + guarded)
        } else {
            2.0 * saturation / (lightness + saturation)
        };
        let value = (lightness + saturation) / 2.0;

        [hue, round(hsv_saturation * 100.0), round(value * 100.0)]
    }

    pub fn cmyk_to_rgb(from: [Component; 4]) -> [Component; 3] {
        let [cyan, magenta, yellow, key] = from.map(|v| v / 100.0);
        let f = |v: Component| round((1.0 - (v * (1.0 - key) + key)) * 255.0);

        [f(cyan), f(magenta), f(yellow)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> impl Iterator<Item = Rgb> {
        (0..=255).step_by(15).flat_map(|red| {
            (0..=255).step_by(15).flat_map(move |green| {
                (0..=255)
                    .step_by(15)
                    .map(move |blue| Rgb::new(red as Component, green as Component, blue as Component))
            })
        })
    }

    fn assert_close(actual: Rgb, expected: Rgb) {
        for (a, e) in actual.to_array().into_iter().zip(expected.to_array()) {
            assert!(
                (a - e).abs() <= 1.0,
                "{actual} does not round trip to {expected}"
            );
        }
    }

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[([Component; 3], [Component; 3], [Component; 3], [Component; 3], [Component; 4])] = &[
            // rgb                 hsv                    hsl                    hwb                    cmyk
            ([255.0, 255.0, 255.0], [0.0, 0.0, 100.0],     [0.0, 0.0, 100.0],     [0.0, 100.0, 0.0],     [0.0, 0.0, 0.0, 0.0]),
            ([0.0, 0.0, 0.0],       [0.0, 0.0, 0.0],       [0.0, 0.0, 0.0],       [0.0, 0.0, 100.0],     [0.0, 0.0, 0.0, 100.0]),
            ([255.0, 0.0, 0.0],     [0.0, 100.0, 100.0],   [0.0, 100.0, 50.0],    [0.0, 0.0, 0.0],       [0.0, 100.0, 100.0, 0.0]),
            ([128.0, 128.0, 128.0], [0.0, 0.0, 50.2],      [0.0, 0.0, 50.2],      [0.0, 50.2, 49.8],     [0.0, 0.0, 0.0, 49.8]),
            ([114.0, 152.0, 218.0], [218.1, 47.7, 85.5],   [218.1, 58.4, 65.1],   [218.1, 44.7, 14.5],   [47.7, 30.3, 0.0, 14.5]),
            ([210.0, 105.0, 30.0],  [25.0, 85.7, 82.4],    [25.0, 75.0, 47.1],    [25.0, 11.8, 17.6],    [0.0, 50.0, 85.7, 17.6]),
            ([240.0, 87.0, 99.0],   [355.3, 63.8, 94.1],   [355.3, 83.6, 64.1],   [355.3, 34.1, 5.9],    [0.0, 63.7, 58.8, 5.9]),
        ];

        for &(rgb, hsv, hsl, hwb, cmyk) in TESTS {
            let rgb = Rgb::from(rgb);
            assert_eq!(rgb.to_hsv(), Hsv::from(hsv), "{rgb} to hsv");
            assert_eq!(rgb.to_hsl(), Hsl::from(hsl), "{rgb} to hsl");
            assert_eq!(rgb.to_hwb(), Hwb::from(hwb), "{rgb} to hwb");
            assert_eq!(rgb.to_cmyk(), Cmyk::from(cmyk), "{rgb} to cmyk");
        }
    }

    #[test]
    fn hue_of_primaries_and_secondaries() {
        assert_eq!(Rgb::new(255.0, 0.0, 0.0).to_hue(), 0.0);
        assert_eq!(Rgb::new(255.0, 255.0, 0.0).to_hue(), 60.0);
        assert_eq!(Rgb::new(0.0, 255.0, 0.0).to_hue(), 120.0);
        assert_eq!(Rgb::new(0.0, 255.0, 255.0).to_hue(), 180.0);
        assert_eq!(Rgb::new(0.0, 0.0, 255.0).to_hue(), 240.0);
        assert_eq!(Rgb::new(255.0, 0.0, 255.0).to_hue(), 300.0);
    }

    #[test]
    fn hue_is_always_in_range() {
        for rgb in channels() {
            let hue = rgb.to_hue();
            assert!((0.0..360.0).contains(&hue), "{rgb} has hue {hue}");
        }

        // Rounds up to 360 and wraps.
        assert_eq!(Rgb::new(255.0, 0.0, 0.01).to_hue(), 0.0);
    }

    #[test]
    fn hue_with_bounds() {
        let rgb = Rgb::new(114.0, 152.0, 218.0);
        assert_eq!(rgb.to_hue_with_bounds(Some(218.0), Some(114.0)), 218.1);
        assert_eq!(rgb.to_hue_with_bounds(Some(218.0), None), 218.1);
        assert_eq!(rgb.to_hue_with_bounds(None, None), rgb.to_hue());
    }

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        for v in (0..=255).step_by(5) {
            let v = v as Component;
            let rgb = Rgb::new(v, v, v);

            let hsv = rgb.to_hsv();
            assert_eq!((hsv.hue, hsv.saturation), (0.0, 0.0), "{rgb}");
            let hsl = rgb.to_hsl();
            assert_eq!((hsl.hue, hsl.saturation), (0.0, 0.0), "{rgb}");
            assert_eq!(rgb.to_hue(), 0.0);
        }
    }

    #[test]
    fn hsv_to_rgb() {
        assert_eq!(Hsv::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255.0, 255.0, 255.0));
        assert_eq!(Hsv::new(120.0, 100.0, 100.0).to_rgb(), Rgb::new(0.0, 255.0, 0.0));
        assert_eq!(Hsv::new(360.0, 100.0, 100.0).to_rgb(), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(Hsv::new(-60.0, 100.0, 100.0).to_rgb(), Rgb::new(255.0, 0.0, 255.0));
        assert_eq!(Hsv::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
    }

    #[test]
    fn hsv_to_hsl() {
        assert_eq!(Hsv::new(0.0, 0.0, 100.0).to_hsl(), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).to_hsl(), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(Hsv::new(120.0, 100.0, 100.0).to_hsl(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(Hsv::new(25.0, 85.7, 82.4).to_hsl(), Hsl::new(25.0, 75.0, 47.1));
    }

    #[test]
    fn hsl_to_rgb() {
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255.0, 255.0, 255.0));
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0.0, 0.0, 255.0));
        assert_eq!(Hsl::new(600.0, 100.0, 50.0).to_rgb(), Rgb::new(0.0, 0.0, 255.0));
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
    }

    #[test]
    fn hsl_to_hsv() {
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_hsv(), Hsv::new(0.0, 0.0, 100.0));
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_hsv(), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_hsv(), Hsv::new(120.0, 100.0, 100.0));
        assert_eq!(Hsl::new(25.0, 75.0, 47.1).to_hsv(), Hsv::new(25.0, 85.7, 82.4));
    }

    #[test]
    fn hwb_to_rgb() {
        assert_eq!(Hwb::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(Hwb::new(120.0, 0.0, 100.0).to_rgb(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(Hwb::new(240.0, 0.0, 50.0).to_rgb(), Rgb::new(0.0, 0.0, 127.5));
        // Whiteness is added to the channels without scaling.
        assert_eq!(Hwb::new(0.0, 20.0, 0.0).to_rgb(), Rgb::new(224.0, 20.0, 20.0));
    }

    #[test]
    fn cmyk_to_rgb() {
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_rgb(), Rgb::new(255.0, 255.0, 255.0));
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 100.0).to_rgb(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(Cmyk::new(0.0, 100.0, 100.0, 0.0).to_rgb(), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(Cmyk::new(47.7, 30.3, 0.0, 14.5).to_rgb(), Rgb::new(114.0, 152.0, 218.0));
    }

    #[test]
    fn cmyk_to_hex_reinterprets_as_hsl() {
        assert_eq!(
            Cmyk::new(0.0, 0.0, 0.0, 0.0).to_hex(),
            Cmyk::new(0.0, 0.0, 0.0, 100.0)
        );
        assert_eq!(
            Cmyk::new(0.0, 100.0, 50.0, 30.0).to_hex(),
            Cmyk::new(0.0, 100.0, 100.0, 0.0)
        );
    }

    #[test]
    fn round_trips_within_one_unit() {
        for rgb in channels() {
            assert_close(rgb.to_hsv().to_rgb(), rgb);
            assert_close(rgb.to_hsl().to_rgb(), rgb);
            assert_close(rgb.to_cmyk().to_rgb(), rgb);
            assert_close(rgb.to_hsv().to_hsl().to_rgb(), rgb);
            assert_close(rgb.to_hsl().to_hsv().to_rgb(), rgb);
        }
    }

    #[test]
    fn round_trips_hold_for_arbitrary_channels() {
        use rand_chacha::{
            rand_core::{RngCore, SeedableRng},
            ChaCha8Rng,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(0x7e57);
        let mut channel = || (rng.next_u32() % 256) as Component;
        for _ in 0..20_000 {
            let rgb = Rgb::new(channel(), channel(), channel());
            assert_close(rgb.to_hsv().to_rgb(), rgb);
            assert_close(rgb.to_hsl().to_rgb(), rgb);
            assert_close(rgb.to_cmyk().to_rgb(), rgb);
        }
    }

    #[test]
    fn hsv_saturation_divides_after_scaling() {
        assert_eq!(Rgb::new(240.0, 87.0, 99.0).to_hsv().saturation, 63.8);
        assert_eq!(Rgb::new(82.0, 86.0, 160.0).to_hsv().saturation, 48.8);
        assert_eq!(Rgb::new(89.0, 208.0, 39.0).to_hsv().saturation, 81.2);
    }
}
