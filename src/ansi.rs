//! ANSI terminal color codes, the 16 color foreground codes and the 256 color
//! palette.

use bitflags::bitflags;

use crate::{math::round_tenth, models::Rgb, Component};

bitflags! {
    /// The channels lit by a basic ANSI color, as encoded in the last digit of
    /// the color code.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AnsiChannels : u8 {
        /// Set when the red channel is lit.
        const RED = 1 << 0;
        /// Set when the green channel is lit.
        const GREEN = 1 << 1;
        /// Set when the blue channel is lit.
        const BLUE = 1 << 2;
    }
}

/// A 16 color foreground code: 30-37 for the normal colors and 90-97 for the
/// bright ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ansi16(pub u8);

/// An index into the 256 color palette. 16-231 is a 6x6x6 color cube and
/// 232-255 is a gray ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ansi256(pub u8);

impl Rgb {
    /// Convert this color to the closest 16 color code.
    ///
    /// The brightness is a percentage and defaults to the HSV value of the
    /// color. Below 25 the color is black, from 75 up it is a bright color.
    pub fn to_ansi16(&self, brightness: Option<Component>) -> Ansi16 {
        let brightness = brightness.unwrap_or_else(|| self.to_hsv().value);
        let level = (brightness / 50.0).round();
        if level == 0.0 {
            return Ansi16(30);
        }

        let lit = |v: Component| (v / 255.0).round() >= 1.0;
        let mut channels = AnsiChannels::empty();
        channels.set(AnsiChannels::RED, lit(self.red));
        channels.set(AnsiChannels::GREEN, lit(self.green));
        channels.set(AnsiChannels::BLUE, lit(self.blue));

        let code = 30 + channels.bits();
        if level == 2.0 {
            Ansi16(code + 60)
        } else {
            Ansi16(code)
        }
    }

    /// Convert this color to the closest entry in the 256 color palette.
    pub fn to_ansi256(&self) -> Ansi256 {
        let [red, green, blue] = self.to_array();

        // Colors that agree at 4-bit precision go on the gray ramp.
        let high = |v: Component| (v as i64) >> 4;
        if high(red) == high(green) && high(green) == high(blue) {
            return if red < 8.0 {
                Ansi256(16)
            } else if red > 248.0 {
                Ansi256(231)
            } else {
                Ansi256(((red - 8.0) / 247.0 * 24.0).round() as u8 + 232)
            };
        }

        let level = |v: Component| (v / 255.0 * 5.0).round();
        let index = 16.0 + 36.0 * level(red) + 6.0 * level(green) + level(blue);
        Ansi256(index.clamp(16.0, 231.0) as u8)
    }
}

impl Ansi16 {
    /// Convert this code to sRGB.
    ///
    /// Codes ending in 0 or 7 are grays. The other codes light their channels
    /// at half intensity, or at full intensity for the bright codes.
    pub fn to_rgb(&self) -> Rgb {
        let digit = self.0 % 10;
        let bright = self.0 > 50;

        if digit == 0 || digit == 7 {
            let level = Component::from(digit) + if bright { 3.5 } else { 0.0 };
            let gray = round_tenth(level / 10.5 * 255.0);
            return Rgb::new(gray, gray, gray);
        }

        let intensity = if bright { 1.0 } else { 0.5 };
        let channels = AnsiChannels::from_bits_truncate(digit);
        let channel = |flag: AnsiChannels| {
            if channels.contains(flag) {
                round_tenth(intensity * 255.0)
            } else {
                0.0
            }
        };

        Rgb::new(
            channel(AnsiChannels::RED),
            channel(AnsiChannels::GREEN),
            channel(AnsiChannels::BLUE),
        )
    }
}

impl Ansi256 {
    /// Convert this palette entry to sRGB.
    ///
    /// The first 16 entries are the 16 color codes, normal then bright.
    pub fn to_rgb(&self) -> Rgb {
        let index = self.0;

        if index >= 232 {
            let gray = Component::from(index - 232) * 10.0 + 8.0;
            return Rgb::new(gray, gray, gray);
        }

        if index < 8 {
            return Ansi16(30 + index).to_rgb();
        }
        if index < 16 {
            return Ansi16(90 + index - 8).to_rgb();
        }

        let index = index - 16;
        let remainder = index % 36;
        let level = |v: u8| round_tenth(Component::from(v) / 5.0 * 255.0);

        Rgb::new(level(index / 36), level(remainder / 6), level(remainder % 6))
    }
}
