//! The values shared by the color editing operations: [`ColorValue`] for
//! input and [`ColorResult`] for output.

use std::fmt;

use crate::{hex, Rgb};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// A color given either as RGB components or as a hex string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorValue<'a> {
    /// RGB components in the range [0, 255].
    Rgb(Rgb),
    /// A hex string such as `#7298da`, `7298da` or `#1dc`.
    Hex(&'a str),
}

impl ColorValue<'_> {
    /// Resolve the value to RGB components. Hex strings are decoded leniently,
    /// so a malformed string resolves to black.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            ColorValue::Rgb(rgb) => *rgb,
            ColorValue::Hex(value) => hex::to_rgb(value),
        }
    }
}

impl From<Rgb> for ColorValue<'_> {
    fn from(value: Rgb) -> Self {
        ColorValue::Rgb(value)
    }
}

impl From<[Component; 3]> for ColorValue<'_> {
    fn from(value: [Component; 3]) -> Self {
        ColorValue::Rgb(value.into())
    }
}

impl<'a> From<&'a str> for ColorValue<'a> {
    fn from(value: &'a str) -> Self {
        ColorValue::Hex(value)
    }
}

impl<'a> From<&'a String> for ColorValue<'a> {
    fn from(value: &'a String) -> Self {
        ColorValue::Hex(value.as_str())
    }
}

/// The result of a color editing operation. It can be consumed as RGB
/// components or as a hex string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorResult {
    rgb: Rgb,
}

impl ColorResult {
    /// Wrap the given RGB components.
    pub const fn new(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// The resulting RGB components. They are not rounded.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The resulting color as a `#rrggbb` hex string.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

impl From<ColorResult> for Rgb {
    fn from(value: ColorResult) -> Self {
        value.rgb
    }
}

impl From<ColorResult> for ColorValue<'_> {
    fn from(value: ColorResult) -> Self {
        ColorValue::Rgb(value.rgb)
    }
}

impl fmt::Display for ColorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
