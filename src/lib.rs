//! tinct converts colors between hexadecimal strings, RGB, HSV, HSL, HWB,
//! CMYK, CIE-XYZ, CIE-Lab, CIE-Lch, ANSI terminal codes, grayscale and 16-bit
//! Apple RGB, and provides a few color editing operations on top of the
//! conversions.
//!
//! Every model is a small `Copy` value type and conversions are plain methods
//! on the models:
//!
//! ```rust
//! use tinct::{Hsv, Rgb};
//! let hsv = Rgb::new(255.0, 255.0, 255.0).to_hsv();
//! assert_eq!(hsv, Hsv::new(0.0, 0.0, 100.0));
//! assert_eq!(hsv.to_hex(), "#ffffff");
//! ```
//!
//! Most numeric results go through [`round_tenth`], which keeps one decimal
//! digit so results are deterministic and comparable.

#![deny(missing_docs)]

mod ansi;
mod color;
mod convert;
mod effects;
mod error;
mod gray;
pub mod hex;
mod math;
mod models;
#[cfg(feature = "random")]
mod random;

pub use ansi::{Ansi16, Ansi256, AnsiChannels};
pub use color::{ColorResult, ColorValue, Component};
pub use effects::{
    complement, darken, desaturate, grayscale, hue, invert, lighten, mix_color, saturate,
    DEFAULT_DARKEN, DEFAULT_DESATURATE, DEFAULT_HUE_ROTATION, DEFAULT_LIGHTEN, DEFAULT_MIX,
    DEFAULT_SATURATE,
};
pub use error::{Error, Result};
pub use gray::Gray;
pub use math::round_tenth;
pub use models::{Apple, Cmyk, Hsl, Hsv, Hwb, Lab, Lch, Rgb, Xyz, D65};
#[cfg(feature = "random")]
pub use random::{random, random_hex, random_hex_color, random_rgb};
