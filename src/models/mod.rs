//! Models are structs that represent a color in one of the supported color
//! models. Conversions between models are methods on the models themselves and
//! delegate to each other instead of repeating formulas, so `Rgb::to_lab`
//! passes through `Xyz` and `Hwb::to_rgb` passes through `Hsl`.

mod apple;
mod cmyk;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use apple::Apple;
pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};
pub use rgb::Rgb;
pub use xyz::{Xyz, D65};
