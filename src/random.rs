//! Random colors, available with the `random` feature.

use rand::Rng;

use crate::{hex, models::Rgb, Component};

/// Generate a random color with integer channels in [0, 255).
pub fn random_rgb(rng: &mut impl Rng) -> Rgb {
    Rgb::new(
        Component::from(rng.gen_range(0u8..255)),
        Component::from(rng.gen_range(0u8..255)),
        Component::from(rng.gen_range(0u8..255)),
    )
}

/// Generate a random `#rrggbb` hex string.
pub fn random_hex(rng: &mut impl Rng) -> String {
    hex::from_int(rng.gen_range(0..hex::HEX_MAX))
}

/// Generate a random color with the thread local generator.
#[must_use]
pub fn random() -> Rgb {
    random_rgb(&mut rand::thread_rng())
}

/// Generate a random `#rrggbb` hex string with the thread local generator.
#[must_use]
pub fn random_hex_color() -> String {
    random_hex(&mut rand::thread_rng())
}
