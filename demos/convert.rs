//! Print a color given on the command line in every supported notation,
//! together with a few edited variants of it.
//!
//! Run with `RUST_LOG=debug` to see when a malformed hex string falls back to
//! black.

use tinct::{complement, darken, grayscale, invert, lighten, Rgb};

fn main() {
    env_logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "#d2691e".to_string());

    let rgb = match input.parse::<Rgb>() {
        Ok(rgb) => rgb,
        Err(err) => {
            log::warn!("{err}, decoding {input:?} leniently");
            tinct::hex::to_rgb(&input)
        }
    };

    println!("{:<10}{}", "hex", rgb.to_hex());
    println!("{:<10}{rgb}", "rgb");
    println!("{:<10}{}", "hsv", rgb.to_hsv());
    println!("{:<10}{}", "hsl", rgb.to_hsl());
    println!("{:<10}{}", "hwb", rgb.to_hwb());
    println!("{:<10}{}", "cmyk", rgb.to_cmyk());
    println!("{:<10}{}", "xyz", rgb.to_xyz());
    println!("{:<10}{}", "lab", rgb.to_lab());
    println!("{:<10}{}", "lch", rgb.to_lab().to_lch());
    println!("{:<10}{}", "apple", rgb.to_apple());
    println!("{:<10}{}", "gray", rgb.to_gray().0);
    println!("{:<10}{}", "ansi16", rgb.to_ansi16(None).0);
    println!("{:<10}{}", "ansi256", rgb.to_ansi256().0);

    println!();
    println!("{:<12}{}", "invert", invert(rgb));
    println!("{:<12}{}", "complement", complement(rgb));
    println!("{:<12}{}", "grayscale", grayscale(rgb));
    println!("{:<12}{}", "lighten", lighten(rgb, tinct::DEFAULT_LIGHTEN));
    println!("{:<12}{}", "darken", darken(rgb, tinct::DEFAULT_DARKEN));
}
