//! Hexadecimal color strings.
//!
//! The decoding functions are lenient: anything that is not a 3, 6 or 8
//! digit hex string decodes to black. Use [`parse`] or [`str::parse`] into an
//! [`Rgb`] to reject malformed input instead.
//!
//! ```rust
//! use tinct::{hex, Rgb};
//! assert_eq!(hex::to_rgb("#1dc"), Rgb::new(17.0, 221.0, 204.0));
//! assert_eq!(hex::from_int(0x7298da), "#7298da");
//! assert!("#12".parse::<Rgb>().is_err());
//! ```

use std::str::FromStr;

use crate::{error::Error, models::Rgb, Component, Result};

/// The largest value of a `#rrggbb` color.
pub const HEX_MAX: i64 = 0xFFFFFF;

/// Parse a string made only of hex digits. Signs and other prefixes accepted
/// by `from_str_radix` are rejected.
fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

/// Format a number as a `#rrggbb` string. The number is clamped to
/// [0, [`HEX_MAX`]].
pub fn from_int(value: i64) -> String {
    format!("#{:06x}", value.clamp(0, HEX_MAX))
}

/// Convert a hex string to its numeric value, expanding the 3 digit
/// shorthand. Alpha digits are ignored and malformed strings give 0.
pub fn to_int(hex: &str) -> i64 {
    parse_digits(&raw_hex(hex)).map_or(0, |value| i64::from(value).min(HEX_MAX))
}

/// Convert a hex string to sRGB, dropping any alpha digits.
pub fn to_rgb(hex: &str) -> Rgb {
    decode(hex).0
}

/// Return the 6 color digits of a hex string without the leading `#`.
///
/// 3 digit strings are expanded by doubling each digit and longer strings
/// are cut to their first 6 digits. Any other length gives `000000`.
pub fn raw_hex(hex: &str) -> String {
    let digits = strip_hash(hex);

    match digits.chars().count() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        n if n >= 6 => digits.chars().take(6).collect(),
        n => {
            log::debug!("Hex string {hex:?} has {n} digits, using black");
            "000000".to_string()
        }
    }
}

/// Return the `#rrggbb` form of a hex string.
pub fn format_hex(hex: &str) -> String {
    format!("#{}", raw_hex(hex))
}

/// Split 6 raw hex digits into sRGB channels.
pub fn break_hex(raw: &str) -> Rgb {
    let Some(value) = parse_digits(raw) else {
        log::debug!("Hex digits {raw:?} are not valid, using black");
        return Rgb::default();
    };

    Rgb::new(
        ((value >> 16) & 0xFF) as Component,
        ((value >> 8) & 0xFF) as Component,
        (value & 0xFF) as Component,
    )
}

/// Format a channel as 2 hex digits. The value is rounded and clamped to a
/// byte.
pub fn pad_hex(value: Component) -> String {
    format!("{:02x}", value.round().clamp(0.0, 255.0) as u8)
}

/// Decode a hex string into sRGB and an optional alpha in [0, 1].
///
/// Alpha is read from the 7th and 8th digits when they are present.
pub fn decode(hex: &str) -> (Rgb, Option<Component>) {
    let alpha = strip_hash(hex)
        .get(6..8)
        .and_then(parse_digits)
        .map(|alpha| alpha as Component / 255.0);

    (break_hex(&raw_hex(hex)), alpha)
}

/// Encode sRGB and an optional alpha in [0, 1] as `#rrggbb` or `#rrggbbaa`.
pub fn encode(rgb: &Rgb, alpha: Option<Component>) -> String {
    let mut hex = String::with_capacity(9);
    hex.push('#');
    for channel in rgb.to_array() {
        hex.push_str(&pad_hex(channel));
    }
    if let Some(alpha) = alpha {
        hex.push_str(&pad_hex(alpha * 255.0));
    }
    hex
}

/// Strictly parse a hex string with 3, 6 or 8 digits and an optional
/// leading `#`.
pub fn parse(hex: &str) -> Result<(Rgb, Option<Component>)> {
    let digits = strip_hash(hex);

    if let Some((position, digit)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(Error::HexDigit { digit, position });
    }

    match digits.len() {
        3 | 6 | 8 => Ok(decode(digits)),
        len => Err(Error::HexLength(len)),
    }
}

impl Rgb {
    /// Convert this color to a `#rrggbb` hex string. Channels are rounded and
    /// clamped to [0, 255].
    pub fn to_hex(&self) -> String {
        encode(self, None)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Strictly parse a hex string, discarding alpha.
    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(|(rgb, _)| rgb)
    }
}
