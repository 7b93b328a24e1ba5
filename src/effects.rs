//! Color editing operations built on top of the conversions.
//!
//! Every operation accepts RGB components or a hex string and returns a
//! [`ColorResult`]:
//!
//! ```rust
//! use tinct::{lighten, mix_color};
//! assert_eq!(mix_color("#e01616", "#6d1e6d", 0.5).hex(), "#a71a42");
//! assert_eq!(lighten("#7298da", 10.0).hex(), "#8cb2f4");
//! ```

use num_traits::Float;

use crate::{
    color::{ColorResult, ColorValue},
    models::Hsv,
    Component,
};

/// The rotation in degrees commonly used with [`hue`].
pub const DEFAULT_HUE_ROTATION: Component = 30.0;
/// The amount commonly used with [`saturate`].
pub const DEFAULT_SATURATE: Component = 20.0;
/// The amount commonly used with [`desaturate`].
pub const DEFAULT_DESATURATE: Component = 20.0;
/// The amount commonly used with [`mix_color`], an even mix.
pub const DEFAULT_MIX: Component = 0.5;
/// The amount commonly used with [`lighten`].
pub const DEFAULT_LIGHTEN: Component = 10.0;
/// The amount commonly used with [`darken`].
pub const DEFAULT_DARKEN: Component = 20.0;

fn mix<T: Float>(a: T, b: T, amount: T) -> T {
    a * amount + b * (T::one() - amount)
}

/// Run `f` on the HSV form of `color` and convert the result back.
fn through_hsv<'a>(color: impl Into<ColorValue<'a>>, f: impl FnOnce(&mut Hsv)) -> ColorResult {
    let mut hsv = color.into().to_rgb().to_hsv();
    f(&mut hsv);
    ColorResult::new(hsv.to_rgb())
}

/// Invert each channel of the color.
pub fn invert<'a>(color: impl Into<ColorValue<'a>>) -> ColorResult {
    ColorResult::new(color.into().to_rgb().map(|v| 255.0 - v))
}

/// Rotate the hue of the color by the given degrees. Rotations above 360 are
/// reduced modulo 360.
pub fn hue<'a>(color: impl Into<ColorValue<'a>>, degrees: Component) -> ColorResult {
    let degrees = if degrees > 360.0 {
        degrees % 360.0
    } else {
        degrees
    };

    through_hsv(color, |hsv| hsv.hue += degrees)
}

/// Rotate the hue of the color by 180 degrees.
pub fn complement<'a>(color: impl Into<ColorValue<'a>>) -> ColorResult {
    hue(color, 180.0)
}

/// Add `amount` to the HSV saturation of the color, keeping it within
/// [0, 100].
pub fn saturate<'a>(color: impl Into<ColorValue<'a>>, amount: Component) -> ColorResult {
    through_hsv(color, |hsv| {
        hsv.saturation = (hsv.saturation + amount).clamp(0.0, 100.0);
    })
}

/// Subtract `amount` from the HSV saturation of the color, keeping it within
/// [0, 100].
pub fn desaturate<'a>(color: impl Into<ColorValue<'a>>, amount: Component) -> ColorResult {
    saturate(color, -amount)
}

/// Replace the color with the gray of the same mean channel value.
pub fn grayscale<'a>(color: impl Into<ColorValue<'a>>) -> ColorResult {
    ColorResult::new(color.into().to_rgb().to_gray().to_rgb())
}

/// Mix two colors channel by channel. An `amount` of 1 gives `a` and an
/// `amount` of 0 gives `b`. The result is not rounded.
pub fn mix_color<'a, 'b>(
    a: impl Into<ColorValue<'a>>,
    b: impl Into<ColorValue<'b>>,
    amount: Component,
) -> ColorResult {
    let a = a.into().to_rgb().to_array();
    let b = b.into().to_rgb().to_array();

    ColorResult::new([0, 1, 2].map(|i| mix(a[i], b[i], amount)).into())
}

/// Add `amount` percent of the channel range to each channel, clamping to
/// [0, 255]. Negative amounts darken.
pub fn lighten<'a>(color: impl Into<ColorValue<'a>>, amount: Component) -> ColorResult {
    let step = amount * 2.55;
    ColorResult::new(color.into().to_rgb().map(|v| (v + step).clamp(0.0, 255.0)))
}

/// The opposite of [`lighten`].
pub fn darken<'a>(color: impl Into<ColorValue<'a>>, amount: Component) -> ColorResult {
    lighten(color, -amount)
}
