//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix. Vectors are multiplied as rows,
/// so each row holds the contribution of one input component to the three
/// outputs.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Round a value to one decimal digit.
///
/// The rounding is done on the exact decimal expansion of the value, with
/// ties going away from zero, so `0.15` (stored as `0.1499..`) becomes `0.1`
/// and `0.25` becomes `0.3`. Non-finite values are returned unchanged.
///
/// ```rust
/// use tinct::round_tenth;
/// assert_eq!(round_tenth(50.19607843137255), 50.2);
/// assert_eq!(round_tenth(0.25), 0.3);
/// ```
pub fn round_tenth(value: Component) -> Component {
    if !value.is_finite() {
        return value;
    }

    // Only quarters can be exact ties at one decimal digit.
    if (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    // Formatting rounds the exact binary value, which (value * 10.0).round() does not.
    format!("{value:.1}").parse().unwrap_or(value)
}
