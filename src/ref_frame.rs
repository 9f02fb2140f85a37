//! # Reference-frame rotations
//!
//! Rotation matrices used by the orbit geometry engine:
//!
//! - [`rotmt`] builds the elementary rotation around a principal axis,
//! - [`perifocal_to_ecliptic`] composes the classical three-angle rotation
//!   that carries orbital-plane coordinates into the J2000 ecliptic frame,
//! - [`ecliptic_to_display`] / [`to_display`] expose the axis remap toward a
//!   y-up rendering convention as an explicit, opt-in conversion.
//!
//! The ecliptic frame is right-handed with x toward the vernal equinox and z
//! normal to the ecliptic plane. Nothing in this crate applies the display
//! remap implicitly: engine outputs are always ecliptic, and callers that
//! render with a vertical y axis convert deliberately.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, Radian, RADEG};

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This builds a [`nalgebra::Matrix3`] representing an **active rotation** of a
/// 3D vector by an angle `alpha` around the chosen axis, in the direct
/// (counter-clockwise) sense when looking along the axis toward the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the perifocal (orbital-plane) frame into the J2000 ecliptic frame.
///
/// The perifocal frame has its x axis toward perihelion and its z axis along
/// the orbit normal. The transform is the standard composition
///
/// ```text
/// R = R_z(Ω) · R_x(I) · R_z(ω)
/// ```
///
/// with `Ω` the longitude of the ascending node, `I` the inclination and `ω`
/// the argument of perihelion.
///
/// Arguments
/// ---------
/// * `periapsis_argument`: argument of perihelion `ω` in degrees.
/// * `inclination`: orbital inclination `I` in degrees.
/// * `ascending_node`: longitude of the ascending node `Ω` in degrees.
///
/// Return
/// ------
/// * The rotation matrix such that `r_ecl = R · r_orb`.
pub fn perifocal_to_ecliptic(
    periapsis_argument: Degree,
    inclination: Degree,
    ascending_node: Degree,
) -> Matrix3<f64> {
    let r_node = rotmt(ascending_node * RADEG, 2);
    let r_incl = rotmt(inclination * RADEG, 0);
    let r_peri = rotmt(periapsis_argument * RADEG, 2);

    r_node * r_incl * r_peri
}

/// Axis remap from the ecliptic frame to a y-up display frame.
///
/// Rendering stacks that use a vertical y axis expect the ecliptic pole along
/// y instead of z. The conversion swaps the second and third axes and negates
/// the new z to keep the frame right-handed:
///
/// ```text
/// {x, y, z} → {x, z, −y}
/// ```
///
/// This is a deliberate post-processing step, never folded into
/// [`perifocal_to_ecliptic`], so both conventions stay available.
pub fn ecliptic_to_display() -> Matrix3<f64> {
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, //
        0.0, -1.0, 0.0,
    )
}

/// Remap a single ecliptic-frame point into the y-up display frame. See
/// [`ecliptic_to_display`].
pub fn to_display(position: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(position.x, position.z, -position.y)
}
