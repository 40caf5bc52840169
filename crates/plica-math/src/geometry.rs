//! Triangle geometry helpers used to build bending operators.
//!
//! All functions take positions or edge vectors by value (`Vec3` is `Copy`)
//! and never panic on degenerate input; callers decide what a degenerate
//! result means.
//!
//! ## Stencil
//!
//! ```text
//!        p2
//!       /  \
//!     p0 ── p1
//!       \  /
//!        p3
//! ```

use glam::Vec3;

/// Compute the area of triangle (a, b, c).
#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    0.5 * (b - a).cross(c - a).length()
}

/// Unsigned angle between two vectors, in radians, in `[0, π]`.
///
/// The normalized dot product is clamped to `[-1, 1]` before `acos`
/// so rounding never leaves the domain. Zero-length inputs yield `π/2`.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let cos_theta = a
        .normalize_or_zero()
        .dot(b.normalize_or_zero())
        .clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// Cotangent of the unsigned angle between `a` and `b`.
///
/// Evaluated as `(a · b) / |a × b|`, which equals `cot(angle_between(a, b))`
/// without the round trip through `acos`/`tan`.
///
/// Returns `None` when the sine of the angle is below `min_sine`
/// (collinear or zero-length edges), where the cotangent diverges.
pub fn cotangent(a: Vec3, b: Vec3, min_sine: f32) -> Option<f32> {
    let lengths = a.length() * b.length();
    let cross = a.cross(b).length();
    if !(lengths > 0.0) || cross <= min_sine * lengths {
        return None;
    }
    Some(a.dot(b) / cross)
}

/// Compute the dihedral angle between two triangles sharing edge (p0, p1).
///
/// The angle is measured between the wing vertices as seen from the
/// shared edge. A flat stencil with wings on opposite sides returns π.
pub fn dihedral_angle(p0: Vec3, p1: Vec3, wing_a: Vec3, wing_b: Vec3) -> f32 {
    let edge = p1 - p0;
    let edge_len = edge.length();
    if edge_len < 1e-10 {
        return std::f32::consts::PI;
    }
    let edge_dir = edge / edge_len;

    // Remove the component along the edge
    let to_a = wing_a - p0;
    let to_b = wing_b - p0;
    let perp_a = to_a - edge_dir * to_a.dot(edge_dir);
    let perp_b = to_b - edge_dir * to_b.dot(edge_dir);

    if perp_a.length() < 1e-10 || perp_b.length() < 1e-10 {
        return std::f32::consts::PI;
    }

    angle_between(perp_a, perp_b)
}
