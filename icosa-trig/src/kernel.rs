//! The handful of 4×4 matrix operations the truncation solvers need on top of
//! what nalgebra already provides.
//!
//! All matrices use nalgebra's column-vector convention: `m * p` transforms `p`,
//! and `b * a` means "apply `a`, then `b`". Plain multiplication, transposition
//! and identity come straight from nalgebra.

use crate::na;
use crate::types::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Right-handed rotation of `angle` radians about a coordinate axis.
pub fn rotation(axis: Axis, angle: Real) -> Mat4 {
    let axis = match axis {
        Axis::X => Vec3::x_axis(),
        Axis::Y => Vec3::y_axis(),
        Axis::Z => Vec3::z_axis(),
    };
    na::Rotation3::from_axis_angle(&axis, angle).to_homogeneous()
}

/// Non-uniform scale. Negative factors give axis mirrors, e.g.
/// `scale(-1.0, 1.0, 1.0)` reflects through the y-z plane.
pub fn scale(x: Real, y: Real, z: Real) -> Mat4 {
    Mat4::new_nonuniform_scaling(&Vec3::new(x, y, z))
}

/// Compose transforms so that `steps[0]` is applied first.
pub fn compose(steps: &[Mat4]) -> Mat4 {
    steps
        .iter()
        .fold(Mat4::identity(), |acc, step| step * acc)
}

/// Rotation whose rows are the given (orthonormal) axes; it takes a point to
/// its coordinates in that frame. The transpose takes it back.
pub fn rotation_from_axes(x: &Vec3, y: &Vec3, z: &Vec3) -> Mat4 {
    Mat3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]).to_homogeneous()
}

/// Orthonormal frame of a triangle, oriented like this:
///
/// ```text
///      p1
///     .  .
///   p2 .. p0   ----> local x axis
/// ```
///
/// The x axis runs from `p2` to `p0`, z is the triangle's normal
/// (right-handed with `p2 -> p1`), and y is re-derived from z and x so the
/// three are exactly orthogonal. Translation is ignored.
///
/// Returns the rotation into the frame and its inverse (the transpose).
pub fn frame_from_triangle(p0: &Pt3, p1: &Pt3, p2: &Pt3) -> (Mat4, Mat4) {
    let x = (p0 - p2).normalize();
    let y = (p1 - p2).normalize();
    let z = x.cross(&y).normalize();
    let y = z.cross(&x).normalize();
    let forward = rotation_from_axes(&x, &y, &z);
    (forward, forward.transpose())
}

pub fn transform_point(m: &Mat4, p: &Pt3) -> Pt3 {
    m.transform_point(p)
}

/// Apply `m` to every point in `src`, writing into the same index of `dst`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn transform_points(m: &Mat4, src: &[Pt3], dst: &mut [Pt3]) {
    assert_eq!(src.len(), dst.len(), "Mismatched point buffers");
    for (from, to) in src.iter().zip(dst.iter_mut()) {
        *to = m.transform_point(from);
    }
}
