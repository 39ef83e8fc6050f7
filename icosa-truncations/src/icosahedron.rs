use crate::trig::{Pt3, Real, SphericalCoord};

/// Inclination from the pole of any of the five vertices adjacent to it,
/// for an icosahedron with one vertex on +z.
pub fn upper_ring_inclination() -> Real {
    2f64.atan()
}

/// Corners of the equatorial face that every truncation is built on, with
/// the icosahedron inscribed in the unit sphere and a vertex at each pole.
///
/// Corner 1 is in the upper ring on the +x axis; corners 0 and 2 are in the
/// lower ring either side of it, 36° to the left and right respectively.
/// Returned in the order `[c0, c1, c2]`.
pub fn equatorial_face_corners() -> [Pt3; 3] {
    let upper = upper_ring_inclination();
    let lower = 180f64.to_radians() - upper;
    [
        SphericalCoord::on_unit_sphere(36f64.to_radians(), lower).to_cartesian(),
        SphericalCoord::on_unit_sphere(0.0, upper).to_cartesian(),
        SphericalCoord::on_unit_sphere((-36f64).to_radians(), lower).to_cartesian(),
    ]
}
