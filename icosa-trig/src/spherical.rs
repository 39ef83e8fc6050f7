use crate::types::*;

/// Anything closer to zero than this is treated as zero when recovering
/// spherical coordinates.
pub const ZERO: Real = 0.000_000_000_000_01;

/// Physics convention: `inclination` is measured from the +z pole,
/// `azimuth` anticlockwise from +x in the x-y plane. Angles in radians.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct SphericalCoord {
    pub radius: Real,
    pub azimuth: Real,
    pub inclination: Real,
}

impl SphericalCoord {
    pub fn new(radius: Real, azimuth: Real, inclination: Real) -> SphericalCoord {
        SphericalCoord {
            radius,
            azimuth,
            inclination,
        }
    }

    pub fn on_unit_sphere(azimuth: Real, inclination: Real) -> SphericalCoord {
        SphericalCoord::new(1.0, azimuth, inclination)
    }

    pub fn to_cartesian(&self) -> Pt3 {
        let (sin_inc, cos_inc) = self.inclination.sin_cos();
        Pt3::new(
            self.radius * sin_inc * self.azimuth.cos(),
            self.radius * sin_inc * self.azimuth.sin(),
            self.radius * cos_inc,
        )
    }

    /// Recover spherical coordinates from `p`, or `None` if `p` is so close
    /// to the origin that its direction is meaningless.
    pub fn from_cartesian(p: &Pt3) -> Option<SphericalCoord> {
        let mut coord = SphericalCoord::default();
        if coord.update_from_cartesian(p) {
            Some(coord)
        } else {
            None
        }
    }

    /// Overwrite these coordinates with those of `p`.
    ///
    /// The radius is always updated. If it comes out as (near) zero then
    /// inclination and azimuth are left as they were, and this returns `false`.
    pub fn update_from_cartesian(&mut self, p: &Pt3) -> bool {
        self.radius = p.coords.norm();
        if self.radius.abs() <= ZERO {
            return false;
        }
        self.inclination = (p.z / self.radius).acos();
        self.azimuth = azimuth_of(p.x, p.y);
        true
    }
}

// Deliberately not `atan2`: downstream solvers rely on exactly these
// branches and offsets.
//
//   x    y    azimuth
//   0    0    0
//   0    +    90
//   0    -    -90
//   +    0    0
//   +    ±    atan(y/x)
//   -    0    180
//   -    +    180 + atan(y/x)
//   -    -    -180 + atan(y/x)
fn azimuth_of(x: Real, y: Real) -> Real {
    if x.abs() <= ZERO {
        if y.abs() <= ZERO {
            0.0
        } else if y > 0.0 {
            90f64.to_radians()
        } else {
            (-90f64).to_radians()
        }
    } else if x > 0.0 {
        if y.abs() <= ZERO {
            0.0
        } else {
            (y / x).atan()
        }
    } else if y.abs() <= ZERO {
        180f64.to_radians()
    } else if y > 0.0 {
        180f64.to_radians() + (y / x).atan()
    } else {
        (-180f64).to_radians() + (y / x).atan()
    }
}
