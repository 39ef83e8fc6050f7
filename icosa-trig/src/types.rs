use crate::na;

// Everything here is non-realtime geometry, so `f64` throughout.
pub type Real = f64;

pub type Vec3 = na::Vector3<f64>;
pub type Pt3 = na::Point3<f64>;
pub type Mat3 = na::Matrix3<f64>;
pub type Mat4 = na::Matrix4<f64>;
