//! Transforms between the six symmetric regions of an icosahedral face.
//!
//! Two frames are involved. Recipes place vertices in the local frame, where
//! the icosahedron has a vertex on the +z pole and the face being truncated
//! is the equatorial one from `icosahedron`. The global frame is that same
//! face seen head on: its centre is on +z and its regions are laid out as in
//! `Region`'s diagram. Region exchanges and mesh output happen in the global
//! frame.

use crate::icosahedron;
use crate::trig::kernel::{self, frame_from_triangle};
use crate::trig::{Mat4, Pt3, Real, Region, REGION_COUNT};

/// A rotation and its inverse.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RotationPair {
    pub forward: Mat4,
    pub inverse: Mat4,
}

impl RotationPair {
    fn from_triangle(p0: &Pt3, p1: &Pt3, p2: &Pt3) -> RotationPair {
        let (forward, inverse) = frame_from_triangle(p0, p1, p2);
        RotationPair { forward, inverse }
    }
}

pub struct FaceTransforms {
    pub local_to_global: Mat4,
    pub global_to_local: Mat4,
    /// Frames of the unit face triangle seen from each of its corners in
    /// turn; `steps[k]` turns by k × 120° about the face centre.
    pub steps: [RotationPair; 3],
}

impl FaceTransforms {
    pub fn new() -> FaceTransforms {
        let [c0, c1, c2] = icosahedron::equatorial_face_corners();
        let face = RotationPair::from_triangle(&c0, &c1, &c2);

        let half_height = (3.0 as Real).sqrt() / 6.0;
        let q0 = Pt3::new(0.5, -half_height, 0.0);
        let q1 = Pt3::new(0.0, 2.0 * half_height, 0.0);
        let q2 = Pt3::new(-0.5, -half_height, 0.0);

        FaceTransforms {
            local_to_global: face.forward,
            global_to_local: face.inverse,
            steps: [
                RotationPair::from_triangle(&q0, &q1, &q2),
                RotationPair::from_triangle(&q1, &q2, &q0),
                RotationPair::from_triangle(&q2, &q0, &q1),
            ],
        }
    }
}

impl Default for FaceTransforms {
    fn default() -> FaceTransforms {
        FaceTransforms::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Generator {
    /// Reflect through the y-z plane.
    Mirror,
    Step1,
    Step1Inverse,
    Step2,
    Step2Inverse,
}

use self::Generator::*;

// Entry [from][to] lists what to apply, first to last, to take a point in
// region `from` to its image in region `to`.
#[rustfmt::skip]
static REGION_EXCHANGES: [[&[Generator]; REGION_COUNT]; REGION_COUNT] = [
    [&[], &[Mirror, Step1Inverse], &[Step1Inverse], &[Mirror, Step2Inverse], &[Step2Inverse], &[Mirror]],
    [&[Step1, Mirror], &[], &[Step1, Mirror, Step1Inverse], &[Step1, Step2Inverse], &[Mirror], &[Step1]],
    [&[Step1], &[Step1, Mirror, Step1Inverse], &[], &[Mirror], &[Step1, Step2Inverse], &[Step1, Mirror]],
    [&[Step2, Mirror], &[Step2, Step1Inverse], &[Mirror], &[], &[Step2, Mirror, Step2Inverse], &[Step2]],
    [&[Step2], &[Mirror], &[Step2, Step1Inverse], &[Step2, Mirror, Step2Inverse], &[], &[Step2, Mirror]],
    [&[Mirror], &[Step1Inverse], &[Mirror, Step1Inverse], &[Step2Inverse], &[Mirror, Step2Inverse], &[]],
];

/// Entry `[i][j]` takes a global-frame point in region `i` to its image in
/// region `j`.
pub struct RegionTransformTable {
    entries: [[Mat4; REGION_COUNT]; REGION_COUNT],
}

impl RegionTransformTable {
    pub fn new(face: &FaceTransforms) -> RegionTransformTable {
        let mirror = kernel::scale(-1.0, 1.0, 1.0);
        let matrix_for = |generator: Generator| match generator {
            Mirror => mirror,
            Step1 => face.steps[1].forward,
            Step1Inverse => face.steps[1].inverse,
            Step2 => face.steps[2].forward,
            Step2Inverse => face.steps[2].inverse,
        };

        let mut entries = [[Mat4::identity(); REGION_COUNT]; REGION_COUNT];
        for (from, row) in REGION_EXCHANGES.iter().enumerate() {
            for (to, generators) in row.iter().enumerate() {
                let steps: Vec<Mat4> = generators.iter().map(|&g| matrix_for(g)).collect();
                entries[from][to] = kernel::compose(&steps);
            }
        }
        RegionTransformTable { entries }
    }

    pub fn get(&self, from: Region, to: Region) -> &Mat4 {
        &self.entries[from.as_usize()][to.as_usize()]
    }
}

/// Everything needed to move points between the face-local frame, the
/// global frame, and the six regions of the face. Built once and shared by
/// every `Session`.
pub struct Symmetry {
    pub face: FaceTransforms,
    pub regions: RegionTransformTable,
}

impl Symmetry {
    pub fn new() -> Symmetry {
        let face = FaceTransforms::new();
        let regions = RegionTransformTable::new(&face);
        Symmetry { face, regions }
    }

    pub fn to_global(&self, local: &Pt3) -> Pt3 {
        kernel::transform_point(&self.face.local_to_global, local)
    }

    pub fn to_local(&self, global: &Pt3) -> Pt3 {
        kernel::transform_point(&self.face.global_to_local, global)
    }

    /// Image in region `to` of the global-frame point `p` in region `from`.
    pub fn exchange(&self, from: Region, to: Region, p: &Pt3) -> Pt3 {
        kernel::transform_point(self.regions.get(from, to), p)
    }
}

impl Default for Symmetry {
    fn default() -> Symmetry {
        Symmetry::new()
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::trig::kernel::Axis;
    use crate::trig::{SphericalCoord, REGIONS};

    fn sample_points() -> Vec<Pt3> {
        vec![
            SphericalCoord::on_unit_sphere(0.3, 1.9).to_cartesian(),
            Pt3::new(0.2, -0.7, 0.4),
            Pt3::new(-0.9, 0.1, -0.3),
        ]
    }

    #[test]
    fn steps_turn_about_face_centre() {
        let face = FaceTransforms::new();
        assert_relative_eq!(face.steps[0].forward, Mat4::identity(), epsilon = 1e-14);
        let turn = kernel::rotation(Axis::Z, (-120f64).to_radians());
        assert_relative_eq!(face.steps[1].forward, turn, epsilon = 1e-14);
        assert_relative_eq!(face.steps[2].forward, turn * turn, epsilon = 1e-14);
        for step in face.steps.iter() {
            assert_relative_eq!(step.forward * step.inverse, Mat4::identity(), epsilon = 1e-14);
        }
    }

    #[test]
    fn face_frame_puts_face_centre_on_z() {
        let symmetry = Symmetry::new();
        let corners = icosahedron::equatorial_face_corners();
        let centre = (corners[0].coords + corners[1].coords + corners[2].coords) / 3.0;
        let global = symmetry.to_global(&Pt3::from(centre));
        assert_relative_eq!(global.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(global.y, 0.0, epsilon = 1e-12);
        assert!(global.z > 0.0);

        let back = symmetry.to_local(&global);
        assert_relative_eq!(back.coords, centre, epsilon = 1e-12);
    }

    #[test]
    fn exchange_table_follows_region_layout() {
        // Out of region 0: mirror first if the target is a mirror image,
        // then turn back by the target's rotation step.
        let step_inverses = [None, Some(Step1Inverse), Some(Step2Inverse)];
        for &region in REGIONS.iter() {
            let mut expected = Vec::new();
            if region.is_mirrored() {
                expected.push(Mirror);
            }
            expected.extend(step_inverses[region.rotation_step()]);
            assert_eq!(REGION_EXCHANGES[0][region.as_usize()], &expected[..]);
        }
        // Mirror pairs swap with a plain mirror.
        for &region in REGIONS.iter() {
            assert_eq!(REGION_EXCHANGES[region.as_usize()][region.mirror().as_usize()], &[Mirror]);
        }
    }

    #[test]
    fn diagonal_is_identity() {
        let symmetry = Symmetry::new();
        for &region in REGIONS.iter() {
            assert_eq!(*symmetry.regions.get(region, region), Mat4::identity());
        }
    }

    #[test]
    fn exchanges_are_inverse_pairs() {
        let symmetry = Symmetry::new();
        let points = sample_points();
        for (&from, &to, p) in iproduct!(REGIONS.iter(), REGIONS.iter(), points.iter()) {
            let there = symmetry.exchange(from, to, p);
            let back = symmetry.exchange(to, from, &there);
            assert_relative_eq!(back, *p, epsilon = 1e-9);
        }
    }

    #[test]
    fn table_follows_group_law() {
        let table = RegionTransformTable::new(&FaceTransforms::new());
        let origin = Region::new(0);
        for (&from, &to) in iproduct!(REGIONS.iter(), REGIONS.iter()) {
            let into_from = table.get(origin, from);
            let inverse = into_from
                .try_inverse()
                .expect("Region transforms should be invertible");
            let expected = table.get(origin, to) * inverse;
            assert_relative_eq!(*table.get(from, to), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn mirrored_regions_flip_handedness() {
        let table = RegionTransformTable::new(&FaceTransforms::new());
        let origin = Region::new(0);
        for &region in REGIONS.iter() {
            let det = table.get(origin, region).determinant();
            let expected = if region.is_mirrored() { -1.0 } else { 1.0 };
            assert_relative_eq!(det, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn exchanges_preserve_distance_from_origin() {
        let symmetry = Symmetry::new();
        for (&from, &to, p) in iproduct!(REGIONS.iter(), REGIONS.iter(), sample_points().iter()) {
            let image = symmetry.exchange(from, to, p);
            assert_relative_eq!(image.coords.norm(), p.coords.norm(), epsilon = 1e-12);
        }
    }
}
