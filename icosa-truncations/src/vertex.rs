use crate::trig::{Pt3, Real, Region, SphericalCoord, REGION_COUNT};

/// One vertex of a truncation, as its six symmetric instances in the
/// face-local frame. Index by region.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vertex {
    pub points: [Pt3; REGION_COUNT],
    pub coords: [SphericalCoord; REGION_COUNT],
}

impl Vertex {
    pub fn new() -> Vertex {
        Vertex {
            points: [Pt3::origin(); REGION_COUNT],
            coords: [SphericalCoord::default(); REGION_COUNT],
        }
    }

    pub fn point(&self, region: Region) -> &Pt3 {
        &self.points[region.as_usize()]
    }

    pub fn coord(&self, region: Region) -> &SphericalCoord {
        &self.coords[region.as_usize()]
    }

    pub fn inclination(&self, region: Region) -> Real {
        self.coord(region).inclination
    }

    pub fn azimuth(&self, region: Region) -> Real {
        self.coord(region).azimuth
    }
}

impl Default for Vertex {
    fn default() -> Vertex {
        Vertex::new()
    }
}
