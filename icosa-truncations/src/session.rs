use slog::Logger;

use crate::symmetry::Symmetry;
use crate::trig::kernel;
use crate::trig::{Pt3, Real, Region, SphericalCoord, SphericalTriangle, REGIONS, REGION_COUNT};
use crate::vertex::Vertex;

/// Enough vertex slots for every frequency up to (7,0).
pub const MAX_VERTICES: usize = 20;

pub type VertexId = usize;

/// Working state for computing one frequency's truncation.
///
/// Each vertex is placed once, in one region, and immediately replicated
/// into the other five. Placing the same vertex again overwrites all six
/// instances, which is how the searches in `solutions` re-run a recipe with
/// a new parameter.
pub struct Session<'a> {
    symmetry: &'a Symmetry,
    lcd: SphericalTriangle,
    vertices: [Option<Vertex>; MAX_VERTICES],
    log: Logger,
}

impl<'a> Session<'a> {
    pub fn new(symmetry: &'a Symmetry, parent_log: &Logger) -> Session<'a> {
        Session {
            symmetry,
            lcd: SphericalTriangle::icosahedral_lcd(),
            vertices: [None; MAX_VERTICES],
            log: parent_log.new(o!()),
        }
    }

    pub fn symmetry(&self) -> &Symmetry {
        self.symmetry
    }

    /// The icosahedral LCD triangle every recipe measures from.
    pub fn lcd(&self) -> SphericalTriangle {
        self.lcd
    }

    pub fn log(&self) -> &Logger {
        &self.log
    }

    /// # Panics
    ///
    /// Panics if `id` has not been placed yet.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        assert!(id < MAX_VERTICES, "Vertex id {} out of range", id);
        self.vertices[id]
            .as_ref()
            .unwrap_or_else(|| panic!("Vertex {} hasn't been placed", id))
    }

    pub fn inclination(&self, id: VertexId, region: Region) -> Real {
        self.vertex(id).inclination(region)
    }

    /// Instance of `id` in `region`, in the global frame.
    pub fn global_point(&self, id: VertexId, region: Region) -> Pt3 {
        self.symmetry.to_global(self.vertex(id).point(region))
    }

    pub fn placed(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|vertex| (id, vertex)))
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    pub fn create_by_spherical(
        &mut self,
        id: VertexId,
        region: Region,
        azimuth: Real,
        inclination: Real,
    ) {
        let coord = SphericalCoord::on_unit_sphere(azimuth, inclination);
        self.replicate(id, region, coord);
    }

    /// Place `id` at the far corner of the triangle with sides `b` and `c`
    /// and angle `angle_c` opposite `c`, measured from the face's pole: it
    /// lands at inclination `c` and azimuth `A`.
    pub fn create_by_triangle(
        &mut self,
        id: VertexId,
        region: Region,
        b: Real,
        c: Real,
        angle_c: Real,
    ) {
        let tri = SphericalTriangle::solve_bcc(b, c, angle_c);
        self.create_by_spherical(id, region, tri.angle_a, c);
    }

    /// Like `create_by_triangle`, with side `c` taken from the inclination
    /// of an already placed instance.
    pub fn create_from_vertex(
        &mut self,
        id: VertexId,
        region: Region,
        src: VertexId,
        src_region: Region,
        b: Real,
        angle_c: Real,
    ) {
        let c = self.inclination(src, src_region);
        self.create_by_triangle(id, region, b, c, angle_c);
    }

    fn replicate(&mut self, id: VertexId, region: Region, coord: SphericalCoord) {
        assert!(id < MAX_VERTICES, "Vertex id {} out of range", id);

        let seed = self.symmetry.to_global(&coord.to_cartesian());
        let mut globals = [seed; REGION_COUNT];
        for &to in REGIONS.iter() {
            if to != region {
                globals[to.as_usize()] = self.symmetry.exchange(region, to, &seed);
            }
        }

        let mut vertex = self.vertices[id].take().unwrap_or_default();
        kernel::transform_points(
            &self.symmetry.face.global_to_local,
            &globals,
            &mut vertex.points,
        );
        vertex.coords[region.as_usize()] = coord;
        for (point, instance) in vertex.points.iter().zip(vertex.coords.iter_mut()) {
            instance.update_from_cartesian(point);
        }

        trace!(self.log, "Placed vertex";
            "id" => id,
            "region" => region.index,
            "azimuth" => coord.azimuth.to_degrees(),
            "inclination" => coord.inclination.to_degrees());
        self.vertices[id] = Some(vertex);
    }
}
