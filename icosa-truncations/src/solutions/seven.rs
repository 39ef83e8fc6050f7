//! (7,0) can't put every ring of vertices on a plane at once. Three
//! variants each get two of the rings planar, by moving vertex 5 after the
//! rest of the configuration has been closed up.

use slog::Logger;

use super::{close_up, deg, Variant, Variants};
use crate::off::Layout;
use crate::session::{Session, VertexId};
use crate::trig::{Real, RegionIndex, SearchSpec, REGIONS};

pub const SEED_BASE_DEGREES: Real = 5.5;
pub const SEED_VARIANT_DEGREES: Real = 4.0;

#[rustfmt::skip]
pub static LAYOUT: Layout = Layout {
    picks: &[
        (0, 5), (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0),
        (6, 0), (2, 1), (7, 5), (7, 0), (5, 1), (7, 2),
    ],
    faces: &[
        [0, 1, 5], [1, 6, 5], [1, 2, 6], [2, 7, 6], [2, 3, 7], [3, 8, 7],
        [3, 4, 8], [5, 10, 9], [5, 6, 10], [6, 11, 10], [6, 7, 11], [9, 10, 12],
    ],
};

/// Vertex instances that should share a latitude, one group per ring.
#[rustfmt::skip]
pub static RINGS: [&[(VertexId, RegionIndex)]; 6] = [
    &[(2, 3), (2, 2)],
    &[(6, 2), (1, 2)],
    &[(5, 2), (0, 2)],
    &[(7, 2), (4, 2), (0, 1)],
    &[(7, 1), (5, 1), (1, 1)],
    &[(4, 0), (5, 0), (6, 0), (2, 1)],
];

/// Everything but vertex 5, with vertex 7 pulled `offset` towards the pole.
pub fn build(session: &mut Session, offset: Real) {
    let lcd = session.lcd();
    let b2 = lcd.b * 2.0;
    session.create_by_spherical(3, REGIONS[0], deg(36.0), (lcd.a + lcd.c) * 2.0);

    session.create_by_spherical(7, REGIONS[2], 0.0, b2 + lcd.c - offset);
    session.create_from_vertex(4, REGIONS[2], 7, REGIONS[2], b2 + lcd.c, deg(60.0));
    session.create_from_vertex(0, REGIONS[1], 7, REGIONS[2], b2, deg(144.0));

    session.create_from_vertex(1, REGIONS[1], 7, REGIONS[1], b2, deg(144.0));

    session.create_from_vertex(6, REGIONS[0], 4, REGIONS[0], b2 + lcd.c, deg(120.0));
    session.create_from_vertex(2, REGIONS[1], 4, REGIONS[0], b2, deg(144.0));
}

pub fn residual_base(session: &mut Session, offset: Real) -> Real {
    build(session, offset);
    session.inclination(6, REGIONS[2]) - session.inclination(1, REGIONS[2])
}

fn place_vertex_5_on_ring_2(session: &mut Session, azimuth: Real) {
    let inclination = session.inclination(0, REGIONS[2]);
    session.create_by_spherical(5, REGIONS[2], azimuth, inclination);
}

pub fn residual_a(session: &mut Session, azimuth: Real) -> Real {
    place_vertex_5_on_ring_2(session, azimuth);
    session.inclination(5, REGIONS[1]) - session.inclination(1, REGIONS[1])
}

pub fn residual_b(session: &mut Session, azimuth: Real) -> Real {
    place_vertex_5_on_ring_2(session, azimuth);
    session.inclination(5, REGIONS[0]) - session.inclination(4, REGIONS[0])
}

pub fn residual_c(session: &mut Session, azimuth: Real) -> Real {
    let inclination = session.inclination(4, REGIONS[0]);
    session.create_by_spherical(5, REGIONS[0], azimuth, inclination);
    session.inclination(5, REGIONS[1]) - session.inclination(1, REGIONS[1])
}

/// Log the inclination, in degrees, of every instance in each ring.
pub fn log_rings(session: &Session, log: &Logger) {
    for (ring, members) in RINGS.iter().enumerate() {
        let inclinations: Vec<String> = members
            .iter()
            .map(|&(id, region)| {
                let inclination = session.inclination(id, REGIONS[region as usize]);
                format!("{},{}={:.9}", id, region, inclination.to_degrees())
            })
            .collect();
        debug!(log, "Ring inclinations"; "ring" => ring, "instances" => inclinations.join(" "));
    }
}

pub fn solve(session: &mut Session, search: &SearchSpec, log: &Logger) -> Variants {
    let mut variants = Variants::new();
    // Every variant is built on the base, so a base that didn't close up
    // fails all of them.
    let base = close_up(session, search, SEED_BASE_DEGREES, log, "base configuration", residual_base);

    let steps: [(&'static str, &'static str, fn(&mut Session, Real) -> Real); 3] = [
        ("_a", "variant a", residual_a),
        ("_b", "variant b", residual_b),
        ("_c", "variant c", residual_c),
    ];
    for &(suffix, what, residual) in steps.iter() {
        let found = close_up(session, search, SEED_VARIANT_DEGREES, log, what, residual);
        log_rings(session, log);
        variants.push(Variant {
            suffix,
            mesh: LAYOUT.mesh(session),
            search: Some(base.and(found)),
        });
    }
    variants
}
