//! Vertex 4's azimuth is the only free parameter left in (6,0), and it
//! can't satisfy both latitude conditions at once. Each variant closes up
//! one of them.

use slog::Logger;

use super::{close_up, deg, Variant, Variants};
use crate::off::Layout;
use crate::session::Session;
use crate::trig::{Real, SearchSpec, REGIONS};

pub const SEED_A_DEGREES: Real = 5.0;
pub const SEED_B_DEGREES: Real = 6.0;

#[rustfmt::skip]
pub static LAYOUT: Layout = Layout {
    picks: &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 5), (4, 0), (5, 0), (2, 1), (6, 0), (4, 1)],
    faces: &[
        [0, 1, 5], [0, 5, 4], [1, 2, 6], [1, 6, 5], [2, 3, 7],
        [2, 7, 6], [4, 5, 8], [5, 9, 8], [5, 6, 9],
    ],
};

/// Everything that doesn't depend on vertex 4's azimuth.
pub fn build(session: &mut Session) {
    let lcd = session.lcd();
    let b2 = lcd.b * 2.0;
    session.create_by_spherical(0, REGIONS[0], 0.0, b2 + lcd.c + lcd.a);
    session.create_by_spherical(6, REGIONS[0], 0.0, b2 + lcd.c);
    session.create_by_spherical(3, REGIONS[0], deg(36.0), (lcd.c + lcd.a) * 2.0);
    session.create_from_vertex(1, REGIONS[1], 6, REGIONS[0], b2, deg(144.0));
    let inclination = session.inclination(1, REGIONS[2]);
    session.create_by_spherical(5, REGIONS[2], 0.0, inclination);
    session.create_from_vertex(2, REGIONS[1], 5, REGIONS[0], b2, deg(144.0));
}

/// Put vertex 4 at `azimuth`, on vertex 5's latitude.
pub fn place_vertex_4(session: &mut Session, azimuth: Real) {
    let inclination = session.inclination(5, REGIONS[0]);
    session.create_by_spherical(4, REGIONS[0], azimuth, inclination);
}

pub fn residual_a(session: &mut Session, azimuth: Real) -> Real {
    place_vertex_4(session, azimuth);
    session.inclination(4, REGIONS[1]) - session.inclination(1, REGIONS[1])
}

pub fn residual_b(session: &mut Session, azimuth: Real) -> Real {
    place_vertex_4(session, azimuth);
    session.inclination(4, REGIONS[2]) - session.inclination(0, REGIONS[1])
}

pub fn solve(session: &mut Session, search: &SearchSpec, log: &Logger) -> Variants {
    let mut variants = Variants::new();

    build(session);
    let found = close_up(session, search, SEED_A_DEGREES, log, "variant a", residual_a);
    variants.push(Variant {
        suffix: "_a",
        mesh: LAYOUT.mesh(session),
        search: Some(found),
    });

    build(session);
    let found = close_up(session, search, SEED_B_DEGREES, log, "variant b", residual_b);
    variants.push(Variant {
        suffix: "_b",
        mesh: LAYOUT.mesh(session),
        search: Some(found),
    });

    variants
}
