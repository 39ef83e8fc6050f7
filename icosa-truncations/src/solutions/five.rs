use slog::Logger;

use super::{close_up, deg, Variant, Variants};
use crate::off::Layout;
use crate::session::Session;
use crate::trig::{Real, SearchSpec, REGIONS};

/// Where to start looking for vertex 3's inclination offset.
pub const SEED_DEGREES: Real = 9.0;

#[rustfmt::skip]
pub static LAYOUT: Layout = Layout {
    picks: &[(0, 5), (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (1, 1), (3, 3), (3, 1)],
    faces: &[[0, 1, 4], [1, 5, 4], [1, 2, 5], [2, 6, 5], [2, 3, 6], [4, 5, 8], [4, 8, 7]],
};

/// Place every vertex, with vertex 3 pushed `offset` further from the pole
/// than the unperturbed guess.
pub fn build(session: &mut Session, offset: Real) {
    let lcd = session.lcd();
    let b2 = lcd.b * 2.0;
    session.create_by_spherical(3, REGIONS[0], 0.0, b2 + lcd.c + offset);
    session.create_from_vertex(4, REGIONS[0], 3, REGIONS[0], b2 + lcd.c, deg(120.0));
    session.create_from_vertex(1, REGIONS[1], 3, REGIONS[0], b2, deg(144.0));
    session.create_from_vertex(0, REGIONS[1], 3, REGIONS[1], b2, deg(144.0));
    session.create_by_spherical(2, REGIONS[0], deg(36.0), (lcd.c + lcd.a) * 2.0);
}

/// Vertices 4 and 0 should share a latitude in region 2.
pub fn residual(session: &mut Session, offset: Real) -> Real {
    build(session, offset);
    session.inclination(4, REGIONS[2]) - session.inclination(0, REGIONS[2])
}

pub fn solve(session: &mut Session, search: &SearchSpec, log: &Logger) -> Variants {
    let found = close_up(session, search, SEED_DEGREES, log, "vertex 3 offset", residual);
    let mut variants = Variants::new();
    variants.push(Variant {
        suffix: "",
        mesh: LAYOUT.mesh(session),
        search: Some(found),
    });
    variants
}
