use super::{deg, fixed, Variants};
use crate::off::Layout;
use crate::session::Session;
use crate::trig::REGIONS;

#[rustfmt::skip]
pub static LAYOUT: Layout = Layout {
    picks: &[(0, 0), (1, 0), (2, 0), (3, 5), (3, 0), (1, 1), (3, 2)],
    faces: &[[0, 4, 3], [0, 1, 4], [1, 5, 4], [1, 2, 5], [3, 4, 6]],
};

pub fn build(session: &mut Session) {
    let lcd = session.lcd();
    session.create_by_spherical(2, REGIONS[0], deg(36.0), (lcd.c + lcd.a) * 2.0);
    session.create_by_triangle(0, REGIONS[1], lcd.b * 2.0, deg(90.0), deg(144.0));
    session.create_by_spherical(3, REGIONS[2], 0.0, deg(90.0));
    session.create_from_vertex(1, REGIONS[1], 3, REGIONS[0], lcd.b * 2.0, deg(144.0));
}

pub fn solve(session: &mut Session) -> Variants {
    build(session);
    let mut variants = Variants::new();
    variants.push(fixed("", LAYOUT.mesh(session)));
    variants
}
