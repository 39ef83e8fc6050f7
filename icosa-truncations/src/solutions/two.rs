use super::{deg, fixed, Variants};
use crate::off::Layout;
use crate::session::Session;
use crate::trig::REGIONS;

#[rustfmt::skip]
pub static LAYOUT: Layout = Layout {
    picks: &[(0, 0), (1, 0), (0, 4), (0, 1)],
    faces: &[[0, 1, 3], [0, 3, 2]],
};

pub fn build(session: &mut Session) {
    let lcd = session.lcd();
    // Midpoint of the face's lower edge, and one of its corners.
    session.create_by_spherical(0, REGIONS[0], 0.0, lcd.b * 2.0 + (lcd.c + lcd.a));
    session.create_by_spherical(1, REGIONS[0], deg(36.0), (lcd.c + lcd.a) * 2.0);
}

pub fn solve(session: &mut Session) -> Variants {
    build(session);
    let mut variants = Variants::new();
    variants.push(fixed("", LAYOUT.mesh(session)));
    variants
}
