use std::f64::consts::{FRAC_PI_2, PI};

use crate::types::*;

/// A triangle on the unit sphere. Sides `a`, `b`, `c` are arcs in radians;
/// each `angle_*` is the angle opposite the side of the same letter.
///
/// ```text
///      .
///      |.
///      | .
///   b  |A .
///      |   . c
///      | C  .
///      |  . a
///      .
/// ```
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct SphericalTriangle {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub angle_a: Real,
    pub angle_b: Real,
    pub angle_c: Real,
}

/// One of the two (A, B) pairs that fit the same b, c, C when the
/// configuration is ambiguous.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Candidate {
    pub angle_a: Real,
    pub angle_b: Real,
}

impl SphericalTriangle {
    /// The right spherical triangle with A = 36° and B = 60° (so C = 90°)
    /// that tiles an icosahedron's circumscribed sphere 120 times. Its sides
    /// are derived from Napier's rules:
    ///
    /// - cos A = cos a · sin B
    /// - cos B = cos b · sin A
    /// - cos c = cot A · cot B
    pub fn icosahedral_lcd() -> SphericalTriangle {
        let angle_a = 36f64.to_radians();
        let angle_b = 60f64.to_radians();
        SphericalTriangle {
            a: (angle_a.cos() / angle_b.sin()).acos(),
            b: (angle_b.cos() / angle_a.sin()).acos(),
            c: (1.0 / (angle_a.tan() * angle_b.tan())).acos(),
            angle_a,
            angle_b,
            angle_c: FRAC_PI_2,
        }
    }

    /// Solve for `a`, `A` and `B` given sides `b`, `c` and the angle `C`
    /// opposite `c`.
    ///
    /// When `b > c` and `C` is acute two triangles fit the data (see
    /// `ambiguous_candidates`). The one with the law-of-sines `B` is used
    /// unless it gives a negative `A`, in which case its supplement is used
    /// instead.
    pub fn solve_bcc(b: Real, c: Real, angle_c: Real) -> SphericalTriangle {
        let (a, angle_a, angle_b) = match ambiguous_candidates(b, c, angle_c) {
            Some([primary, supplement]) => {
                let chosen = if primary.angle_a < 0.0 {
                    supplement
                } else {
                    primary
                };
                let a = (chosen.angle_a.sin() * b.sin() / chosen.angle_b.sin()).asin();
                (a, chosen.angle_a, chosen.angle_b)
            }
            None => {
                let angle_b = asin_clamp(b.sin() * angle_c.sin() / c.sin());
                // Napier's analogies.
                let a = 2.0
                    * (((b + c) / 2.0).tan() * ((angle_b + angle_c) / 2.0).cos()
                        / ((angle_b - angle_c) / 2.0).cos())
                    .atan();
                let angle_a = ((a.cos() - b.cos() * c.cos()) / (b.sin() * c.sin())).acos();
                (a, angle_a, angle_b)
            }
        };
        SphericalTriangle {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
        }
    }
}

/// Both (A, B) candidates for b, c, C if the configuration is the ambiguous
/// one (`b > c` and `C` acute), primary first. `None` otherwise.
///
/// Each `A` comes from Napier's analogy
/// `cot(A/2) = tan((C - B)/2) · sin((c + b)/2) / sin((c - b)/2)`,
/// which can come out negative for a candidate that doesn't close.
pub fn ambiguous_candidates(b: Real, c: Real, angle_c: Real) -> Option<[Candidate; 2]> {
    if !(b > c && angle_c < FRAC_PI_2) {
        return None;
    }
    let primary_b = (angle_c.sin() * b.sin() / c.sin()).asin();
    let supplement_b = PI - primary_b;
    let angle_a_for = |angle_b: Real| {
        let v = ((angle_c - angle_b) / 2.0).tan() * ((c + b) / 2.0).sin() / ((c - b) / 2.0).sin();
        (1.0 / v).atan() * 2.0
    };
    Some([
        Candidate {
            angle_a: angle_a_for(primary_b),
            angle_b: primary_b,
        },
        Candidate {
            angle_a: angle_a_for(supplement_b),
            angle_b: supplement_b,
        },
    ])
}

// Rounding can push a sine a hair past ±1.
fn asin_clamp(x: Real) -> Real {
    x.clamp(-1.0, 1.0).asin()
}
