//! Recipes for each frequency's truncation.
//!
//! A recipe is a fixed sequence of vertex placements in a `Session`, all
//! measured from the icosahedral LCD triangle. Recipes with a free parameter
//! are closed up by searching for the parameter value that puts two
//! vertices at the same inclination. Each recipe's layout then picks the
//! vertex instances that form one equilateral patch of the face.

use std::fmt;

use arrayvec::ArrayVec;
use slog::Logger;

use crate::off::OffMesh;
use crate::session::Session;
use crate::trig::{find_root, Convergence, Real, SearchError, SearchSpec};

mod five;
mod four;
mod seven;
mod six;
mod three;
mod two;

/// Class I frequency (b,0).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

pub static FREQUENCIES: [Frequency; 6] = [
    Frequency::Two,
    Frequency::Three,
    Frequency::Four,
    Frequency::Five,
    Frequency::Six,
    Frequency::Seven,
];

impl Frequency {
    pub fn from_b(b: u8) -> Option<Frequency> {
        FREQUENCIES.iter().cloned().find(|frequency| frequency.b() == b)
    }

    /// Edge divisions of the icosahedron.
    pub fn b(self) -> u8 {
        match self {
            Frequency::Two => 2,
            Frequency::Three => 3,
            Frequency::Four => 4,
            Frequency::Five => 5,
            Frequency::Six => 6,
            Frequency::Seven => 7,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},0)", self.b())
    }
}

/// One admissible truncation of a frequency.
#[derive(Clone, Debug)]
pub struct Variant {
    /// Appended to the frequency's base file name: empty, or `"_a"` etc.
    pub suffix: &'static str,
    pub mesh: OffMesh,
    /// How the search for this variant's free parameter went, if it had one.
    pub search: Option<Result<Convergence, SearchError>>,
}

pub type Variants = ArrayVec<Variant, 3>;

/// Run `frequency`'s recipe in `session` and collect its output meshes.
///
/// A search that fails to converge doesn't stop anything: it's logged, and
/// the variant is built from wherever the search gave up.
pub fn solve(frequency: Frequency, session: &mut Session, search: &SearchSpec) -> Variants {
    let log = session.log().new(o!("frequency" => frequency.to_string()));
    match frequency {
        Frequency::Two => two::solve(session),
        Frequency::Three => three::solve(session),
        Frequency::Four => four::solve(session),
        Frequency::Five => five::solve(session, search, &log),
        Frequency::Six => six::solve(session, search, &log),
        Frequency::Seven => seven::solve(session, search, &log),
    }
}

fn deg(d: Real) -> Real {
    d.to_radians()
}

fn fixed(suffix: &'static str, mesh: OffMesh) -> Variant {
    Variant {
        suffix,
        mesh,
        search: None,
    }
}

/// Search with `residual` from `seed_degrees`, logging how it went. The
/// session is left as built by the last evaluation.
fn close_up<F>(
    session: &mut Session,
    search: &SearchSpec,
    seed_degrees: Real,
    log: &Logger,
    what: &'static str,
    mut residual: F,
) -> Result<Convergence, SearchError>
where
    F: FnMut(&mut Session, Real) -> Real,
{
    let result = find_root(search, deg(seed_degrees), log, |x| residual(session, x));
    match result {
        Ok(ref found) => info!(log, "Closed up {}", what;
            "parameter_degrees" => found.parameter.to_degrees(),
            "residual" => found.residual,
            "iterations" => found.iterations),
        Err(ref err) => warn!(log, "Couldn't close up {}: {}", what, err),
    }
    result
}
