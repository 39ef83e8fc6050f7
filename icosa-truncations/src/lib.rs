/*!
# Icosa Truncations

Computes vertex positions for class I geodesic icosahedra, (2,0) through (7,0),
chosen so that the geodesic can be truncated: every vertex sits on the unit
sphere and the rings of vertices around each icosahedral corner are planar
wherever that's possible.

Only one sixth of one face is worked out by hand. Each vertex is placed once,
in one of the six regions of the equatorial face, then mirrored and rotated
into the other five. The output for each frequency is a small OFF mesh of
one equilateral patch, in a frame where the face centre is on +z.


## High-level design

  - `icosa_trig` (re-exported as `trig`) has the frequency-agnostic pieces:
    spherical coordinates, the spherical triangle solver, the 1-D search.
  - `symmetry` builds the face frame and the region exchange table once.
  - `session::Session` holds the vertices of one frequency while it's being
    solved.
  - `solutions` has one recipe per frequency, and `driver` runs them and
    writes the results.
*/

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub use icosa_trig as trig;

pub mod driver;
pub mod icosahedron;
pub mod logging;
pub mod off;
pub mod session;
pub mod solutions;
pub mod spec;
pub mod symmetry;
mod vertex;

pub use crate::driver::{run, RunSummary};
pub use crate::off::{Layout, OffMesh};
pub use crate::session::{Session, VertexId, MAX_VERTICES};
pub use crate::solutions::{Frequency, Variant, FREQUENCIES};
pub use crate::spec::{SolverSpec, SpecError};
pub use crate::symmetry::Symmetry;
pub use crate::vertex::Vertex;

#[cfg(test)]
mod integration_tests;
