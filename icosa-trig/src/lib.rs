/*!
Spherical building blocks for class I icosahedral geodesics.

This crate knows nothing about particular frequencies. It provides:

  - a few 4×4 transform helpers on top of nalgebra (`kernel`),
  - conversion between Cartesian points and spherical coordinates,
  - an oblique spherical triangle solver and the icosahedral LCD triangle,
  - the one-parameter search used to close up configurations with a free
    parameter (`search`),
  - region indexing for the six symmetric copies of the LCD triangle.
*/

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;
#[cfg(test)]
#[macro_use]
extern crate approx;

use nalgebra as na;

pub mod kernel;
pub mod search;
mod region;
mod spherical;
mod triangle;
mod types;

pub use self::region::*;
pub use self::search::{find_root, Convergence, SearchError, SearchSpec};
pub use self::spherical::SphericalCoord;
pub use self::triangle::{ambiguous_candidates, Candidate, SphericalTriangle};
pub use self::types::*;
