//! Object File Format output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use arrayvec::ArrayVec;

use crate::session::{Session, VertexId, MAX_VERTICES};
use crate::trig::{Pt3, Region, RegionIndex};

/// A triangle mesh in the global frame, ready to write out.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OffMesh {
    pub points: ArrayVec<Pt3, MAX_VERTICES>,
    /// Indices into `points`, anticlockwise seen from outside the sphere.
    pub faces: Vec<[usize; 3]>,
}

/// Which vertex instances make up a frequency's output mesh, and how they
/// are joined up.
pub struct Layout {
    pub picks: &'static [(VertexId, RegionIndex)],
    pub faces: &'static [[usize; 3]],
}

impl Layout {
    /// # Panics
    ///
    /// Panics if a pick refers to a vertex that hasn't been placed.
    pub fn mesh(&self, session: &Session) -> OffMesh {
        let points = self
            .picks
            .iter()
            .map(|&(id, region)| session.global_point(id, Region::new(region)))
            .collect();
        OffMesh {
            points,
            faces: self.faces.to_vec(),
        }
    }
}

impl OffMesh {
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "OFF")?;
        writeln!(out, "{} {} 0", self.points.len(), self.faces.len())?;
        for p in &self.points {
            writeln!(out, "{:12.9} {:12.9} {:12.9}", p.x, p.y, p.z)?;
        }
        for face in &self.faces {
            writeln!(out, "3 {} {} {}", face[0], face[1], face[2])?;
        }
        Ok(())
    }

    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write(&mut out)?;
        out.flush()
    }
}
