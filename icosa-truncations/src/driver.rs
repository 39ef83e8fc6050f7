use std::path::PathBuf;

use slog::Logger;

use crate::session::Session;
use crate::solutions::{self, Frequency};
use crate::spec::SolverSpec;
use crate::symmetry::Symmetry;
use crate::trig::SphericalTriangle;

/// What a run did.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    /// Variants written from a search that hit its iteration cap or blew up.
    pub unconverged: usize,
    pub write_failures: usize,
}

/// Solve each of `frequencies` in turn and write out every variant.
///
/// Neither a failed search nor a failed write stops the run; both are
/// logged and counted in the summary.
pub fn run(spec: &SolverSpec, frequencies: &[Frequency], parent_log: &Logger) -> RunSummary {
    let log = parent_log.new(o!("system" => "driver"));
    let lcd = SphericalTriangle::icosahedral_lcd();
    info!(log, "Icosahedral LCD triangle";
        "a" => lcd.a.to_degrees(),
        "b" => lcd.b.to_degrees(),
        "c" => lcd.c.to_degrees());

    let symmetry = Symmetry::new();
    let mut summary = RunSummary::default();
    for &frequency in frequencies {
        info!(log, "Computing truncation"; "frequency" => frequency.to_string());
        // Fresh vertex slots for every frequency.
        let mut session = Session::new(&symmetry, &log);
        for variant in solutions::solve(frequency, &mut session, &spec.search) {
            if let Some(Err(_)) = variant.search {
                summary.unconverged += 1;
            }
            let path = spec.output_path(frequency, variant.suffix);
            match variant.mesh.write_to_file(&path) {
                Ok(()) => {
                    info!(log, "Geometry output"; "path" => path.display().to_string());
                    summary.written.push(path);
                }
                Err(err) => {
                    error!(log, "Couldn't write geometry";
                        "path" => path.display().to_string(),
                        "error" => err.to_string());
                    summary.write_failures += 1;
                }
            }
        }
    }
    summary
}
