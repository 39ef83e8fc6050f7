#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;

use std::path::{Path, PathBuf};
use std::process;

use clap::{App, Arg};

use icosa_truncations::{logging, Frequency, SolverSpec, FREQUENCIES};

fn main() {
    let matches = App::new("icosa-truncations")
        .version(crate_version!())
        .about("Writes truncatable class I icosahedral geodesics as OFF meshes")
        .arg(
            Arg::with_name("out-dir")
                .long("out-dir")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory to write .off files into [default: current directory]"),
        )
        .arg(
            Arg::with_name("frequency")
                .long("frequency")
                .short("f")
                .value_name("B")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&["2", "3", "4", "5", "6", "7"])
                .help("Only compute (B,0); may be repeated [default: all]"),
        )
        .arg(
            Arg::with_name("spec")
                .long("spec")
                .value_name("FILE")
                .takes_value(true)
                .help("JSON solver spec with search settings and output naming"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for even more"),
        )
        .get_matches();

    let log = logging::terminal_logger(logging::level_for_verbosity(
        matches.occurrences_of("verbose"),
    ));

    let mut spec = match matches.value_of("spec") {
        Some(path) => match SolverSpec::load(Path::new(path)) {
            Ok(spec) => spec,
            Err(err) => {
                crit!(log, "Couldn't load solver spec"; "error" => format!("{:?}", err));
                drop(log);
                process::exit(2);
            }
        },
        None => SolverSpec::default(),
    };
    if let Some(dir) = matches.value_of("out-dir") {
        spec.output_dir = PathBuf::from(dir);
    }

    let mut frequencies: Vec<Frequency> = match matches.values_of("frequency") {
        Some(values) => values
            .filter_map(|b| b.parse().ok())
            .filter_map(Frequency::from_b)
            .collect(),
        None => FREQUENCIES.to_vec(),
    };
    frequencies.sort();
    frequencies.dedup();

    let summary = icosa_truncations::run(&spec, &frequencies, &log);
    info!(log, "Done";
        "written" => summary.written.len(),
        "unconverged" => summary.unconverged,
        "write_failures" => summary.write_failures);

    // Let the async drain flush before exiting.
    drop(log);
    if summary.write_failures > 0 {
        process::exit(1);
    }
}
