use std::fs;
use std::path::Path;

use tempfile::tempdir;

use crate::logging::discard_logger;
use crate::solutions::{Frequency, FREQUENCIES};
use crate::spec::SolverSpec;

struct ParsedOff {
    points: Vec<[f64; 3]>,
    faces: Vec<[usize; 3]>,
}

// Just enough of an OFF reader to check what we wrote.
fn read_off(path: &Path) -> ParsedOff {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("OFF"));
    let counts: Vec<usize> = lines
        .next()
        .unwrap()
        .split_whitespace()
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[2], 0);

    let mut points = Vec::new();
    for _ in 0..counts[0] {
        let line = lines.next().unwrap();
        let values: Vec<f64> = line.split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 3, "Bad point line {:?}", line);
        points.push([values[0], values[1], values[2]]);
    }
    let mut faces = Vec::new();
    for _ in 0..counts[1] {
        let values: Vec<usize> = lines
            .next()
            .unwrap()
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values[0], 3);
        faces.push([values[1], values[2], values[3]]);
    }
    assert_eq!(lines.next(), None);
    ParsedOff { points, faces }
}

#[test]
fn full_run_writes_every_file() {
    let dir = tempdir().unwrap();
    let spec = SolverSpec {
        output_dir: dir.path().to_path_buf(),
        ..SolverSpec::default()
    };
    let summary = crate::run(&spec, &FREQUENCIES, &discard_logger());
    assert_eq!(summary.unconverged, 0);
    assert_eq!(summary.write_failures, 0);

    let expected = [
        ("icosa20.off", 4, 2),
        ("icosa30.off", 5, 3),
        ("icosa40.off", 7, 5),
        ("icosa50.off", 9, 7),
        ("icosa60_a.off", 10, 9),
        ("icosa60_b.off", 10, 9),
        ("icosa70_a.off", 13, 12),
        ("icosa70_b.off", 13, 12),
        ("icosa70_c.off", 13, 12),
    ];
    assert_eq!(summary.written.len(), expected.len());
    for (written, &(name, point_count, face_count)) in summary.written.iter().zip(expected.iter()) {
        assert_eq!(*written, dir.path().join(name));
        let off = read_off(written);
        assert_eq!(off.points.len(), point_count, "{}", name);
        assert_eq!(off.faces.len(), face_count, "{}", name);
        for p in &off.points {
            // Nine decimals in the file.
            let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-8);
        }
        for face in &off.faces {
            assert!(face.iter().all(|&i| i < point_count));
        }
    }
}

#[test]
fn two_matches_known_geometry() {
    let dir = tempdir().unwrap();
    let spec = SolverSpec {
        output_dir: dir.path().to_path_buf(),
        ..SolverSpec::default()
    };
    let summary = crate::run(&spec, &[Frequency::Two], &discard_logger());
    assert_eq!(summary.written, vec![dir.path().join("icosa20.off")]);

    let text = fs::read_to_string(&summary.written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "OFF");
    assert_eq!(lines[1], "4 2 0");
    assert_eq!(lines[6], "3 0 1 3");
    assert_eq!(lines[7], "3 0 3 2");

    let off = read_off(&summary.written[0]);
    // Edge midpoint, then the face corner.
    let expected = [[0.0, -0.356_822_090, 0.934_172_359], [0.525_731_112, -0.303_530_999, 0.794_654_472]];
    for (p, e) in off.points.iter().zip(expected.iter()) {
        for axis in 0..3 {
            assert_relative_eq!(p[axis], e[axis], epsilon = 2e-9);
        }
    }
}

#[test]
fn custom_prefix_and_subset() {
    let dir = tempdir().unwrap();
    let spec = SolverSpec::from_json(&format!(
        r#"{{ "output_dir": {:?}, "file_prefix": "geo" }}"#,
        dir.path().to_str().unwrap()
    ))
    .unwrap();
    let summary = crate::run(&spec, &[Frequency::Three, Frequency::Six], &discard_logger());
    let names: Vec<String> = summary
        .written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["geo30.off", "geo60_a.off", "geo60_b.off"]);
}

#[test]
fn unwritable_directory_is_counted_not_fatal() {
    let dir = tempdir().unwrap();
    let spec = SolverSpec {
        output_dir: dir.path().join("missing"),
        ..SolverSpec::default()
    };
    let summary = crate::run(&spec, &[Frequency::Two, Frequency::Five], &discard_logger());
    assert!(summary.written.is_empty());
    assert_eq!(summary.write_failures, 2);
    assert_eq!(summary.unconverged, 0);
}

#[test]
fn unconverged_search_is_still_written() {
    let dir = tempdir().unwrap();
    let mut spec = SolverSpec {
        output_dir: dir.path().to_path_buf(),
        ..SolverSpec::default()
    };
    spec.search.max_iterations = 2;
    let summary = crate::run(&spec, &[Frequency::Seven], &discard_logger());
    assert_eq!(summary.unconverged, 3);
    assert_eq!(summary.written.len(), 3);
    let off = read_off(&dir.path().join("icosa70_b.off"));
    assert_eq!(off.points.len(), 13);
}
