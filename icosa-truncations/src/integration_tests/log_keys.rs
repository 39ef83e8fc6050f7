use std::fmt;
use std::sync::{Arc, Mutex};

use slog::{Drain, Key, Logger, OwnedKVList, Record, Serializer, KV};
use tempfile::tempdir;

use crate::solutions::Frequency;
use crate::spec::SolverSpec;

struct KeyList(Vec<String>);

impl Serializer for KeyList {
    fn emit_arguments(&mut self, key: Key, _val: &fmt::Arguments) -> slog::Result {
        self.0.push(key.to_string());
        Ok(())
    }
}

// Remembers the keys (record and logger context) of everything logged.
#[derive(Clone, Default)]
struct KeyCapture {
    records: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl Drain for KeyCapture {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, values: &OwnedKVList) -> Result<(), slog::Never> {
        let mut keys = KeyList(Vec::new());
        record
            .kv()
            .serialize(record, &mut keys)
            .expect("Collecting keys can't fail");
        values
            .serialize(record, &mut keys)
            .expect("Collecting keys can't fail");
        let message = format!("{}", record.msg());
        self.records.lock().unwrap().push((message, keys.0));
        Ok(())
    }
}

#[test]
fn no_record_repeats_a_key() {
    let capture = KeyCapture::default();
    let log = Logger::root(capture.clone(), o!("icosa_version" => "test"));
    let dir = tempdir().unwrap();
    let spec = SolverSpec {
        output_dir: dir.path().to_path_buf(),
        ..SolverSpec::default()
    };
    crate::run(&spec, &[Frequency::Two, Frequency::Five], &log);

    let records = capture.records.lock().unwrap();
    assert!(!records.is_empty());
    for (message, keys) in records.iter() {
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len(), "{:?} has repeated keys {:?}", message, keys);
    }
    // Placement traces from the session are among them.
    assert!(records.iter().any(|(message, _)| message == "Placed vertex"));
}
