use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::solutions::Frequency;
use crate::trig::SearchSpec;

// Everything that can be tuned about a run without changing the geometry
// recipes themselves. Defaults reproduce the stock run: every output in the
// current directory, named `icosa20.off` through `icosa70_c.off`.
//
// Every field is optional in JSON; missing ones take their default.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSpec {
    pub search: SearchSpec,
    pub output_dir: PathBuf,
    /// Output files are named `<prefix><b>0` plus a variant suffix.
    pub file_prefix: String,
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("couldn't read solver spec {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't parse solver spec")]
    Json(#[from] serde_json::Error),
    #[error("invalid solver spec: {0}")]
    Invalid(&'static str),
}

impl Default for SolverSpec {
    fn default() -> SolverSpec {
        SolverSpec {
            search: SearchSpec::default(),
            output_dir: PathBuf::from("."),
            file_prefix: "icosa".to_string(),
        }
    }
}

impl SolverSpec {
    pub fn from_json(json: &str) -> Result<SolverSpec, SpecError> {
        let spec: SolverSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn load(path: &Path) -> Result<SolverSpec, SpecError> {
        let json = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        SolverSpec::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        let search = &self.search;
        if !(search.tolerance > 0.0) {
            return Err(SpecError::Invalid("search tolerance must be positive"));
        }
        if !(search.initial_step > 0.0) {
            return Err(SpecError::Invalid("search step must be positive"));
        }
        if search.max_iterations == 0 {
            return Err(SpecError::Invalid("search needs at least one iteration"));
        }
        if self.file_prefix.is_empty() {
            return Err(SpecError::Invalid("file prefix can't be empty"));
        }
        Ok(())
    }

    pub fn base_name(&self, frequency: Frequency) -> String {
        format!("{}{}0", self.file_prefix, frequency.b())
    }

    /// Where to write the variant of `frequency` with the given suffix
    /// (empty, or e.g. `"_a"`).
    pub fn output_path(&self, frequency: Frequency, suffix: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.off", self.base_name(frequency), suffix))
    }
}
