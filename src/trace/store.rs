use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

// ============================================================================
// Action trace persistence — one JSON file per pipeline run
// ============================================================================

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace I/O failed at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("trace JSON is malformed at '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Persists agent action histories as pretty-printed JSON files, one per
/// test, keyed by the caller-supplied name. Writes overwrite; there is no
/// locking, so two pipelines saving under the same key race and the last
/// write wins.
pub struct ActionTraceStore {
    dir: PathBuf,
}

impl ActionTraceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Serialize the action records to `<dir>/<key>.json` (UTF-8, 4-space
    /// indentation), creating the directory on demand. I/O failures surface
    /// as errors and are never retried.
    pub fn save(&self, key: &str, actions: &[Value]) -> Result<PathBuf, TraceError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| TraceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(format!("{key}.json"));
        let json = to_pretty_json(&Value::Array(actions.to_vec())).map_err(|source| {
            TraceError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        std::fs::write(&path, json).map_err(|source| TraceError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Read a trace file back as a JSON document. Malformed content is a
    /// deserialization error; the code generator folds it into its
    /// never-throw outcome.
    pub fn load(path: &Path) -> Result<Value, TraceError> {
        let content = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| TraceError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Pretty-print a JSON value with 4-space indentation, matching the trace
/// file format the code-generation templates embed verbatim.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
