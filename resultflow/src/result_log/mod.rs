//! The JSON result log.
//!
//! The log is a flat JSON object mapping each combined output (as a string)
//! to the three raw results that first produced it:
//!
//! ```json
//! {
//!     "58": [
//!         4,
//!         51.1,
//!         "number_2"
//!     ]
//! }
//! ```
//!
//! Entries are only ever added. A repeated output leaves the file untouched.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::ResultValue;
use crate::errors::LogError;

/// Default location of the log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "data/log.json";

/// A sink for combined outputs.
///
/// Implementations must keep the first results seen for an output and ignore
/// later writes for the same output.
pub trait LogStore: Send {
    /// Records `results` under `output` if the output has not been seen.
    ///
    /// Returns `true` when a new entry was written.
    fn write_log(&mut self, output: i64, results: &[ResultValue]) -> Result<bool, LogError>;
}

/// A result log backed by a JSON file on disk.
///
/// The file is re-read on every [`LogStore::write_log`] call, so entries
/// written by another log on the same path are kept. The in-memory copy only
/// changes once the file has been written.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl ResultLog {
    /// Opens the log at `path`, loading existing entries if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LogError> {
        let path = path.into();
        let entries = load_entries(&path)?;

        debug!(path = %path.display(), entries = entries.len(), "Opened result log");
        Ok(Self { path, entries })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of logged outputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `output` already has an entry.
    #[must_use]
    pub fn contains(&self, output: i64) -> bool {
        self.entries.contains_key(&output.to_string())
    }

    /// Returns the results logged for `output`.
    ///
    /// Entries that do not decode as a list of results are treated as absent.
    #[must_use]
    pub fn get(&self, output: i64) -> Option<Vec<ResultValue>> {
        self.entries
            .get(&output.to_string())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Returns the logged output keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Renders the log the same way it is written to disk.
    pub fn to_pretty_json(&self) -> Result<String, LogError> {
        render(&self.entries)
    }

    fn persist(&self, entries: &Map<String, Value>) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;
            }
        }
        let contents = render(entries)?;
        fs::write(&self.path, contents).map_err(|e| LogError::io(&self.path, e))
    }
}

fn load_entries(path: &Path) -> Result<Map<String, Value>, LogError> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str::<Map<String, Value>>(&contents)
            .map_err(|e| LogError::parse(path, e.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
        Err(e) => Err(LogError::io(path, e)),
    }
}

fn render(entries: &Map<String, Value>) -> Result<String, LogError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut ser)
        .map_err(|e| LogError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| LogError::Serialization(e.to_string()))
}

impl LogStore for ResultLog {
    fn write_log(&mut self, output: i64, results: &[ResultValue]) -> Result<bool, LogError> {
        let key = output.to_string();
        let mut entries = load_entries(&self.path)?;
        if entries.contains_key(&key) {
            debug!(output, "Output already logged, skipping write");
            self.entries = entries;
            return Ok(false);
        }

        let value =
            serde_json::to_value(results).map_err(|e| LogError::Serialization(e.to_string()))?;
        entries.insert(key, value);
        self.persist(&entries)?;
        self.entries = entries;

        debug!(output, path = %self.path.display(), "Logged new output");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use tempfile::TempDir;

    #[fixture]
    fn log_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[rstest]
    fn test_open_missing_file_is_empty(log_dir: TempDir) {
        let log = ResultLog::open(log_dir.path().join("log.json")).unwrap();

        assert!(log.is_empty());
        assert!(!log.path().exists());
    }

    #[rstest]
    fn test_write_log_creates_file_and_parent_dirs(log_dir: TempDir) {
        let path = log_dir.path().join("data").join("log.json");
        let mut log = ResultLog::open(&path).unwrap();

        let written = log
            .write_log(58, &ResultValue::triple(4, 51.1, "number_2"))
            .unwrap();

        assert!(written);
        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({"58": [4, 51.1, "number_2"]}));
    }

    #[rstest]
    fn test_write_log_keeps_first_entry(log_dir: TempDir) {
        let path = log_dir.path().join("log.json");
        let mut log = ResultLog::open(&path).unwrap();

        assert!(log.write_log(10, &ResultValue::triple(3, 4.6, "number_3")).unwrap());
        assert!(!log.write_log(10, &ResultValue::triple(1, 5.4, "number_4")).unwrap());

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(10), Some(ResultValue::triple(3, 4.6, "number_3")));
    }

    #[rstest]
    fn test_skipped_write_does_not_touch_file(log_dir: TempDir) {
        let path = log_dir.path().join("log.json");
        fs::write(&path, r#"{"10": [3, 4.6, "number_3"]}"#).unwrap();
        let mut log = ResultLog::open(&path).unwrap();

        assert!(!log.write_log(10, &ResultValue::triple(9, 9.9, "number_9")).unwrap());

        // Still the compact form written above, not re-rendered.
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"10": [3, 4.6, "number_3"]}"#
        );
    }

    #[rstest]
    fn test_reopen_loads_existing_entries(log_dir: TempDir) {
        let path = log_dir.path().join("log.json");
        {
            let mut log = ResultLog::open(&path).unwrap();
            log.write_log(181, &ResultValue::triple(34, 24.2, "number_123"))
                .unwrap();
            log.write_log(10, &ResultValue::triple(3, 4.6, "number_3"))
                .unwrap();
        }

        let log = ResultLog::open(&path).unwrap();

        assert_eq!(log.keys(), vec!["181", "10"]);
        assert!(log.contains(181));
        assert!(!log.contains(58));
    }

    #[rstest]
    fn test_file_uses_four_space_indent(log_dir: TempDir) {
        let path = log_dir.path().join("log.json");
        let mut log = ResultLog::open(&path).unwrap();
        log.write_log(8, &ResultValue::triple(1, 5.4, "number_2"))
            .unwrap();

        let expected = "{\n    \"8\": [\n        1,\n        5.4,\n        \"number_2\"\n    ]\n}";
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[rstest]
    #[case("not json")]
    #[case("")]
    #[case("[1, 2, 3]")]
    fn test_open_malformed_file(log_dir: TempDir, #[case] contents: &str) {
        let path = log_dir.path().join("log.json");
        fs::write(&path, contents).unwrap();

        let err = ResultLog::open(&path).unwrap_err();

        assert!(matches!(err, LogError::Parse { .. }));
    }

    #[rstest]
    fn test_failed_write_is_not_remembered(log_dir: TempDir) {
        // A plain file where the parent directory should be blocks the write.
        let blocker = log_dir.path().join("data");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("log.json");
        let mut log = ResultLog::open(&path).unwrap();

        let err = log
            .write_log(58, &ResultValue::triple(4, 51.1, "number_2"))
            .unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
        assert!(!log.contains(58));

        fs::remove_file(&blocker).unwrap();
        let written = log
            .write_log(58, &ResultValue::triple(4, 51.1, "number_2"))
            .unwrap();

        assert!(written);
        assert!(path.exists());
        assert_eq!(ResultLog::open(&path).unwrap().keys(), vec!["58"]);
    }

    #[rstest]
    fn test_two_logs_on_one_path_keep_each_others_entries(log_dir: TempDir) {
        let path = log_dir.path().join("log.json");
        let mut first = ResultLog::open(&path).unwrap();
        let mut second = ResultLog::open(&path).unwrap();

        assert!(first.write_log(10, &ResultValue::triple(3, 4.6, "number_3")).unwrap());
        assert!(second.write_log(58, &ResultValue::triple(4, 51.1, "number_2")).unwrap());
        assert!(!second.write_log(10, &ResultValue::triple(1, 5.4, "number_4")).unwrap());

        let reopened = ResultLog::open(&path).unwrap();
        assert_eq!(reopened.keys(), vec!["10", "58"]);
        assert_eq!(reopened.get(10), Some(ResultValue::triple(3, 4.6, "number_3")));
        assert!(second.contains(10));
    }
}
