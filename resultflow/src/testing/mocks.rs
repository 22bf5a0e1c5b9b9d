//! Fake pickers and log stores for testing.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::core::ResultValue;
use crate::errors::LogError;
use crate::result_log::LogStore;
use crate::results::ResultPicker;

/// A picker that prefers one fixed value.
///
/// Returns the configured value when the range contains it, otherwise the
/// first element of the range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker {
    value: i64,
}

impl FixedPicker {
    /// Creates a picker that prefers `value`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl ResultPicker for FixedPicker {
    fn pick(&self, range: &[i64]) -> Option<i64> {
        if range.contains(&self.value) {
            Some(self.value)
        } else {
            range.first().copied()
        }
    }
}

/// A picker that returns a fixed sequence of values, cycling at the end.
///
/// The range is only consulted for emptiness.
#[derive(Debug)]
pub struct SequencePicker {
    values: Vec<i64>,
    next: Mutex<usize>,
}

impl SequencePicker {
    /// Creates a picker that yields `values` in order.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            next: Mutex::new(0),
        }
    }

    /// Returns how many values have been picked so far.
    #[must_use]
    pub fn pick_count(&self) -> usize {
        *self.next.lock()
    }
}

impl ResultPicker for SequencePicker {
    fn pick(&self, range: &[i64]) -> Option<i64> {
        if range.is_empty() || self.values.is_empty() {
            return None;
        }
        let mut next = self.next.lock();
        let value = self.values[*next % self.values.len()];
        *next += 1;
        Some(value)
    }
}

/// A recorded [`LogStore::write_log`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    /// The output passed in.
    pub output: i64,
    /// The results passed in.
    pub results: Vec<ResultValue>,
    /// Whether the call added a new entry.
    pub written: bool,
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<RecordedWrite>,
    entries: Vec<(i64, Vec<ResultValue>)>,
}

/// An in-memory log store that records every write.
///
/// Clones share the same recording, so a test can keep one handle while the
/// pipeline owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogStore {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingLogStore {
    /// Creates an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded call, including skipped duplicates.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedWrite> {
        self.inner.lock().calls.clone()
    }

    /// Returns the number of calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }

    /// Returns the stored entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(i64, Vec<ResultValue>)> {
        self.inner.lock().entries.clone()
    }

    /// Returns the results stored for `output`.
    #[must_use]
    pub fn get(&self, output: i64) -> Option<Vec<ResultValue>> {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|(o, _)| *o == output)
            .map(|(_, results)| results.clone())
    }

    /// Returns true if `output` has an entry.
    #[must_use]
    pub fn contains(&self, output: i64) -> bool {
        self.get(output).is_some()
    }

    /// Clears calls and entries.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.calls.clear();
        inner.entries.clear();
    }
}

impl LogStore for RecordingLogStore {
    fn write_log(&mut self, output: i64, results: &[ResultValue]) -> Result<bool, LogError> {
        let mut inner = self.inner.lock();
        let written = !inner.entries.iter().any(|(o, _)| *o == output);
        if written {
            inner.entries.push((output, results.to_vec()));
        }
        inner.calls.push(RecordedWrite {
            output,
            results: results.to_vec(),
            written,
        });
        Ok(written)
    }
}

/// A log store whose writes always fail with an IO error.
#[derive(Debug, Clone)]
pub struct FailingLogStore {
    kind: std::io::ErrorKind,
}

impl FailingLogStore {
    /// Creates a store that fails with `kind`.
    #[must_use]
    pub fn new(kind: std::io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingLogStore {
    fn default() -> Self {
        Self::new(std::io::ErrorKind::PermissionDenied)
    }
}

impl LogStore for FailingLogStore {
    fn write_log(&mut self, _output: i64, _results: &[ResultValue]) -> Result<bool, LogError> {
        Err(LogError::io(
            "<failing store>",
            std::io::Error::new(self.kind, "simulated write failure"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_picker_prefers_value() {
        let picker = FixedPicker::new(12);
        assert_eq!(picker.pick(&[1, 12, 55]), Some(12));
    }

    #[test]
    fn test_fixed_picker_falls_back_to_first() {
        let picker = FixedPicker::new(99);
        assert_eq!(picker.pick(&[5, 12]), Some(5));
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_sequence_picker_cycles() {
        let picker = SequencePicker::new(vec![3, 1]);
        let range = [1, 3];

        let picks: Vec<_> = (0..5).map(|_| picker.pick(&range)).collect();

        assert_eq!(picks, vec![Some(3), Some(1), Some(3), Some(1), Some(3)]);
        assert_eq!(picker.pick_count(), 5);
    }

    #[test]
    fn test_sequence_picker_empty_range() {
        let picker = SequencePicker::new(vec![3]);
        assert_eq!(picker.pick(&[]), None);
        assert_eq!(picker.pick_count(), 0);
    }

    #[test]
    fn test_recording_store_first_write_wins() {
        let mut store = RecordingLogStore::new();

        assert!(store.write_log(10, &ResultValue::triple(3, 4.6, "n_3")).unwrap());
        assert!(!store.write_log(10, &ResultValue::triple(1, 5.4, "n_4")).unwrap());

        assert_eq!(store.call_count(), 2);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.get(10), Some(ResultValue::triple(3, 4.6, "n_3")));
        assert!(!store.calls()[1].written);
    }

    #[test]
    fn test_recording_store_clones_share_state() {
        let handle = RecordingLogStore::new();
        let mut owned = handle.clone();

        owned.write_log(8, &ResultValue::triple(1, 5.4, "n_2")).unwrap();

        assert!(handle.contains(8));
        handle.reset();
        assert_eq!(owned.call_count(), 0);
    }

    #[test]
    fn test_failing_store() {
        let mut store = FailingLogStore::default();
        let err = store.write_log(1, &[]).unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
    }
}
