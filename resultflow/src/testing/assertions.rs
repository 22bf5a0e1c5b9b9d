//! Test assertions for combined outputs and log contents.

use crate::core::ResultValue;
use crate::results::combine_results;

use super::mocks::RecordingLogStore;

/// Asserts that combining the three results yields `expected`.
pub fn assert_combines_to(result_1: i64, result_2: f64, result_3: &str, expected: i64) {
    match combine_results(result_1, result_2, result_3) {
        Ok(actual) => assert_eq!(
            actual, expected,
            "Expected ({result_1}, {result_2}, {result_3:?}) to combine to {expected}, got {actual}"
        ),
        Err(err) => panic!(
            "Expected ({result_1}, {result_2}, {result_3:?}) to combine to {expected}, got error: {err}"
        ),
    }
}

/// Asserts that combining the three results fails.
pub fn assert_combine_fails(result_1: i64, result_2: f64, result_3: &str) {
    let result = combine_results(result_1, result_2, result_3);
    assert!(
        result.is_err(),
        "Expected ({result_1}, {result_2}, {result_3:?}) to fail, got {result:?}"
    );
}

/// Asserts that `output` was logged with exactly `results`.
pub fn assert_logged(store: &RecordingLogStore, output: i64, results: &[ResultValue]) {
    let actual = store.get(output);
    assert_eq!(
        actual.as_deref(),
        Some(results),
        "Expected output {output} to be logged with {results:?}, got {actual:?}"
    );
}

/// Asserts that `output` has no log entry.
pub fn assert_not_logged(store: &RecordingLogStore, output: i64) {
    assert!(
        !store.contains(output),
        "Expected output {output} not to be logged, but it is. Entries: {:?}",
        store.entries()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_log::LogStore;

    #[test]
    fn test_assert_combines_to() {
        assert_combines_to(3, 4.6, "Number_3", 10);
    }

    #[test]
    #[should_panic(expected = "to combine to 11")]
    fn test_assert_combines_to_fails() {
        assert_combines_to(3, 4.6, "Number_3", 11);
    }

    #[test]
    #[should_panic(expected = "got error")]
    fn test_assert_combines_to_reports_error() {
        assert_combines_to(3, 4.6, "Number_xxx", 10);
    }

    #[test]
    fn test_assert_combine_fails() {
        assert_combine_fails(4, 51.1, "Number_xxx");
    }

    #[test]
    #[should_panic(expected = "to fail")]
    fn test_assert_combine_fails_on_success() {
        assert_combine_fails(4, 5.5, "Number_1");
    }

    #[test]
    fn test_assert_logged() {
        let mut store = RecordingLogStore::new();
        store.write_log(10, &ResultValue::triple(3, 4.6, "n_3")).unwrap();

        assert_logged(&store, 10, &ResultValue::triple(3, 4.6, "n_3"));
        assert_not_logged(&store, 11);
    }

    #[test]
    #[should_panic(expected = "not to be logged")]
    fn test_assert_not_logged_fails() {
        let mut store = RecordingLogStore::new();
        store.write_log(10, &[]).unwrap();

        assert_not_logged(&store, 10);
    }
}
