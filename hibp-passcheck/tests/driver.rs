//! Driver tests against an in-memory range source.

use std::collections::HashMap;
use std::io::{self, Write};
use std::pin::pin;
use std::sync::Mutex;

use futures_util::StreamExt;
use hibp_passcheck::{
    Error, FINISHED_MESSAGE, FailurePolicy, LeakResult, Outcome, Reporter, Summary, check_lines,
    format_result, run,
};
use hibp_range_client::{HashSplit, RangeSource};
use tempfile::NamedTempFile;

/// Serves canned range bodies keyed by prefix and records every prefix asked for.
#[derive(Default)]
struct MockSource {
    responses: HashMap<String, Result<String, u16>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    fn with_count(mut self, password: &str, count: u64) -> Self {
        let split = HashSplit::new(password);
        let body = format!(
            "003D68EB55068C33ACE09247EE4C639306:3\n{}:{count}\nAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA:1",
            split.suffix()
        );
        self.responses.insert(split.prefix().to_string(), Ok(body));
        self
    }

    fn with_status(mut self, password: &str, status: u16) -> Self {
        let split = HashSplit::new(password);
        self.responses.insert(split.prefix().to_string(), Err(status));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RangeSource for MockSource {
    async fn range(&self, prefix: &str) -> Result<String, hibp_range_client::Error> {
        self.calls.lock().unwrap().push(prefix.to_string());
        match self.responses.get(prefix) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(hibp_range_client::Error::HttpStatus {
                prefix: prefix.to_string(),
                status: *status,
            }),
            None => Ok("003D68EB55068C33ACE09247EE4C639306:3".to_string()),
        }
    }
}

#[derive(Default)]
struct RecordingReporter {
    usage: usize,
    results: Vec<LeakResult>,
    failures: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn usage(&mut self) -> io::Result<()> {
        self.usage += 1;
        Ok(())
    }

    fn result(&mut self, result: &LeakResult) -> io::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn failure(&mut self, error: &Error) -> io::Result<()> {
        self.failures.push(error.to_string());
        Ok(())
    }
}

fn password_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    file
}

async fn collect(source: &MockSource, input: &str) -> Vec<Result<LeakResult, Error>> {
    check_lines(source, input.as_bytes()).collect().await
}

#[tokio::test]
async fn test_leaked_password() {
    let source = MockSource::default().with_count("password", 5);

    let results = collect(&source, "password\n").await;
    assert_eq!(results.len(), 1);

    let result = results[0].as_ref().expect("lookup failed");
    assert_eq!(result.password, "password");
    assert_eq!(result.count, 5);
    assert_eq!(format_result(result), "'password' has been leaked 5 times. Try another one.");

    // Only the prefix leaves the process.
    assert_eq!(source.calls(), vec!["5BAA6".to_string()]);
}

#[tokio::test]
async fn test_never_leaked_password() {
    let source = MockSource::default();

    let results = collect(&source, "01KFC4WS41FAJ3ACEJXTF8HV44").await;
    let result = results[0].as_ref().expect("lookup failed");

    assert_eq!(result.count, 0);
    assert!(!result.is_leaked());
    assert_eq!(
        format_result(result),
        "'01KFC4WS41FAJ3ACEJXTF8HV44' has never been leaked before. Well chosen!"
    );
}

#[tokio::test]
async fn test_blank_lines_skipped() {
    let source = MockSource::default().with_count("password", 2);

    let results = collect(&source, "\n   \npassword\n\n\t\n").await;

    assert_eq!(results.len(), 1);
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_trailing_whitespace_trimmed() {
    let source = MockSource::default().with_count("password", 2);

    let results = collect(&source, "password  \r\n  leading\n").await;

    assert_eq!(results[0].as_ref().unwrap().password, "password");
    assert_eq!(results[0].as_ref().unwrap().count, 2);
    // Leading whitespace is part of the password.
    assert_eq!(results[1].as_ref().unwrap().password, "  leading");
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let source = MockSource::default();
    let mut results = pin!(check_lines(&source, "one\ntwo\nthree\n".as_bytes()));

    assert!(source.calls().is_empty());
    results.next().await.unwrap().unwrap();
    assert_eq!(source.calls().len(), 1);
    results.next().await.unwrap().unwrap();
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_stream_isolates_failures() {
    let source = MockSource::default()
        .with_count("qwerty", 1)
        .with_status("password", 503)
        .with_count("hunter2", 17);

    let results = collect(&source, "qwerty\npassword\nhunter2\n").await;
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].as_ref().unwrap().count, 1);
    match &results[1] {
        Err(Error::Lookup { password, source }) => {
            assert_eq!(password, "password");
            assert!(matches!(source, hibp_range_client::Error::HttpStatus { status: 503, .. }));
        }
        other => panic!("expected lookup error, got {other:?}"),
    }
    assert_eq!(results[2].as_ref().unwrap().count, 17);
}

#[tokio::test]
async fn test_run_reports_results() {
    let source = MockSource::default().with_count("password", 5).with_count("qwerty", 0);
    let file = password_file("password\nqwerty\n\n01KFC4WS41FAJ3ACEJXTF8HV44\n");
    let mut reporter = RecordingReporter::default();

    let outcome = run(Some(file.path()), &source, &mut reporter, FailurePolicy::Abort)
        .await
        .expect("run failed");

    let Outcome::Finished(summary) = outcome else {
        panic!("expected a finished run, got {outcome:?}");
    };
    assert_eq!(summary, Summary { checked: 3, leaked: 1, failed: 0 });
    assert_eq!(summary.to_string(), FINISHED_MESSAGE);

    let counts: Vec<u64> = reporter.results.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![5, 0, 0]);
    assert_eq!(reporter.usage, 0);
}

#[tokio::test]
async fn test_run_aborts_on_lookup_failure() {
    let source = MockSource::default()
        .with_count("qwerty", 1)
        .with_status("password", 500)
        .with_count("hunter2", 17);
    let file = password_file("qwerty\npassword\nhunter2\n");
    let mut reporter = RecordingReporter::default();

    let result = run(Some(file.path()), &source, &mut reporter, FailurePolicy::Abort).await;

    assert!(matches!(result, Err(Error::Lookup { ref password, .. }) if password == "password"));
    // Nothing is reported for the failed password and the rest are never queried.
    assert_eq!(reporter.results.len(), 1);
    assert_eq!(reporter.results[0].password, "qwerty");
    assert!(reporter.failures.is_empty());
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_run_continues_past_lookup_failure() {
    let source = MockSource::default()
        .with_count("qwerty", 1)
        .with_status("password", 429)
        .with_count("hunter2", 17);
    let file = password_file("qwerty\npassword\nhunter2\n");
    let mut reporter = RecordingReporter::default();

    let outcome = run(Some(file.path()), &source, &mut reporter, FailurePolicy::Continue)
        .await
        .expect("run failed");

    assert_eq!(outcome, Outcome::Finished(Summary { checked: 2, leaked: 2, failed: 1 }));
    let passwords: Vec<&str> = reporter.results.iter().map(|r| r.password.as_str()).collect();
    assert_eq!(passwords, vec!["qwerty", "hunter2"]);
    assert_eq!(reporter.failures.len(), 1);
    assert!(reporter.failures[0].contains("HTTP 429"));
}

#[tokio::test]
async fn test_run_without_path_shows_usage() {
    let source = MockSource::default();
    let mut reporter = RecordingReporter::default();

    let outcome = run(None, &source, &mut reporter, FailurePolicy::Abort).await.unwrap();

    assert_eq!(outcome, Outcome::Usage);
    assert_eq!(reporter.usage, 1);
    assert!(reporter.results.is_empty());
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");
    let source = MockSource::default();
    let mut reporter = RecordingReporter::default();

    let result = run(Some(&path), &source, &mut reporter, FailurePolicy::Continue).await;

    match result {
        Err(Error::FileAccess { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected FileAccess, got {other:?}"),
    }
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_run_invalid_utf8_aborts() {
    let source = MockSource::default();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"qwerty\n\xff\xfe\nhunter2\n").unwrap();
    let mut reporter = RecordingReporter::default();

    let result = run(Some(file.path()), &source, &mut reporter, FailurePolicy::Continue).await;

    assert!(matches!(result, Err(Error::Read(_))));
    assert_eq!(reporter.results.len(), 1);
}
