use std::fmt;
use std::path::Path;
use std::pin::pin;

use async_stream::stream;
use futures_util::{Stream, StreamExt};
use hibp_range_client::{RangeSource, leak_count};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::Error;
use crate::report::{FINISHED_MESSAGE, Reporter};

/// Outcome of checking one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakResult {
    pub password: String,
    /// Times the password was seen in breaches; 0 if never.
    pub count: u64,
}

impl LeakResult {
    pub fn is_leaked(&self) -> bool {
        self.count > 0
    }
}

/// What [`run`] does when a single password's lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop and return the error. Results already reported stay reported.
    #[default]
    Abort,
    /// Hand the error to the reporter and move on to the next password.
    Continue,
}

/// Tally of a finished run. Displays as the completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub checked: usize,
    pub leaked: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FINISHED_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No input file was given; usage was reported and nothing else happened.
    Usage,
    Finished(Summary),
}

/// Checks a single password against `source`.
pub async fn check_password<S: RangeSource>(source: &S, password: &str) -> Result<LeakResult, Error> {
    let count = leak_count(source, password)
        .await
        .map_err(|source| Error::Lookup { password: password.to_string(), source })?;

    Ok(LeakResult { password: password.to_string(), count })
}

/// Lazily checks every password in `reader`, one per line.
///
/// Trailing whitespace is stripped from each line and lines left empty are
/// skipped. Passwords are checked strictly in order; the next line is not read
/// until the previous lookup finished and its item was consumed. A failed lookup
/// is yielded as an `Err` and the stream carries on with the next line. A read
/// error is yielded and ends the stream.
pub fn check_lines<'a, S, R>(
    source: &'a S,
    reader: R,
) -> impl Stream<Item = Result<LeakResult, Error>> + 'a
where
    S: RangeSource,
    R: AsyncBufRead + Unpin + 'a,
{
    stream! {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let password = line.trim_end();
                    if password.is_empty() {
                        continue;
                    }
                    yield check_password(source, password).await;
                }
                Ok(None) => break,
                Err(err) => {
                    yield Err(Error::Read(err));
                    break;
                }
            }
        }
    }
}

/// Checks every password in the file at `path` and reports each result.
///
/// With no path the reporter is asked to print usage and nothing is opened or
/// queried. Read errors always abort; lookup errors follow `policy`.
pub async fn run<S, P>(
    path: Option<&Path>,
    source: &S,
    reporter: &mut P,
    policy: FailurePolicy,
) -> Result<Outcome, Error>
where
    S: RangeSource,
    P: Reporter,
{
    let Some(path) = path else {
        reporter.usage().map_err(Error::Write)?;
        return Ok(Outcome::Usage);
    };

    let file = File::open(path)
        .await
        .map_err(|source| Error::FileAccess { path: path.to_path_buf(), source })?;

    tracing::info!(path = %path.display(), "checking passwords");

    let mut summary = Summary::default();
    let mut results = pin!(check_lines(source, BufReader::new(file)));

    while let Some(result) = results.next().await {
        match result {
            Ok(result) => {
                summary.checked += 1;
                if result.is_leaked() {
                    summary.leaked += 1;
                }
                reporter.result(&result).map_err(Error::Write)?;
            }
            Err(Error::Lookup { password, source }) if policy == FailurePolicy::Continue => {
                // The password stays out of the log; the reporter decides what to show.
                tracing::warn!(error = %source, "lookup failed, continuing with next password");
                summary.failed += 1;
                reporter.failure(&Error::Lookup { password, source }).map_err(Error::Write)?;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        checked = summary.checked,
        leaked = summary.leaked,
        failed = summary.failed,
        "leak check finished"
    );

    Ok(Outcome::Finished(summary))
}
