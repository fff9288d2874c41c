//! Parsing of range API responses.
//!
//! A response body holds one record per line in the form `SUFFIX:COUNT`, where
//! SUFFIX is the 35 character tail of an uppercase SHA-1 digest and COUNT is the
//! number of times that hash was seen in breaches. Padded responses contain
//! extra records with a count of 0.

use crate::error::Error;

/// One `SUFFIX:COUNT` line of a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeakRecord<'a> {
    pub suffix: &'a str,
    pub count: u64,
}

/// Parses a single response line.
///
/// The line is split on its first `:`. Whitespace around the count (including a
/// trailing `\r`) is ignored, the suffix is taken as is.
pub fn parse_record(line: &str) -> Option<LeakRecord<'_>> {
    let (suffix, count) = line.split_once(':')?;
    let count = count.trim().parse().ok()?;
    Some(LeakRecord { suffix, count })
}

/// Returns the count recorded for `suffix` in `body`, or 0 if the suffix is absent.
///
/// Matching is exact and case-sensitive. Lines are checked in order and the first
/// match wins. Empty lines are skipped; any other line that is not a valid
/// `SUFFIX:COUNT` record fails the whole lookup with [`Error::MalformedRecord`].
pub fn leak_count_in(body: &str, suffix: &str) -> Result<u64, Error> {
    for (index, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(line).ok_or_else(|| Error::MalformedRecord {
            line_number: index + 1,
            line: line.to_string(),
        })?;

        if record.suffix == suffix {
            return Ok(record.count);
        }
    }

    Ok(0)
}
