use std::io::{self, Write};

use crate::driver::LeakResult;
use crate::error::Error;

/// Printed when no password file is given.
pub const USAGE_MESSAGE: &str =
    "You need to specify a text file as an argument. Example: hibp-passcheck passwords.txt";

/// Printed once every password has been checked.
pub const FINISHED_MESSAGE: &str = "---Leak checking finished.---";

/// Human readable line for one result.
pub fn format_result(result: &LeakResult) -> String {
    if result.is_leaked() {
        format!("'{}' has been leaked {} times. Try another one.", result.password, result.count)
    } else {
        format!("'{}' has never been leaked before. Well chosen!", result.password)
    }
}

/// Presentation side of [`run`](crate::run).
pub trait Reporter {
    fn usage(&mut self) -> io::Result<()>;

    fn result(&mut self, result: &LeakResult) -> io::Result<()>;

    /// Called for lookups that failed under [`FailurePolicy::Continue`](crate::FailurePolicy).
    fn failure(&mut self, error: &Error) -> io::Result<()>;
}

/// Writes one plain text line per event.
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn usage(&mut self) -> io::Result<()> {
        writeln!(self.out, "{USAGE_MESSAGE}")
    }

    fn result(&mut self, result: &LeakResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_result(result))
    }

    fn failure(&mut self, error: &Error) -> io::Result<()> {
        writeln!(self.out, "{error}")
    }
}
