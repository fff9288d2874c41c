//! Checks a file of candidate passwords against the Have I Been Pwned breach
//! corpus.
//!
//! Each non-empty line of the input is treated as one password and looked up
//! through [`hibp_range_client`], which only ever sends a 5 character SHA-1
//! prefix to the service. Results come out of [`check_lines`] as a lazy stream so
//! the caller decides how to present them and whether a failed lookup should
//! stop the batch. [`run`] wires the stream to a [`Reporter`].

pub mod driver;
pub mod error;
pub mod report;

pub use driver::{FailurePolicy, LeakResult, Outcome, Summary, check_lines, check_password, run};
pub use error::Error;
pub use report::{FINISHED_MESSAGE, Reporter, TextReporter, USAGE_MESSAGE, format_result};
